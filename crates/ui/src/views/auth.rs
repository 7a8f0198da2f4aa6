use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::error;

use pm_core::{Credentials, Registration};

use crate::alerts::Alerts;
use crate::context::AppContext;
use crate::routes::Route;
use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Raw registration form fields, before any checking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) company_id: String,
    pub(crate) password: String,
    pub(crate) confirm_password: String,
}

/// The only client-side validation the form performs: the password must
/// match its confirmation, and the company id must be numeric. Everything
/// else is the server's call. On failure no request is issued.
pub(crate) fn validate_registration(form: &RegisterForm) -> Result<Registration, &'static str> {
    if form.password != form.confirm_password {
        return Err("The passwords do not match");
    }
    let company_id = form
        .company_id
        .trim()
        .parse::<u64>()
        .map_err(|_| "Company id must be a number")?;
    Ok(Registration {
        name: form.name.clone(),
        surname: form.surname.clone(),
        email: form.email.clone(),
        company_id,
        password: form.password.clone(),
    })
}

#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let alerts = use_context::<Alerts>();
    let mut session_state = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();
    let auth = ctx.auth_service();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut register_form = use_signal(RegisterForm::default);

    let on_login = {
        let auth = auth.clone();
        use_callback(move |()| {
            let auth = auth.clone();
            let credentials = Credentials {
                email: email.peek().clone(),
                password: password.peek().clone(),
            };
            let mut alerts = alerts;
            spawn(async move {
                match auth.login(&credentials).await {
                    Ok(()) => {
                        alerts.success("Logged in", "Taking you to your dashboard...");
                        session_state.set(SessionState::Authenticated);
                        navigator.replace(Route::Dashboard {});
                    }
                    Err(err) => {
                        error!("login failed: {err}");
                        alerts.danger("Login failed", "Check your credentials and try again.");
                    }
                }
            });
        })
    };

    let on_register = {
        let auth = auth.clone();
        use_callback(move |()| {
            let mut alerts = alerts;
            let registration = match validate_registration(&register_form.peek()) {
                Ok(registration) => registration,
                Err(message) => {
                    alerts.danger("Check the form", message);
                    return;
                }
            };
            let auth = auth.clone();
            spawn(async move {
                match auth.register(&registration).await {
                    Ok(()) => {
                        // Stay on the form: the account needs activation
                        // before it can log in.
                        alerts.success(
                            "Registration complete",
                            "Check your email to activate your account.",
                        );
                    }
                    Err(err) => {
                        error!("registration failed: {err}");
                        alerts.danger("Registration failed", "Check the form and try again.");
                    }
                }
            });
        })
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                match mode() {
                    AuthMode::Login => rsx! {
                        h1 { "Sign in to your account" }
                        form {
                            class: "auth-form",
                            onsubmit: move |event| {
                                event.prevent_default();
                                on_login.call(());
                            },
                            label { "Email"
                                input {
                                    r#type: "email",
                                    value: "{email}",
                                    oninput: move |event| email.set(event.value()),
                                }
                            }
                            label { "Password"
                                input {
                                    r#type: "password",
                                    value: "{password}",
                                    oninput: move |event| password.set(event.value()),
                                }
                            }
                            button { class: "button primary", r#type: "submit", "Sign in" }
                        }
                        p { class: "auth-switch",
                            "No account yet? "
                            button {
                                class: "link",
                                onclick: move |_| mode.set(AuthMode::Register),
                                "Create one"
                            }
                        }
                    },
                    AuthMode::Register => rsx! {
                        h1 { "Create an account" }
                        form {
                            class: "auth-form",
                            onsubmit: move |event| {
                                event.prevent_default();
                                on_register.call(());
                            },
                            label { "Name"
                                input {
                                    value: "{register_form.read().name}",
                                    oninput: move |event| register_form.write().name = event.value(),
                                }
                            }
                            label { "Surname"
                                input {
                                    value: "{register_form.read().surname}",
                                    oninput: move |event| register_form.write().surname = event.value(),
                                }
                            }
                            label { "Email"
                                input {
                                    r#type: "email",
                                    value: "{register_form.read().email}",
                                    oninput: move |event| register_form.write().email = event.value(),
                                }
                            }
                            label { "Company id"
                                input {
                                    r#type: "number",
                                    value: "{register_form.read().company_id}",
                                    oninput: move |event| register_form.write().company_id = event.value(),
                                }
                            }
                            label { "Password"
                                input {
                                    r#type: "password",
                                    value: "{register_form.read().password}",
                                    oninput: move |event| register_form.write().password = event.value(),
                                }
                            }
                            label { "Confirm password"
                                input {
                                    r#type: "password",
                                    value: "{register_form.read().confirm_password}",
                                    oninput: move |event| {
                                        register_form.write().confirm_password = event.value();
                                    },
                                }
                            }
                            button { class: "button primary", r#type: "submit", "Sign up" }
                        }
                        p { class: "auth-switch",
                            "Already registered? "
                            button {
                                class: "link",
                                onclick: move |_| mode.set(AuthMode::Login),
                                "Sign in"
                            }
                        }
                    },
                }
            }
        }
    }
}
