use dioxus::prelude::*;

/// Local preferences. Nothing here round-trips to the server yet; the
/// toggles are per-window and reset on relaunch.
#[component]
pub fn SettingsView() -> Element {
    let mut email_notifications = use_signal(|| true);
    let mut desktop_notifications = use_signal(|| false);

    rsx! {
        div { class: "page settings",
            h2 { "Settings" }

            section { class: "settings-section",
                h3 { "Notifications" }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: email_notifications(),
                        onchange: move |event| email_notifications.set(event.checked()),
                    }
                    "Email notifications"
                }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: desktop_notifications(),
                        onchange: move |event| desktop_notifications.set(event.checked()),
                    }
                    "Desktop notifications"
                }
            }

            section { class: "settings-section",
                h3 { "Account" }
                p { class: "subtitle",
                    "Profile editing happens on the server side for now."
                }
            }
        }
    }
}
