use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::error;

use pm_core::{ProjectDraft, ProjectDraftError, ProjectStatus, ProjectStatusId, UserId};

use crate::alerts::Alerts;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Raw creator form fields. Dates and ids stay strings until submission;
/// `to_draft` does the parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CreatorForm {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) status: String,
    pub(crate) member_ids: String,
}

impl CreatorForm {
    /// Builds the domain draft. Unparseable dates count as absent (the
    /// inputs are `type=date`, so this only happens for blank fields);
    /// member ids are comma-separated and silently skip blanks.
    pub(crate) fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
            status: self.status.trim().parse::<ProjectStatusId>().ok(),
            members: self
                .member_ids
                .split(',')
                .filter_map(|raw| raw.trim().parse::<UserId>().ok())
                .collect(),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn field_message(errors: &[ProjectDraftError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|err| err.field() == field)
        .map(ToString::to_string)
}

#[derive(Clone, Debug, PartialEq)]
struct CreatorData {
    statuses: Vec<ProjectStatus>,
}

#[component]
pub fn ProjectCreatorView() -> Element {
    let ctx = use_context::<AppContext>();
    let alerts = use_context::<Alerts>();
    let navigator = use_navigator();
    let service = ctx.project_service();

    let mut form = use_signal(CreatorForm::default);
    let mut errors = use_signal(Vec::<ProjectDraftError>::new);
    let mut submitting = use_signal(|| false);

    // The status lookup table is reference data fetched once per mount.
    let statuses_resource = use_resource({
        let service = service.clone();
        move || {
            let service = service.clone();
            async move {
                let statuses = service
                    .list_statuses()
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok(CreatorData { statuses })
            }
        }
    });
    let statuses_state = view_state_from_resource(&statuses_resource);

    let on_submit = {
        let service = service.clone();
        use_callback(move |()| {
            let draft = form.peek().to_draft();
            match draft.validate() {
                Ok(payload) => {
                    errors.set(Vec::new());
                    let service = service.clone();
                    let mut alerts = alerts;
                    let mut submitting = submitting;
                    spawn(async move {
                        submitting.set(true);
                        match service.create_project(&payload).await {
                            Ok(()) => {
                                navigator.replace(Route::Projects {});
                            }
                            Err(err) => {
                                error!("failed to create project: {err}");
                                alerts.danger(
                                    "Couldn't create project",
                                    "The server rejected the project. Try again.",
                                );
                            }
                        }
                        submitting.set(false);
                    });
                }
                Err(next_errors) => errors.set(next_errors),
            }
        })
    };

    let current_errors = errors();

    rsx! {
        div { class: "page project-creator",
            header { class: "page-header",
                h2 { "New project" }
                Link { class: "button", to: Route::Projects {}, "Cancel" }
            }

            form {
                class: "creator-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    on_submit.call(());
                },

                label { "Name"
                    input {
                        value: "{form.read().name}",
                        oninput: move |event| form.write().name = event.value(),
                    }
                }
                if let Some(message) = field_message(&current_errors, "name") {
                    p { class: "field-error", "{message}" }
                }

                label { "Description"
                    textarea {
                        value: "{form.read().description}",
                        oninput: move |event| form.write().description = event.value(),
                    }
                }
                if let Some(message) = field_message(&current_errors, "description") {
                    p { class: "field-error", "{message}" }
                }

                label { "Start date"
                    input {
                        r#type: "date",
                        value: "{form.read().start_date}",
                        oninput: move |event| form.write().start_date = event.value(),
                    }
                }
                label { "End date"
                    input {
                        r#type: "date",
                        value: "{form.read().end_date}",
                        oninput: move |event| form.write().end_date = event.value(),
                    }
                }
                if let Some(message) = field_message(&current_errors, "end_date") {
                    p { class: "field-error", "{message}" }
                }

                label { "Status"
                    select {
                        onchange: move |event| form.write().status = event.value(),
                        option { value: "", "Choose a status" }
                        match &statuses_state {
                            ViewState::Ready(data) => rsx! {
                                for status in &data.statuses {
                                    option {
                                        value: "{status.project_status_id}",
                                        "{status.name}"
                                    }
                                }
                            },
                            _ => rsx! {},
                        }
                    }
                }
                if let Some(message) = field_message(&current_errors, "status") {
                    p { class: "field-error", "{message}" }
                }

                label { "Member ids (comma separated)"
                    input {
                        value: "{form.read().member_ids}",
                        oninput: move |event| form.write().member_ids = event.value(),
                    }
                }

                button {
                    class: "button primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating..." } else { "Create project" }
                }
            }
        }
    }
}
