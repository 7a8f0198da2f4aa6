use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// How long a toast stays on screen before dismissing itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Danger => "alert alert-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub title: String,
    pub detail: String,
}

/// Transient notification stack, provided once at the app root.
///
/// Dismiss timers run on the root scope, not the pushing component's, so a
/// toast still auto-dismisses when the view that pushed it unmounts before
/// the timer fires.
#[derive(Clone, Copy)]
pub struct Alerts {
    entries: Signal<Vec<Alert>>,
    next_id: Signal<u64>,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, title: &str, detail: &str) {
        self.push(AlertKind::Success, title, detail);
    }

    pub fn danger(&mut self, title: &str, detail: &str) {
        self.push(AlertKind::Danger, title, detail);
    }

    pub fn push(&mut self, kind: AlertKind, title: &str, detail: &str) {
        let id = {
            let mut next_id = self.next_id;
            let id = *next_id.peek();
            next_id.set(id + 1);
            id
        };
        self.entries.write().push(Alert {
            id,
            kind,
            title: title.to_string(),
            detail: detail.to_string(),
        });

        // Not `spawn`: that would tie the timer to the caller's scope and
        // cancel it when the pushing view unmounts mid-countdown.
        let mut entries = self.entries;
        spawn_forever(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            entries.write().retain(|alert| alert.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.write().retain(|alert| alert.id != id);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Alert> {
        self.entries.read().clone()
    }
}

impl Default for Alerts {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current toast stack. Lives outside the router so alerts
/// survive navigation.
#[component]
pub fn AlertHost() -> Element {
    let mut alerts = use_context::<Alerts>();

    rsx! {
        div { class: "alert-host",
            for alert in alerts.entries() {
                div { class: "{alert.kind.class()}", key: "{alert.id}",
                    strong { "{alert.title}" }
                    p { "{alert.detail}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| alerts.dismiss(alert.id),
                        "x"
                    }
                }
            }
        }
    }
}
