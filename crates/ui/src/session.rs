use std::time::Duration;

/// How often the running app re-validates the session cookie.
pub const RECHECK_INTERVAL: Duration = Duration::from_secs(600);

/// Whether the current cookie is a valid session, as last reported by the
/// server. `Checking` only exists before the first answer arrives; while it
/// holds, no route tree is rendered at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    /// Maps a session-check outcome onto a state. There is only one failure
    /// bucket: a network error and a rejected cookie both land on
    /// `Unauthenticated`.
    #[must_use]
    pub fn from_check(valid: bool) -> Self {
        if valid {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// What the route guard should do for a given session/screen combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToAuth,
    RedirectToDashboard,
}

/// The static gating table: the auth screen is the only route available to
/// an unauthenticated session, and the only route unavailable to an
/// authenticated one.
#[must_use]
pub fn guard_decision(session: SessionState, on_auth_screen: bool) -> GuardDecision {
    match (session.is_authenticated(), on_auth_screen) {
        (false, false) => GuardDecision::RedirectToAuth,
        (true, true) => GuardDecision::RedirectToDashboard,
        _ => GuardDecision::Allow,
    }
}
