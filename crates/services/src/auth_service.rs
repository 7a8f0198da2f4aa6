use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use pm_core::{Credentials, Registration};

use crate::error::ApiError;
use crate::transport::ApiTransport;

const CHECK_SESSION_PATH: &str = "/authentication/GET/check-session";
const LOGIN_PATH: &str = "/authentication/POST/login";
const REGISTER_PATH: &str = "/authentication/POST/register";

/// Cookie-credential authentication against the remote API.
#[derive(Clone)]
pub struct AuthService {
    transport: Arc<dyn ApiTransport>,
}

impl AuthService {
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Asks the server whether the current cookie is still a valid session.
    ///
    /// Every failure mode (network down, non-2xx) collapses to `false`;
    /// the caller never sees a distinct error, only the login screen.
    pub async fn check_session(&self) -> bool {
        match self.transport.get(CHECK_SESSION_PATH, &[]).await {
            Ok(_) => true,
            Err(err) => {
                warn!("session check failed: {err}");
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects the
    /// credentials. Success leaves the session cookie in the transport.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.transport
            .post(LOGIN_PATH, json!({ "login_data": credentials }))
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects the
    /// registration. Success does not log the new account in.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.transport
            .post(REGISTER_PATH, json!({ "register_data": registration }))
            .await?;
        Ok(())
    }
}
