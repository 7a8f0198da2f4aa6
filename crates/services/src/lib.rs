#![forbid(unsafe_code)]

pub mod auth_service;
pub mod config;
pub mod error;
pub mod project_service;
pub mod transport;

pub use auth_service::AuthService;
pub use config::ApiConfig;
pub use error::{ApiError, TransportError};
pub use project_service::ProjectService;
pub use transport::{ApiTransport, HttpTransport};
