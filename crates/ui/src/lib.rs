pub mod alerts;
pub mod app;
pub mod context;
pub mod routes;
pub mod session;
pub mod views;
pub mod vm;

pub use alerts::{Alert, AlertKind, Alerts};
pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use session::SessionState;
