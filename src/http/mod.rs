//! HTTP API and browser UI
//!
//! Three clipboard operations (fetch, replace, clear) plus a health check,
//! a backend connectivity report, and the embedded single-page UI.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::HttpServer;
