//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route registration, graceful shutdown)
//!     → callback.rs (query-string field extraction)
//!     → console sink (callback template)
//!     → 200 empty-body response
//! ```

pub mod callback;
pub mod server;

pub use callback::CallbackFields;
pub use server::HttpServer;
