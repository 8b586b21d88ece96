//! Beacon Callback Receiver Library

pub mod config;
pub mod console;
pub mod http;
pub mod lifecycle;

pub use config::schema::ReceiverConfig;
pub use console::Console;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
