//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, not retried
//! - Shutdown is a broadcast cancellation token; OS signals are translated
//!   to it at the process edge only, so tests trigger it directly
//! - Only the first signal has defined behavior; the trigger is idempotent

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
