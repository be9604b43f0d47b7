//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fixture / adapters / harness / suite
//!     → tracing events (structured fields: router, routes, iterations)
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - No events inside the timed loop beyond per-run summaries
//! - Library code only emits events; the binary installs the subscriber

pub mod logging;

pub use logging::init_logging;
