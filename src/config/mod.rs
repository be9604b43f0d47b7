//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BenchConfig (validated, immutable)
//!     → suite + logging setup
//! ```
//!
//! # Design Decisions
//! - Config is read once per session; there is nothing to reload
//! - All fields have defaults so the suite runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::BenchConfig;
pub use schema::FixtureConfig;
pub use schema::ObservabilityConfig;
pub use schema::SuiteConfig;
