//! HTTP router dispatch benchmarks.

pub mod adapters;
pub mod config;
pub mod fixture;
pub mod harness;
pub mod observability;
pub mod suite;

pub use adapters::RouterBuilder;
pub use config::BenchConfig;
pub use fixture::Fixture;
pub use harness::{Dispatcher, Harness, ResponseCheck};
pub use suite::Suite;
