//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the suite.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::fixture::{DEFAULT_MEMBER_ID, DEFAULT_NAMESPACES};

/// Root configuration for a benchmark session.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Route fixture shape.
    pub fixture: FixtureConfig,

    /// Which cases run and how.
    pub suite: SuiteConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Fixture configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FixtureConfig {
    /// Top-level path segments, in registration order.
    pub namespaces: Vec<String>,

    /// Id used in member paths (`/ns/res/<member_id>`).
    pub member_id: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            namespaces: DEFAULT_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
            member_id: DEFAULT_MEMBER_ID.to_string(),
        }
    }
}

/// Suite configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SuiteConfig {
    /// Resources per namespace for each "Route" case.
    pub scales: Vec<usize>,

    /// Dispatches per case for the command-line runner.
    pub iterations: u64,

    /// Assert `200 hello` on every response.
    pub check_responses: bool,

    /// Adapter names to run (empty = all).
    pub routers: Vec<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            scales: vec![1, 5, 10, 20, 200],
            iterations: 1_000_000,
            check_responses: false,
            routers: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
