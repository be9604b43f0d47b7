//! Router adapters.
//!
//! # Data Flow
//! ```text
//! namespaces + resources
//!     → RouterBuilder::build (library-specific registration)
//!         - nested.rs  (axum, one nested sub-router per namespace)
//!         - layered.rs (axum, flat table behind a tower-http layer)
//!         - tree.rs    (matchit path tree + method tables)
//!         - finder.rs  (routefinder + method tables)
//!     → Box<dyn Dispatcher> (ready to serve, immutable route table)
//! ```
//!
//! # Design Decisions
//! - Every route answers `200 hello`; unknown paths 404, wrong method 405
//! - Names are validated before registration since some libraries panic on
//!   malformed or conflicting patterns
//! - Async services run on a private current-thread runtime per dispatcher

pub mod finder;
pub mod layered;
pub mod methods;
pub mod nested;
pub mod service;
pub mod tree;

use std::collections::HashSet;

use thiserror::Error;

use crate::fixture::is_path_segment;
use crate::harness::Dispatcher;

pub use finder::Routefinder;
pub use layered::AxumLayered;
pub use methods::MethodTable;
pub use nested::AxumNested;
pub use service::ServiceDispatcher;
pub use tree::Matchit;

/// Errors raised while building a dispatcher.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Namespace or resource is not a plain path segment.
    #[error("invalid route name {0:?}")]
    InvalidName(String),

    /// The same namespace or resource was supplied twice.
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    /// The routing library rejected a pattern.
    #[error("failed to register {pattern}: {reason}")]
    Insert { pattern: String, reason: String },

    /// The method has no counterpart in the routing library.
    #[error("unsupported method {0}")]
    UnsupportedMethod(axum::http::Method),

    /// The runtime driving async services could not be created.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Builds a ready dispatcher for one routing library.
pub trait RouterBuilder: Send + Sync {
    /// Short name used as benchmark case prefix.
    fn name(&self) -> &'static str;

    /// Dispatcher with the single route `GET /action`.
    fn simple(&self) -> Result<Box<dyn Dispatcher>, AdapterError>;

    /// Dispatcher with collection and member routes for every
    /// namespace x resource pair.
    fn build(
        &self,
        namespaces: &[String],
        resources: &[String],
    ) -> Result<Box<dyn Dispatcher>, AdapterError>;
}

/// All adapters, in report order.
pub fn builders() -> Vec<Box<dyn RouterBuilder>> {
    vec![
        Box::new(AxumNested),
        Box::new(AxumLayered),
        Box::new(Matchit),
        Box::new(Routefinder),
    ]
}

/// Look up an adapter by case-insensitive name.
pub fn builder_by_name(name: &str) -> Option<Box<dyn RouterBuilder>> {
    builders()
        .into_iter()
        .find(|b| b.name().eq_ignore_ascii_case(name))
}

/// Reject names that would be malformed or conflicting route patterns.
pub fn validate_names(namespaces: &[String], resources: &[String]) -> Result<(), AdapterError> {
    for names in [namespaces, resources] {
        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if !is_path_segment(name) {
                return Err(AdapterError::InvalidName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(AdapterError::DuplicateName(name.clone()));
            }
        }
    }
    Ok(())
}
