//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that names form valid, non-conflicting path segments
//! - Validate value ranges (iterations > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BenchConfig → Result<(), Vec<ValidationError>>
//! - Adapter names are checked against the registry, not here

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::BenchConfig;
use crate::fixture::is_path_segment;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoNamespaces,
    InvalidNamespace(String),
    DuplicateNamespace(String),
    InvalidMemberId(String),
    DuplicateScale(usize),
    ZeroIterations,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoNamespaces => write!(f, "fixture.namespaces must not be empty"),
            ValidationError::InvalidNamespace(ns) => {
                write!(f, "fixture.namespaces: {:?} is not a plain path segment", ns)
            }
            ValidationError::DuplicateNamespace(ns) => {
                write!(f, "fixture.namespaces: {:?} listed more than once", ns)
            }
            ValidationError::InvalidMemberId(id) => {
                write!(f, "fixture.member_id: {:?} is not a plain path segment", id)
            }
            ValidationError::DuplicateScale(n) => {
                write!(f, "suite.scales: {} listed more than once", n)
            }
            ValidationError::ZeroIterations => write!(f, "suite.iterations must be greater than 0"),
        }
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &BenchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.fixture.namespaces.is_empty() {
        errors.push(ValidationError::NoNamespaces);
    }
    let mut seen = HashSet::new();
    for ns in &config.fixture.namespaces {
        if !is_path_segment(ns) {
            errors.push(ValidationError::InvalidNamespace(ns.clone()));
        } else if !seen.insert(ns.as_str()) {
            errors.push(ValidationError::DuplicateNamespace(ns.clone()));
        }
    }

    if !is_path_segment(&config.fixture.member_id) {
        errors.push(ValidationError::InvalidMemberId(config.fixture.member_id.clone()));
    }

    let mut scales = HashSet::new();
    for &n in &config.suite.scales {
        if !scales.insert(n) {
            errors.push(ValidationError::DuplicateScale(n));
        }
    }

    if config.suite.iterations == 0 {
        errors.push(ValidationError::ZeroIterations);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
