//! Synthetic route fixtures.
//!
//! # Data Flow
//! ```text
//! scale factor N + namespace list
//!     → resource.rs (N hashed resource tokens)
//!     → request.rs (5 requests per namespace x resource, fixed order)
//!     → table.rs (same pairs as registration patterns per router syntax)
//!     → Fixture (immutable, replayed by the harness)
//! ```
//!
//! # Design Decisions
//! - Fully deterministic: no randomness, same N always yields same sequence
//! - Resource tokens are SHA-1 hex digests, fixed length and URL-safe
//! - Requests are built once; the timed loop only clones method and URI

pub mod request;
pub mod resource;
pub mod table;

use thiserror::Error;

pub use request::{Fixture, RouteRequest, RouteVariant, DEFAULT_MEMBER_ID, SIMPLE_PATH};
pub use resource::{resource_names, resource_token};
pub use table::{ParamSyntax, RouteEntry, RouteTable};

/// Namespaces used when none are configured.
pub const DEFAULT_NAMESPACES: [&str; 3] = ["admin", "api", "site"];

/// Number of requests generated per namespace x resource pair.
pub const REQUESTS_PER_RESOURCE: usize = RouteVariant::ALL.len();

/// Errors raised while building a fixture from caller-supplied names.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Name is empty or contains characters outside a single path segment.
    #[error("invalid path segment {0:?}")]
    InvalidSegment(String),

    /// Assembled path was rejected by the URI parser.
    #[error("invalid request uri: {0}")]
    InvalidUri(#[from] axum::http::uri::InvalidUri),
}

/// Returns true if `segment` can be used verbatim as one URL path segment.
///
/// Only RFC 3986 unreserved characters are accepted, so the segment never
/// collides with any router's parameter or wildcard syntax.
pub fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

/// Number of requests a fixture with `namespaces` and `scale` resources holds.
pub fn request_count(namespaces: usize, scale: usize) -> usize {
    namespaces * scale * REQUESTS_PER_RESOURCE
}
