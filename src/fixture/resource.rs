//! Resource name generation.

use sha1::{Digest, Sha1};

/// Token for the resource at `index`: hex-encoded SHA-1 of its decimal form.
pub fn resource_token(index: usize) -> String {
    hex::encode(Sha1::digest(index.to_string().as_bytes()))
}

/// Tokens for indices `0..n`, in index order.
pub fn resource_names(n: usize) -> Vec<String> {
    (0..n).map(resource_token).collect()
}
