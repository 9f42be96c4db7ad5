//! Error types for the BN254 GLV scalar multiplication library.

use std::fmt;

/// Recoverable errors surfaced by the public API.
///
/// Fatal preconditions (inverting zero, an empty extended-Euclid sequence,
/// a window width that cannot index the precomputed table) are not
/// represented here — they abort via `panic!` since they indicate a
/// programming error at the call site, not a runtime condition a caller
/// could meaningfully recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlvError {
    /// A point supplied to the core is not on the curve.
    InvalidPoint,

    /// A hex string could not be parsed into a coordinate or scalar.
    InvalidHex(String),

    /// Window width `w` is not a positive integer.
    InvalidWindowWidth(i64),

    /// Endomorphism discovery could not produce a consistent (ω, λ) pair.
    EndomorphismDiscoveryFailed(String),
}

impl fmt::Display for GlvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlvError::InvalidPoint => write!(f, "point is not on the curve"),
            GlvError::InvalidHex(msg) => write!(f, "invalid hex input: {}", msg),
            GlvError::InvalidWindowWidth(w) => write!(f, "invalid window width: {}", w),
            GlvError::EndomorphismDiscoveryFailed(msg) => {
                write!(f, "endomorphism discovery failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GlvError {}

/// Result type alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, GlvError>;
