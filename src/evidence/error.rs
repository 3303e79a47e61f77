//! Boundary validation errors.

use thiserror::Error;

/// Raised when raw search results or a scoring request fail validation.
///
/// The scoring core never produces these; they come from the boundary where
/// untrusted input is turned into [`RawSource`](super::RawSource) values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvidenceError {
    /// Claim text was empty or whitespace.
    #[error("claim text must not be empty")]
    EmptyClaim,

    /// A source arrived without a URL.
    #[error("source #{index} has no url")]
    MissingUrl { index: usize },

    /// The URL could not be parsed.
    #[error("source url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The URL parsed but has no host to derive a domain from.
    #[error("source url '{url}' has no host")]
    MissingHost { url: String },

    /// An upstream credibility score was outside `[0, 1]` or not a number.
    #[error("credibility {value} for '{url}' is outside [0, 1]")]
    CredibilityOutOfRange { url: String, value: f64 },
}
