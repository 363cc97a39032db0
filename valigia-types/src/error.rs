//! Validation errors raised while constructing canonical model values.

use thiserror::Error;

/// Error raised when a canonical value fails its construction invariants.
///
/// These surface before any network call is made; the engine maps them
/// into its own error type at the public boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Currency code is not a recognized ISO 4217 shape.
    #[error("invalid currency code: {0}")]
    Currency(String),

    /// Place/location code is malformed.
    #[error("invalid place code: {0}")]
    Place(String),

    /// Date range is empty or not chronologically ordered.
    #[error("invalid date range: {0}")]
    Dates(String),

    /// Party composition is below the domain minimum.
    #[error("invalid party: {0}")]
    Party(String),

    /// A monetary amount violated its invariants (e.g. negative price).
    #[error("invalid price: {0}")]
    Price(String),

    /// A required request field was not supplied to the builder.
    #[error("missing required field: {0}")]
    Missing(&'static str),
}
