//! Error types.

use thiserror::Error;

/// Errors raised while resolving indicator configuration.
///
/// Configuration is the only place the crate fails fast. Everything that
/// touches a live container degrades to a no-op instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Interpolator selected by index outside the known range.
    #[error("Unknown interpolator index {0}, expected 0..=4")]
    UnknownInterpolator(i32),

    /// Interpolator selected by a name that does not exist.
    #[error("Unknown interpolator '{0}'")]
    UnknownInterpolatorName(String),

    /// Indicator style name that does not exist.
    #[error("Unknown indicator style '{0}'")]
    UnknownStyle(String),

    /// A value that could not be parsed for the given attribute.
    #[error("Invalid value '{value}' for attribute '{key}'")]
    InvalidValue {
        /// Attribute name.
        key: String,
        /// Raw value as supplied by the host.
        value: String,
    },

    /// A color literal that is not `#RRGGBB` or `#AARRGGBB`.
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
}
