use thiserror::Error;

use crate::params::ParamId;

/// Rejected user input. Nothing here is fatal: callers log it and keep the
/// previous value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("parameter {param} must be finite, got {value}")]
    NonFinite { param: ParamId, value: f64 },

    #[error("speed multiplier must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("unknown animation mode `{0}`")]
    UnknownMode(String),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}
