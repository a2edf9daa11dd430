use thiserror::Error;

/// Top-level error type for shape generation and extrusion.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid argument: {parameter} = {value} (expected {constraint})")]
    InvalidArgument {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("triangulation failed: {0}")]
    Triangulation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShapeError {
    /// Shorthand for building an [`ShapeError::InvalidArgument`].
    #[must_use]
    pub fn invalid(parameter: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            value,
            constraint,
        }
    }
}

/// Convenience type alias for results using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Rejects non-finite and non-positive values.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::invalid(parameter, value, "a finite value > 0"))
    }
}

/// Rejects non-finite and negative values.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::invalid(parameter, value, "a finite value >= 0"))
    }
}

/// Rejects counts below `min`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ensure_at_least(
    parameter: &'static str,
    value: usize,
    min: usize,
    constraint: &'static str,
) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(ShapeError::invalid(parameter, value as f64, constraint))
    }
}
