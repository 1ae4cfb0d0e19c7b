use contrail_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that may occur when building SAC inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SacError {
    /// A parameter is outside the domain where the mixing line is defined.
    ///
    /// Raised for an efficiency outside `(0, 1)`, or a non-positive pressure,
    /// heating value, or emission index.
    #[error("invalid parameter `{parameter}`")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl SacError {
    /// Returns a mapper that tags a constraint failure with the parameter name.
    pub(crate) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
