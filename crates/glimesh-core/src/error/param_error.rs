//! Parameter errors - raised when a request is missing what it needs

use thiserror::Error;

use crate::params::ParamName;

/// Request parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Param {0} is required and was not valid")]
    Missing(ParamName),

    #[error("None of the params [{}] were provided", join_names(.0))]
    NoneOf(Vec<ParamName>),
}

impl ParamError {
    /// Get error code for logs and API surfaces
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing(_) => "MISSING_PARAM",
            Self::NoneOf(_) => "MISSING_PARAM_CHOICE",
        }
    }
}

fn join_names(names: &[ParamName]) -> String {
    names
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
