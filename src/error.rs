//! Error types for the financial calculations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required collection argument was not supplied at all
    #[error("{argument} cannot be None")]
    MissingInput { argument: &'static str },

    /// A numeric argument is outside the range the calculation accepts
    #[error("{parameter} {constraint}")]
    Domain {
        parameter: &'static str,
        constraint: &'static str,
    },

    /// A decimal sum left the representable range
    #[error("Arithmetic overflow while {operation}")]
    Overflow { operation: &'static str },
}

impl CalcError {
    pub(crate) fn domain(parameter: &'static str, constraint: &'static str) -> Self {
        log::debug!("rejected input: {} {}", parameter, constraint);
        CalcError::Domain {
            parameter,
            constraint,
        }
    }

    /// True for violations of a numeric precondition
    pub fn is_domain(&self) -> bool {
        matches!(self, CalcError::Domain { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
