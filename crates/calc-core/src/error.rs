use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CalcResult<T> = Result<T, CalcError>;

// ---------------------------------------------------------------------------
// Structural errors: the request is rejected before any computation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The payload is JSON but does not match any request shape.
    SchemaMismatch,
    /// The payload is not JSON at all.
    InvalidJson,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaMismatch => write!(f, "schema mismatch"),
            Self::InvalidJson => write!(f, "invalid json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::SchemaMismatch,
            message: message.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidJson,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain errors: well-formed request, mathematically undefined operation.
// These travel inside a successful response, never as a failure.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent required")]
    ExponentRequired,

    #[error("negative input")]
    NegativeInput,

    #[error("invalid log arguments")]
    InvalidLogArguments,

    #[error("non-positive input")]
    NonPositiveInput,

    #[error("out of domain [-1,1]")]
    OutOfUnitInterval,

    #[error("negative/non-integer")]
    NotNaturalNumber,

    #[error("too large")]
    TooLarge,

    #[error("divisor required")]
    DivisorRequired,
}
