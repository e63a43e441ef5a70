//! The calculation engine.
//!
//! [`evaluate`] is a pure function of its request. Mathematically undefined
//! operations come back as a [`DomainError`], never as a panic, so the caller
//! can still answer with a successful envelope that carries the message.
//!
//! Trigonometric functions take radians. Converting from degrees is the
//! caller's job.

use std::f64::consts;

use tracing::debug;

use crate::error::DomainError;
use crate::format::format_result;
use crate::request::{AdvancedOperation, BasicOperation, CalculationRequest, ConstantOperation};
use crate::response::CalculationResponse;

/// Largest n for which n! is finite in an f64.
pub const MAX_FACTORIAL: f64 = 170.0;

pub type Evaluation = Result<f64, DomainError>;

/// Evaluate a request to its raw numeric result.
pub fn evaluate(request: &CalculationRequest) -> Evaluation {
    debug!("evaluate {} {}", request.kind(), request.operation_name());
    match *request {
        CalculationRequest::Basic { operation, a, b } => basic(operation, a, b),
        CalculationRequest::Advanced { operation, a, b } => advanced(operation, a, b),
        CalculationRequest::Constant { operation } => Ok(constant(operation)),
    }
}

/// Evaluate and format a request into the response envelope.
pub fn calculate(request: &CalculationRequest) -> CalculationResponse {
    match evaluate(request) {
        Ok(result) => CalculationResponse {
            result,
            formatted: format_result(result),
            error: None,
        },
        Err(e) => CalculationResponse::domain_error(e),
    }
}

pub fn basic(operation: BasicOperation, a: f64, b: f64) -> Evaluation {
    match operation {
        BasicOperation::Sum => Ok(a + b),
        BasicOperation::Subtract => Ok(a - b),
        BasicOperation::Multiply => Ok(a * b),
        BasicOperation::Divide => {
            if b == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

pub fn advanced(operation: AdvancedOperation, a: f64, b: Option<f64>) -> Evaluation {
    use AdvancedOperation as Op;

    match operation {
        Op::Power => {
            let b = b.ok_or(DomainError::ExponentRequired)?;
            Ok(a.powf(b))
        }
        Op::Sqrt => {
            if a < 0.0 {
                return Err(DomainError::NegativeInput);
            }
            Ok(a.sqrt())
        }
        Op::Cbrt => Ok(a.cbrt()),

        Op::Log => {
            let b = b.ok_or(DomainError::InvalidLogArguments)?;
            if a <= 0.0 || b <= 0.0 || b == 1.0 {
                return Err(DomainError::InvalidLogArguments);
            }
            Ok(a.ln() / b.ln())
        }
        Op::Ln => {
            if a <= 0.0 {
                return Err(DomainError::NonPositiveInput);
            }
            Ok(a.ln())
        }
        Op::Log10 => {
            if a <= 0.0 {
                return Err(DomainError::NonPositiveInput);
            }
            Ok(a.log10())
        }

        Op::Sin => Ok(a.sin()),
        Op::Cos => Ok(a.cos()),
        Op::Tan => Ok(a.tan()),
        Op::Asin => {
            if a < -1.0 || a > 1.0 {
                return Err(DomainError::OutOfUnitInterval);
            }
            Ok(a.asin())
        }
        Op::Acos => {
            if a < -1.0 || a > 1.0 {
                return Err(DomainError::OutOfUnitInterval);
            }
            Ok(a.acos())
        }
        Op::Atan => Ok(a.atan()),

        Op::Sinh => Ok(a.sinh()),
        Op::Cosh => Ok(a.cosh()),
        Op::Tanh => Ok(a.tanh()),

        Op::Factorial => factorial(a),
        Op::Abs => Ok(a.abs()),
        Op::Ceil => Ok(a.ceil()),
        Op::Floor => Ok(a.floor()),
        Op::Round => Ok(round_half_up(a)),
        Op::Mod => {
            let b = b.ok_or(DomainError::DivisorRequired)?;
            if b == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            // Truncated remainder: the sign follows the dividend.
            Ok(a % b)
        }
        Op::Percent => Ok(a / 100.0),
    }
}

pub fn constant(operation: ConstantOperation) -> f64 {
    match operation {
        ConstantOperation::Pi => consts::PI,
        ConstantOperation::E => consts::E,
        ConstantOperation::Phi => (1.0 + 5f64.sqrt()) / 2.0,
        ConstantOperation::Tau => 2.0 * consts::PI,
    }
}

/// n! for a non-negative integer n <= 170, as an iterative product.
pub fn factorial(n: f64) -> Evaluation {
    if n < 0.0 || n.fract() != 0.0 {
        // NaN and infinities land here too: their fract() is NaN.
        return Err(DomainError::NotNaturalNumber);
    }
    if n > MAX_FACTORIAL {
        return Err(DomainError::TooLarge);
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

/// Round to the nearest integer, ties toward +inf (2.5 -> 3, -2.5 -> -2).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
