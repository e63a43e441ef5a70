//! Caller-side helpers for building requests from command-line input.

use calc_core::{AdvancedOperation, CalculationRequest};

use crate::config::AngleUnit;

/// Build an advanced request, converting the operand of sin/cos/tan to
/// radians when the user entered degrees.
pub fn advanced_request(
    operation: AdvancedOperation,
    a: f64,
    b: Option<f64>,
    unit: AngleUnit,
) -> CalculationRequest {
    let a = if operation.takes_angle() && unit == AngleUnit::Deg {
        a.to_radians()
    } else {
        a
    };
    CalculationRequest::advanced(operation, a, b)
}
