pub mod engine;
pub mod error;
pub mod format;
pub mod request;
pub mod response;
pub mod validate;

pub use engine::{calculate, evaluate, Evaluation};
pub use error::{CalcError, CalcResult, DomainError, ValidationError, ValidationErrorKind};
pub use format::format_result;
pub use request::{
    AdvancedOperation, BasicOperation, CalculationRequest, ConstantOperation, RequestKind,
};
pub use response::CalculationResponse;
pub use validate::{parse_request, validate};

/// Validate a JSON payload and calculate it in one step.
///
/// Structural problems come back as `Err`; domain errors are inside the
/// returned response.
pub fn calculate_json(text: &str) -> CalcResult<CalculationResponse> {
    let request = parse_request(text)?;
    Ok(calculate(&request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_json_domain_error_is_ok() {
        let resp =
            calculate_json(r#"{"type":"advanced","operation":"factorial","a":171}"#).unwrap();
        assert_eq!(resp.formatted, "Error");
        assert_eq!(resp.error.as_deref(), Some("too large"));
    }

    #[test]
    fn test_calculate_json_malformed_is_err() {
        let err = calculate_json(r#"{"type":"basic","operation":"sum","a":1}"#).unwrap_err();
        match err {
            CalcError::Validation(v) => assert_eq!(v.kind, ValidationErrorKind::SchemaMismatch),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_calculate_json_constant() {
        let resp = calculate_json(r#"{"type":"constant","operation":"tau"}"#).unwrap();
        assert_eq!(resp.result, 2.0 * std::f64::consts::PI);
        assert_eq!(resp.formatted, "6.283185307");
    }
}
