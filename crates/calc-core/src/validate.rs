//! Request validation.
//!
//! Turns an untyped JSON payload into a [`CalculationRequest`]. Anything that
//! does not match one of the three request shapes is rejected here, before the
//! engine sees it. Extra fields are ignored; non-finite operands are accepted.

use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;
use crate::request::{
    AdvancedOperation, BasicOperation, CalculationRequest, ConstantOperation, RequestKind,
};

/// Validate a JSON value against the request shapes.
pub fn validate(payload: &Value) -> Result<CalculationRequest, ValidationError> {
    let result = check(payload);
    if let Err(e) = &result {
        debug!("rejected calculation request: {e}");
    }
    result
}

/// Parse JSON text, then validate it.
pub fn parse_request(text: &str) -> Result<CalculationRequest, ValidationError> {
    let payload: Value = serde_json::from_str(text).map_err(|e| {
        debug!("rejected calculation request: invalid json: {e}");
        ValidationError::json(e.to_string())
    })?;
    validate(&payload)
}

fn check(payload: &Value) -> Result<CalculationRequest, ValidationError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ValidationError::schema("request must be a JSON object"))?;

    let kind = match obj.get("type") {
        None | Some(Value::Null) => return Err(ValidationError::schema("missing field: type")),
        Some(Value::String(s)) => RequestKind::from_name(s)
            .ok_or_else(|| ValidationError::schema(format!("unknown request type: {s}")))?,
        Some(_) => return Err(ValidationError::schema("field type must be a string")),
    };

    let operation = match obj.get("operation") {
        None | Some(Value::Null) => {
            return Err(ValidationError::schema("missing field: operation"))
        }
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(ValidationError::schema("field operation must be a string")),
    };

    let unknown_operation = || {
        ValidationError::schema(format!(
            "unknown {kind} operation: {operation} (expected one of: {})",
            kind.operation_names().join(", ")
        ))
    };

    match kind {
        RequestKind::Basic => Ok(CalculationRequest::Basic {
            operation: BasicOperation::from_name(operation).ok_or_else(unknown_operation)?,
            a: required_operand(payload, "a")?,
            b: required_operand(payload, "b")?,
        }),
        RequestKind::Advanced => Ok(CalculationRequest::Advanced {
            operation: AdvancedOperation::from_name(operation).ok_or_else(unknown_operation)?,
            a: required_operand(payload, "a")?,
            b: optional_operand(payload, "b")?,
        }),
        RequestKind::Constant => Ok(CalculationRequest::Constant {
            operation: ConstantOperation::from_name(operation).ok_or_else(unknown_operation)?,
        }),
    }
}

fn required_operand(payload: &Value, key: &str) -> Result<f64, ValidationError> {
    optional_operand(payload, key)?
        .ok_or_else(|| ValidationError::schema(format!("missing required operand: {key}")))
}

fn optional_operand(payload: &Value, key: &str) -> Result<Option<f64>, ValidationError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| ValidationError::schema(format!("operand {key} must be a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    fn rejected(payload: Value) -> ValidationError {
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::SchemaMismatch);
        err
    }

    #[test]
    fn test_valid_basic() {
        let req =
            validate(&json!({"type": "basic", "operation": "sum", "a": 2, "b": 3.5})).unwrap();
        assert_eq!(req, CalculationRequest::basic(BasicOperation::Sum, 2.0, 3.5));
    }

    #[test]
    fn test_valid_advanced_without_b() {
        let req = validate(&json!({"type": "advanced", "operation": "sqrt", "a": 16})).unwrap();
        assert_eq!(req, CalculationRequest::advanced(AdvancedOperation::Sqrt, 16.0, None));
    }

    #[test]
    fn test_binary_advanced_without_b_is_still_well_formed() {
        // A missing exponent is a domain error, reported by the engine.
        let req = validate(&json!({"type": "advanced", "operation": "power", "a": 2})).unwrap();
        assert_eq!(req, CalculationRequest::advanced(AdvancedOperation::Power, 2.0, None));
    }

    #[test]
    fn test_null_b_counts_as_absent() {
        let req =
            validate(&json!({"type": "advanced", "operation": "mod", "a": 7, "b": null})).unwrap();
        assert_eq!(req, CalculationRequest::advanced(AdvancedOperation::Mod, 7.0, None));
    }

    #[test]
    fn test_constant_ignores_operands_and_extra_fields() {
        let req = validate(&json!({"type": "constant", "operation": "pi", "a": 1, "note": "x"}))
            .unwrap();
        assert_eq!(req, CalculationRequest::constant(ConstantOperation::Pi));
    }

    #[test]
    fn test_validated_request_serializes_canonically() {
        let payload = json!({"type": "advanced", "operation": "log", "a": 8, "b": null, "x": 1});
        let req = validate(&payload).unwrap();
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"type": "advanced", "operation": "log", "a": 8.0})
        );
    }

    #[test]
    fn test_missing_type() {
        let err = rejected(json!({"operation": "sum", "a": 1, "b": 2}));
        assert!(err.message.contains("type"));
    }

    #[test]
    fn test_unknown_type() {
        let err = rejected(json!({"type": "matrix", "operation": "sum", "a": 1, "b": 2}));
        assert!(err.message.contains("matrix"));
    }

    #[test]
    fn test_operation_from_other_variant() {
        let err = rejected(json!({"type": "basic", "operation": "sqrt", "a": 1, "b": 2}));
        assert!(err.message.contains("unknown basic operation: sqrt"));
        rejected(json!({"type": "constant", "operation": "sum"}));
        rejected(json!({"type": "advanced", "operation": "pi", "a": 1}));
    }

    #[test]
    fn test_missing_operand() {
        let err = rejected(json!({"type": "basic", "operation": "divide", "a": 1}));
        assert_eq!(err.message, "missing required operand: b");
        rejected(json!({"type": "advanced", "operation": "ln"}));
    }

    #[test]
    fn test_non_numeric_operand() {
        let err = rejected(json!({"type": "basic", "operation": "sum", "a": "2", "b": 3}));
        assert_eq!(err.message, "operand a must be a number");
        rejected(json!({"type": "advanced", "operation": "log", "a": 8, "b": true}));
    }

    #[test]
    fn test_non_object_payload() {
        rejected(json!([1, 2, 3]));
        rejected(json!("sum"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        rejected(json!({"type": "Basic", "operation": "sum", "a": 1, "b": 2}));
        rejected(json!({"type": "basic", "operation": "SUM", "a": 1, "b": 2}));
    }

    #[test]
    fn test_operation_must_be_string() {
        rejected(json!({"type": "basic", "operation": 1, "a": 1, "b": 2}));
    }

    #[test]
    fn test_parse_request_invalid_json() {
        let err = parse_request("{not json").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidJson);
    }

    #[test]
    fn test_parse_request_text() {
        let req = parse_request(r#"{"type":"constant","operation":"e"}"#).unwrap();
        assert_eq!(req, CalculationRequest::constant(ConstantOperation::E));
    }
}
