use serde_json::{json, Value};
use tracing::debug;

use calc_core::{calculate, validate, AdvancedOperation, CalculationResponse, RequestKind};

use crate::protocol::{JsonRpcError, JsonRpcResponse};

// ---------------------------------------------------------------------------
// operations/list
// ---------------------------------------------------------------------------

pub fn operation_definitions() -> Value {
    let binary: Vec<&str> = AdvancedOperation::ALL
        .into_iter()
        .filter(|op| op.requires_second_operand())
        .map(AdvancedOperation::name)
        .collect();

    let mut defs = serde_json::Map::new();
    for kind in RequestKind::ALL {
        defs.insert(kind.name().into(), json!(kind.operation_names()));
    }
    defs.insert("binary".into(), json!(binary));
    Value::Object(defs)
}

// ---------------------------------------------------------------------------
// calculate
// ---------------------------------------------------------------------------

/// Validate `params` as a calculation request and evaluate it.
///
/// A malformed request is an invalid-params error. A domain error is a
/// normal result with the message embedded.
pub fn handle_calculate(id: Value, params: &Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::from_result(id, evaluate_params(params))
}

fn evaluate_params(params: &Option<Value>) -> Result<Value, JsonRpcError> {
    let params = params
        .as_ref()
        .ok_or_else(|| JsonRpcError::invalid_params("missing params"))?;
    let request = validate(params).map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;

    let response = calculate(&request);
    if let Some(err) = &response.error {
        debug!("{} {}: {err}", request.kind(), request.operation_name());
    }
    to_result(&response)
}

fn to_result(response: &CalculationResponse) -> Result<Value, JsonRpcError> {
    serde_json::to_value(response)
        .map_err(|e| JsonRpcError::internal(format!("serialization error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::INVALID_PARAMS;

    fn call(params: Value) -> JsonRpcResponse {
        handle_calculate(json!(1), &Some(params))
    }

    #[test]
    fn test_calculate_ok() {
        let resp = call(json!({"type": "basic", "operation": "sum", "a": 2, "b": 3}));
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["result"], json!(5.0));
        assert_eq!(result["formatted"], json!("5"));
        assert!(result.get("error").is_none());
    }

    #[test]
    fn test_calculate_domain_error_is_a_result() {
        let resp = call(json!({"type": "advanced", "operation": "asin", "a": 1.5}));
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["result"], Value::Null);
        assert_eq!(result["formatted"], json!("Error"));
        assert_eq!(result["error"], json!("out of domain [-1,1]"));
    }

    #[test]
    fn test_calculate_malformed_is_invalid_params() {
        let resp = call(json!({"type": "basic", "operation": "power", "a": 2, "b": 3}));
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, INVALID_PARAMS);
    }

    #[test]
    fn test_calculate_missing_params() {
        let resp = handle_calculate(json!(7), &None);
        let err = resp.error.unwrap();
        assert_eq!(err.code, INVALID_PARAMS);
        assert_eq!(err.message, "missing params");
    }

    #[test]
    fn test_operation_definitions() {
        let defs = operation_definitions();
        assert_eq!(defs["basic"], json!(["sum", "subtract", "multiply", "divide"]));
        assert_eq!(defs["constant"], json!(["pi", "e", "phi", "tau"]));
        assert_eq!(defs["binary"], json!(["power", "log", "mod"]));
        assert_eq!(defs["advanced"].as_array().unwrap().len(), 22);
    }

    #[test]
    fn test_operation_definitions_keys() {
        let defs = operation_definitions();
        let keys: Vec<&str> = defs.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["basic", "advanced", "constant", "binary"]);
    }
}
