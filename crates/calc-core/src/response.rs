use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CalcResult, DomainError};
use crate::format::ERROR_SENTINEL;

/// The envelope every well-formed request gets back, domain errors included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Raw IEEE-754 value. Non-finite values go over the wire as `null`.
    #[serde(deserialize_with = "nullable_f64")]
    pub result: f64,
    pub formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculationResponse {
    pub fn domain_error(error: DomainError) -> Self {
        Self {
            result: f64::NAN,
            formatted: ERROR_SENTINEL.into(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
