//! Error payloads returned by the API.

use crate::payment_intent::PaymentIntent;
use crate::payment_method::PaymentMethod;
use crate::presence::present;
use crate::setup_intent::SetupIntent;
use crate::source::PaymentSource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiErrors {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub charge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub decline_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub payment_intent: Option<Box<PaymentIntent>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub payment_method: Option<Box<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub payment_method_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub request_log_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub setup_intent: Option<Box<SetupIntent>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub source: Option<Box<PaymentSource>>,
    #[serde(rename = "type")]
    pub type_: ApiErrorType,
}

literal_enum! {
    pub enum ApiErrorType {
        ApiError = "api_error",
        CardError = "card_error",
        IdempotencyError = "idempotency_error",
        InvalidRequestError = "invalid_request_error",
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// The `{ "error": ... }` envelope of a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub error: ApiErrors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_error_envelope() {
        let response: ErrorResponse = serde_json::from_value(json!({
            "error": {
                "code": "card_declined",
                "decline_code": "insufficient_funds",
                "doc_url": "https://stripe.com/docs/error-codes/card-declined",
                "message": "Your card has insufficient funds.",
                "type": "card_error"
            }
        }))
        .unwrap();
        assert_eq!(response.error.type_, ApiErrorType::CardError);
        assert_eq!(
            response.error.to_string(),
            "card_error (card_declined): Your card has insufficient funds."
        );
    }

    #[test]
    fn test_error_type_required() {
        let err = serde_json::from_value::<ApiErrors>(json!({"message": "boom"})).unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }
}
