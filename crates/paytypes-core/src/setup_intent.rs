//! Setup intents and the attempts made to confirm them.

use crate::account::Account;
use crate::api_errors::ApiErrors;
use crate::charge::ThreeDSecureDetails;
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::{SetupAttemptId, SetupIntentId};
use crate::mandate::Mandate;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_intent::{
    CardMandateOptions, CardNetwork, RedirectToUrl, RequestThreeDSecure, VerifyWithMicrodeposits,
};
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use crate::transfer::Application;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw per-type fields for payment method types without a typed shape.
pub type SetupDetails = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetupIntent {
    pub id: SetupIntentId,
    pub object: Tag<SetupIntent>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<Expandable<Application>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub attach_to_self: Option<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cancellation_reason: MaybeNull<SetupIntentCancellationReason>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub client_secret: MaybeNull<String>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub flow_directions: MaybeNull<Vec<FlowDirection>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_setup_error: MaybeNull<ApiErrors>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub latest_attempt: MaybeNull<Expandable<SetupAttempt>>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub mandate: MaybeNull<Expandable<Mandate>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub next_action: MaybeNull<SetupIntentNextAction>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method: MaybeNull<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method_options: MaybeNull<SetupIntentPaymentMethodOptions>,
    pub payment_method_types: Vec<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub single_use_mandate: MaybeNull<Expandable<Mandate>>,
    pub status: SetupIntentStatus,
    pub usage: String,
}

crate::impl_object!(SetupIntent, "setup_intent", id);

literal_enum! {
    pub enum SetupIntentStatus {
        Canceled = "canceled",
        Processing = "processing",
        RequiresAction = "requires_action",
        RequiresConfirmation = "requires_confirmation",
        RequiresPaymentMethod = "requires_payment_method",
        Succeeded = "succeeded",
    }
}

literal_enum! {
    pub enum SetupIntentCancellationReason {
        Abandoned = "abandoned",
        Duplicate = "duplicate",
        RequestedByCustomer = "requested_by_customer",
    }
}

literal_enum! {
    pub enum FlowDirection {
        Inbound = "inbound",
        Outbound = "outbound",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetupIntentNextAction {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub redirect_to_url: Option<RedirectToUrl>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub use_stripe_sdk: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub verify_with_microdeposits: Option<VerifyWithMicrodeposits>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetupIntentPaymentMethodOptions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<SetupIntentCardOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account: Option<SetupDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetupIntentCardOptions {
    #[serde(deserialize_with = "nullable")]
    pub mandate_options: Option<CardMandateOptions>,
    #[serde(deserialize_with = "nullable")]
    pub network: Option<CardNetwork>,
    #[serde(deserialize_with = "nullable")]
    pub request_three_d_secure: Option<RequestThreeDSecure>,
}

/// One attempt to confirm a setup intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetupAttempt {
    pub id: SetupAttemptId,
    pub object: Tag<SetupAttempt>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<Expandable<Application>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub attach_to_self: Option<bool>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub flow_directions: MaybeNull<Vec<FlowDirection>>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    pub payment_method: Expandable<PaymentMethod>,
    pub payment_method_details: SetupAttemptPaymentMethodDetails,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub setup_error: MaybeNull<ApiErrors>,
    pub setup_intent: Expandable<SetupIntent>,
    pub status: String,
    pub usage: String,
}

crate::impl_object!(SetupAttempt, "setup_attempt", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetupAttemptPaymentMethodDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bancontact: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub boleto: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<SetupAttemptCard>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ideal: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub klarna: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<SetupDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sofort: Option<SetupDetails>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account: Option<SetupDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetupAttemptCard {
    #[serde(deserialize_with = "nullable")]
    pub three_d_secure: Option<ThreeDSecureDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_setup_intent_requires_action() {
        let intent: SetupIntent = serde_json::from_value(json!({
            "id": "seti_1",
            "object": "setup_intent",
            "application": null,
            "cancellation_reason": null,
            "client_secret": "seti_1_secret_x",
            "created": 1680000000,
            "customer": "cus_1",
            "description": null,
            "flow_directions": ["inbound"],
            "last_setup_error": null,
            "latest_attempt": "setatt_1",
            "livemode": false,
            "mandate": null,
            "metadata": {},
            "next_action": {
                "type": "use_stripe_sdk",
                "use_stripe_sdk": {"type": "three_d_secure_redirect", "stripe_js": "https://hooks.stripe.com/3ds"}
            },
            "on_behalf_of": null,
            "payment_method": "pm_1",
            "payment_method_options": {
                "card": {"mandate_options": null, "network": null, "request_three_d_secure": "automatic"}
            },
            "payment_method_types": ["card"],
            "single_use_mandate": null,
            "status": "requires_action",
            "usage": "off_session"
        }))
        .unwrap();
        assert_eq!(intent.status, SetupIntentStatus::RequiresAction);
        assert_eq!(intent.flow_directions, MaybeNull::Value(vec![FlowDirection::Inbound]));
        let next = intent.next_action.as_option().unwrap();
        assert_eq!(next.use_stripe_sdk.as_ref().unwrap()["type"], "three_d_secure_redirect");
        assert_eq!(intent.latest_attempt.as_option().map(Expandable::id), Some("setatt_1"));
    }
}
