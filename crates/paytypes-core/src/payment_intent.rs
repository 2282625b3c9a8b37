//! Payment intents and the customer actions they can require.

use crate::account::Account;
use crate::api_errors::ApiErrors;
use crate::charge::{Charge, InstallmentPlan, Review};
use crate::common::Shipping;
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::PaymentIntentId;
use crate::invoice::Invoice;
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use crate::source::PaymentSource;
use crate::transfer::Application;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntent {
    pub id: PaymentIntentId,
    pub object: Tag<PaymentIntent>,
    pub amount: i64,
    pub amount_capturable: i64,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub amount_details: Option<PaymentIntentAmountDetails>,
    pub amount_received: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<Expandable<Application>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application_fee_amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub automatic_payment_methods: MaybeNull<AutomaticPaymentMethods>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub canceled_at: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cancellation_reason: MaybeNull<PaymentIntentCancellationReason>,
    pub capture_method: CaptureMethod,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub charges: Option<List<Charge>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub client_secret: MaybeNull<String>,
    pub confirmation_method: ConfirmationMethod,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<Expandable<Invoice>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_payment_error: MaybeNull<ApiErrors>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub latest_charge: MaybeNull<Expandable<Charge>>,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub next_action: MaybeNull<PaymentIntentNextAction>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method: MaybeNull<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method_options: MaybeNull<PaymentIntentPaymentMethodOptions>,
    pub payment_method_types: Vec<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub processing: MaybeNull<PaymentIntentProcessing>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub review: MaybeNull<Expandable<Review>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub setup_future_usage: MaybeNull<SetupFutureUsage>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping: MaybeNull<Shipping>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source: MaybeNull<Expandable<PaymentSource>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_suffix: MaybeNull<String>,
    pub status: PaymentIntentStatus,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_data: MaybeNull<TransferData>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_group: MaybeNull<String>,
}

crate::impl_object!(PaymentIntent, "payment_intent", id);

impl PaymentIntent {
    /// Whether the intent is waiting on the customer or the integration.
    pub fn requires_action(&self) -> bool {
        self.status == PaymentIntentStatus::RequiresAction && self.next_action.is_value()
    }
}

literal_enum! {
    pub enum PaymentIntentStatus {
        Canceled = "canceled",
        Processing = "processing",
        RequiresAction = "requires_action",
        RequiresCapture = "requires_capture",
        RequiresConfirmation = "requires_confirmation",
        RequiresPaymentMethod = "requires_payment_method",
        Succeeded = "succeeded",
    }
}

literal_enum! {
    pub enum PaymentIntentCancellationReason {
        Abandoned = "abandoned",
        Automatic = "automatic",
        Duplicate = "duplicate",
        FailedInvoice = "failed_invoice",
        Fraudulent = "fraudulent",
        RequestedByCustomer = "requested_by_customer",
        VoidInvoice = "void_invoice",
    }
}

literal_enum! {
    pub enum CaptureMethod {
        Automatic = "automatic",
        Manual = "manual",
    }
}

literal_enum! {
    pub enum ConfirmationMethod {
        Automatic = "automatic",
        Manual = "manual",
    }
}

literal_enum! {
    pub enum SetupFutureUsage {
        OffSession = "off_session",
        OnSession = "on_session",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntentAmountDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tip: Option<AmountDetailsTip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AmountDetailsTip {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AutomaticPaymentMethods {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransferData {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub amount: Option<i64>,
    pub destination: Expandable<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntentProcessing {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<ProcessingCard>,
    #[serde(rename = "type")]
    pub type_: ProcessingType,
}

literal_enum! {
    pub enum ProcessingType {
        Card = "card",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProcessingCard {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub customer_notification: Option<CustomerNotification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomerNotification {
    #[serde(deserialize_with = "nullable")]
    pub approval_requested: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub completes_at: Option<Timestamp>,
}

/// What the integration must do next; `type` names the populated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntentNextAction {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub alipay_handle_redirect: Option<AlipayHandleRedirect>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub boleto_display_details: Option<BoletoDisplayDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_await_notification: Option<CardAwaitNotification>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub display_bank_transfer_instructions: Option<DisplayBankTransferInstructions>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub konbini_display_details: Option<KonbiniDisplayDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub oxxo_display_details: Option<OxxoDisplayDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub paynow_display_qr_code: Option<PaynowDisplayQrCode>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub promptpay_display_qr_code: Option<PromptpayDisplayQrCode>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub redirect_to_url: Option<RedirectToUrl>,
    #[serde(rename = "type")]
    pub type_: String,
    /// Opaque to integrations; consumed by the client SDKs.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub use_stripe_sdk: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub verify_with_microdeposits: Option<VerifyWithMicrodeposits>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat_pay_display_qr_code: Option<WechatPayDisplayQrCode>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat_pay_redirect_to_android_app: Option<WechatPayRedirectToAndroidApp>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat_pay_redirect_to_ios_app: Option<WechatPayRedirectToIosApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AlipayHandleRedirect {
    #[serde(deserialize_with = "nullable")]
    pub native_data: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub native_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub return_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BoletoDisplayDetails {
    #[serde(deserialize_with = "nullable")]
    pub expires_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub hosted_voucher_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardAwaitNotification {
    #[serde(deserialize_with = "nullable")]
    pub charge_attempt_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub customer_approval_required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayBankTransferInstructions {
    #[serde(deserialize_with = "nullable")]
    pub amount_remaining: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub financial_addresses: Option<Vec<HashMap<String, serde_json::Value>>>,
    #[serde(deserialize_with = "nullable")]
    pub hosted_instructions_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub type_: BankTransferType,
}

literal_enum! {
    pub enum BankTransferType {
        EuBankTransfer = "eu_bank_transfer",
        GbBankTransfer = "gb_bank_transfer",
        JpBankTransfer = "jp_bank_transfer",
        MxBankTransfer = "mx_bank_transfer",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KonbiniDisplayDetails {
    pub expires_at: Timestamp,
    #[serde(deserialize_with = "nullable")]
    pub hosted_voucher_url: Option<String>,
    pub stores: KonbiniStores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KonbiniStores {
    #[serde(deserialize_with = "nullable")]
    pub familymart: Option<KonbiniStorePaymentCode>,
    #[serde(deserialize_with = "nullable")]
    pub lawson: Option<KonbiniStorePaymentCode>,
    #[serde(deserialize_with = "nullable")]
    pub ministop: Option<KonbiniStorePaymentCode>,
    #[serde(deserialize_with = "nullable")]
    pub seicomart: Option<KonbiniStorePaymentCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KonbiniStorePaymentCode {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub confirmation_number: Option<String>,
    pub payment_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OxxoDisplayDetails {
    #[serde(deserialize_with = "nullable")]
    pub expires_after: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub hosted_voucher_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaynowDisplayQrCode {
    pub data: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub hosted_instructions_url: MaybeNull<String>,
    pub image_url_png: String,
    pub image_url_svg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PromptpayDisplayQrCode {
    pub data: String,
    pub hosted_instructions_url: String,
    pub image_url_png: String,
    pub image_url_svg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RedirectToUrl {
    #[serde(deserialize_with = "nullable")]
    pub return_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerifyWithMicrodeposits {
    pub arrival_date: Timestamp,
    pub hosted_verification_url: String,
    #[serde(deserialize_with = "nullable")]
    pub microdeposit_type: Option<MicrodepositType>,
}

literal_enum! {
    pub enum MicrodepositType {
        Amounts = "amounts",
        DescriptorCode = "descriptor_code",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WechatPayDisplayQrCode {
    pub data: String,
    pub hosted_instructions_url: String,
    pub image_data_url: String,
    pub image_url_png: String,
    pub image_url_svg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WechatPayRedirectToAndroidApp {
    pub app_id: String,
    pub nonce_str: String,
    pub package: String,
    pub partner_id: String,
    pub prepay_id: String,
    pub sign: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WechatPayRedirectToIosApp {
    pub native_url: String,
}

/// Per-type payment method options. Card options are typed; the remaining
/// types are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntentPaymentMethodOptions {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub acss_debit: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub affirm: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub afterpay_clearpay: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub alipay: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub au_becs_debit: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub bacs_debit: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub bancontact: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub blik: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub boleto: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub card: MaybeNull<PaymentIntentCardOptions>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub card_present: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_balance: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub eps: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fpx: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub giropay: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub grabpay: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ideal: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub interac_present: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub klarna: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub konbini: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub link: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub oxxo: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub p24: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub paynow: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub promptpay: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub sepa_debit: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub sofort: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub us_bank_account: MaybeNull<serde_json::Value>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub wechat_pay: MaybeNull<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentIntentCardOptions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub capture_method: Option<CardCaptureMethod>,
    #[serde(deserialize_with = "nullable")]
    pub installments: Option<CardInstallmentsOptions>,
    #[serde(deserialize_with = "nullable")]
    pub mandate_options: Option<CardMandateOptions>,
    #[serde(deserialize_with = "nullable")]
    pub network: Option<CardNetwork>,
    #[serde(deserialize_with = "nullable")]
    pub request_three_d_secure: Option<RequestThreeDSecure>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub setup_future_usage: Option<CardSetupFutureUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub statement_descriptor_suffix_kana: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub statement_descriptor_suffix_kanji: Option<String>,
}

literal_enum! {
    pub enum CardCaptureMethod {
        Manual = "manual",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardInstallmentsOptions {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub available_plans: MaybeNull<Vec<InstallmentPlan>>,
    pub enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub plan: Option<InstallmentPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardMandateOptions {
    pub amount: i64,
    pub amount_type: MandateAmountType,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub end_date: Option<Timestamp>,
    pub interval: MandateInterval,
    #[serde(deserialize_with = "nullable")]
    pub interval_count: Option<i64>,
    pub reference: String,
    pub start_date: Timestamp,
    #[serde(deserialize_with = "nullable")]
    pub supported_types: Option<Vec<MandateSupportedType>>,
}

literal_enum! {
    pub enum MandateAmountType {
        Fixed = "fixed",
        Maximum = "maximum",
    }
}

literal_enum! {
    pub enum MandateInterval {
        Day = "day",
        Month = "month",
        Sporadic = "sporadic",
        Week = "week",
        Year = "year",
    }
}

literal_enum! {
    pub enum MandateSupportedType {
        India = "india",
    }
}

literal_enum! {
    pub enum CardNetwork {
        Amex = "amex",
        CartesBancaires = "cartes_bancaires",
        Diners = "diners",
        Discover = "discover",
        Interac = "interac",
        Jcb = "jcb",
        Mastercard = "mastercard",
        Unionpay = "unionpay",
        Unknown = "unknown",
        Visa = "visa",
    }
}

literal_enum! {
    pub enum RequestThreeDSecure {
        Any = "any",
        Automatic = "automatic",
        ChallengeOnly = "challenge_only",
    }
}

literal_enum! {
    pub enum CardSetupFutureUsage {
        None = "none",
        OffSession = "off_session",
        OnSession = "on_session",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redirect_next_action() {
        let action: PaymentIntentNextAction = serde_json::from_value(json!({
            "redirect_to_url": {
                "return_url": "https://example.com/return",
                "url": "https://hooks.stripe.com/redirect/authenticate/src_1"
            },
            "type": "redirect_to_url"
        }))
        .unwrap();
        assert_eq!(action.type_, "redirect_to_url");
        assert!(action.redirect_to_url.is_some());
        assert!(action.use_stripe_sdk.is_none());
    }

    #[test]
    fn test_card_options_and_raw_options() {
        let options: PaymentIntentPaymentMethodOptions = serde_json::from_value(json!({
            "card": {
                "installments": null,
                "mandate_options": null,
                "network": null,
                "request_three_d_secure": "automatic"
            },
            "link": {"persistent_token": null},
            "sofort": null
        }))
        .unwrap();
        let card = options.card.as_option().unwrap();
        assert_eq!(card.request_three_d_secure, Some(RequestThreeDSecure::Automatic));
        assert!(options.link.is_value());
        assert!(options.sofort.is_null());
        assert!(options.ideal.is_absent());
    }
}
