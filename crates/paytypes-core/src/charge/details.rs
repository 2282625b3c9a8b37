//! Transaction-specific details recorded on a charge, one shape per
//! payment method type.

use crate::expandable::Expandable;
use crate::mandate::Mandate;
use crate::payment_method::{
    AccountHolderType, EpsBank, FpxBank, IdealBank, IdealBic, P24Bank, PaymentMethod,
    PaymentMethodCardChecks, PaymentMethodCardWallet, UsBankAccountType,
};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ach_credit_transfer: Option<DetailsAchCreditTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ach_debit: Option<DetailsAchDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<DetailsAcssDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub affirm: Option<DetailsEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub afterpay_clearpay: Option<DetailsReference>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub alipay: Option<DetailsAlipay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit: Option<DetailsAuBecsDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit: Option<DetailsBacsDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bancontact: Option<DetailsBankRedirect>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik: Option<DetailsEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub boleto: Option<DetailsBoleto>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<DetailsCard>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<PaymentMethodDetailsCardPresent>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub customer_balance: Option<DetailsEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub eps: Option<DetailsEps>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fpx: Option<DetailsFpx>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub giropay: Option<DetailsGiropay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub grabpay: Option<DetailsTransaction>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ideal: Option<DetailsIdeal>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub interac_present: Option<DetailsInteracPresent>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub klarna: Option<DetailsKlarna>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub konbini: Option<DetailsKonbini>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link: Option<DetailsLink>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub oxxo: Option<DetailsOxxo>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub p24: Option<DetailsP24>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub paynow: Option<DetailsReference>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub promptpay: Option<DetailsReference>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<DetailsSepaDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sofort: Option<DetailsSofort>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub stripe_account: Option<DetailsEmpty>,
    /// Includes legacy types (`ach_debit`, `stripe_account`, ...) beyond
    /// the payment method type set.
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account: Option<DetailsUsBankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat_pay: Option<DetailsWechatPay>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsEmpty {}

/// Details that only carry a processor reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsReference {
    #[serde(deserialize_with = "nullable")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsTransaction {
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsAchCreditTransfer {
    #[serde(deserialize_with = "nullable")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub routing_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub swift_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsAchDebit {
    #[serde(deserialize_with = "nullable")]
    pub account_holder_type: Option<AccountHolderType>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub routing_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsAcssDebit {
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub institution_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub mandate: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transit_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsAlipay {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub buyer_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsAuBecsDebit {
    #[serde(deserialize_with = "nullable")]
    pub bsb_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub mandate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsBacsDebit {
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub mandate: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub sort_code: Option<String>,
}

/// Bancontact redirect details, which can generate a SEPA Direct Debit
/// payment method for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsBankRedirect {
    #[serde(deserialize_with = "nullable")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bic: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit: Option<Expandable<PaymentMethod>>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit_mandate: Option<Expandable<Mandate>>,
    #[serde(deserialize_with = "nullable")]
    pub iban_last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub preferred_language: Option<PreferredLanguage>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

literal_enum! {
    pub enum PreferredLanguage {
        De = "de",
        En = "en",
        Es = "es",
        Fr = "fr",
        It = "it",
        Nl = "nl",
        Pl = "pl",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsBoleto {
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsCard {
    #[serde(deserialize_with = "nullable")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub checks: Option<PaymentMethodCardChecks>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    #[serde(deserialize_with = "nullable")]
    pub funding: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub installments: Option<CardInstallments>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub mandate: MaybeNull<String>,
    #[serde(deserialize_with = "nullable")]
    pub network: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub three_d_secure: Option<ThreeDSecureDetails>,
    #[serde(deserialize_with = "nullable")]
    pub wallet: Option<PaymentMethodCardWallet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardInstallments {
    #[serde(deserialize_with = "nullable")]
    pub plan: Option<InstallmentPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InstallmentPlan {
    #[serde(deserialize_with = "nullable")]
    pub count: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub interval: Option<InstallmentInterval>,
    #[serde(rename = "type")]
    pub type_: InstallmentPlanType,
}

literal_enum! {
    pub enum InstallmentInterval {
        Month = "month",
    }
}

literal_enum! {
    pub enum InstallmentPlanType {
        FixedCount = "fixed_count",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThreeDSecureDetails {
    #[serde(deserialize_with = "nullable")]
    pub authentication_flow: Option<ThreeDSecureFlow>,
    #[serde(deserialize_with = "nullable")]
    pub result: Option<ThreeDSecureResult>,
    #[serde(deserialize_with = "nullable")]
    pub result_reason: Option<ThreeDSecureResultReason>,
    #[serde(deserialize_with = "nullable")]
    pub version: Option<ThreeDSecureVersion>,
}

literal_enum! {
    pub enum ThreeDSecureFlow {
        Challenge = "challenge",
        Frictionless = "frictionless",
    }
}

literal_enum! {
    pub enum ThreeDSecureResult {
        AttemptAcknowledged = "attempt_acknowledged",
        Authenticated = "authenticated",
        Exempted = "exempted",
        Failed = "failed",
        NotSupported = "not_supported",
        ProcessingError = "processing_error",
    }
}

literal_enum! {
    pub enum ThreeDSecureResultReason {
        Abandoned = "abandoned",
        Bypassed = "bypassed",
        Canceled = "canceled",
        CardNotEnrolled = "card_not_enrolled",
        NetworkNotSupported = "network_not_supported",
        ProtocolError = "protocol_error",
        Rejected = "rejected",
    }
}

literal_enum! {
    pub enum ThreeDSecureVersion {
        V1_0_2 = "1.0.2",
        V2_1_0 = "2.1.0",
        V2_2_0 = "2.2.0",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodDetailsCardPresent {
    #[serde(deserialize_with = "nullable")]
    pub amount_authorized: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub capture_before: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub cardholder_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub emv_auth_data: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub funding: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub generated_card: Option<String>,
    pub incremental_authorization_supported: bool,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub network: Option<String>,
    pub overcapture_supported: bool,
    #[serde(deserialize_with = "nullable")]
    pub read_method: Option<CardReadMethod>,
    #[serde(deserialize_with = "nullable")]
    pub receipt: Option<CardPresentReceipt>,
}

literal_enum! {
    pub enum CardReadMethod {
        ContactEmv = "contact_emv",
        ContactlessEmv = "contactless_emv",
        ContactlessMagstripeMode = "contactless_magstripe_mode",
        MagneticStripeFallback = "magnetic_stripe_fallback",
        MagneticStripeTrack2 = "magnetic_stripe_track2",
    }
}

/// EMV receipt fields printed for in-person payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardPresentReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub account_type: Option<ReceiptAccountType>,
    #[serde(deserialize_with = "nullable")]
    pub application_cryptogram: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub application_preferred_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub authorization_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub authorization_response_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cardholder_verification_method: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub dedicated_file_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub terminal_verification_results: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transaction_status_information: Option<String>,
}

literal_enum! {
    pub enum ReceiptAccountType {
        Checking = "checking",
        Credit = "credit",
        Prepaid = "prepaid",
        Unknown = "unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsEps {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<EpsBank>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsFpx {
    pub bank: FpxBank,
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsGiropay {
    #[serde(deserialize_with = "nullable")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bic: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsIdeal {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<IdealBank>,
    #[serde(deserialize_with = "nullable")]
    pub bic: Option<IdealBic>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit: Option<Expandable<PaymentMethod>>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit_mandate: Option<Expandable<Mandate>>,
    #[serde(deserialize_with = "nullable")]
    pub iban_last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsInteracPresent {
    #[serde(deserialize_with = "nullable")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cardholder_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub emv_auth_data: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub funding: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub generated_card: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub network: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub preferred_locales: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub read_method: Option<CardReadMethod>,
    #[serde(deserialize_with = "nullable")]
    pub receipt: Option<CardPresentReceipt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsKlarna {
    #[serde(deserialize_with = "nullable")]
    pub payment_method_category: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub preferred_locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsKonbini {
    #[serde(deserialize_with = "nullable")]
    pub store: Option<KonbiniStore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KonbiniStore {
    #[serde(deserialize_with = "nullable")]
    pub chain: Option<KonbiniChain>,
}

literal_enum! {
    pub enum KonbiniChain {
        Familymart = "familymart",
        Lawson = "lawson",
        Ministop = "ministop",
        Seicomart = "seicomart",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsLink {
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsOxxo {
    #[serde(deserialize_with = "nullable")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsP24 {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<P24Bank>,
    #[serde(deserialize_with = "nullable")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsSepaDebit {
    #[serde(deserialize_with = "nullable")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub branch_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub mandate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsSofort {
    #[serde(deserialize_with = "nullable")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bic: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit: Option<Expandable<PaymentMethod>>,
    #[serde(deserialize_with = "nullable")]
    pub generated_sepa_debit_mandate: Option<Expandable<Mandate>>,
    #[serde(deserialize_with = "nullable")]
    pub iban_last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub preferred_language: Option<PreferredLanguage>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsUsBankAccount {
    #[serde(deserialize_with = "nullable")]
    pub account_holder_type: Option<AccountHolderType>,
    #[serde(deserialize_with = "nullable")]
    pub account_type: Option<UsBankAccountType>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub routing_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsWechatPay {
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_details_with_three_d_secure() {
        let details: PaymentMethodDetails = serde_json::from_value(json!({
            "card": {
                "brand": "visa",
                "checks": null,
                "country": "US",
                "exp_month": 12,
                "exp_year": 2031,
                "funding": "credit",
                "installments": null,
                "last4": "3155",
                "network": "visa",
                "three_d_secure": {
                    "authentication_flow": "challenge",
                    "result": "authenticated",
                    "result_reason": null,
                    "version": "2.1.0"
                },
                "wallet": null
            },
            "type": "card"
        }))
        .unwrap();
        let tds = details.card.unwrap().three_d_secure.unwrap();
        assert_eq!(tds.version, Some(ThreeDSecureVersion::V2_1_0));
        assert_eq!(tds.result, Some(ThreeDSecureResult::Authenticated));
    }

    #[test]
    fn test_legacy_type_kept_as_string() {
        let details: PaymentMethodDetails =
            serde_json::from_value(json!({"stripe_account": {}, "type": "stripe_account"})).unwrap();
        assert_eq!(details.type_, "stripe_account");
        assert!(details.stripe_account.is_some());
    }
}
