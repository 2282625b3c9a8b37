//! Hosted checkout sessions and their line items.

use crate::common::{Address, Shipping};
use crate::customer::{CustomerOrDeleted, TaxExempt};
use crate::discount::Discount;
use crate::expandable::Expandable;
use crate::ids::{CheckoutSessionId, LineItemId};
use crate::invoice::{AutomaticTax, Invoice};
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::presence::{MaybeNull, nullable, present};
use crate::price::Price;
use crate::setup_intent::SetupIntent;
use crate::subscription::Subscription;
use crate::tax::{TaxIdType, TaxRate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutSession {
    pub id: CheckoutSessionId,
    pub object: Tag<CheckoutSession>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub after_expiration: MaybeNull<AfterExpiration>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub allow_promotion_codes: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_subtotal: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_total: MaybeNull<i64>,
    pub automatic_tax: AutomaticTax,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub billing_address_collection: MaybeNull<BillingAddressCollection>,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub client_reference_id: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub consent: MaybeNull<CheckoutConsent>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub consent_collection: MaybeNull<ConsentCollection>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    pub custom_text: CustomText,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_creation: MaybeNull<CustomerCreation>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_details: MaybeNull<CheckoutCustomerDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_email: MaybeNull<String>,
    pub expires_at: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<Expandable<Invoice>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice_creation: MaybeNull<InvoiceCreation>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub line_items: Option<List<LineItem>>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub locale: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub mode: CheckoutMode,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_intent: MaybeNull<Expandable<PaymentIntent>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_link: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method_collection: MaybeNull<PaymentMethodCollection>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method_options: MaybeNull<HashMap<String, serde_json::Value>>,
    pub payment_method_types: Vec<String>,
    pub payment_status: CheckoutPaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub phone_number_collection: Option<Enabled>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub recovered_from: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub setup_intent: MaybeNull<Expandable<SetupIntent>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping_address_collection: MaybeNull<ShippingAddressCollection>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping_cost: MaybeNull<ShippingCost>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping_details: MaybeNull<Shipping>,
    pub shipping_options: Vec<ShippingOption>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub status: MaybeNull<CheckoutStatus>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub submit_type: MaybeNull<SubmitType>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<Expandable<Subscription>>,
    pub success_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_id_collection: Option<Enabled>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub total_details: MaybeNull<TotalDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub url: MaybeNull<String>,
}

crate::impl_object!(CheckoutSession, "checkout.session", id);

impl CheckoutSession {
    pub fn is_paid(&self) -> bool {
        self.payment_status != CheckoutPaymentStatus::Unpaid
    }
}

literal_enum! {
    pub enum CheckoutMode {
        Payment = "payment",
        Setup = "setup",
        Subscription = "subscription",
    }
}

literal_enum! {
    pub enum CheckoutPaymentStatus {
        NoPaymentRequired = "no_payment_required",
        Paid = "paid",
        Unpaid = "unpaid",
    }
}

literal_enum! {
    pub enum CheckoutStatus {
        Complete = "complete",
        Expired = "expired",
        Open = "open",
    }
}

literal_enum! {
    pub enum SubmitType {
        Auto = "auto",
        Book = "book",
        Donate = "donate",
        Pay = "pay",
    }
}

literal_enum! {
    pub enum BillingAddressCollection {
        Auto = "auto",
        Required = "required",
    }
}

literal_enum! {
    pub enum CustomerCreation {
        Always = "always",
        IfRequired = "if_required",
    }
}

literal_enum! {
    pub enum PaymentMethodCollection {
        Always = "always",
        IfRequired = "if_required",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Enabled {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AfterExpiration {
    #[serde(deserialize_with = "nullable")]
    pub recovery: Option<AfterExpirationRecovery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AfterExpirationRecovery {
    pub allow_promotion_codes: bool,
    pub enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub expires_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutConsent {
    #[serde(deserialize_with = "nullable")]
    pub promotions: Option<PromotionsConsent>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub terms_of_service: MaybeNull<TermsOfServiceConsent>,
}

literal_enum! {
    pub enum PromotionsConsent {
        OptIn = "opt_in",
        OptOut = "opt_out",
    }
}

literal_enum! {
    pub enum TermsOfServiceConsent {
        Accepted = "accepted",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConsentCollection {
    #[serde(deserialize_with = "nullable")]
    pub promotions: Option<PromotionsCollection>,
    #[serde(deserialize_with = "nullable")]
    pub terms_of_service: Option<TermsOfServiceCollection>,
}

literal_enum! {
    pub enum PromotionsCollection {
        Auto = "auto",
        None = "none",
    }
}

literal_enum! {
    pub enum TermsOfServiceCollection {
        None = "none",
        Required = "required",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomText {
    #[serde(deserialize_with = "nullable")]
    pub shipping_address: Option<CustomTextMessage>,
    #[serde(deserialize_with = "nullable")]
    pub submit: Option<CustomTextMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomTextMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutCustomerDetails {
    #[serde(deserialize_with = "nullable")]
    pub address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tax_exempt: Option<TaxExempt>,
    #[serde(deserialize_with = "nullable")]
    pub tax_ids: Option<Vec<CheckoutTaxId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutTaxId {
    #[serde(rename = "type")]
    pub type_: TaxIdType,
    #[serde(deserialize_with = "nullable")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceCreation {
    pub enabled: bool,
    /// Defaults copied onto the invoice created after payment.
    pub invoice_data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShippingAddressCollection {
    pub allowed_countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShippingCost {
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    #[serde(deserialize_with = "nullable")]
    pub shipping_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub taxes: Option<Vec<LineItemTax>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShippingOption {
    pub shipping_amount: i64,
    pub shipping_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TotalDetails {
    pub amount_discount: i64,
    #[serde(deserialize_with = "nullable")]
    pub amount_shipping: Option<i64>,
    pub amount_tax: i64,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub breakdown: Option<TotalDetailsBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TotalDetailsBreakdown {
    pub discounts: Vec<LineItemDiscount>,
    pub taxes: Vec<LineItemTax>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItemDiscount {
    pub amount: i64,
    pub discount: Discount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItemTax {
    pub amount: i64,
    pub rate: TaxRate,
}

/// A line on a checkout session, quote or payment link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    pub id: LineItemId,
    pub object: Tag<LineItem>,
    pub amount_discount: i64,
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub currency: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub discounts: Option<Vec<LineItemDiscount>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub price: MaybeNull<Price>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub quantity: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub taxes: Option<Vec<LineItemTax>>,
}

crate::impl_object!(LineItem, "item", id);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_object_literal() {
        let item: LineItem = serde_json::from_value(json!({
            "id": "li_1",
            "object": "item",
            "amount_discount": 0,
            "amount_subtotal": 2000,
            "amount_tax": 0,
            "amount_total": 2000,
            "currency": "usd",
            "description": "T-shirt",
            "price": null,
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(item.object.as_str(), "item");
        assert!(item.discounts.is_none());
    }

    #[test]
    fn test_consent_terms_of_service_presence() {
        let absent: CheckoutConsent = serde_json::from_value(json!({"promotions": "opt_in"})).unwrap();
        assert!(absent.terms_of_service.is_absent());
        let null: CheckoutConsent =
            serde_json::from_value(json!({"promotions": null, "terms_of_service": null})).unwrap();
        assert!(null.terms_of_service.is_null());
        assert_eq!(
            serde_json::to_value(&null).unwrap(),
            json!({"promotions": null, "terms_of_service": null})
        );
    }
}
