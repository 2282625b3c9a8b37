//! Invoices, their line items and pending invoice items.

use crate::account::Account;
use crate::api_errors::ApiErrors;
use crate::charge::Charge;
use crate::common::{Address, Shipping};
use crate::customer::{
    CustomerOrDeleted, InvoiceCustomField, InvoiceRenderingOptions, TaxExempt,
};
use crate::discount::{Discount, DiscountOrDeleted};
use crate::expandable::Expandable;
use crate::ids::{InvoiceId, InvoiceItemId, InvoiceLineItemId};
use crate::list::List;
use crate::object::{DeletedFlag, HasId, Metadata, Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use crate::price::{Plan, Price};
use crate::source::PaymentSource;
use crate::subscription::Subscription;
use crate::tax::{TaxId, TaxIdType, TaxRate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Invoice {
    /// Absent on upcoming invoices, which have not been created yet.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub id: Option<InvoiceId>,
    pub object: Tag<Invoice>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_tax_ids: MaybeNull<Vec<Expandable<TaxId>>>,
    pub amount_due: i64,
    pub amount_paid: i64,
    pub amount_remaining: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application_fee_amount: MaybeNull<i64>,
    pub attempt_count: i64,
    pub attempted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub auto_advance: Option<bool>,
    pub automatic_tax: AutomaticTax,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub billing_reason: MaybeNull<BillingReason>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub charge: MaybeNull<Expandable<Charge>>,
    pub collection_method: CollectionMethod,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub custom_fields: MaybeNull<Vec<InvoiceCustomField>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_address: MaybeNull<Address>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_phone: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_shipping: MaybeNull<Shipping>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_tax_exempt: MaybeNull<TaxExempt>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_tax_ids: MaybeNull<Vec<InvoiceCustomerTaxId>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_payment_method: MaybeNull<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_source: MaybeNull<Expandable<PaymentSource>>,
    pub default_tax_rates: Vec<TaxRate>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discount: MaybeNull<Discount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discounts: MaybeNull<Vec<Expandable<DiscountOrDeleted>>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub due_date: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ending_balance: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub footer: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub from_invoice: MaybeNull<InvoiceFromInvoice>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub hosted_invoice_url: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice_pdf: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_finalization_error: MaybeNull<ApiErrors>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub latest_revision: MaybeNull<Expandable<Invoice>>,
    pub lines: List<InvoiceLineItem>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub next_payment_attempt: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    pub paid: bool,
    pub paid_out_of_band: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_intent: MaybeNull<Expandable<PaymentIntent>>,
    pub payment_settings: InvoicePaymentSettings,
    pub period_end: Timestamp,
    pub period_start: Timestamp,
    pub post_payment_credit_notes_amount: i64,
    pub pre_payment_credit_notes_amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub quote: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub rendering_options: MaybeNull<InvoiceRenderingOptions>,
    pub starting_balance: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub status: MaybeNull<InvoiceStatus>,
    pub status_transitions: InvoiceStatusTransitions,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<Expandable<Subscription>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub subscription_proration_date: Option<Timestamp>,
    pub subtotal: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subtotal_excluding_tax: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub test_clock: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub threshold_reason: Option<InvoiceThresholdReason>,
    pub total: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub total_discount_amounts: MaybeNull<Vec<DiscountAmount>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub total_excluding_tax: MaybeNull<i64>,
    pub total_tax_amounts: Vec<InvoiceTaxAmount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_data: MaybeNull<InvoiceTransferData>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub webhooks_delivered_at: MaybeNull<Timestamp>,
}

crate::impl_object!(Invoice, "invoice");

impl HasId for Invoice {
    fn id(&self) -> &str {
        self.id.as_ref().map_or("", InvoiceId::as_str)
    }
}

impl Invoice {
    pub fn is_upcoming(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedInvoice {
    pub id: InvoiceId,
    pub object: Tag<Invoice>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedInvoice, "invoice", deleted);

literal_enum! {
    pub enum InvoiceStatus {
        Deleted = "deleted",
        Draft = "draft",
        Open = "open",
        Paid = "paid",
        Uncollectible = "uncollectible",
        Void = "void",
    }
}

literal_enum! {
    pub enum BillingReason {
        AutomaticPendingInvoiceItemInvoice = "automatic_pending_invoice_item_invoice",
        Manual = "manual",
        QuoteAccept = "quote_accept",
        Subscription = "subscription",
        SubscriptionCreate = "subscription_create",
        SubscriptionCycle = "subscription_cycle",
        SubscriptionThreshold = "subscription_threshold",
        SubscriptionUpdate = "subscription_update",
        Upcoming = "upcoming",
    }
}

literal_enum! {
    pub enum CollectionMethod {
        ChargeAutomatically = "charge_automatically",
        SendInvoice = "send_invoice",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AutomaticTax {
    pub enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<AutomaticTaxCalculation>,
}

literal_enum! {
    pub enum AutomaticTaxCalculation {
        Complete = "complete",
        Failed = "failed",
        RequiresLocationInputs = "requires_location_inputs",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceCustomerTaxId {
    #[serde(rename = "type")]
    pub type_: TaxIdType,
    #[serde(deserialize_with = "nullable")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceFromInvoice {
    pub action: String,
    pub invoice: Expandable<Invoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoicePaymentSettings {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_mandate: MaybeNull<String>,
    /// Per-type options keyed by payment method type.
    #[serde(deserialize_with = "nullable")]
    pub payment_method_options: Option<HashMap<String, serde_json::Value>>,
    #[serde(deserialize_with = "nullable")]
    pub payment_method_types: Option<Vec<InvoicePaymentMethodType>>,
}

literal_enum! {
    pub enum InvoicePaymentMethodType {
        AchCreditTransfer = "ach_credit_transfer",
        AchDebit = "ach_debit",
        AcssDebit = "acss_debit",
        AuBecsDebit = "au_becs_debit",
        BacsDebit = "bacs_debit",
        Bancontact = "bancontact",
        Boleto = "boleto",
        Card = "card",
        CustomerBalance = "customer_balance",
        Fpx = "fpx",
        Giropay = "giropay",
        Grabpay = "grabpay",
        Ideal = "ideal",
        Konbini = "konbini",
        Link = "link",
        Paynow = "paynow",
        Promptpay = "promptpay",
        SepaCreditTransfer = "sepa_credit_transfer",
        SepaDebit = "sepa_debit",
        Sofort = "sofort",
        UsBankAccount = "us_bank_account",
        WechatPay = "wechat_pay",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceStatusTransitions {
    #[serde(deserialize_with = "nullable")]
    pub finalized_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub marked_uncollectible_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub paid_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub voided_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceThresholdReason {
    #[serde(deserialize_with = "nullable")]
    pub amount_gte: Option<i64>,
    pub item_reasons: Vec<InvoiceItemThresholdReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceItemThresholdReason {
    pub line_item_ids: Vec<String>,
    pub usage_gte: i64,
}

/// Discount share applied to an invoice or line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiscountAmount {
    pub amount: i64,
    pub discount: Expandable<DiscountOrDeleted>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceTaxAmount {
    pub amount: i64,
    pub inclusive: bool,
    pub tax_rate: Expandable<TaxRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceTransferData {
    #[serde(deserialize_with = "nullable")]
    pub amount: Option<i64>,
    pub destination: Expandable<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Period {
    pub end: Timestamp,
    pub start: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceLineItem {
    pub id: InvoiceLineItemId,
    pub object: Tag<InvoiceLineItem>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_excluding_tax: MaybeNull<i64>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discount_amounts: MaybeNull<Vec<DiscountAmount>>,
    pub discountable: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discounts: MaybeNull<Vec<Expandable<Discount>>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub invoice_item: Option<Expandable<InvoiceItem>>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub period: Period,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub plan: MaybeNull<Plan>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub price: MaybeNull<Price>,
    pub proration: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub proration_details: MaybeNull<ProrationDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub quantity: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub subscription_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_amounts: Option<Vec<InvoiceTaxAmount>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_rates: Option<Vec<TaxRate>>,
    #[serde(rename = "type")]
    pub type_: InvoiceLineItemType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount_excluding_tax: MaybeNull<String>,
}

crate::impl_object!(InvoiceLineItem, "line_item", id);

literal_enum! {
    pub enum InvoiceLineItemType {
        Invoiceitem = "invoiceitem",
        Subscription = "subscription",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProrationDetails {
    #[serde(deserialize_with = "nullable")]
    pub credited_items: Option<CreditedItems>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreditedItems {
    pub invoice: String,
    pub invoice_line_items: Vec<String>,
}

/// A charge or credit waiting to be added to the customer's next invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub object: Tag<InvoiceItem>,
    pub amount: i64,
    pub currency: String,
    pub customer: Expandable<CustomerOrDeleted>,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub discountable: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discounts: MaybeNull<Vec<Expandable<Discount>>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<Expandable<Invoice>>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub period: Period,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub plan: MaybeNull<Plan>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub price: MaybeNull<Price>,
    pub proration: bool,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<Expandable<Subscription>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub subscription_item: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_rates: MaybeNull<Vec<TaxRate>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub test_clock: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount_decimal: MaybeNull<String>,
}

crate::impl_object!(InvoiceItem, "invoiceitem", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedInvoiceItem {
    pub id: InvoiceItemId,
    pub object: Tag<InvoiceItem>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedInvoiceItem, "invoiceitem", deleted);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_period_and_type() {
        let line: InvoiceLineItem = serde_json::from_value(json!({
            "id": "il_1",
            "object": "line_item",
            "amount": 2000,
            "amount_excluding_tax": 2000,
            "currency": "usd",
            "description": "1 x Gold plan",
            "discount_amounts": [],
            "discountable": true,
            "discounts": [],
            "livemode": false,
            "metadata": {},
            "period": {"end": 1702592000, "start": 1700000000},
            "plan": null,
            "price": null,
            "proration": false,
            "proration_details": {"credited_items": null},
            "quantity": 1,
            "subscription": "sub_1",
            "type": "subscription",
            "unit_amount_excluding_tax": "2000"
        }))
        .unwrap();
        assert_eq!(line.type_, InvoiceLineItemType::Subscription);
        assert!(line.period.end > line.period.start);
    }

    #[test]
    fn test_discount_amount_with_deleted_discount() {
        let amount: DiscountAmount = serde_json::from_value(json!({
            "amount": 500,
            "discount": {
                "id": "di_1",
                "object": "discount",
                "checkout_session": null,
                "coupon": {
                    "id": "c1", "object": "coupon", "created": 1700000000,
                    "duration": "once", "livemode": false, "times_redeemed": 1, "valid": false
                },
                "customer": "cus_1",
                "deleted": true,
                "invoice": null,
                "invoice_item": null,
                "promotion_code": null,
                "start": 1700000000,
                "subscription": null
            }
        }))
        .unwrap();
        let discount = amount.discount.as_object().unwrap();
        assert!(discount.is_deleted());
        assert_eq!(amount.discount.id(), "di_1");
    }
}
