//! Credit notes adjust the amount of a finalized invoice.

use crate::checkout::ShippingCost;
use crate::customer::{CustomerBalanceTransaction, CustomerOrDeleted};
use crate::expandable::Expandable;
use crate::ids::{CreditNoteId, CreditNoteLineItemId};
use crate::invoice::{DiscountAmount, Invoice};
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, present};
use crate::refund::Refund;
use crate::tax::TaxRate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreditNote {
    pub id: CreditNoteId,
    pub object: Tag<CreditNote>,
    pub amount: i64,
    pub amount_shipping: i64,
    pub created: Timestamp,
    pub currency: String,
    pub customer: Expandable<CustomerOrDeleted>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer_balance_transaction: MaybeNull<Expandable<CustomerBalanceTransaction>>,
    pub discount_amount: i64,
    pub discount_amounts: Vec<DiscountAmount>,
    pub invoice: Expandable<Invoice>,
    pub lines: List<CreditNoteLineItem>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub memo: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub number: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub out_of_band_amount: MaybeNull<i64>,
    pub pdf: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub reason: MaybeNull<CreditNoteReason>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub refund: MaybeNull<Expandable<Refund>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping_cost: MaybeNull<ShippingCost>,
    pub status: CreditNoteStatus,
    pub subtotal: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subtotal_excluding_tax: MaybeNull<i64>,
    pub tax_amounts: Vec<CreditNoteTaxAmount>,
    pub total: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub total_excluding_tax: MaybeNull<i64>,
    #[serde(rename = "type")]
    pub type_: CreditNoteType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub voided_at: MaybeNull<Timestamp>,
}

crate::impl_object!(CreditNote, "credit_note", id);

literal_enum! {
    pub enum CreditNoteReason {
        Duplicate = "duplicate",
        Fraudulent = "fraudulent",
        OrderChange = "order_change",
        ProductUnsatisfactory = "product_unsatisfactory",
    }
}

literal_enum! {
    pub enum CreditNoteStatus {
        Issued = "issued",
        Void = "void",
    }
}

literal_enum! {
    pub enum CreditNoteType {
        PostPayment = "post_payment",
        PrePayment = "pre_payment",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreditNoteLineItem {
    pub id: CreditNoteLineItemId,
    pub object: Tag<CreditNoteLineItem>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_excluding_tax: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub discount_amount: i64,
    pub discount_amounts: Vec<DiscountAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub invoice_line_item: Option<String>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub quantity: MaybeNull<i64>,
    pub tax_amounts: Vec<CreditNoteTaxAmount>,
    pub tax_rates: Vec<TaxRate>,
    #[serde(rename = "type")]
    pub type_: CreditNoteLineItemType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount_decimal: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount_excluding_tax: MaybeNull<String>,
}

crate::impl_object!(CreditNoteLineItem, "credit_note_line_item", id);

literal_enum! {
    pub enum CreditNoteLineItemType {
        CustomLineItem = "custom_line_item",
        InvoiceLineItem = "invoice_line_item",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreditNoteTaxAmount {
    pub amount: i64,
    pub inclusive: bool,
    pub tax_rate: Expandable<TaxRate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credit_note_line_item() {
        let line: CreditNoteLineItem = serde_json::from_value(json!({
            "id": "cnli_1",
            "object": "credit_note_line_item",
            "amount": 500,
            "amount_excluding_tax": 500,
            "description": "Refund for damaged item",
            "discount_amount": 0,
            "discount_amounts": [],
            "invoice_line_item": "il_1",
            "livemode": false,
            "quantity": 1,
            "tax_amounts": [{"amount": 0, "inclusive": false, "tax_rate": "txr_1"}],
            "tax_rates": [],
            "type": "invoice_line_item",
            "unit_amount": null,
            "unit_amount_decimal": null,
            "unit_amount_excluding_tax": "500"
        }))
        .unwrap();
        assert_eq!(line.type_, CreditNoteLineItemType::InvoiceLineItem);
        assert_eq!(line.tax_amounts[0].tax_rate.id(), "txr_1");
    }
}
