//! Customers and their balance ledger.

use crate::common::{Address, Shipping};
use crate::credit_note::CreditNote;
use crate::discount::Discount;
use crate::expandable::Expandable;
use crate::ids::{CustomerBalanceTransactionId, CustomerId};
use crate::invoice::Invoice;
use crate::list::List;
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use crate::source::PaymentSource;
use crate::subscription::Subscription;
use crate::tax::TaxId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Customer {
    pub id: CustomerId,
    pub object: Tag<Customer>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address: MaybeNull<Address>,
    /// Credit (negative) or debit (positive) applied to the next invoice.
    pub balance: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cash_balance: MaybeNull<CashBalance>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_source: MaybeNull<Expandable<PaymentSource>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub delinquent: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discount: MaybeNull<Discount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub invoice_credit_balance: Option<HashMap<String, i64>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice_prefix: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub invoice_settings: Option<InvoiceSettings>,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub next_invoice_sequence: Option<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub preferred_locales: MaybeNull<Vec<String>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping: MaybeNull<Shipping>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sources: Option<List<PaymentSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub subscriptions: Option<List<Subscription>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax: Option<CustomerTax>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_exempt: MaybeNull<TaxExempt>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_ids: Option<List<TaxId>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub test_clock: MaybeNull<String>,
}

crate::impl_object!(Customer, "customer", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedCustomer {
    pub id: CustomerId,
    pub object: Tag<Customer>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedCustomer, "customer", deleted);

crate::object_union! {
    /// A customer reference whose expansion may be a deleted stub.
    pub enum CustomerOrDeleted {
        Customer(Customer),
        Deleted(DeletedCustomer),
    }
}

literal_enum! {
    pub enum TaxExempt {
        Exempt = "exempt",
        None = "none",
        Reverse = "reverse",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceSettings {
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    #[serde(deserialize_with = "nullable")]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(deserialize_with = "nullable")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub rendering_options: MaybeNull<InvoiceRenderingOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceCustomField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceRenderingOptions {
    #[serde(deserialize_with = "nullable")]
    pub amount_tax_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomerTax {
    pub automatic_tax: AutomaticTaxStatus,
    #[serde(deserialize_with = "nullable")]
    pub ip_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub location: Option<CustomerTaxLocation>,
}

literal_enum! {
    pub enum AutomaticTaxStatus {
        Failed = "failed",
        NotCollecting = "not_collecting",
        Supported = "supported",
        UnrecognizedLocation = "unrecognized_location",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomerTaxLocation {
    pub country: String,
    pub source: TaxLocationSource,
    #[serde(deserialize_with = "nullable")]
    pub state: Option<String>,
}

literal_enum! {
    pub enum TaxLocationSource {
        BillingAddress = "billing_address",
        IpAddress = "ip_address",
        PaymentMethod = "payment_method",
        ShippingDestination = "shipping_destination",
    }
}

/// Funds held in a customer's cash balance, keyed by currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CashBalance {
    pub object: Tag<CashBalance>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub available: MaybeNull<HashMap<String, i64>>,
    pub customer: String,
    pub livemode: bool,
    pub settings: CashBalanceSettings,
}

crate::impl_object!(CashBalance, "cash_balance");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CashBalanceSettings {
    pub reconciliation_mode: ReconciliationMode,
}

literal_enum! {
    pub enum ReconciliationMode {
        Automatic = "automatic",
        Manual = "manual",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomerBalanceTransaction {
    pub id: CustomerBalanceTransactionId,
    pub object: Tag<CustomerBalanceTransaction>,
    pub amount: i64,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub credit_note: MaybeNull<Expandable<CreditNote>>,
    pub currency: String,
    pub customer: Expandable<Customer>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub ending_balance: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<Expandable<Invoice>>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(rename = "type")]
    pub type_: CustomerBalanceTransactionType,
}

crate::impl_object!(CustomerBalanceTransaction, "customer_balance_transaction", id);

literal_enum! {
    pub enum CustomerBalanceTransactionType {
        Adjustment = "adjustment",
        AppliedToInvoice = "applied_to_invoice",
        CreditNote = "credit_note",
        Initial = "initial",
        InvoiceOverpaid = "invoice_overpaid",
        InvoiceTooLarge = "invoice_too_large",
        InvoiceTooSmall = "invoice_too_small",
        Migration = "migration",
        UnappliedFromInvoice = "unapplied_from_invoice",
        UnspentReceiverCredit = "unspent_receiver_credit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_json() -> serde_json::Value {
        json!({
            "id": "cus_1",
            "object": "customer",
            "balance": 0,
            "created": 1700000000,
            "default_source": null,
            "description": null,
            "email": "jenny@example.com",
            "livemode": false,
            "metadata": {},
            "shipping": null
        })
    }

    #[test]
    fn test_customer_minimal() {
        let customer: Customer = serde_json::from_value(customer_json()).unwrap();
        assert_eq!(customer.email.as_option().map(String::as_str), Some("jenny@example.com"));
        assert!(customer.discount.is_absent());
        assert_eq!(serde_json::to_value(&customer).unwrap(), customer_json());
    }

    #[test]
    fn test_customer_email_absent_or_null() {
        let mut payload = customer_json();
        payload.as_object_mut().unwrap().remove("email");
        let customer: Customer = serde_json::from_value(payload.clone()).unwrap();
        assert!(customer.email.is_absent());
        assert_eq!(serde_json::to_value(&customer).unwrap(), payload);

        payload["email"] = json!(null);
        let customer: Customer = serde_json::from_value(payload).unwrap();
        assert!(customer.email.is_null());
    }

    #[test]
    fn test_tax_exempt_null_versus_absent() {
        let mut payload = customer_json();
        payload["tax_exempt"] = json!(null);
        let customer: Customer = serde_json::from_value(payload).unwrap();
        assert!(customer.tax_exempt.is_null());

        let mut payload = customer_json();
        payload["tax_exempt"] = json!("reverse");
        let customer: Customer = serde_json::from_value(payload).unwrap();
        assert_eq!(customer.tax_exempt.into_option(), Some(TaxExempt::Reverse));
    }

    #[test]
    fn test_customer_or_deleted() {
        let deleted: CustomerOrDeleted =
            serde_json::from_value(json!({"id": "cus_1", "object": "customer", "deleted": true}))
                .unwrap();
        assert!(matches!(deleted, CustomerOrDeleted::Deleted(_)));
    }
}
