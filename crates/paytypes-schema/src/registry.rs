//! Registry of known object shapes.

use paytypes_core::Object;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// A shape known to the registry.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredObject {
    /// The `object` literal.
    pub object: &'static str,

    /// Rust type name (fully qualified).
    pub type_name: &'static str,

    /// Whether this is the `deleted: true` stub of the object.
    pub deleted: bool,

    schema: fn() -> RootSchema,
    decode: fn(&serde_json::Value) -> Result<(), serde_json::Error>,
}

impl RegisteredObject {
    /// Describe shape `T`.
    pub fn of<T>() -> Self
    where
        T: Object + JsonSchema + DeserializeOwned,
    {
        Self {
            object: T::OBJECT,
            type_name: std::any::type_name::<T>(),
            deleted: T::DELETED,
            schema: || schemars::schema_for!(T),
            decode: |value| serde_json::from_value::<T>(value.clone()).map(|_| ()),
        }
    }

    /// The shape's JSON Schema.
    pub fn schema(&self) -> RootSchema {
        (self.schema)()
    }

    /// Decode `value` strictly as this shape, discarding the result.
    pub fn decode(&self, value: &serde_json::Value) -> Result<(), serde_json::Error> {
        (self.decode)(value)
    }

    /// The type name without its module path.
    pub fn short_type_name(&self) -> &'static str {
        self.type_name.rsplit("::").next().unwrap_or(self.type_name)
    }

    /// `customer` for live shapes, `deleted customer` for stubs.
    pub fn label(&self) -> String {
        if self.deleted {
            format!("deleted {}", self.object)
        } else {
            self.object.to_string()
        }
    }
}

/// Shapes keyed by `object`, then by `deleted`.
#[derive(Debug, Default, Clone)]
pub struct ObjectRegistry {
    entries: BTreeMap<&'static str, BTreeMap<bool, RegisteredObject>>,
}

impl ObjectRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register shape `T`. A shape with the same `(object, deleted)` pair
    /// is replaced.
    pub fn register<T>(&mut self)
    where
        T: Object + JsonSchema + DeserializeOwned,
    {
        let entry = RegisteredObject::of::<T>();
        let shapes = self.entries.entry(entry.object).or_default();
        if let Some(previous) = shapes.insert(entry.deleted, entry) {
            tracing::debug!(
                object = entry.object,
                replaced = previous.type_name,
                "Replaced registered shape"
            );
        }
    }

    /// Every top-level shape in `paytypes-core`.
    pub fn standard() -> Self {
        use paytypes_core::account::{Account, DeletedAccount, DeletedPerson, Person};
        use paytypes_core::balance::{Balance, BalanceTransaction};
        use paytypes_core::bank_account::{BankAccount, DeletedBankAccount};
        use paytypes_core::card::{Card, DeletedCard};
        use paytypes_core::charge::{Charge, Review};
        use paytypes_core::checkout::{CheckoutSession, LineItem};
        use paytypes_core::coupon::{Coupon, DeletedCoupon};
        use paytypes_core::credit_note::{CreditNote, CreditNoteLineItem};
        use paytypes_core::customer::{
            CashBalance, Customer, CustomerBalanceTransaction, DeletedCustomer,
        };
        use paytypes_core::discount::{DeletedDiscount, Discount, PromotionCode};
        use paytypes_core::dispute::Dispute;
        use paytypes_core::event::Event;
        use paytypes_core::file::{File, FileLink};
        use paytypes_core::invoice::{
            DeletedInvoice, DeletedInvoiceItem, Invoice, InvoiceItem, InvoiceLineItem,
        };
        use paytypes_core::issuing::{
            IssuingAuthorization, IssuingCard, IssuingCardholder, IssuingDispute,
            IssuingTransaction,
        };
        use paytypes_core::mandate::Mandate;
        use paytypes_core::payment_intent::PaymentIntent;
        use paytypes_core::payment_method::PaymentMethod;
        use paytypes_core::payout::Payout;
        use paytypes_core::price::{
            DeletedPlan, DeletedPrice, DeletedProduct, Plan, Price, Product,
        };
        use paytypes_core::refund::Refund;
        use paytypes_core::setup_intent::{SetupAttempt, SetupIntent};
        use paytypes_core::source::Source;
        use paytypes_core::subscription::{
            DeletedSubscriptionItem, Subscription, SubscriptionItem, SubscriptionSchedule,
        };
        use paytypes_core::tax::{DeletedTaxId, TaxCode, TaxId, TaxRate};
        use paytypes_core::transfer::{
            Application, ApplicationFee, FeeRefund, Transfer, TransferReversal,
        };

        let registry = crate::objects!(
            Account,
            DeletedAccount,
            Application,
            ApplicationFee,
            Balance,
            BalanceTransaction,
            BankAccount,
            DeletedBankAccount,
            Card,
            DeletedCard,
            CashBalance,
            Charge,
            CheckoutSession,
            Coupon,
            DeletedCoupon,
            CreditNote,
            CreditNoteLineItem,
            Customer,
            DeletedCustomer,
            CustomerBalanceTransaction,
            Discount,
            DeletedDiscount,
            Dispute,
            Event,
            FeeRefund,
            File,
            FileLink,
            Invoice,
            DeletedInvoice,
            InvoiceItem,
            DeletedInvoiceItem,
            InvoiceLineItem,
            IssuingAuthorization,
            IssuingCard,
            IssuingCardholder,
            IssuingDispute,
            IssuingTransaction,
            LineItem,
            Mandate,
            PaymentIntent,
            PaymentMethod,
            Payout,
            Person,
            DeletedPerson,
            Plan,
            DeletedPlan,
            Price,
            DeletedPrice,
            Product,
            DeletedProduct,
            PromotionCode,
            Refund,
            Review,
            SetupAttempt,
            SetupIntent,
            Source,
            Subscription,
            SubscriptionItem,
            DeletedSubscriptionItem,
            SubscriptionSchedule,
            TaxCode,
            TaxId,
            DeletedTaxId,
            TaxRate,
            Transfer,
            TransferReversal,
        );

        tracing::info!(count = registry.len(), "Registered standard object shapes");
        registry
    }

    /// Look up a shape.
    pub fn get(&self, object: &str, deleted: bool) -> Option<&RegisteredObject> {
        self.entries.get(object)?.get(&deleted)
    }

    /// Distinct `object` literals, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Get the number of registered shapes.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All shapes, ordered by literal with live shapes first.
    pub fn entries(&self) -> impl Iterator<Item = &RegisteredObject> {
        self.entries.values().flat_map(BTreeMap::values)
    }

    /// Generate a markdown coverage table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Object Coverage\n\n");
        md.push_str("| Object | Rust Type | Deleted |\n");
        md.push_str("|--------|-----------|---------|\n");

        for entry in self.entries() {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                entry.object,
                entry.short_type_name(),
                if entry.deleted { "yes" } else { "" },
            ));
        }

        md
    }
}

/// Build a registry from a list of shapes.
#[macro_export]
macro_rules! objects {
    ($($type:ty),* $(,)?) => {{
        let mut registry = $crate::ObjectRegistry::new();
        $(
            registry.register::<$type>();
        )*
        registry
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use paytypes_core::coupon::{Coupon, DeletedCoupon};
    use paytypes_core::customer::Customer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_and_lookup() {
        let registry = crate::objects!(Coupon, DeletedCoupon, Customer);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["coupon", "customer"]);

        let live = registry.get("coupon", false).unwrap();
        assert!(!live.deleted);
        assert_eq!(live.short_type_name(), "Coupon");

        let stub = registry.get("coupon", true).unwrap();
        assert_eq!(stub.short_type_name(), "DeletedCoupon");
        assert_eq!(stub.label(), "deleted coupon");

        assert!(registry.get("customer", true).is_none());

        let name = String::from("customer");
        assert_eq!(registry.get(&name, false).unwrap().short_type_name(), "Customer");
        assert!(registry.get("quote", false).is_none());
    }

    #[test]
    fn test_entries_order_live_before_deleted() {
        let registry = crate::objects!(DeletedCoupon, Customer, Coupon);
        let labels: Vec<String> = registry.entries().map(RegisteredObject::label).collect();
        assert_eq!(labels, vec!["coupon", "deleted coupon", "customer"]);
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ObjectRegistry::new();
        registry.register::<Coupon>();
        registry.register::<Coupon>();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_standard_registry() {
        let registry = ObjectRegistry::standard();

        for (object, deleted) in [
            ("charge", false),
            ("customer", true),
            ("checkout.session", false),
            ("issuing.authorization", false),
            ("event", false),
            ("balance", false),
        ] {
            assert!(
                registry.get(object, deleted).is_some(),
                "missing {object} (deleted: {deleted})"
            );
        }

        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_schema_and_decode_through_entry() {
        let registry = crate::objects!(DeletedCoupon);
        let entry = registry.get("coupon", true).unwrap();

        let payload = serde_json::json!({"id": "25OFF", "object": "coupon", "deleted": true});
        assert!(entry.decode(&payload).is_ok());

        let schema = serde_json::to_value(entry.schema()).unwrap();
        assert!(schema["properties"]["deleted"].is_object());
    }

    #[test]
    fn test_markdown_report() {
        let registry = crate::objects!(Coupon, DeletedCoupon);
        let md = registry.to_markdown();
        assert!(md.contains("| `coupon` | `Coupon` |  |"));
        assert!(md.contains("| `coupon` | `DeletedCoupon` | yes |"));
    }
}
