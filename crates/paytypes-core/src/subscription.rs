//! Subscriptions, their items, and schedules of future phases.

use crate::account::Account;
use crate::coupon::CouponOrDeleted;
use crate::customer::CustomerOrDeleted;
use crate::discount::Discount;
use crate::expandable::Expandable;
use crate::ids::{SubscriptionId, SubscriptionItemId, SubscriptionScheduleId};
use crate::invoice::{CollectionMethod, Invoice, InvoicePaymentMethodType};
use crate::list::List;
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use crate::price::{Plan, PlanOrDeleted, Price, PriceOrDeleted, RecurringInterval};
use crate::setup_intent::SetupIntent;
use crate::source::PaymentSource;
use crate::tax::TaxRate;
use crate::transfer::Application;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub object: Tag<Subscription>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<Expandable<Application>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application_fee_percent: MaybeNull<f64>,
    pub automatic_tax: SubscriptionAutomaticTax,
    pub billing_cycle_anchor: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub billing_thresholds: MaybeNull<BillingThresholds>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cancel_at: MaybeNull<Timestamp>,
    pub cancel_at_period_end: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub canceled_at: MaybeNull<Timestamp>,
    pub collection_method: CollectionMethod,
    pub created: Timestamp,
    pub currency: String,
    pub current_period_end: Timestamp,
    pub current_period_start: Timestamp,
    pub customer: Expandable<CustomerOrDeleted>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub days_until_due: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_payment_method: MaybeNull<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_source: MaybeNull<Expandable<PaymentSource>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_tax_rates: MaybeNull<Vec<TaxRate>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub discount: MaybeNull<Discount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ended_at: MaybeNull<Timestamp>,
    pub items: List<SubscriptionItem>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub latest_invoice: MaybeNull<Expandable<Invoice>>,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub next_pending_invoice_item_invoice: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub pause_collection: MaybeNull<PauseCollection>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_settings: MaybeNull<SubscriptionPaymentSettings>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub pending_invoice_item_interval: MaybeNull<PendingInvoiceItemInterval>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub pending_setup_intent: MaybeNull<Expandable<SetupIntent>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub pending_update: MaybeNull<PendingUpdate>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub schedule: MaybeNull<Expandable<SubscriptionSchedule>>,
    pub start_date: Timestamp,
    pub status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub test_clock: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_data: MaybeNull<SubscriptionTransferData>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub trial_end: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub trial_settings: MaybeNull<SubscriptionTrialSettings>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub trial_start: MaybeNull<Timestamp>,
}

crate::impl_object!(Subscription, "subscription", id);

impl Subscription {
    /// Active and trialing subscriptions still grant access.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing
        )
    }

    pub fn in_trial_at(&self, at: Timestamp) -> bool {
        match (self.trial_start, self.trial_end) {
            (MaybeNull::Value(start), MaybeNull::Value(end)) => start <= at && at < end,
            _ => false,
        }
    }
}

literal_enum! {
    pub enum SubscriptionStatus {
        Active = "active",
        Canceled = "canceled",
        Incomplete = "incomplete",
        IncompleteExpired = "incomplete_expired",
        PastDue = "past_due",
        Paused = "paused",
        Trialing = "trialing",
        Unpaid = "unpaid",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionAutomaticTax {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BillingThresholds {
    #[serde(deserialize_with = "nullable")]
    pub amount_gte: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub reset_billing_cycle_anchor: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PauseCollection {
    pub behavior: PauseBehavior,
    #[serde(deserialize_with = "nullable")]
    pub resumes_at: Option<Timestamp>,
}

literal_enum! {
    pub enum PauseBehavior {
        KeepAsDraft = "keep_as_draft",
        MarkUncollectible = "mark_uncollectible",
        Void = "void",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionPaymentSettings {
    #[serde(deserialize_with = "nullable")]
    pub payment_method_options: Option<HashMap<String, serde_json::Value>>,
    #[serde(deserialize_with = "nullable")]
    pub payment_method_types: Option<Vec<InvoicePaymentMethodType>>,
    #[serde(deserialize_with = "nullable")]
    pub save_default_payment_method: Option<SaveDefaultPaymentMethod>,
}

literal_enum! {
    pub enum SaveDefaultPaymentMethod {
        Off = "off",
        OnSubscription = "on_subscription",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PendingInvoiceItemInterval {
    pub interval: RecurringInterval,
    pub interval_count: i64,
}

/// Changes that apply once the pending invoice is paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PendingUpdate {
    #[serde(deserialize_with = "nullable")]
    pub billing_cycle_anchor: Option<Timestamp>,
    pub expires_at: Timestamp,
    #[serde(deserialize_with = "nullable")]
    pub subscription_items: Option<Vec<SubscriptionItem>>,
    #[serde(deserialize_with = "nullable")]
    pub trial_end: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub trial_from_plan: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionTransferData {
    #[serde(deserialize_with = "nullable")]
    pub amount_percent: Option<f64>,
    pub destination: Expandable<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionTrialSettings {
    pub end_behavior: TrialEndBehavior,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrialEndBehavior {
    pub missing_payment_method: MissingPaymentMethod,
}

literal_enum! {
    pub enum MissingPaymentMethod {
        Cancel = "cancel",
        CreateInvoice = "create_invoice",
        Pause = "pause",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionItem {
    pub id: SubscriptionItemId,
    pub object: Tag<SubscriptionItem>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub billing_thresholds: MaybeNull<ItemBillingThresholds>,
    pub created: Timestamp,
    pub metadata: Metadata,
    pub plan: Plan,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub quantity: Option<i64>,
    pub subscription: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_rates: MaybeNull<Vec<TaxRate>>,
}

crate::impl_object!(SubscriptionItem, "subscription_item", id);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedSubscriptionItem {
    pub id: SubscriptionItemId,
    pub object: Tag<SubscriptionItem>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedSubscriptionItem, "subscription_item", deleted);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemBillingThresholds {
    #[serde(deserialize_with = "nullable")]
    pub usage_gte: Option<i64>,
}

/// Planned changes to a subscription over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubscriptionSchedule {
    pub id: SubscriptionScheduleId,
    pub object: Tag<SubscriptionSchedule>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<Expandable<Application>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub canceled_at: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub completed_at: MaybeNull<Timestamp>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub current_phase: MaybeNull<CurrentPhase>,
    pub customer: Expandable<CustomerOrDeleted>,
    pub default_settings: ScheduleDefaultSettings,
    pub end_behavior: ScheduleEndBehavior,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub phases: Vec<SchedulePhase>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub released_at: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub released_subscription: MaybeNull<String>,
    pub status: ScheduleStatus,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<Expandable<Subscription>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub test_clock: MaybeNull<String>,
}

crate::impl_object!(SubscriptionSchedule, "subscription_schedule", id);

impl SubscriptionSchedule {
    /// The phase covering `at`, if any.
    pub fn phase_at(&self, at: Timestamp) -> Option<&SchedulePhase> {
        self.phases
            .iter()
            .find(|phase| phase.start_date <= at && at < phase.end_date)
    }
}

literal_enum! {
    pub enum ScheduleStatus {
        Active = "active",
        Canceled = "canceled",
        Completed = "completed",
        NotStarted = "not_started",
        Released = "released",
    }
}

literal_enum! {
    pub enum ScheduleEndBehavior {
        Cancel = "cancel",
        None = "none",
        Release = "release",
        Renew = "renew",
    }
}

literal_enum! {
    pub enum BillingCycleAnchor {
        Automatic = "automatic",
        PhaseStart = "phase_start",
    }
}

literal_enum! {
    pub enum ProrationBehavior {
        AlwaysInvoice = "always_invoice",
        CreateProrations = "create_prorations",
        None = "none",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentPhase {
    pub end_date: Timestamp,
    pub start_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleInvoiceSettings {
    #[serde(deserialize_with = "nullable")]
    pub days_until_due: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleDefaultSettings {
    #[serde(deserialize_with = "nullable")]
    pub application_fee_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub automatic_tax: Option<SubscriptionAutomaticTax>,
    pub billing_cycle_anchor: BillingCycleAnchor,
    #[serde(deserialize_with = "nullable")]
    pub billing_thresholds: Option<BillingThresholds>,
    #[serde(deserialize_with = "nullable")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(deserialize_with = "nullable")]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(deserialize_with = "nullable")]
    pub invoice_settings: Option<ScheduleInvoiceSettings>,
    #[serde(deserialize_with = "nullable")]
    pub on_behalf_of: Option<Expandable<Account>>,
    #[serde(deserialize_with = "nullable")]
    pub transfer_data: Option<SubscriptionTransferData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchedulePhase {
    pub add_invoice_items: Vec<PhaseAddInvoiceItem>,
    #[serde(deserialize_with = "nullable")]
    pub application_fee_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub automatic_tax: Option<SubscriptionAutomaticTax>,
    #[serde(deserialize_with = "nullable")]
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    #[serde(deserialize_with = "nullable")]
    pub billing_thresholds: Option<BillingThresholds>,
    #[serde(deserialize_with = "nullable")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(deserialize_with = "nullable")]
    pub coupon: Option<Expandable<CouponOrDeleted>>,
    pub currency: String,
    #[serde(deserialize_with = "nullable")]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_tax_rates: MaybeNull<Vec<TaxRate>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub end_date: Timestamp,
    #[serde(deserialize_with = "nullable")]
    pub invoice_settings: Option<ScheduleInvoiceSettings>,
    pub items: Vec<PhaseItem>,
    #[serde(deserialize_with = "nullable")]
    pub metadata: Option<Metadata>,
    #[serde(deserialize_with = "nullable")]
    pub on_behalf_of: Option<Expandable<Account>>,
    pub proration_behavior: ProrationBehavior,
    pub start_date: Timestamp,
    #[serde(deserialize_with = "nullable")]
    pub transfer_data: Option<SubscriptionTransferData>,
    #[serde(deserialize_with = "nullable")]
    pub trial_end: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PhaseAddInvoiceItem {
    pub price: Expandable<PriceOrDeleted>,
    #[serde(deserialize_with = "nullable")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_rates: MaybeNull<Vec<TaxRate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PhaseItem {
    #[serde(deserialize_with = "nullable")]
    pub billing_thresholds: Option<ItemBillingThresholds>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub plan: Expandable<PlanOrDeleted>,
    pub price: Expandable<PriceOrDeleted>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_rates: MaybeNull<Vec<TaxRate>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phase(start: i64, end: i64) -> serde_json::Value {
        json!({
            "add_invoice_items": [],
            "application_fee_percent": null,
            "billing_cycle_anchor": null,
            "billing_thresholds": null,
            "collection_method": null,
            "coupon": null,
            "currency": "usd",
            "default_payment_method": null,
            "end_date": end,
            "invoice_settings": null,
            "items": [{"billing_thresholds": null, "plan": "price_1", "price": "price_1", "quantity": 1}],
            "metadata": {},
            "on_behalf_of": null,
            "proration_behavior": "create_prorations",
            "start_date": start,
            "transfer_data": null,
            "trial_end": null
        })
    }

    #[test]
    fn test_schedule_phase_lookup() {
        let schedule: SubscriptionSchedule = serde_json::from_value(json!({
            "id": "sub_sched_1",
            "object": "subscription_schedule",
            "application": null,
            "canceled_at": null,
            "completed_at": null,
            "created": 1000,
            "current_phase": {"end_date": 2000, "start_date": 1000},
            "customer": "cus_1",
            "default_settings": {
                "application_fee_percent": null,
                "billing_cycle_anchor": "automatic",
                "billing_thresholds": null,
                "collection_method": "charge_automatically",
                "default_payment_method": null,
                "invoice_settings": null,
                "on_behalf_of": null,
                "transfer_data": null
            },
            "end_behavior": "release",
            "livemode": false,
            "metadata": {},
            "phases": [phase(1000, 2000), phase(2000, 3000)],
            "released_at": null,
            "released_subscription": null,
            "status": "active",
            "subscription": "sub_1",
            "test_clock": null
        }))
        .unwrap();
        assert_eq!(schedule.phase_at(2500).map(|p| p.start_date), Some(2000));
        assert!(schedule.phase_at(3000).is_none());
        assert_eq!(schedule.phases[0].items[0].price.id(), "price_1");
    }

    #[test]
    fn test_pause_collection_behavior() {
        let pause: PauseCollection =
            serde_json::from_value(json!({"behavior": "void", "resumes_at": null})).unwrap();
        assert_eq!(pause.behavior, PauseBehavior::Void);
        assert!(serde_json::from_value::<PauseCollection>(json!({"behavior": "stop", "resumes_at": null})).is_err());
    }
}
