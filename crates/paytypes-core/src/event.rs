//! Events: notifications that something changed on an account.

use crate::account::{Account, DeletedAccount, DeletedPerson, Person};
use crate::balance::Balance;
use crate::bank_account::{BankAccount, DeletedBankAccount};
use crate::card::{Card, DeletedCard};
use crate::charge::{Charge, Review};
use crate::checkout::CheckoutSession;
use crate::coupon::{Coupon, DeletedCoupon};
use crate::credit_note::CreditNote;
use crate::customer::{CashBalance, Customer, CustomerBalanceTransaction, DeletedCustomer};
use crate::discount::{DeletedDiscount, Discount, PromotionCode};
use crate::dispute::Dispute;
use crate::file::File;
use crate::ids::EventId;
use crate::invoice::{DeletedInvoice, DeletedInvoiceItem, Invoice, InvoiceItem};
use crate::issuing::{
    IssuingAuthorization, IssuingCard, IssuingCardholder, IssuingDispute, IssuingTransaction,
};
use crate::mandate::Mandate;
use crate::object::{Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::payment_method::PaymentMethod;
use crate::payout::Payout;
use crate::presence::{MaybeNull, nullable, present};
use crate::price::{DeletedPlan, DeletedPrice, DeletedProduct, Plan, Price, Product};
use crate::refund::Refund;
use crate::setup_intent::SetupIntent;
use crate::source::Source;
use crate::subscription::{Subscription, SubscriptionSchedule};
use crate::tax::{DeletedTaxId, TaxId, TaxRate};
use crate::transfer::{ApplicationFee, FeeRefund, Transfer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub id: EventId,
    pub object: Tag<Event>,
    /// The connected account that originated the event.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub api_version: MaybeNull<String>,
    pub created: Timestamp,
    pub data: EventData,
    pub livemode: bool,
    pub pending_webhooks: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub request: MaybeNull<EventRequest>,
    #[serde(rename = "type")]
    pub type_: EventType,
}

crate::impl_object!(Event, "event", id);

impl Event {
    pub fn object(&self) -> &EventObject {
        &self.data.object
    }

    /// Whether the event was caused by an API request rather than by the
    /// platform itself.
    pub fn from_api_request(&self) -> bool {
        self.request.as_option().is_some_and(|r| r.id.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EventData {
    pub object: EventObject,
    /// Prior values of the attributes that changed, for `*.updated` events.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub previous_attributes: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EventRequest {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub idempotency_key: Option<String>,
}

literal_enum! {
    pub enum EventType {
        AccountApplicationAuthorized = "account.application.authorized",
        AccountApplicationDeauthorized = "account.application.deauthorized",
        AccountExternalAccountCreated = "account.external_account.created",
        AccountExternalAccountDeleted = "account.external_account.deleted",
        AccountExternalAccountUpdated = "account.external_account.updated",
        AccountUpdated = "account.updated",
        ApplicationFeeCreated = "application_fee.created",
        ApplicationFeeRefundUpdated = "application_fee.refund.updated",
        ApplicationFeeRefunded = "application_fee.refunded",
        BalanceAvailable = "balance.available",
        CashBalanceFundsAvailable = "cash_balance.funds_available",
        ChargeCaptured = "charge.captured",
        ChargeDisputeClosed = "charge.dispute.closed",
        ChargeDisputeCreated = "charge.dispute.created",
        ChargeDisputeFundsReinstated = "charge.dispute.funds_reinstated",
        ChargeDisputeFundsWithdrawn = "charge.dispute.funds_withdrawn",
        ChargeDisputeUpdated = "charge.dispute.updated",
        ChargeExpired = "charge.expired",
        ChargeFailed = "charge.failed",
        ChargePending = "charge.pending",
        ChargeRefundUpdated = "charge.refund.updated",
        ChargeRefunded = "charge.refunded",
        ChargeSucceeded = "charge.succeeded",
        ChargeUpdated = "charge.updated",
        CheckoutSessionAsyncPaymentFailed = "checkout.session.async_payment_failed",
        CheckoutSessionAsyncPaymentSucceeded = "checkout.session.async_payment_succeeded",
        CheckoutSessionCompleted = "checkout.session.completed",
        CheckoutSessionExpired = "checkout.session.expired",
        CouponCreated = "coupon.created",
        CouponDeleted = "coupon.deleted",
        CouponUpdated = "coupon.updated",
        CreditNoteCreated = "credit_note.created",
        CreditNoteUpdated = "credit_note.updated",
        CreditNoteVoided = "credit_note.voided",
        CustomerCreated = "customer.created",
        CustomerDeleted = "customer.deleted",
        CustomerDiscountCreated = "customer.discount.created",
        CustomerDiscountDeleted = "customer.discount.deleted",
        CustomerDiscountUpdated = "customer.discount.updated",
        CustomerSourceCreated = "customer.source.created",
        CustomerSourceDeleted = "customer.source.deleted",
        CustomerSourceExpiring = "customer.source.expiring",
        CustomerSourceUpdated = "customer.source.updated",
        CustomerSubscriptionCreated = "customer.subscription.created",
        CustomerSubscriptionDeleted = "customer.subscription.deleted",
        CustomerSubscriptionPaused = "customer.subscription.paused",
        CustomerSubscriptionPendingUpdateApplied = "customer.subscription.pending_update_applied",
        CustomerSubscriptionPendingUpdateExpired = "customer.subscription.pending_update_expired",
        CustomerSubscriptionResumed = "customer.subscription.resumed",
        CustomerSubscriptionTrialWillEnd = "customer.subscription.trial_will_end",
        CustomerSubscriptionUpdated = "customer.subscription.updated",
        CustomerTaxIdCreated = "customer.tax_id.created",
        CustomerTaxIdDeleted = "customer.tax_id.deleted",
        CustomerTaxIdUpdated = "customer.tax_id.updated",
        CustomerUpdated = "customer.updated",
        CustomerCashBalanceTransactionCreated = "customer_cash_balance_transaction.created",
        FileCreated = "file.created",
        InvoiceCreated = "invoice.created",
        InvoiceDeleted = "invoice.deleted",
        InvoiceFinalizationFailed = "invoice.finalization_failed",
        InvoiceFinalized = "invoice.finalized",
        InvoiceMarkedUncollectible = "invoice.marked_uncollectible",
        InvoicePaid = "invoice.paid",
        InvoicePaymentActionRequired = "invoice.payment_action_required",
        InvoicePaymentFailed = "invoice.payment_failed",
        InvoicePaymentSucceeded = "invoice.payment_succeeded",
        InvoiceSent = "invoice.sent",
        InvoiceUpcoming = "invoice.upcoming",
        InvoiceUpdated = "invoice.updated",
        InvoiceVoided = "invoice.voided",
        InvoiceitemCreated = "invoiceitem.created",
        InvoiceitemDeleted = "invoiceitem.deleted",
        InvoiceitemUpdated = "invoiceitem.updated",
        IssuingAuthorizationCreated = "issuing_authorization.created",
        IssuingAuthorizationRequest = "issuing_authorization.request",
        IssuingAuthorizationUpdated = "issuing_authorization.updated",
        IssuingCardCreated = "issuing_card.created",
        IssuingCardUpdated = "issuing_card.updated",
        IssuingCardholderCreated = "issuing_cardholder.created",
        IssuingCardholderUpdated = "issuing_cardholder.updated",
        IssuingDisputeClosed = "issuing_dispute.closed",
        IssuingDisputeCreated = "issuing_dispute.created",
        IssuingDisputeFundsReinstated = "issuing_dispute.funds_reinstated",
        IssuingDisputeSubmitted = "issuing_dispute.submitted",
        IssuingDisputeUpdated = "issuing_dispute.updated",
        IssuingTransactionCreated = "issuing_transaction.created",
        IssuingTransactionUpdated = "issuing_transaction.updated",
        MandateUpdated = "mandate.updated",
        PaymentIntentAmountCapturableUpdated = "payment_intent.amount_capturable_updated",
        PaymentIntentCanceled = "payment_intent.canceled",
        PaymentIntentCreated = "payment_intent.created",
        PaymentIntentPartiallyFunded = "payment_intent.partially_funded",
        PaymentIntentPaymentFailed = "payment_intent.payment_failed",
        PaymentIntentProcessing = "payment_intent.processing",
        PaymentIntentRequiresAction = "payment_intent.requires_action",
        PaymentIntentSucceeded = "payment_intent.succeeded",
        PaymentMethodAttached = "payment_method.attached",
        PaymentMethodAutomaticallyUpdated = "payment_method.automatically_updated",
        PaymentMethodDetached = "payment_method.detached",
        PaymentMethodUpdated = "payment_method.updated",
        PayoutCanceled = "payout.canceled",
        PayoutCreated = "payout.created",
        PayoutFailed = "payout.failed",
        PayoutPaid = "payout.paid",
        PayoutUpdated = "payout.updated",
        PersonCreated = "person.created",
        PersonDeleted = "person.deleted",
        PersonUpdated = "person.updated",
        PlanCreated = "plan.created",
        PlanDeleted = "plan.deleted",
        PlanUpdated = "plan.updated",
        PriceCreated = "price.created",
        PriceDeleted = "price.deleted",
        PriceUpdated = "price.updated",
        ProductCreated = "product.created",
        ProductDeleted = "product.deleted",
        ProductUpdated = "product.updated",
        PromotionCodeCreated = "promotion_code.created",
        PromotionCodeUpdated = "promotion_code.updated",
        ReviewClosed = "review.closed",
        ReviewOpened = "review.opened",
        SetupIntentCanceled = "setup_intent.canceled",
        SetupIntentCreated = "setup_intent.created",
        SetupIntentRequiresAction = "setup_intent.requires_action",
        SetupIntentSetupFailed = "setup_intent.setup_failed",
        SetupIntentSucceeded = "setup_intent.succeeded",
        SourceCanceled = "source.canceled",
        SourceChargeable = "source.chargeable",
        SourceFailed = "source.failed",
        SourceMandateNotification = "source.mandate_notification",
        SourceRefundAttributesRequired = "source.refund_attributes_required",
        SubscriptionScheduleAborted = "subscription_schedule.aborted",
        SubscriptionScheduleCanceled = "subscription_schedule.canceled",
        SubscriptionScheduleCompleted = "subscription_schedule.completed",
        SubscriptionScheduleCreated = "subscription_schedule.created",
        SubscriptionScheduleExpiring = "subscription_schedule.expiring",
        SubscriptionScheduleReleased = "subscription_schedule.released",
        SubscriptionScheduleUpdated = "subscription_schedule.updated",
        TaxRateCreated = "tax_rate.created",
        TaxRateUpdated = "tax_rate.updated",
        TransferCreated = "transfer.created",
        TransferReversed = "transfer.reversed",
        TransferUpdated = "transfer.updated",
    }
}

impl EventType {
    /// The resource segment of the literal: `customer` for
    /// `customer.subscription.updated`.
    pub fn resource(&self) -> &'static str {
        let literal = self.as_str();
        literal.split('.').next().unwrap_or(literal)
    }
}

crate::object_union! {
    #![without_id]
    /// Every object an event can carry in `data.object`.
    pub enum EventObject {
        Account(Account),
        DeletedAccount(DeletedAccount),
        ApplicationFee(ApplicationFee),
        Balance(Balance),
        BankAccount(BankAccount),
        DeletedBankAccount(DeletedBankAccount),
        Card(Card),
        DeletedCard(DeletedCard),
        CashBalance(CashBalance),
        Charge(Charge),
        CheckoutSession(CheckoutSession),
        Coupon(Coupon),
        DeletedCoupon(DeletedCoupon),
        CreditNote(CreditNote),
        Customer(Customer),
        DeletedCustomer(DeletedCustomer),
        CustomerBalanceTransaction(CustomerBalanceTransaction),
        Discount(Discount),
        DeletedDiscount(DeletedDiscount),
        Dispute(Dispute),
        FeeRefund(FeeRefund),
        File(File),
        Invoice(Invoice),
        DeletedInvoice(DeletedInvoice),
        InvoiceItem(InvoiceItem),
        DeletedInvoiceItem(DeletedInvoiceItem),
        IssuingAuthorization(IssuingAuthorization),
        IssuingCard(IssuingCard),
        IssuingCardholder(IssuingCardholder),
        IssuingDispute(IssuingDispute),
        IssuingTransaction(IssuingTransaction),
        Mandate(Mandate),
        PaymentIntent(PaymentIntent),
        PaymentMethod(PaymentMethod),
        Payout(Payout),
        Person(Person),
        DeletedPerson(DeletedPerson),
        Plan(Plan),
        DeletedPlan(DeletedPlan),
        Price(Price),
        DeletedPrice(DeletedPrice),
        Product(Product),
        DeletedProduct(DeletedProduct),
        PromotionCode(PromotionCode),
        Refund(Refund),
        Review(Review),
        SetupIntent(SetupIntent),
        Source(Source),
        Subscription(Subscription),
        SubscriptionSchedule(SubscriptionSchedule),
        TaxId(TaxId),
        DeletedTaxId(DeletedTaxId),
        TaxRate(TaxRate),
        Transfer(Transfer),
    }
}
