//! Account balance and the ledger entries that move it.

use crate::charge::Charge;
use crate::dispute::Dispute;
use crate::expandable::Expandable;
use crate::ids::BalanceTransactionId;
use crate::issuing::{IssuingAuthorization, IssuingDispute, IssuingTransaction};
use crate::object::{Tag, Timestamp};
use crate::payout::Payout;
use crate::presence::{MaybeNull, nullable, present};
use crate::refund::Refund;
use crate::transfer::{ApplicationFee, FeeRefund, Transfer, TransferReversal};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Balance {
    pub object: Tag<Balance>,
    pub available: Vec<BalanceAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub connect_reserved: Option<Vec<BalanceAmount>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub instant_available: Option<Vec<BalanceAmount>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub issuing: Option<BalanceIssuing>,
    pub livemode: bool,
    pub pending: Vec<BalanceAmount>,
}

crate::impl_object!(Balance, "balance");

impl Balance {
    /// Available funds in `currency`, summed across source types. `None`
    /// if the sum overflows.
    pub fn available_in(&self, currency: &str) -> Option<i64> {
        self.available
            .iter()
            .filter(|a| a.currency.eq_ignore_ascii_case(currency))
            .try_fold(0i64, |total, a| total.checked_add(a.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceAmount {
    pub amount: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub source_types: Option<BalanceSourceTypes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceSourceTypes {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bank_account: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fpx: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceIssuing {
    pub available: Vec<BalanceAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceTransaction {
    pub id: BalanceTransactionId,
    pub object: Tag<BalanceTransaction>,
    pub amount: i64,
    pub available_on: Timestamp,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub exchange_rate: MaybeNull<f64>,
    pub fee: i64,
    pub fee_details: Vec<Fee>,
    pub net: i64,
    pub reporting_category: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source: MaybeNull<Expandable<BalanceTransactionSource>>,
    pub status: BalanceTransactionStatus,
    #[serde(rename = "type")]
    pub type_: BalanceTransactionType,
}

crate::impl_object!(BalanceTransaction, "balance_transaction", id);

/// One fee line of a balance transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Fee {
    pub amount: i64,
    #[serde(deserialize_with = "nullable")]
    pub application: Option<String>,
    pub currency: String,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
}

literal_enum! {
    pub enum BalanceTransactionStatus {
        Available = "available",
        Pending = "pending",
    }
}

literal_enum! {
    pub enum BalanceTransactionType {
        Adjustment = "adjustment",
        Advance = "advance",
        AdvanceFunding = "advance_funding",
        AnticipationRepayment = "anticipation_repayment",
        ApplicationFee = "application_fee",
        ApplicationFeeRefund = "application_fee_refund",
        Charge = "charge",
        ConnectCollectionTransfer = "connect_collection_transfer",
        Contribution = "contribution",
        IssuingAuthorizationHold = "issuing_authorization_hold",
        IssuingAuthorizationRelease = "issuing_authorization_release",
        IssuingDispute = "issuing_dispute",
        IssuingTransaction = "issuing_transaction",
        Payment = "payment",
        PaymentFailureRefund = "payment_failure_refund",
        PaymentRefund = "payment_refund",
        Payout = "payout",
        PayoutCancel = "payout_cancel",
        PayoutFailure = "payout_failure",
        Refund = "refund",
        RefundFailure = "refund_failure",
        ReserveTransaction = "reserve_transaction",
        ReservedFunds = "reserved_funds",
        StripeFee = "stripe_fee",
        StripeFxFee = "stripe_fx_fee",
        TaxFee = "tax_fee",
        Topup = "topup",
        TopupReversal = "topup_reversal",
        Transfer = "transfer",
        TransferCancel = "transfer_cancel",
        TransferFailure = "transfer_failure",
        TransferRefund = "transfer_refund",
    }
}

crate::object_union! {
    /// The object that caused a balance transaction.
    pub enum BalanceTransactionSource {
        ApplicationFee(ApplicationFee),
        Charge(Charge),
        Dispute(Dispute),
        FeeRefund(FeeRefund),
        IssuingAuthorization(IssuingAuthorization),
        IssuingDispute(IssuingDispute),
        IssuingTransaction(IssuingTransaction),
        Payout(Payout),
        Refund(Refund),
        Transfer(Transfer),
        TransferReversal(TransferReversal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_balance_available_in() {
        let balance: Balance = serde_json::from_value(json!({
            "object": "balance",
            "available": [
                {"amount": 1200, "currency": "usd", "source_types": {"card": 1200}},
                {"amount": 300, "currency": "eur"}
            ],
            "livemode": false,
            "pending": []
        }))
        .unwrap();
        assert_eq!(balance.available_in("USD"), Some(1200));
        assert_eq!(balance.available_in("gbp"), Some(0));
    }

    #[test]
    fn test_balance_available_in_overflow() {
        let balance: Balance = serde_json::from_value(json!({
            "object": "balance",
            "available": [
                {"amount": i64::MAX, "currency": "usd"},
                {"amount": 1, "currency": "usd"}
            ],
            "livemode": false,
            "pending": []
        }))
        .unwrap();
        assert_eq!(balance.available_in("usd"), None);
    }

    #[test]
    fn test_transaction_with_source_id() {
        let payload = json!({
            "id": "txn_1",
            "object": "balance_transaction",
            "amount": 1000,
            "available_on": 1700100000,
            "created": 1700000000,
            "currency": "usd",
            "description": null,
            "exchange_rate": null,
            "fee": 59,
            "fee_details": [{
                "amount": 59, "application": null, "currency": "usd",
                "description": "Stripe processing fees", "type": "stripe_fee"
            }],
            "net": 941,
            "reporting_category": "charge",
            "source": "ch_1",
            "status": "pending",
            "type": "charge"
        });
        let txn: BalanceTransaction = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(txn.type_, BalanceTransactionType::Charge);
        assert_eq!(txn.source.as_option().unwrap().id(), "ch_1");
        assert_eq!(serde_json::to_value(&txn).unwrap(), payload);
    }
}
