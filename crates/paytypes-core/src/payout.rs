//! Payouts from a balance to an external account.

use crate::balance::BalanceTransaction;
use crate::bank_account::{BankAccount, DeletedBankAccount, PayoutMethod};
use crate::card::{Card, DeletedCard};
use crate::expandable::Expandable;
use crate::ids::PayoutId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::MaybeNull;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Payout {
    pub id: PayoutId,
    pub object: Tag<Payout>,
    pub amount: i64,
    pub arrival_date: Timestamp,
    pub automatic: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub destination: MaybeNull<Expandable<PayoutDestination>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_message: MaybeNull<String>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub method: PayoutMethod,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub original_payout: MaybeNull<Expandable<Payout>>,
    pub reconciliation_status: PayoutReconciliationStatus,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub reversed_by: MaybeNull<Expandable<Payout>>,
    pub source_type: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    pub status: PayoutStatus,
    #[serde(rename = "type")]
    pub type_: PayoutType,
}

crate::impl_object!(Payout, "payout", id);

impl Payout {
    pub fn is_failed(&self) -> bool {
        self.status == PayoutStatus::Failed
    }
}

crate::object_union! {
    /// The external account a payout was sent to.
    pub enum PayoutDestination {
        BankAccount(BankAccount),
        Card(Card),
        DeletedBankAccount(DeletedBankAccount),
        DeletedCard(DeletedCard),
    }
}

literal_enum! {
    pub enum PayoutStatus {
        Canceled = "canceled",
        Failed = "failed",
        InTransit = "in_transit",
        Paid = "paid",
        Pending = "pending",
    }
}

literal_enum! {
    pub enum PayoutReconciliationStatus {
        Completed = "completed",
        InProgress = "in_progress",
        NotApplicable = "not_applicable",
    }
}

literal_enum! {
    pub enum PayoutType {
        BankAccount = "bank_account",
        Card = "card",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payout_with_deleted_destination() {
        let payout: Payout = serde_json::from_value(json!({
            "id": "po_1",
            "object": "payout",
            "amount": 1100,
            "arrival_date": 1680000000,
            "automatic": true,
            "balance_transaction": "txn_1",
            "created": 1679900000,
            "currency": "usd",
            "description": "STRIPE PAYOUT",
            "destination": {
                "id": "ba_1",
                "object": "bank_account",
                "deleted": true,
                "currency": "usd"
            },
            "failure_balance_transaction": null,
            "failure_code": null,
            "failure_message": null,
            "livemode": false,
            "metadata": {},
            "method": "standard",
            "original_payout": null,
            "reconciliation_status": "completed",
            "reversed_by": null,
            "source_type": "card",
            "statement_descriptor": null,
            "status": "paid",
            "type": "bank_account"
        }))
        .unwrap();
        let destination = payout.destination.as_option().and_then(Expandable::as_object).unwrap();
        assert!(destination.is_deleted());
        assert_eq!(destination.object(), "bank_account");
        assert!(!payout.is_failed());
    }
}
