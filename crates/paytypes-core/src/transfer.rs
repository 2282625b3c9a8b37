//! Connect money movement: transfers, their reversals, and application fees.

use crate::account::Account;
use crate::balance::BalanceTransaction;
use crate::charge::Charge;
use crate::expandable::Expandable;
use crate::ids::{ApplicationFeeId, FeeRefundId, TransferId, TransferReversalId};
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, present};
use crate::refund::Refund;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transfer {
    pub id: TransferId,
    pub object: Tag<Transfer>,
    pub amount: i64,
    pub amount_reversed: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub destination: MaybeNull<Expandable<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub destination_payment: Option<Expandable<Charge>>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub reversals: List<TransferReversal>,
    pub reversed: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source_transaction: MaybeNull<Expandable<Charge>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_group: MaybeNull<String>,
}

crate::impl_object!(Transfer, "transfer", id);

impl Transfer {
    /// Amount still held by the destination account.
    pub fn net_amount(&self) -> i64 {
        self.amount - self.amount_reversed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransferReversal {
    pub id: TransferReversalId,
    pub object: Tag<TransferReversal>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub destination_payment_refund: MaybeNull<Expandable<Refund>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source_refund: MaybeNull<Expandable<Refund>>,
    pub transfer: Expandable<Transfer>,
}

crate::impl_object!(TransferReversal, "transfer_reversal", id);

/// The Connect application that collected a fee or created a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Application {
    pub id: String,
    pub object: Tag<Application>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
}

crate::impl_object!(Application, "application", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationFee {
    pub id: ApplicationFeeId,
    pub object: Tag<ApplicationFee>,
    pub account: Expandable<Account>,
    pub amount: i64,
    pub amount_refunded: i64,
    pub application: Expandable<Application>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub charge: Expandable<Charge>,
    pub created: Timestamp,
    pub currency: String,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub originating_transaction: MaybeNull<Expandable<Charge>>,
    pub refunded: bool,
    pub refunds: List<FeeRefund>,
}

crate::impl_object!(ApplicationFee, "application_fee", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeeRefund {
    pub id: FeeRefundId,
    pub object: Tag<FeeRefund>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    pub fee: Expandable<ApplicationFee>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
}

crate::impl_object!(FeeRefund, "fee_refund", id);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transfer_with_reversals() {
        let transfer: Transfer = serde_json::from_value(json!({
            "id": "tr_1",
            "object": "transfer",
            "amount": 1000,
            "amount_reversed": 250,
            "balance_transaction": "txn_1",
            "created": 1680000000,
            "currency": "usd",
            "description": null,
            "destination": "acct_1",
            "livemode": false,
            "metadata": {},
            "reversals": {
                "object": "list",
                "data": [{
                    "id": "trr_1",
                    "object": "transfer_reversal",
                    "amount": 250,
                    "balance_transaction": null,
                    "created": 1680000100,
                    "currency": "usd",
                    "destination_payment_refund": null,
                    "metadata": null,
                    "source_refund": null,
                    "transfer": "tr_1"
                }],
                "has_more": false,
                "url": "/v1/transfers/tr_1/reversals"
            },
            "reversed": false,
            "source_transaction": null,
            "transfer_group": null
        }))
        .unwrap();
        assert_eq!(transfer.net_amount(), 750);
        assert_eq!(transfer.reversals.len(), 1);
        assert_eq!(transfer.reversals.data[0].transfer.id(), "tr_1");
        assert!(transfer.destination_payment.is_none());
    }

    #[test]
    fn test_fee_refund_wrong_object() {
        let err = serde_json::from_value::<FeeRefund>(json!({
            "id": "fr_1",
            "object": "refund",
            "amount": 10,
            "balance_transaction": null,
            "created": 1,
            "currency": "usd",
            "fee": "fee_1",
            "metadata": null
        }))
        .unwrap_err();
        assert!(err.to_string().contains("fee_refund"));
    }
}
