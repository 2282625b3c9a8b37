use crate::account::AccountOrDeleted;
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::BankAccountId;
use crate::object::{DeletedFlag, Metadata, Tag};
use crate::presence::MaybeNull;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BankAccount {
    pub id: BankAccountId,
    pub object: Tag<BankAccount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account: MaybeNull<Expandable<AccountOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_holder_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_holder_type: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_type: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub available_payout_methods: MaybeNull<Vec<PayoutMethod>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub bank_name: MaybeNull<String>,
    pub country: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_for_currency: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    pub last4: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub routing_number: MaybeNull<String>,
    pub status: BankAccountStatus,
}

crate::impl_object!(BankAccount, "bank_account", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedBankAccount {
    pub id: BankAccountId,
    pub object: Tag<BankAccount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedBankAccount, "bank_account", deleted);

literal_enum! {
    pub enum BankAccountStatus {
        Errored = "errored",
        New = "new",
        Validated = "validated",
        VerificationFailed = "verification_failed",
        Verified = "verified",
    }
}

literal_enum! {
    /// Payout speeds a destination supports.
    pub enum PayoutMethod {
        Instant = "instant",
        Standard = "standard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bank_account_with_expanded_customer_id() {
        let bank: BankAccount = serde_json::from_value(json!({
            "id": "ba_1",
            "object": "bank_account",
            "account_holder_name": "Jane Austen",
            "account_holder_type": "individual",
            "account_type": null,
            "bank_name": "STRIPE TEST BANK",
            "country": "US",
            "currency": "usd",
            "customer": "cus_1",
            "fingerprint": "1JWtPxqbdX5Gamtc",
            "last4": "6789",
            "metadata": {},
            "routing_number": "110000000",
            "status": "new"
        }))
        .unwrap();
        assert_eq!(bank.status, BankAccountStatus::New);
        assert!(bank.account.is_absent());
        let customer = bank.customer.as_option().unwrap();
        assert_eq!(customer.id(), "cus_1");
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("closed".parse::<BankAccountStatus>().is_err());
    }
}
