//! Strongly-typed identifiers for API objects.
//!
//! Identifiers are opaque strings owned by the API. The prefix is only a
//! hint: some objects (coupons, prices, products) accept caller-chosen ids.

use crate::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:expr) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id carries the usual `<prefix>_` lead-in.
            pub fn has_expected_prefix(&self) -> bool {
                self.0
                    .strip_prefix(Self::PREFIX)
                    .is_some_and(|rest| rest.starts_with('_'))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(Error::InvalidId(format!(
                        "empty {} identifier",
                        stringify!($name)
                    )));
                }
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(AccountId, "acct");
define_id!(ApplicationFeeId, "fee");
define_id!(BalanceTransactionId, "txn");
define_id!(BankAccountId, "ba");
define_id!(CardId, "card");
define_id!(ChargeId, "ch");
define_id!(CheckoutSessionId, "cs");
define_id!(CouponId, "co");
define_id!(CreditNoteId, "cn");
define_id!(CreditNoteLineItemId, "cnli");
define_id!(CustomerId, "cus");
define_id!(CustomerBalanceTransactionId, "cbtxn");
define_id!(DiscountId, "di");
define_id!(DisputeId, "dp");
define_id!(EventId, "evt");
define_id!(FeeRefundId, "fr");
define_id!(FileId, "file");
define_id!(FileLinkId, "link");
define_id!(InvoiceId, "in");
define_id!(InvoiceItemId, "ii");
define_id!(InvoiceLineItemId, "il");
define_id!(IssuingAuthorizationId, "iauth");
define_id!(IssuingCardId, "ic");
define_id!(IssuingCardholderId, "ich");
define_id!(IssuingDisputeId, "idp");
define_id!(IssuingTransactionId, "ipi");
define_id!(LineItemId, "li");
define_id!(MandateId, "mandate");
define_id!(PaymentIntentId, "pi");
define_id!(PaymentMethodId, "pm");
define_id!(PayoutId, "po");
define_id!(PersonId, "person");
define_id!(PlanId, "plan");
define_id!(PriceId, "price");
define_id!(ProductId, "prod");
define_id!(PromotionCodeId, "promo");
define_id!(RefundId, "re");
define_id!(ReviewId, "prv");
define_id!(SetupAttemptId, "setatt");
define_id!(SetupIntentId, "seti");
define_id!(SourceId, "src");
define_id!(SubscriptionId, "sub");
define_id!(SubscriptionItemId, "si");
define_id!(SubscriptionScheduleId, "sub_sched");
define_id!(TaxCodeId, "txcd");
define_id!(TaxIdId, "txi");
define_id!(TaxRateId, "txr");
define_id!(TransferId, "tr");
define_id!(TransferReversalId, "trr");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::new("cus_123");
        assert_eq!(id.to_string(), "cus_123");
        assert!(id.has_expected_prefix());
    }

    #[test]
    fn test_custom_id_without_prefix() {
        let id = CouponId::new("SUMMER25");
        assert!(!id.has_expected_prefix());
        assert_eq!(id.as_str(), "SUMMER25");
    }

    #[test]
    fn test_prefix_needs_separator() {
        assert!(!PriceId::new("pricey").has_expected_prefix());
        assert!(SubscriptionScheduleId::new("sub_sched_1").has_expected_prefix());
    }

    #[test]
    fn test_id_parse() {
        let parsed: ChargeId = "ch_1".parse().unwrap();
        assert_eq!(parsed, ChargeId::from("ch_1"));
        assert!("  ".parse::<ChargeId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&InvoiceId::new("in_42")).unwrap();
        assert_eq!(json, "\"in_42\"");
    }
}
