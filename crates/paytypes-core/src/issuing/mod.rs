//! Issuing: cards created on the platform and the activity on them.

mod authorization;
mod card;
mod cardholder;
mod dispute;
mod merchant_category;
mod transaction;

pub use authorization::*;
pub use card::*;
pub use cardholder::*;
pub use dispute::*;
pub use merchant_category::MerchantCategory;
pub use transaction::*;

use crate::presence::nullable;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cap on spend over an interval, optionally limited to some categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpendingLimit {
    pub amount: i64,
    #[serde(deserialize_with = "nullable")]
    pub categories: Option<Vec<MerchantCategory>>,
    pub interval: SpendingLimitInterval,
}

impl SpendingLimit {
    /// Whether this limit covers purchases in `category`.
    pub fn applies_to(&self, category: MerchantCategory) -> bool {
        self.categories
            .as_ref()
            .is_none_or(|categories| categories.contains(&category))
    }
}

literal_enum! {
    pub enum SpendingLimitInterval {
        AllTime = "all_time",
        Daily = "daily",
        Monthly = "monthly",
        PerAuthorization = "per_authorization",
        Weekly = "weekly",
        Yearly = "yearly",
    }
}

/// Category allow/block lists and limits shared by cards and cardholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpendingControls {
    #[serde(deserialize_with = "nullable")]
    pub allowed_categories: Option<Vec<MerchantCategory>>,
    #[serde(deserialize_with = "nullable")]
    pub blocked_categories: Option<Vec<MerchantCategory>>,
    #[serde(deserialize_with = "nullable")]
    pub spending_limits: Option<Vec<SpendingLimit>>,
    #[serde(deserialize_with = "nullable")]
    pub spending_limits_currency: Option<String>,
}

impl SpendingControls {
    /// Whether the allow/block lists admit `category`. Blocking wins.
    pub fn permits(&self, category: MerchantCategory) -> bool {
        if self
            .blocked_categories
            .as_ref()
            .is_some_and(|blocked| blocked.contains(&category))
        {
            return false;
        }
        self.allowed_categories
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&category))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MerchantData {
    pub category: MerchantCategory,
    pub category_code: String,
    #[serde(deserialize_with = "nullable")]
    pub city: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    pub network_id: String,
    #[serde(deserialize_with = "nullable")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingAmountDetails {
    #[serde(deserialize_with = "nullable")]
    pub atm_fee: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blocked_category_wins() {
        let controls: SpendingControls = serde_json::from_value(json!({
            "allowed_categories": ["bakeries", "florists"],
            "blocked_categories": ["florists"],
            "spending_limits": [],
            "spending_limits_currency": null
        }))
        .unwrap();
        assert!(controls.permits(MerchantCategory::Bakeries));
        assert!(!controls.permits(MerchantCategory::Florists));
        assert!(!controls.permits(MerchantCategory::Doctors));
    }

    #[test]
    fn test_spending_limit_scope() {
        let limit: SpendingLimit = serde_json::from_value(json!({
            "amount": 50000,
            "categories": null,
            "interval": "monthly"
        }))
        .unwrap();
        assert!(limit.applies_to(MerchantCategory::CarWashes));
        assert_eq!(limit.interval, SpendingLimitInterval::Monthly);
    }
}
