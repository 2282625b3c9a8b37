//! Coupons: reusable discount definitions.

use crate::ids::CouponId;
use crate::object::{DeletedFlag, Metadata, Timestamp, Tag};
use crate::presence::{MaybeNull, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coupon {
    pub id: CouponId,
    pub object: Tag<Coupon>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_off: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub applies_to: Option<CouponAppliesTo>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub currency_options: Option<HashMap<String, CouponCurrencyOption>>,
    pub duration: CouponDuration,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub duration_in_months: MaybeNull<i64>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub max_redemptions: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub percent_off: MaybeNull<f64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub redeem_by: MaybeNull<Timestamp>,
    pub times_redeemed: i64,
    pub valid: bool,
}

crate::impl_object!(Coupon, "coupon", id);

impl Coupon {
    /// Whether the coupon takes a fixed amount rather than a percentage off.
    pub fn is_amount_off(&self) -> bool {
        self.amount_off.is_value()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedCoupon {
    pub id: CouponId,
    pub object: Tag<Coupon>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedCoupon, "coupon", deleted);

crate::object_union! {
    pub enum CouponOrDeleted {
        Coupon(Coupon),
        Deleted(DeletedCoupon),
    }
}

literal_enum! {
    pub enum CouponDuration {
        Forever = "forever",
        Once = "once",
        Repeating = "repeating",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CouponAppliesTo {
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CouponCurrencyOption {
    pub amount_off: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn once_coupon() -> serde_json::Value {
        json!({
            "id": "c1",
            "object": "coupon",
            "created": 1700000000,
            "duration": "once",
            "livemode": false,
            "times_redeemed": 0,
            "valid": true
        })
    }

    #[test]
    fn test_minimal_coupon() {
        let coupon: Coupon = serde_json::from_value(once_coupon()).unwrap();
        assert_eq!(coupon.duration, CouponDuration::Once);
        assert!(!coupon.is_amount_off());
        assert_eq!(serde_json::to_value(&coupon).unwrap(), once_coupon());
    }

    #[rstest]
    #[case("forever")]
    #[case("once")]
    #[case("repeating")]
    fn test_duration_literals_accepted(#[case] duration: &str) {
        let mut payload = once_coupon();
        payload["duration"] = json!(duration);
        let coupon: Coupon = serde_json::from_value(payload).unwrap();
        assert_eq!(coupon.duration.as_str(), duration);
    }

    #[test]
    fn test_weekly_duration_rejected() {
        let mut payload = once_coupon();
        payload["duration"] = json!("weekly");
        let err = serde_json::from_value::<Coupon>(payload).unwrap_err();
        assert!(err.to_string().contains("unknown variant `weekly`"));
    }

    #[test]
    fn test_deleted_coupon_union() {
        let deleted: CouponOrDeleted =
            serde_json::from_value(json!({"id": "c1", "object": "coupon", "deleted": true}))
                .unwrap();
        assert!(deleted.is_deleted());
        let live: CouponOrDeleted = serde_json::from_value(once_coupon()).unwrap();
        assert_eq!(live.object(), "coupon");
    }
}
