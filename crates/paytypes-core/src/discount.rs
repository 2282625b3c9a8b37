//! Applied discounts and customer-facing promotion codes.

use crate::coupon::Coupon;
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::{DiscountId, PromotionCodeId};
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A coupon applied to a customer, subscription, invoice or line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Discount {
    pub id: DiscountId,
    pub object: Tag<Discount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub checkout_session: MaybeNull<String>,
    pub coupon: Coupon,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub end: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice_item: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub promotion_code: MaybeNull<Expandable<PromotionCode>>,
    pub start: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<String>,
}

crate::impl_object!(Discount, "discount", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedDiscount {
    pub id: DiscountId,
    pub object: Tag<Discount>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub checkout_session: MaybeNull<String>,
    pub coupon: Coupon,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    pub deleted: DeletedFlag,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice_item: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub promotion_code: MaybeNull<Expandable<PromotionCode>>,
    pub start: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub subscription: MaybeNull<String>,
}

crate::impl_object!(DeletedDiscount, "discount", deleted);

crate::object_union! {
    /// A discount reference whose expansion may be a deleted stub.
    pub enum DiscountOrDeleted {
        Discount(Discount),
        Deleted(DeletedDiscount),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PromotionCode {
    pub id: PromotionCodeId,
    pub object: Tag<PromotionCode>,
    pub active: bool,
    pub code: String,
    pub coupon: Coupon,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub expires_at: MaybeNull<Timestamp>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub max_redemptions: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub restrictions: PromotionCodeRestrictions,
    pub times_redeemed: i64,
}

crate::impl_object!(PromotionCode, "promotion_code", id);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PromotionCodeRestrictions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub currency_options: Option<HashMap<String, PromotionCodeCurrencyOption>>,
    pub first_time_transaction: bool,
    #[serde(deserialize_with = "nullable")]
    pub minimum_amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub minimum_amount_currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PromotionCodeCurrencyOption {
    pub minimum_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const DISCOUNT: &str = include_str!("../tests/fixtures/minimal/discount.json");
    const PROMOTION_CODE: &str = include_str!("../tests/fixtures/minimal/promotion_code.json");

    fn promotion_code() -> Value {
        serde_json::from_str(PROMOTION_CODE).unwrap()
    }

    #[test]
    fn test_discount_with_only_required_keys() {
        let payload: Value = serde_json::from_str(DISCOUNT).unwrap();
        let discount: Discount = serde_json::from_value(payload.clone()).unwrap();

        assert!(discount.customer.is_absent());
        assert!(discount.end.is_absent());
        assert!(discount.checkout_session.is_absent());
        assert_eq!(serde_json::to_value(&discount).unwrap(), payload);
    }

    #[test]
    fn test_discount_end_null_and_set() {
        let mut payload: Value = serde_json::from_str(DISCOUNT).unwrap();
        payload["end"] = json!(null);
        let discount: Discount = serde_json::from_value(payload.clone()).unwrap();
        assert!(discount.end.is_null());

        payload["end"] = json!(1700086400);
        let discount: Discount = serde_json::from_value(payload).unwrap();
        assert_eq!(discount.end, MaybeNull::Value(1700086400));
    }

    #[test]
    fn test_promotion_code_with_only_required_keys() {
        let code: PromotionCode = serde_json::from_value(promotion_code()).unwrap();

        assert!(code.customer.is_absent());
        assert!(code.expires_at.is_absent());
        assert!(code.max_redemptions.is_absent());
        assert!(code.metadata.is_absent());
        assert_eq!(code.restrictions.minimum_amount, None);
        assert_eq!(serde_json::to_value(&code).unwrap(), promotion_code());
    }

    #[test]
    fn test_restrictions_presence_rules() {
        let mut payload = promotion_code();
        payload["restrictions"]
            .as_object_mut()
            .unwrap()
            .remove("minimum_amount");
        let err = serde_json::from_value::<PromotionCode>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `minimum_amount`"));

        let mut payload = promotion_code();
        payload["restrictions"]["currency_options"] = json!(null);
        assert!(serde_json::from_value::<PromotionCode>(payload).is_err());

        let mut payload = promotion_code();
        payload["restrictions"]["currency_options"] = json!({"eur": {"minimum_amount": 500}});
        let code: PromotionCode = serde_json::from_value(payload).unwrap();
        let options = code.restrictions.currency_options.unwrap();
        assert_eq!(options["eur"].minimum_amount, 500);
    }

    #[test]
    fn test_discount_or_deleted_dispatch() {
        let mut payload: Value = serde_json::from_str(DISCOUNT).unwrap();
        let live: DiscountOrDeleted = serde_json::from_value(payload.clone()).unwrap();
        assert!(matches!(live, DiscountOrDeleted::Discount(_)));

        payload["deleted"] = json!(true);
        let stub: DiscountOrDeleted = serde_json::from_value(payload).unwrap();
        assert!(matches!(stub, DiscountOrDeleted::Deleted(_)));
    }

    #[test]
    fn test_promotion_code_literal_rejected_as_discount() {
        assert!(serde_json::from_value::<Discount>(promotion_code()).is_err());
    }
}
