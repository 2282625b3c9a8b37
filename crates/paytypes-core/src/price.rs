//! Catalog objects: products, prices and legacy plans.

use crate::common::{CustomUnitAmount, PackageDimensions};
use crate::expandable::Expandable;
use crate::ids::{PlanId, PriceId, ProductId};
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use crate::tax::TaxCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How much to charge for a product and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Price {
    pub id: PriceId,
    pub object: Tag<Price>,
    pub active: bool,
    pub billing_scheme: BillingScheme,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub currency_options: Option<HashMap<String, PriceCurrencyOption>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub custom_unit_amount: MaybeNull<CustomUnitAmount>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub lookup_key: MaybeNull<String>,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub nickname: MaybeNull<String>,
    pub product: Expandable<ProductOrDeleted>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub recurring: MaybeNull<PriceRecurring>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_behavior: MaybeNull<TaxBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tiers: Option<Vec<PriceTier>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tiers_mode: MaybeNull<TiersMode>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transform_quantity: MaybeNull<TransformQuantity>,
    #[serde(rename = "type")]
    pub type_: PriceType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_amount_decimal: MaybeNull<String>,
}

crate::impl_object!(Price, "price", id);

impl Price {
    pub fn is_recurring(&self) -> bool {
        self.type_ == PriceType::Recurring
    }

    /// Amount charged for `quantity` units, in the smallest currency unit.
    ///
    /// Returns `None` when the price has no fixed amount (custom amounts, or
    /// tiered prices fetched without `tiers` expanded) or when the amount
    /// does not fit in an `i64`.
    pub fn amount_for_quantity(&self, quantity: u64) -> Option<i64> {
        let quantity = match self.transform_quantity.as_option() {
            Some(transform) => transform.apply(quantity),
            None => quantity,
        };
        let quantity = i64::try_from(quantity).ok()?;

        match self.billing_scheme {
            BillingScheme::PerUnit => self.unit_amount.as_option()?.checked_mul(quantity),
            BillingScheme::Tiered => {
                let tiers = self.tiers.as_deref()?;
                match self.tiers_mode.as_option().copied()? {
                    TiersMode::Volume => volume_amount(tiers, quantity),
                    TiersMode::Graduated => graduated_amount(tiers, quantity),
                }
            }
        }
    }
}

fn volume_amount(tiers: &[PriceTier], quantity: i64) -> Option<i64> {
    let tier = tiers
        .iter()
        .find(|tier| tier.up_to.is_none_or(|up_to| quantity <= up_to))?;
    tier_amount(tier, quantity)
}

fn graduated_amount(tiers: &[PriceTier], quantity: i64) -> Option<i64> {
    let mut total: i64 = 0;
    let mut floor = 0;
    for tier in tiers {
        if quantity <= floor {
            break;
        }
        let ceiling = tier.up_to.unwrap_or(i64::MAX);
        let units = quantity.min(ceiling).checked_sub(floor)?;
        total = total.checked_add(tier_amount(tier, units)?)?;
        floor = ceiling;
    }
    Some(total)
}

fn tier_amount(tier: &PriceTier, units: i64) -> Option<i64> {
    tier.unit_amount
        .unwrap_or(0)
        .checked_mul(units)?
        .checked_add(tier.flat_amount.unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedPrice {
    pub id: PriceId,
    pub object: Tag<Price>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedPrice, "price", deleted);

crate::object_union! {
    pub enum PriceOrDeleted {
        Price(Price),
        Deleted(DeletedPrice),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriceCurrencyOption {
    #[serde(deserialize_with = "nullable")]
    pub custom_unit_amount: Option<CustomUnitAmount>,
    #[serde(deserialize_with = "nullable")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tiers: Option<Vec<PriceTier>>,
    #[serde(deserialize_with = "nullable")]
    pub unit_amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub unit_amount_decimal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriceRecurring {
    #[serde(deserialize_with = "nullable")]
    pub aggregate_usage: Option<AggregateUsage>,
    pub interval: RecurringInterval,
    pub interval_count: i64,
    pub usage_type: UsageType,
}

/// One step of a tiered price. The last tier has `up_to: null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriceTier {
    #[serde(deserialize_with = "nullable")]
    pub flat_amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub flat_amount_decimal: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub unit_amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub unit_amount_decimal: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub up_to: Option<i64>,
}

/// Divide the reported quantity before billing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TransformQuantity {
    pub divide_by: i64,
    pub round: TransformRound,
}

impl TransformQuantity {
    pub fn apply(&self, quantity: u64) -> u64 {
        let Ok(divisor) = u64::try_from(self.divide_by) else {
            return quantity;
        };
        if divisor == 0 {
            return quantity;
        }
        match self.round {
            TransformRound::Down => quantity / divisor,
            TransformRound::Up => quantity.div_ceil(divisor),
        }
    }
}

/// Same shape as [`TransformQuantity`], applied to metered usage on plans.
pub type TransformUsage = TransformQuantity;

literal_enum! {
    pub enum TransformRound {
        Down = "down",
        Up = "up",
    }
}

literal_enum! {
    pub enum BillingScheme {
        PerUnit = "per_unit",
        Tiered = "tiered",
    }
}

literal_enum! {
    pub enum TiersMode {
        Graduated = "graduated",
        Volume = "volume",
    }
}

literal_enum! {
    pub enum PriceType {
        OneTime = "one_time",
        Recurring = "recurring",
    }
}

literal_enum! {
    pub enum TaxBehavior {
        Exclusive = "exclusive",
        Inclusive = "inclusive",
        Unspecified = "unspecified",
    }
}

literal_enum! {
    pub enum AggregateUsage {
        LastDuringPeriod = "last_during_period",
        LastEver = "last_ever",
        Max = "max",
        Sum = "sum",
    }
}

literal_enum! {
    pub enum RecurringInterval {
        Day = "day",
        Month = "month",
        Week = "week",
        Year = "year",
    }
}

literal_enum! {
    pub enum UsageType {
        Licensed = "licensed",
        Metered = "metered",
    }
}

/// The predecessor of [`Price`], still returned on older subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Plan {
    pub id: PlanId,
    pub object: Tag<Plan>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub aggregate_usage: MaybeNull<AggregateUsage>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_decimal: MaybeNull<String>,
    pub billing_scheme: BillingScheme,
    pub created: Timestamp,
    pub currency: String,
    pub interval: RecurringInterval,
    pub interval_count: i64,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub nickname: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub product: MaybeNull<Expandable<ProductOrDeleted>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tiers: Option<Vec<PriceTier>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tiers_mode: MaybeNull<TiersMode>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transform_usage: MaybeNull<TransformUsage>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub trial_period_days: MaybeNull<i64>,
    pub usage_type: UsageType,
}

crate::impl_object!(Plan, "plan", id);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedPlan {
    pub id: PlanId,
    pub object: Tag<Plan>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedPlan, "plan", deleted);

crate::object_union! {
    pub enum PlanOrDeleted {
        Plan(Plan),
        Deleted(DeletedPlan),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    pub id: ProductId,
    pub object: Tag<Product>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub attributes: MaybeNull<Vec<String>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub caption: MaybeNull<String>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub deactivate_on: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_price: MaybeNull<Expandable<Price>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub images: Vec<String>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub name: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub package_dimensions: MaybeNull<PackageDimensions>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shippable: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_code: MaybeNull<Expandable<TaxCode>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub type_: Option<ProductType>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub unit_label: MaybeNull<String>,
    pub updated: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub url: MaybeNull<String>,
}

crate::impl_object!(Product, "product", id);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedProduct {
    pub id: ProductId,
    pub object: Tag<Product>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedProduct, "product", deleted);

crate::object_union! {
    pub enum ProductOrDeleted {
        Product(Product),
        Deleted(DeletedProduct),
    }
}

literal_enum! {
    pub enum ProductType {
        Good = "good",
        Service = "service",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn tiered(mode: &str) -> Price {
        serde_json::from_value(json!({
            "id": "price_tiered",
            "object": "price",
            "active": true,
            "billing_scheme": "tiered",
            "created": 1680000000,
            "currency": "usd",
            "custom_unit_amount": null,
            "livemode": false,
            "lookup_key": null,
            "metadata": {},
            "nickname": null,
            "product": "prod_1",
            "recurring": {
                "aggregate_usage": null,
                "interval": "month",
                "interval_count": 1,
                "usage_type": "licensed"
            },
            "tax_behavior": "unspecified",
            "tiers": [
                {"flat_amount": null, "flat_amount_decimal": null, "unit_amount": 1000, "unit_amount_decimal": "1000", "up_to": 5},
                {"flat_amount": 500, "flat_amount_decimal": "500", "unit_amount": 800, "unit_amount_decimal": "800", "up_to": null}
            ],
            "tiers_mode": mode,
            "transform_quantity": null,
            "type": "recurring",
            "unit_amount": null,
            "unit_amount_decimal": null
        }))
        .unwrap()
    }

    #[rstest]
    #[case("graduated", 3, 3000)]
    #[case("graduated", 7, 5000 + 500 + 1600)]
    #[case("volume", 3, 3000)]
    #[case("volume", 7, 500 + 5600)]
    fn test_tiered_amounts(#[case] mode: &str, #[case] quantity: u64, #[case] expected: i64) {
        let price = tiered(mode);
        assert!(price.is_recurring());
        assert_eq!(price.amount_for_quantity(quantity), Some(expected));
    }

    #[test]
    fn test_amount_overflow_is_none() {
        let quantity = 100_000_000_000_000_000;
        assert_eq!(tiered("graduated").amount_for_quantity(quantity), None);
        assert_eq!(tiered("volume").amount_for_quantity(quantity), None);

        let mut per_unit = tiered("volume");
        per_unit.billing_scheme = BillingScheme::PerUnit;
        per_unit.unit_amount = MaybeNull::Value(1000);
        assert_eq!(per_unit.amount_for_quantity(quantity), None);
        assert_eq!(per_unit.amount_for_quantity(3), Some(3000));
    }

    #[test]
    fn test_transform_quantity_rounding() {
        let up = TransformQuantity { divide_by: 10, round: TransformRound::Up };
        let down = TransformQuantity { divide_by: 10, round: TransformRound::Down };
        assert_eq!(up.apply(11), 2);
        assert_eq!(down.apply(11), 1);
        assert_eq!(up.apply(0), 0);
    }

    #[test]
    fn test_product_or_deleted() {
        let product: Expandable<ProductOrDeleted> =
            serde_json::from_value(json!({"id": "prod_1", "object": "product", "deleted": true}))
                .unwrap();
        assert_eq!(product.id(), "prod_1");
        assert!(product.as_object().unwrap().is_deleted());
    }
}
