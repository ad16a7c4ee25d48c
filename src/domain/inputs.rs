use crate::error::{Field, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Smallest accepted price for a single item.
pub const MIN_COST_PER_ITEM: Decimal = dec!(0.01);
/// Smallest accepted quantity.
pub const MIN_QUANTITY: u32 = 1;
/// Largest accepted tax rate (100%).
pub const MAX_TAX_RATE: Decimal = Decimal::ONE;
/// Largest accepted discount rate (50%).
pub const MAX_DISCOUNT_RATE: Decimal = dec!(0.5);
/// Tax rate a freshly constructed engine starts with (8%).
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.08);
/// Label used when the caller gives no item name.
pub const DEFAULT_ITEM_NAME: &str = "Item";

const HUNDRED: Decimal = dec!(100);

/// Display label of the item being priced.
///
/// Blank or absent names fall back to [`DEFAULT_ITEM_NAME`]; anything else is
/// stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Self(trimmed.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemName {
    fn default() -> Self {
        Self(DEFAULT_ITEM_NAME.to_string())
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        Self::new(Some(name))
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price of a single item, at least [`MIN_COST_PER_ITEM`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnitCost(Decimal);

impl UnitCost {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value >= MIN_COST_PER_ITEM {
            Ok(Self(value))
        } else {
            Err(ValidationError::BelowMinimum {
                field: Field::CostPerItem,
                min: MIN_COST_PER_ITEM.to_string(),
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for UnitCost {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of items, at least [`MIN_QUANTITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value >= MIN_QUANTITY {
            Ok(Self(value))
        } else {
            Err(ValidationError::BelowMinimum {
                field: Field::Quantity,
                min: MIN_QUANTITY.to_string(),
            })
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Delivery charge added to the item subtotal. Zero means free delivery.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct DeliveryCost(Decimal);

impl DeliveryCost {
    pub const FREE: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ValidationError::Negative {
                field: Field::DeliveryCost,
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_free(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for DeliveryCost {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn check_rate(
    value: Decimal,
    max: Decimal,
    field: Field,
    range: &str,
) -> Result<Decimal, ValidationError> {
    if value >= Decimal::ZERO && value <= max {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: Decimal::ZERO.to_string(),
            max: max.normalize().to_string(),
            range: range.to_string(),
        })
    }
}

/// Tax rate as a fraction in `[0, 1]`, applied to the discounted subtotal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const STANDARD: Self = Self(DEFAULT_TAX_RATE);

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        check_rate(value, MAX_TAX_RATE, Field::TaxRate, "0% to 100%").map(Self)
    }

    /// Builds a rate from a percentage, e.g. `8` for 8%.
    pub fn from_percentage(percentage: Decimal) -> Result<Self, ValidationError> {
        Self::new(percentage / HUNDRED)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Discount rate as a fraction in `[0, 0.5]`, taken off the full subtotal
/// before tax.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        check_rate(value, MAX_DISCOUNT_RATE, Field::DiscountRate, "0% to 50%").map(Self)
    }

    /// Builds a rate from a percentage, e.g. `10` for 10%.
    pub fn from_percentage(percentage: Decimal) -> Result<Self, ValidationError> {
        Self::new(percentage / HUNDRED)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for DiscountRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
