use std::fmt;
use thiserror::Error;

/// The input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CostPerItem,
    Quantity,
    DeliveryCost,
    TaxRate,
    DiscountRate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::CostPerItem => "Cost per item",
            Field::Quantity => "Quantity",
            Field::DeliveryCost => "Delivery cost",
            Field::TaxRate => "Tax rate",
            Field::DiscountRate => "Discount rate",
        };
        f.write_str(label)
    }
}

/// An input outside the bound its field allows.
///
/// Raised before any engine state is touched, so the engine keeps its last
/// valid inputs when one of these comes back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: Field, min: String },
    #[error("{field} cannot be negative")]
    Negative { field: Field },
    #[error("{field} must be between {min} and {max} ({range})")]
    OutOfRange {
        field: Field,
        min: String,
        max: String,
        range: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::BelowMinimum { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

#[derive(Error, Debug)]
pub enum CostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Cost per item and quantity must be set before recalculating")]
    MissingInputs,
    #[error("No calculation has been performed yet")]
    NotCalculated,
    #[error("Amounts are too large to calculate")]
    Overflow,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Input ended while waiting for {field}")]
    InputClosed { field: String },
    #[error("Too many invalid attempts for {field}")]
    TooManyAttempts { field: String },
}

pub type Result<T> = std::result::Result<T, CostError>;
