use crate::shared::core::errors::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Drops blank rows (no description, no amount) and rejects half-filled ones.
/// At least one row must survive.
pub fn normalize_line_items(items: Vec<LineItem>) -> Result<Vec<LineItem>, ValidationError> {
    let mut kept = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let described = !item.description.trim().is_empty();
        let priced = item.amount > Decimal::ZERO;
        match (described, priced) {
            (true, true) => kept.push(item),
            (false, false) => {}
            (true, false) => {
                return Err(ValidationError::InvalidLineItem {
                    index,
                    reason: "amount must be greater than 0",
                });
            }
            (false, true) => {
                return Err(ValidationError::InvalidLineItem {
                    index,
                    reason: "description is required",
                });
            }
        }
    }
    if kept.is_empty() {
        return Err(ValidationError::NoValidLineItems);
    }
    Ok(kept)
}

pub fn line_items_total(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}
