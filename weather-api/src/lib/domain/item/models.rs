use std::fmt;

use crate::domain::item::errors::ItemNameError;
use crate::domain::item::errors::PriceError;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: Option<String>,
    pub price: Price,
    pub is_offer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-blank item name, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 128;

    pub fn new(name: String) -> Result<Self, ItemNameError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            Err(ItemNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(PriceError::Invalid(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug)]
pub struct CreateItemCommand {
    pub name: ItemName,
    pub description: Option<String>,
    pub price: Price,
    pub is_offer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name() {
        assert!(ItemName::new("umbrella".to_string()).is_ok());
        assert_eq!(ItemName::new("   ".to_string()), Err(ItemNameError::Empty));
        assert_eq!(
            ItemName::new("x".repeat(129)),
            Err(ItemNameError::TooLong {
                max: 128,
                actual: 129
            })
        );
    }

    #[test]
    fn test_price() {
        assert_eq!(Price::new(12.5).unwrap().value(), 12.5);
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }
}
