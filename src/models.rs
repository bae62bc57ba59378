//! Packing List Models
//!
//! Plain data types shared by the store, the view model and the components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ItemError;

/// Identifier of an item, unique within one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many of an item to pack (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Quantity {
    type Error = ItemError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(ItemError::ZeroQuantity);
        }
        Ok(Quantity(value))
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> u8 {
        q.0
    }
}

impl FromStr for Quantity {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| ItemError::InvalidQuantity(s.to_string()))?;
        Quantity::try_from(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A single entry on the packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item. Blank descriptions are rejected.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: Quantity) -> Result<Self, ItemError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ItemError::EmptyDescription);
        }
        Ok(Self {
            id,
            description,
            quantity,
            packed: false,
        })
    }

    /// Copy of this item with the packed flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Display ordering for the list. Never stored in the items themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    InputOrder,
    ByDescription,
    ByPackedStatus,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::InputOrder, SortMode::ByDescription, SortMode::ByPackedStatus];

    /// Value used by the `<option>` element
    pub fn as_value(self) -> &'static str {
        match self {
            SortMode::InputOrder => "input",
            SortMode::ByDescription => "description",
            SortMode::ByPackedStatus => "packed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::InputOrder => "Sort by input order",
            SortMode::ByDescription => "Sort by description",
            SortMode::ByPackedStatus => "Sort by packed status",
        }
    }
}

impl FromStr for SortMode {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_value() == s)
            .ok_or_else(|| ItemError::UnknownSortMode(s.to_string()))
    }
}

/// Aggregate numbers shown in the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackingStats {
    pub total: usize,
    pub packed_count: usize,
    pub packed_percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unpacked() {
        let item = Item::new(ItemId(7), "Socks", Quantity::try_from(2).unwrap()).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.description, "Socks");
        assert_eq!(item.quantity.get(), 2);
        assert!(!item.packed);
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(Item::new(ItemId(1), "", Quantity::ONE), Err(ItemError::EmptyDescription));
        assert_eq!(Item::new(ItemId(1), "   \t", Quantity::ONE), Err(ItemError::EmptyDescription));
    }

    #[test]
    fn test_toggled_leaves_original_alone() {
        let item = Item::new(ItemId(1), "Hat", Quantity::ONE).unwrap();
        let flipped = item.toggled();
        assert!(flipped.packed);
        assert!(!item.packed);
        assert_eq!(flipped.id, item.id);
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
        assert_eq!("0".parse::<Quantity>(), Err(ItemError::ZeroQuantity));
        assert!(matches!("three".parse::<Quantity>(), Err(ItemError::InvalidQuantity(_))));
    }

    #[test]
    fn test_sort_mode_values() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_value().parse::<SortMode>().unwrap(), mode);
        }
        assert!("size".parse::<SortMode>().is_err());
    }
}
