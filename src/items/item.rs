//! Vehicle items - one tile on the board.
//!
//! Items are created in bulk by the deck generator and never change after.
//! Session-level state (selected, inert) lives in the session, not here.

use serde::{Deserialize, Serialize};

use crate::catalog::{Accessory, Attribute, AttributeValue, Category, Color, Size, WheelCount};

/// Identifier of an item, unique within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Shared by exactly two items in a deck: the intended twins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this pair in deck order, used to index catalogs.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub pair_id: PairId,
    pub color: Color,
    pub size: Size,
    pub wheels: WheelCount,
    pub accessory: Accessory,
    pub category: Category,
}

impl Item {
    /// Read one dimension.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> AttributeValue {
        match attribute {
            Attribute::Color => AttributeValue::Color(self.color),
            Attribute::Size => AttributeValue::Size(self.size),
            Attribute::Wheels => AttributeValue::Wheels(self.wheels),
            Attribute::Accessory => AttributeValue::Accessory(self.accessory),
            Attribute::Category => AttributeValue::Category(self.category),
        }
    }

    /// True when every one of the five dimensions is equal. Ignores ids.
    #[must_use]
    pub fn same_look(&self, other: &Item) -> bool {
        self.color == other.color
            && self.size == other.size
            && self.wheels == other.wheels
            && self.accessory == other.accessory
            && self.category == other.category
    }
}
