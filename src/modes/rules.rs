//! Per-mode rule table.
//!
//! Each mode's special-casing lives in exactly one `ModeRule`: which
//! dimension it matches on, how pair `n` gets its value, and how the narrator
//! talks about it. Generation and narration both read from [`rule_for`].

use crate::catalog::{Accessory, Attribute, AttributeValue, Catalog, Category, Color, Size, WheelCount};
use crate::items::Item;

use super::mode::GameMode;

/// How the narrator phrases a mode's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phrasing {
    /// "red truck!" / "Yay! Two red trucks!"
    Adjective,
    /// "Truck with ladder!" / "Yay! Two trucks with ladder!"
    Feature,
}

/// Everything mode-specific, in one record.
#[derive(Clone, Copy, Debug)]
pub struct ModeRule {
    pub mode: GameMode,
    pub attribute: Attribute,
    /// Stamps `nth(catalog, pair_index)` on the mode's dimension.
    pub assign: fn(&mut Item, usize),
    pub phrasing: Phrasing,
}

impl ModeRule {
    /// The mode's dimension on this item.
    #[must_use]
    pub fn value(&self, item: &Item) -> AttributeValue {
        item.value(self.attribute)
    }

    /// Value pair `pair_index` is guaranteed to share.
    #[must_use]
    pub fn value_for_pair(&self, pair_index: usize) -> AttributeValue {
        match self.attribute {
            Attribute::Color => AttributeValue::Color(Color::nth(pair_index)),
            Attribute::Size => AttributeValue::Size(Size::nth(pair_index)),
            Attribute::Wheels => AttributeValue::Wheels(WheelCount::nth(pair_index)),
            Attribute::Accessory => AttributeValue::Accessory(Accessory::nth(pair_index)),
            Attribute::Category => AttributeValue::Category(Category::nth(pair_index)),
        }
    }

    /// Narration for a single item.
    #[must_use]
    pub fn describe_one(&self, item: &Item) -> String {
        let name = self.value(item).display_name();
        match (self.phrasing, self.attribute) {
            (Phrasing::Feature, Attribute::Wheels) => format!("Truck with {name} wheels!"),
            (Phrasing::Feature, _) => format!("Truck with {name}!"),
            (Phrasing::Adjective, _) => format!("{name} truck!"),
        }
    }

    /// Narration for a matched pair.
    #[must_use]
    pub fn describe_pair(&self, item: &Item) -> String {
        let name = self.value(item).display_name();
        match (self.phrasing, self.attribute) {
            (Phrasing::Feature, Attribute::Wheels) => format!("Yay! Two trucks with {name} wheels!"),
            (Phrasing::Feature, _) => format!("Yay! Two trucks with {name}!"),
            (Phrasing::Adjective, _) => format!("Yay! Two {name} trucks!"),
        }
    }
}

static MODE_RULES: [ModeRule; 5] = [
    ModeRule {
        mode: GameMode::Colors,
        attribute: Attribute::Color,
        assign: |item, n| item.color = Color::nth(n),
        phrasing: Phrasing::Adjective,
    },
    ModeRule {
        mode: GameMode::Sizes,
        attribute: Attribute::Size,
        assign: |item, n| item.size = Size::nth(n),
        phrasing: Phrasing::Adjective,
    },
    ModeRule {
        mode: GameMode::Wheels,
        attribute: Attribute::Wheels,
        assign: |item, n| item.wheels = WheelCount::nth(n),
        phrasing: Phrasing::Feature,
    },
    ModeRule {
        mode: GameMode::Details,
        attribute: Attribute::Accessory,
        assign: |item, n| item.accessory = Accessory::nth(n),
        phrasing: Phrasing::Feature,
    },
    ModeRule {
        mode: GameMode::Where,
        attribute: Attribute::Category,
        assign: |item, n| item.category = Category::nth(n),
        phrasing: Phrasing::Adjective,
    },
];

/// Rule for a mode.
#[must_use]
pub fn rule_for(mode: GameMode) -> &'static ModeRule {
    &MODE_RULES[mode.index()]
}
