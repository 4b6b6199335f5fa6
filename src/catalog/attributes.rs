//! The five attribute dimensions a vehicle can vary along.
//!
//! Each dimension is a closed enum implementing [`Catalog`]. Catalog order is
//! significant: pair `n` in a deck gets `nth(n)` on the mode's dimension.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A value token paired with the name the narrator uses for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry<T> {
    pub value: T,
    pub display_name: &'static str,
}

/// An ordered, immutable catalog of attribute values.
pub trait Catalog: Copy + Eq + fmt::Debug + 'static {
    /// Every value, in catalog order.
    const ALL: &'static [Self];

    /// Name used in narration ("red", "large", "ladder").
    fn display_name(self) -> &'static str;

    /// `ALL[index mod len]`. Cycles once the index passes the catalog length.
    #[must_use]
    fn nth(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Uniform draw, used for decorative dimensions.
    fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// This value as a catalog entry.
    #[must_use]
    fn entry(self) -> CatalogEntry<Self> {
        CatalogEntry {
            value: self,
            display_name: self.display_name(),
        }
    }
}

macro_rules! display_via_catalog {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.display_name())
                }
            }
        )*
    };
}

/// Body color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// 0xRRGGBB fill used by the renderer.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Color::Red => 0xFF0000,
            Color::Blue => 0x0000FF,
            Color::Green => 0x00FF00,
            Color::Yellow => 0xFFFF00,
            Color::Purple => 0xFF00FF,
            Color::Orange => 0xFF8800,
        }
    }
}

impl Catalog for Color {
    const ALL: &'static [Self] = &[
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    fn display_name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}

/// Drawing scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Scale factor relative to the base sprite.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Size::Small => 0.7,
            Size::Medium => 1.0,
            Size::Large => 1.3,
        }
    }
}

impl Catalog for Size {
    const ALL: &'static [Self] = &[Size::Small, Size::Medium, Size::Large];

    fn display_name(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// Number of wheels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelCount {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "6")]
    Six,
}

impl WheelCount {
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            WheelCount::Two => 2,
            WheelCount::Four => 4,
            WheelCount::Six => 6,
        }
    }
}

impl Catalog for WheelCount {
    const ALL: &'static [Self] = &[WheelCount::Two, WheelCount::Four, WheelCount::Six];

    fn display_name(self) -> &'static str {
        match self {
            WheelCount::Two => "2",
            WheelCount::Four => "4",
            WheelCount::Six => "6",
        }
    }
}

/// Extra part bolted onto the vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    Ladder,
    Siren,
    Trailer,
}

impl Catalog for Accessory {
    const ALL: &'static [Self] = &[Accessory::Ladder, Accessory::Siren, Accessory::Trailer];

    fn display_name(self) -> &'static str {
        match self {
            Accessory::Ladder => "ladder",
            Accessory::Siren => "siren",
            Accessory::Trailer => "trailer",
        }
    }
}

/// Where the vehicle travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Land,
    Sky,
    Sea,
}

impl Catalog for Category {
    const ALL: &'static [Self] = &[Category::Land, Category::Sky, Category::Sea];

    fn display_name(self) -> &'static str {
        match self {
            Category::Land => "land",
            Category::Sky => "sky",
            Category::Sea => "sea",
        }
    }
}

display_via_catalog!(Color, Size, WheelCount, Accessory, Category);

/// Names one of the five dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Color,
    Size,
    Wheels,
    Accessory,
    Category,
}

/// A value from any one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    Color(Color),
    Size(Size),
    Wheels(WheelCount),
    Accessory(Accessory),
    Category(Category),
}

impl AttributeValue {
    /// Which dimension this value belongs to.
    #[must_use]
    pub fn attribute(self) -> Attribute {
        match self {
            AttributeValue::Color(_) => Attribute::Color,
            AttributeValue::Size(_) => Attribute::Size,
            AttributeValue::Wheels(_) => Attribute::Wheels,
            AttributeValue::Accessory(_) => Attribute::Accessory,
            AttributeValue::Category(_) => Attribute::Category,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AttributeValue::Color(v) => v.display_name(),
            AttributeValue::Size(v) => v.display_name(),
            AttributeValue::Wheels(v) => v.display_name(),
            AttributeValue::Accessory(v) => v.display_name(),
            AttributeValue::Category(v) => v.display_name(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
