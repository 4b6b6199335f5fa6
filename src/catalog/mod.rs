//! Attribute catalogs: color, size, wheel count, accessory, category.
//!
//! ## Key Types
//!
//! - `Catalog`: ordered constant catalog with `nth` and `random` accessors
//! - `Attribute`: names a dimension
//! - `AttributeValue`: a value from any dimension

pub mod attributes;

pub use attributes::{
    Accessory, Attribute, AttributeValue, Catalog, CatalogEntry, Category, Color, Size, WheelCount,
};
