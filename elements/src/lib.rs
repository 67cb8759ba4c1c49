//! Map fixture element types for the mapfix generator.
//!
//! This crate defines the value objects that make up a fixture dataset:
//!
//! - Coordinates and the sampling bounds they are drawn from
//! - Triangle polygons, category markers, pinned widgets, styled lines
//! - The aggregate `Dataset` document
//!
//! # Design Principles
//!
//! - **Plain values** - Elements are immutable data, built once and never
//!   mutated afterwards.
//! - **Stable wire shape** - With the `serde` feature enabled, the JSON
//!   layout (key names, field order, `[lat, lng]` pairs) is part of the
//!   public contract.

mod bounds;
mod element;
mod error;

pub use bounds::{Bounds, LAT_MAX, LAT_MIN, LNG_MAX, LNG_MIN};
pub use element::{
    Coordinate, Dataset, DatasetSummary, Line, LineStyle, Marker, MarkerKind, Polygon, Widget,
};
pub use error::{BoundsError, BoundsResult};
