//! Core types for map style generation
//!
//! This crate provides the pieces every other geostyle crate builds on:
//!
//! - [`Error`] and [`Result`], shared by the whole workspace
//! - [`FeatureSource`], the read-only view of a layer's features, with the
//!   in-memory [`GeoLayer`] implementation
//! - the statistics accessor ([`get_min_max`], [`get_positive_min_max`])
//! - validated class [`Boundaries`] and categorized [`Category`] values
//! - [`MapStyleType`] and the property naming rules tied to it
//! - significant-digit rounding and proportional symbol legend values
//!
//! # Example
//!
//! ```rust
//! use geostyle_core::{get_positive_min_max, rounding::boundaries_round, GeoLayer};
//! use serde_json::json;
//!
//! let mut layer = GeoLayer::new(1);
//! for a in [0, 1, 129] {
//!     layer.push(json!({ "a": a }));
//! }
//!
//! let mm = get_positive_min_max(&layer, "a").unwrap();
//! assert_eq!(mm.has_null, Some(false));
//!
//! let (min, max) = mm.range().unwrap();
//! assert_eq!(boundaries_round(&[min, max], 2), vec![1.0, 130.0]);
//! ```

pub mod boundaries;
pub mod category;
pub mod error;
pub mod feature;
pub mod number;
pub mod rounding;
pub mod stats;
pub mod style_type;
pub mod symbols;

pub use boundaries::Boundaries;
pub use category::Category;
pub use error::{Error, Result};
pub use feature::{numeric_cast, Feature, FeatureSource, GeoLayer, LayerId};
pub use number::json_number;
pub use stats::{get_min_max, get_positive_min_max, MinMax};
pub use style_type::{to_map_style, MapStyleType};
