//! Legends matching generated map styles
//!
//! Every builder mirrors a style expression: graduated legends list one
//! interval per step class, proportional legends list sample symbols sized
//! like the interpolation would draw them, categorized legends list one
//! labelled item per category.
//!
//! Graduated legends are ordered from the highest class down, with the
//! "no value" entry last.
//!
//! # Example
//!
//! ```rust
//! use geostyle_core::Boundaries;
//! use geostyle_legend::{graduated_color_legend, LegendShape};
//! use serde_json::json;
//!
//! let boundaries = Boundaries::try_new(vec![0.0, 10.0, 20.0]).unwrap();
//! let legend = graduated_color_legend(
//!     Some(&boundaries),
//!     &[json!("#ffffff"), json!("#000000")],
//!     None,
//!     LegendShape::Square,
//! );
//!
//! assert_eq!(legend.items[0].color, Some(json!("#000000")));
//! ```

pub mod categorized;
pub mod graduated;
pub mod proportional;
pub mod types;

pub use categorized::{categorized_legend, LegendField};
pub use graduated::{graduated_color_legend, graduated_size_legend};
pub use proportional::{proportional_circle_legend, proportional_size_legend};
pub use types::{Bound, Legend, LegendBoundaries, LegendItem, LegendShape};

use serde_json::Value;

/// Color of a layer whose size varies, used to paint size legend entries
#[derive(Debug, Clone, PartialEq)]
pub struct LayerColor {
    pub color: Value,
    /// Color of features without a value, when configured
    pub no_value: Option<Value>,
}

impl LayerColor {
    pub fn new(color: Value, no_value: Option<Value>) -> Self {
        Self { color, no_value }
    }

    pub fn no_value_or_color(&self) -> Value {
        self.no_value.clone().unwrap_or_else(|| self.color.clone())
    }
}
