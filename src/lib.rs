//! Map style and legend generation
//!
//! This crate re-exports the geostyle workspace:
//!
//! - [`geostyle_core`]: errors, feature sources, statistics, rounding
//! - [`geostyle_classify`]: equal interval, quantile and Jenks class boundaries
//! - [`geostyle_expr`]: typed Mapbox GL style expressions and their builders
//! - [`geostyle_legend`]: legends matching the generated styles
//! - [`geostyle_wizard`]: style generation from wizard and legacy configurations
//!
//! # Example
//!
//! ```rust
//! use geostyle::prelude::*;
//! use serde_json::json;
//!
//! let mut layer = GeoLayer::new(1);
//! for a in [0, 1, 129] {
//!     layer.push(json!({ "a": a }));
//! }
//!
//! let config = WizardConfig::from_value(json!({
//!     "map_style_type": "circle",
//!     "style": {
//!         "circle_radius": {
//!             "type": "variable",
//!             "field": "a",
//!             "analysis": "proportional",
//!             "max_radius": 200,
//!             "generate_legend": true
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! let generated = generate_style_from_wizard(&layer, &config, &StyleSettings::default()).unwrap();
//! assert_eq!(generated.legends[0].stacked_circles, Some(true));
//! ```

pub use geostyle_classify;
pub use geostyle_core;
pub use geostyle_expr;
pub use geostyle_legend;
pub use geostyle_wizard;

/// Prelude for convenient imports
pub mod prelude {
    pub use geostyle_classify::{discretize, ClassificationMethod, Classifier};
    pub use geostyle_core::{
        Boundaries, Category, Error, FeatureSource, GeoLayer, MapStyleType, MinMax, Result,
    };
    pub use geostyle_expr::Expression;
    pub use geostyle_legend::{Legend, LegendItem, LegendShape};
    pub use geostyle_wizard::{
        generate_style_from_config, generate_style_from_symbology, generate_style_from_wizard,
        GeneratedStyle, MapStyle, StyleSettings, SymbologyConfig, WizardConfig,
    };
}
