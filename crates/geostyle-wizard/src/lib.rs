//! Map style and legend generation from wizard configurations
//!
//! A wizard configuration names a map style type and, for each paint
//! property, either a fixed value or a variable one driven by a data field
//! through a graduated, categorized or proportional analysis. Generation
//! reads statistics from a [`FeatureSource`](geostyle_core::FeatureSource),
//! builds the Mapbox GL paint expressions and, on request, the matching
//! legends.
//!
//! # Example
//!
//! ```rust
//! use geostyle_core::GeoLayer;
//! use geostyle_wizard::{generate_style_from_config, StyleSettings};
//! use serde_json::json;
//!
//! let mut layer = GeoLayer::new(1);
//! layer.push(json!({ "a": 1 }));
//! layer.push(json!({ "a": 2 }));
//!
//! let config = json!({
//!     "map_style_type": "fill",
//!     "style": {
//!         "fill_color": {
//!             "type": "variable",
//!             "field": "a",
//!             "analysis": "graduated",
//!             "method": "equal_interval",
//!             "values": ["#ffffff", "#000000"],
//!             "generate_legend": true
//!         }
//!     }
//! });
//!
//! let generated = generate_style_from_config(&layer, config, &StyleSettings::default()).unwrap();
//! assert_eq!(
//!     generated.map_style.paint["fill-color"].to_value(),
//!     json!(["step", ["get", "a"], "#ffffff", 1.5, "#000000"])
//! );
//! assert_eq!(generated.legends[0].len(), 2);
//! ```

pub mod config;
pub mod legacy;
pub mod orchestrator;
pub mod settings;

pub use config::{
    Analysis, ClassSource, Graduated, PropertyStyle, Proportional, RawPropertyConfig,
    RawWizardConfig, VariationKind, WizardConfig,
};
pub use legacy::{generate_style_from_symbology, SymbologyConfig, SymbologyStyle};
pub use orchestrator::{
    generate_style_from_config, generate_style_from_wizard, GeneratedStyle, MapStyle,
};
pub use settings::StyleSettings;
