//! Shared helpers for the wizard integration tests

#![allow(dead_code)]

use geostyle_core::GeoLayer;
use geostyle_wizard::{generate_style_from_config, GeneratedStyle, StyleSettings};
use serde_json::{json, Value};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route tracing output through the test harness, once per binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Layer whose features carry `field` with each of `values`
pub fn layer_with(field: &str, values: &[Value]) -> GeoLayer {
    let mut layer = GeoLayer::new(1);
    for value in values {
        let mut properties = serde_json::Map::new();
        properties.insert(field.to_string(), value.clone());
        layer.push(Value::Object(properties));
    }
    layer
}

/// Empty layer
pub fn empty_layer() -> GeoLayer {
    GeoLayer::new(1)
}

/// Generate with default settings, panicking on error
pub fn generate(layer: &GeoLayer, config: Value) -> GeneratedStyle {
    init_tracing();
    generate_style_from_config(layer, config, &StyleSettings::default())
        .unwrap_or_else(|e| panic!("style generation failed: {e}"))
}

/// `(style, legends)` as JSON
pub fn generate_values(layer: &GeoLayer, config: Value) -> (Value, Vec<Value>) {
    generate(layer, config).to_values().unwrap()
}

/// Graduated fill color configuration over field `a`
pub fn graduated_fill(extra: Value) -> Value {
    let mut fill_color = json!({
        "type": "variable",
        "field": "a",
        "analysis": "graduated",
        "values": ["#aa0000", "#770000", "#330000", "#000000"],
        "generate_legend": true
    });
    if let (Some(target), Value::Object(extra)) = (fill_color.as_object_mut(), extra) {
        target.extend(extra);
    }
    json!({
        "map_style_type": "fill",
        "type": "wizard",
        "style": {
            "fill_color": fill_color,
            "fill_outline_color": {"type": "fixed", "value": "#ffffff"}
        }
    })
}

/// Legend item without a value, as every fallback legend shows it
pub fn no_value_item(color: &str, shape: &str) -> Value {
    json!({
        "color": color,
        "boundaries": {
            "lower": {"value": null, "included": true},
            "upper": {"value": null, "included": true}
        },
        "shape": shape
    })
}
