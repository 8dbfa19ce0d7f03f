//! Pre-wizard "symbology" styles
//!
//! Older layers carry a flat configuration naming a single property and a
//! symbology, either `graduated` (classed fill colors) or `circle` (radius
//! proportional to the value). Their legends are labelled lists rather than
//! bounded intervals.

use crate::orchestrator::MapStyle;
use crate::settings::StyleSettings;
use geostyle_classify::{discretize, ClassificationMethod};
use geostyle_core::{get_min_max, Error, FeatureSource, MapStyleType, Result};
use geostyle_expr::{gen_style_interpolate, gen_style_steps, Expression};
use geostyle_legend::{LegendItem, LegendShape};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

/// Legacy style configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbologyConfig {
    pub property: String,
    pub symbology: String,
    pub method: Option<String>,
    /// Class colors of `graduated`
    pub fill_color: Option<Value>,
    pub stroke_color: Option<Value>,
    pub max_diameter: Option<f64>,
}

/// Legacy style and its labelled legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbologyStyle {
    pub style: MapStyle,
    pub legend: Vec<LegendItem>,
}

/// Bounds print as floats, `10` as `10.0`
fn label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Generate a style from a legacy symbology configuration
#[instrument(skip_all, fields(layer = source.layer_id(), symbology = %config.symbology))]
pub fn generate_style_from_symbology<S: FeatureSource + ?Sized>(
    source: &S,
    config: &SymbologyConfig,
    settings: &StyleSettings,
) -> Result<SymbologyStyle> {
    let stroke_color = config
        .stroke_color
        .clone()
        .unwrap_or_else(|| json!(settings.legacy_stroke_color));

    match config.symbology.as_str() {
        "graduated" => graduated(source, config, stroke_color),
        "circle" => circle(source, config, stroke_color),
        other => Err(Error::UnknownSymbology(other.to_string())),
    }
}

fn graduated<S: FeatureSource + ?Sized>(
    source: &S,
    config: &SymbologyConfig,
    stroke_color: Value,
) -> Result<SymbologyStyle> {
    let colors = match &config.fill_color {
        Some(Value::Array(colors)) if !colors.is_empty() => colors.as_slice(),
        Some(_) => {
            return Err(Error::InvalidConfig(
                "\"fill_color\" must be a non-empty list of colors".to_string(),
            ))
        }
        None => return Err(Error::missing_key(&config.property, "fill_color")),
    };
    let method = config
        .method
        .as_deref()
        .ok_or_else(|| Error::missing_key(&config.property, "method"))?
        .parse::<ClassificationMethod>()?;

    let boundaries = discretize(source, &config.property, method, colors.len())?;

    let (fill_color, legend) = match &boundaries {
        Some(boundaries) => {
            let class_count = boundaries.class_count();
            let legend = boundaries
                .classes()
                .zip(colors)
                .enumerate()
                .map(|(index, ((lower, upper), color))| {
                    let close = if index + 1 == class_count { ']' } else { ')' };
                    LegendItem::new(LegendShape::Square)
                        .with_color(color.clone())
                        .with_label(format!("[{} – {}{close}", label(lower), label(upper)))
                })
                .collect();
            let steps = gen_style_steps(Expression::get(config.property.as_str()), boundaries, colors);
            (steps, legend)
        }
        None => (colors.first().map(Expression::from), Vec::new()),
    };

    let mut style = MapStyle::new(MapStyleType::Fill);
    if let Some(fill_color) = fill_color {
        style.paint.insert("fill-color".to_string(), fill_color);
    }
    style
        .paint
        .insert("fill-outline-color".to_string(), stroke_color.into());
    Ok(SymbologyStyle { style, legend })
}

fn circle<S: FeatureSource + ?Sized>(
    source: &S,
    config: &SymbologyConfig,
    stroke_color: Value,
) -> Result<SymbologyStyle> {
    let max_diameter = config
        .max_diameter
        .ok_or_else(|| Error::missing_key(&config.property, "max_diameter"))?;
    let (radius, legend) = match get_min_max(source, &config.property)?.max {
        Some(max) => {
            let boundaries = [0.0, max];
            let sizes = [0.0, max_diameter];
            let labels = ["0".to_string(), label(max)];
            let legend = labels
                .into_iter()
                .zip(sizes)
                .map(|(l, s)| {
                    LegendItem::new(LegendShape::Circle)
                        .with_size_number(s)
                        .with_label(l)
                })
                .collect();
            let radius = gen_style_interpolate(
                Expression::get(config.property.as_str()),
                &boundaries,
                &sizes,
            );
            (radius, legend)
        }
        None => (Expression::number(0.0), Vec::new()),
    };

    let mut style = MapStyle::new(MapStyleType::Circle);
    style.paint.insert("circle-radius".to_string(), radius);
    style
        .paint
        .insert("circle-stroke-color".to_string(), stroke_color.into());
    Ok(SymbologyStyle { style, legend })
}
