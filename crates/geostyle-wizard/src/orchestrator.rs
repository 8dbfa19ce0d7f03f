//! Style and legend generation from a wizard configuration

use crate::config::{Analysis, ClassSource, Graduated, PropertyStyle, Proportional, VariationKind, WizardConfig};
use crate::settings::StyleSettings;
use geostyle_classify::discretize;
use geostyle_core::rounding::{boundaries_round, DEFAULT_SCALE};
use geostyle_core::{
    get_positive_min_max, to_map_style, Boundaries, Category, FeatureSource, MapStyleType, Result,
};
use geostyle_expr::{
    gen_categorized_value_style, gen_style_interpolate, gen_style_steps,
    get_style_no_value_condition, Expression,
};
use geostyle_legend::{
    categorized_legend, graduated_color_legend, graduated_size_legend, proportional_circle_legend,
    proportional_size_legend, LayerColor, Legend, LegendField, LegendShape,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};
use std::f64::consts::PI;
use tracing::{debug, instrument, warn};

/// A Mapbox GL layer style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStyle {
    #[serde(rename = "type")]
    pub map_style_type: MapStyleType,
    pub paint: IndexMap<String, Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<IndexMap<String, Expression>>,
}

impl MapStyle {
    pub fn new(map_style_type: MapStyleType) -> Self {
        Self {
            map_style_type,
            paint: IndexMap::new(),
            layout: None,
        }
    }

    fn add_layout(&mut self, key: String, expression: Expression) {
        self.layout
            .get_or_insert_with(IndexMap::new)
            .insert(key, expression);
    }
}

/// Layer style plus the legends requested by the configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedStyle {
    pub map_style: MapStyle,
    pub legends: Vec<Legend>,
}

impl GeneratedStyle {
    /// `(style, legends)` as JSON
    pub fn to_values(&self) -> serde_json::Result<(Value, Vec<Value>)> {
        let legends = self
            .legends
            .iter()
            .map(Legend::to_value)
            .collect::<serde_json::Result<_>>()?;
        Ok((serde_json::to_value(&self.map_style)?, legends))
    }
}

/// Everything a property needs besides its own configuration
struct Context<'a, S: ?Sized> {
    source: &'a S,
    map_style_type: MapStyleType,
    shape: LegendShape,
    layer_color: LayerColor,
    settings: &'a StyleSettings,
}

/// Color of the layer, from its fixed `{type}_color` property
fn layer_color(config: &WizardConfig, settings: &StyleSettings) -> LayerColor {
    match config.properties.get(&config.map_style_type.color_property()) {
        Some(PropertyStyle::Fixed { value, no_value }) => {
            LayerColor::new(value.clone(), no_value.as_ref().map(|(_, v)| v.clone()))
        }
        _ => LayerColor::new(json!(settings.no_value_fill_color), None),
    }
}

/// Generate the layer style and legends of `config` over `source`
///
/// Properties are processed in configuration order. The first failing
/// property aborts generation; nothing partial is returned.
#[instrument(skip_all, fields(layer = source.layer_id(), map_style_type = %config.map_style_type))]
pub fn generate_style_from_wizard<S: FeatureSource + ?Sized>(
    source: &S,
    config: &WizardConfig,
    settings: &StyleSettings,
) -> Result<GeneratedStyle> {
    let ctx = Context {
        source,
        map_style_type: config.map_style_type,
        shape: config.map_style_type.into(),
        layer_color: layer_color(config, settings),
        settings,
    };
    let mut map_style = MapStyle::new(config.map_style_type);
    let mut legends = Vec::new();

    for (property, style) in &config.properties {
        let paint_property = to_map_style(property);
        match style {
            PropertyStyle::Fixed { value, no_value } => {
                let expression = match no_value {
                    Some((field, no_value)) => get_style_no_value_condition(
                        Expression::get(field.as_str()),
                        Some(value.into()),
                        Some(no_value.into()),
                    ),
                    None => Some(value.into()),
                };
                if let Some(expression) = expression {
                    map_style.paint.insert(paint_property, expression);
                }
            }
            PropertyStyle::Variable {
                field,
                kind,
                analysis,
                generate_legend,
            } => {
                debug!(%property, analysis = analysis.name(), "variable property");
                let (expression, legend) = match analysis {
                    Analysis::Graduated(graduated) => {
                        graduated_style(&ctx, field, *kind, graduated, *generate_legend)?
                    }
                    Analysis::Categorized(categories) => {
                        categorized_style(&ctx, field, *kind, categories, *generate_legend)
                    }
                    Analysis::Proportional(proportional) => {
                        map_style.add_layout(
                            ctx.map_style_type.sort_key_property(),
                            Expression::descending_sort_key(field.as_str()),
                        );
                        proportional_style(&ctx, field, *kind, proportional, *generate_legend)?
                    }
                };
                match expression {
                    Some(expression) => {
                        map_style.paint.insert(paint_property, expression);
                    }
                    None => warn!(%property, "no style generated, property omitted"),
                }
                legends.extend(legend);
            }
        }
    }

    Ok(GeneratedStyle { map_style, legends })
}

/// Parse a JSON wizard configuration and generate its style
pub fn generate_style_from_config<S: FeatureSource + ?Sized>(
    source: &S,
    config: Value,
    settings: &StyleSettings,
) -> Result<GeneratedStyle> {
    let config = WizardConfig::from_value(config)?;
    generate_style_from_wizard(source, &config, settings)
}

type PropertyOutput = (Option<Expression>, Option<Legend>);

fn graduated_style<S: FeatureSource + ?Sized>(
    ctx: &Context<'_, S>,
    field: &str,
    kind: VariationKind,
    graduated: &Graduated,
    generate_legend: bool,
) -> Result<PropertyOutput> {
    let values = &graduated.values;
    let boundaries: Option<Boundaries> = match &graduated.classes {
        ClassSource::Explicit(boundaries) => Some(boundaries.clone()),
        ClassSource::Method(method) => discretize(ctx.source, field, *method, values.len())?,
    };

    let no_value = graduated.no_value.as_ref();
    let expression = match &boundaries {
        Some(boundaries) => get_style_no_value_condition(
            Expression::get(field),
            gen_style_steps(Expression::get(field), boundaries, values),
            no_value.map(Expression::from),
        ),
        None => no_value.or(values.first()).map(Expression::from),
    };

    let legend = generate_legend.then(|| match kind {
        VariationKind::Color => {
            graduated_color_legend(boundaries.as_ref(), values, no_value, ctx.shape)
        }
        VariationKind::Value | VariationKind::Radius => graduated_size_legend(
            boundaries.as_ref(),
            values,
            no_value,
            &ctx.layer_color,
            ctx.shape,
        ),
    });
    Ok((expression, legend))
}

fn categorized_style<S: FeatureSource + ?Sized>(
    ctx: &Context<'_, S>,
    field: &str,
    kind: VariationKind,
    categories: &[Category],
    generate_legend: bool,
) -> PropertyOutput {
    let (default_no_value, legend_field, color) = match kind {
        VariationKind::Color => (
            json!(ctx.settings.no_value_fill_color),
            LegendField::Color,
            None,
        ),
        VariationKind::Value | VariationKind::Radius => {
            (json!(0), LegendField::Size, Some(&ctx.layer_color.color))
        }
    };
    let expression = gen_categorized_value_style(field, categories, default_no_value);
    let legend = generate_legend
        .then(|| categorized_legend(categories, ctx.shape, legend_field, color));
    (expression, legend)
}

/// Positive `(min, max)` of `field`, rounded outward to two significant digits
fn rounded_positive_range<S: FeatureSource + ?Sized>(source: &S, field: &str) -> Result<Option<(f64, f64)>> {
    let Some((min, max)) = get_positive_min_max(source, field)?.range() else {
        return Ok(None);
    };
    let rounded = boundaries_round(&[min, max], DEFAULT_SCALE);
    let (rounded_min, rounded_max) = (rounded[0], rounded[1]);
    // truncation can reach zero for tiny minimums
    let rounded_min = if rounded_min > 0.0 { rounded_min } else { min };
    Ok(Some((rounded_min, rounded_max)))
}

fn proportional_style<S: FeatureSource + ?Sized>(
    ctx: &Context<'_, S>,
    field: &str,
    kind: VariationKind,
    proportional: &Proportional,
    generate_legend: bool,
) -> Result<PropertyOutput> {
    let range = rounded_positive_range(ctx.source, field)?;
    let max_size = proportional.max_size;
    let no_value = proportional.no_value;

    let expression = match range {
        Some((_, max)) => {
            let interpolation = match kind {
                VariationKind::Radius => gen_style_interpolate(
                    Expression::circle_radius(field),
                    &[0.0, (max / PI).sqrt()],
                    &[0.0, max_size / 2.0],
                ),
                _ => gen_style_interpolate(Expression::get(field), &[0.0, max], &[0.0, max_size]),
            };
            get_style_no_value_condition(
                Expression::get(field),
                Some(interpolation),
                no_value.map(Expression::number),
            )
        }
        None => Some(Expression::number(no_value.unwrap_or(0.0))),
    };

    let legend = if generate_legend {
        Some(match kind {
            VariationKind::Radius => proportional_circle_legend(
                range,
                max_size,
                &ctx.layer_color,
                no_value,
                ctx.shape,
                ctx.settings.circle_min_legend_height,
            )?,
            _ => proportional_size_legend(
                range,
                max_size,
                &ctx.layer_color,
                no_value,
                ctx.shape,
                ctx.settings.size_min_legend_height,
            ),
        })
    } else {
        None
    };
    Ok((expression, legend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geostyle_core::GeoLayer;

    fn layer(field: &str, values: &[Value]) -> GeoLayer {
        let mut layer = GeoLayer::new(1);
        for v in values {
            let mut properties = serde_json::Map::new();
            properties.insert(field.to_string(), v.clone());
            layer.push(Value::Object(properties));
        }
        layer
    }

    fn generate(layer: &GeoLayer, config: Value) -> GeneratedStyle {
        generate_style_from_config(layer, config, &StyleSettings::default()).unwrap()
    }

    #[test]
    fn test_fixed_values() {
        let style = generate(
            &layer("a", &[]),
            json!({
                "map_style_type": "fill",
                "style": {
                    "fill_color": {"type": "fixed", "value": "#000000"},
                    "fill_opacity": {"type": "fixed", "value": 0.4, "field": "b", "no_value": 0}
                }
            }),
        );
        let (map_style, legends) = style.to_values().unwrap();
        assert_eq!(
            map_style,
            json!({
                "type": "fill",
                "paint": {
                    "fill-color": "#000000",
                    "fill-opacity": ["case", ["==", ["typeof", ["get", "b"]], "number"], 0.4, 0]
                }
            })
        );
        assert!(legends.is_empty());
    }

    #[test]
    fn test_graduated_equal_interval() {
        let style = generate(
            &layer("a", &[json!(1), json!(2)]),
            json!({
                "map_style_type": "fill",
                "style": {"fill_color": {
                    "type": "variable",
                    "field": "a",
                    "analysis": "graduated",
                    "method": "equal_interval",
                    "values": ["#aa0000", "#770000", "#330000", "#000000"]
                }}
            }),
        );
        assert_eq!(
            style.map_style.paint["fill-color"].to_value(),
            json!(["step", ["get", "a"], "#aa0000", 1.25, "#770000", 1.5, "#330000", 1.75, "#000000"])
        );
        assert!(style.legends.is_empty());
        assert!(style.map_style.layout.is_none());
    }

    #[test]
    fn test_graduated_without_data() {
        let style = generate(
            &layer("a", &[]),
            json!({
                "map_style_type": "fill",
                "style": {"fill_color": {
                    "type": "variable",
                    "field": "a",
                    "analysis": "graduated",
                    "method": "jenks",
                    "values": ["#aa0000", "#770000"],
                    "no_value": "#CC0000",
                    "generate_legend": true
                }}
            }),
        );
        assert_eq!(style.map_style.paint["fill-color"], Expression::literal("#CC0000"));
        assert_eq!(style.legends.len(), 1);
        assert_eq!(style.legends[0].len(), 1);
        assert_eq!(style.legends[0].items[0].color, Some(json!("#CC0000")));
    }

    #[test]
    fn test_proportional_radius() {
        let style = generate(
            &layer("a", &[json!(0), json!(1), json!(129)]),
            json!({
                "map_style_type": "circle",
                "style": {
                    "circle_color": {"type": "fixed", "value": "#0000cc"},
                    "circle_radius": {
                        "type": "variable",
                        "field": "a",
                        "analysis": "proportionnal",
                        "max_radius": 200,
                        "generate_legend": true
                    }
                }
            }),
        );
        let layout = style.map_style.layout.as_ref().unwrap();
        assert_eq!(layout["circle-sort-key"].to_value(), json!(["-", ["get", "a"]]));

        let radius = style.map_style.paint["circle-radius"].to_value();
        assert_eq!(radius[0], json!("interpolate"));
        assert_eq!(radius[2], json!(["sqrt", ["/", ["get", "a"], ["pi"]]]));
        assert_eq!(radius[3], json!(0));
        assert_relative_eq!(radius[5].as_f64().unwrap(), 6.432750982580687, max_relative = 1e-12);
        assert_eq!(radius[6], json!(100));

        let legend = &style.legends[0];
        assert_eq!(legend.stacked_circles, Some(true));
        assert_eq!(legend.len(), 6);
        assert_eq!(legend.items[0].color, Some(json!("#0000cc")));
    }

    #[test]
    fn test_proportional_without_data() {
        let style = generate(
            &layer("a", &[json!(null), json!(-3)]),
            json!({
                "map_style_type": "line",
                "style": {"line_width": {
                    "type": "variable",
                    "field": "a",
                    "analysis": "proportional",
                    "max_value": 10
                }}
            }),
        );
        assert_eq!(style.map_style.paint["line-width"], Expression::number(0.0));
        assert!(style.map_style.layout.is_some());
    }

    #[test]
    fn test_categorized_omitted_without_categories() {
        let style = generate(
            &layer("a", &[json!("x")]),
            json!({
                "map_style_type": "fill",
                "style": {"fill_color": {
                    "type": "variable",
                    "field": "a",
                    "analysis": "categorized",
                    "categories": [],
                    "generate_legend": true
                }}
            }),
        );
        assert!(style.map_style.paint.is_empty());
        assert_eq!(style.legends.len(), 1);
        assert!(style.legends[0].is_empty());
    }

    #[test]
    fn test_categorized_color_default() {
        let style = generate(
            &layer("a", &[json!("x")]),
            json!({
                "map_style_type": "fill",
                "style": {"fill_color": {
                    "type": "variable",
                    "field": "a",
                    "analysis": "categorized",
                    "categories": [{"name": "x", "value": "#ff0000"}]
                }}
            }),
        );
        assert_eq!(
            style.map_style.paint["fill-color"].to_value(),
            json!(["match", ["get", "a"], "x", "#ff0000", "#DDDDDD"])
        );
    }

    #[test]
    fn test_layer_color_default() {
        let config = WizardConfig::from_value(json!({"map_style_type": "circle", "style": {}})).unwrap();
        let color = layer_color(&config, &StyleSettings::default());
        assert_eq!(color, LayerColor::new(json!("#DDDDDD"), None));
    }

    #[test]
    fn test_rounded_positive_range() {
        let source = layer("a", &[json!(106.8), json!(59.2), json!(49.4), json!(0.1), json!(0)]);
        assert_eq!(rounded_positive_range(&source, "a").unwrap(), Some((0.1, 110.0)));

        let source = layer("a", &[json!(0.004), json!(30)]);
        assert_eq!(rounded_positive_range(&source, "a").unwrap(), Some((0.004, 30.0)));

        let source = layer("a", &[json!(0)]);
        assert_eq!(rounded_positive_range(&source, "a").unwrap(), None);
    }
}
