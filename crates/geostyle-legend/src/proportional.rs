//! Legends of proportional symbols

use crate::types::{Bound, Legend, LegendBoundaries, LegendItem, LegendShape};
use crate::LayerColor;
use geostyle_core::symbols::{
    circle_boundaries_candidate, circle_boundaries_filter_values, size_boundaries_candidate,
};
use geostyle_core::Result;
use std::f64::consts::PI;
use tracing::trace;

/// Single item standing for the whole layer when there is no positive value
fn no_data_legend(no_value_size: Option<f64>, layer_color: &LayerColor, shape: LegendShape) -> Legend {
    let mut item = LegendItem::new(shape)
        .with_color(layer_color.no_value_or_color())
        .with_boundaries(LegendBoundaries::no_value());
    if let Some(size) = no_value_size {
        item = item.with_diameter(size);
    }
    Legend::new(vec![item])
}

/// Stacked circle legend of a proportional radius
///
/// `range` is the rounded positive `(min, max)` of the property, `None` when
/// no feature has a positive value. Legend values are "nice" numbers between
/// the extremes, kept only when their circles differ by at least
/// `min_pixel_gap` in height; a circle of value `max` is `max_diameter` wide.
pub fn proportional_circle_legend(
    range: Option<(f64, f64)>,
    max_diameter: f64,
    layer_color: &LayerColor,
    no_value_size: Option<f64>,
    shape: LegendShape,
    min_pixel_gap: f64,
) -> Result<Legend> {
    let Some((min, max)) = range else {
        return Ok(no_data_legend(no_value_size, layer_color, shape));
    };

    let mut values = vec![max];
    values.extend(circle_boundaries_candidate(Some(min), Some(max))?);
    values.push(min);
    let values = circle_boundaries_filter_values(&values, Some(max), Some(max_diameter), min_pixel_gap);
    trace!(?values, min, max, "circle legend values");

    let r = max_diameter / (max / PI).sqrt();
    let mut items: Vec<LegendItem> = values
        .into_iter()
        .map(|b| {
            LegendItem::new(shape)
                .with_diameter((b / PI).sqrt() * r)
                .with_boundaries(LegendBoundaries::lower_only(Bound::value(b)))
                .with_color(layer_color.color.clone())
        })
        .collect();

    if let Some(size) = no_value_size {
        items.push(
            LegendItem::new(shape)
                .with_diameter(size * 2.0)
                .with_boundaries(LegendBoundaries::lower_only(Bound {
                    value: None,
                    included: None,
                }))
                .with_color(layer_color.no_value_or_color()),
        );
    }

    Ok(Legend::stacked(items))
}

/// Legend of a proportional linear size, e.g. a line width
///
/// Shows the maximum, a midpoint and the minimum, the minimum clamped up to
/// `min_legend_height`. Sizes scale linearly so that `max` renders at
/// `max_value`.
pub fn proportional_size_legend(
    range: Option<(f64, f64)>,
    max_value: f64,
    layer_color: &LayerColor,
    no_value_size: Option<f64>,
    shape: LegendShape,
    min_legend_height: f64,
) -> Legend {
    let Some((min, max)) = range else {
        return no_data_legend(no_value_size, layer_color, shape);
    };
    let min = min.max(min_legend_height).min(max);

    let mut values = vec![max];
    values.extend(size_boundaries_candidate(min, max));
    values.push(min);
    trace!(?values, "size legend values");

    let mut items: Vec<LegendItem> = values
        .into_iter()
        .map(|b| {
            LegendItem::new(shape)
                .with_size_number((b / max) * max_value)
                .with_boundaries(LegendBoundaries::lower_only(Bound::value(b)))
                .with_color(layer_color.color.clone())
        })
        .collect();

    if let Some(size) = no_value_size {
        items.push(
            LegendItem::new(shape)
                .with_size_number(size)
                .with_boundaries(LegendBoundaries::lower_only(Bound {
                    value: None,
                    included: None,
                }))
                .with_color(layer_color.no_value_or_color()),
        );
    }

    Legend::new(items)
}
