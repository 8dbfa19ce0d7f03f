//! Legends of graduated (classed) properties

use crate::types::{Bound, Legend, LegendBoundaries, LegendItem, LegendShape};
use crate::LayerColor;
use geostyle_core::Boundaries;
use serde_json::Value;

/// One item per class, lower bound included, upper bound included on the last class only
fn class_items<'a, F>(boundaries: &Boundaries, outputs: &'a [Value], shape: LegendShape, fill: F) -> Vec<LegendItem>
where
    F: Fn(LegendItem, &'a Value) -> LegendItem,
{
    let class_count = boundaries.class_count();
    boundaries
        .classes()
        .zip(outputs)
        .enumerate()
        .map(|(index, ((lower, upper), output))| {
            let item = LegendItem::new(shape).with_boundaries(LegendBoundaries::between(
                Bound::new(lower, true),
                Bound::new(upper, index + 1 == class_count),
            ));
            fill(item, output)
        })
        .collect()
}

/// Put the optional "no value" item first, then list from highest class down
fn descending(mut items: Vec<LegendItem>, no_value: Option<LegendItem>) -> Legend {
    if let Some(item) = no_value {
        items.insert(0, item);
    }
    items.reverse();
    Legend::new(items)
}

/// Legend of a graduated color
///
/// Without boundaries a single item stands for the whole layer, colored with
/// `no_value` or else the first color.
pub fn graduated_color_legend(
    boundaries: Option<&Boundaries>,
    colors: &[Value],
    no_value: Option<&Value>,
    shape: LegendShape,
) -> Legend {
    match boundaries {
        Some(boundaries) => {
            let items = class_items(boundaries, colors, shape, |item, color| {
                item.with_color(color.clone())
            });
            let no_value = no_value.map(|color| {
                LegendItem::new(shape)
                    .with_color(color.clone())
                    .with_boundaries(LegendBoundaries::no_value())
            });
            descending(items, no_value)
        }
        None => {
            let mut item = LegendItem::new(shape).with_boundaries(LegendBoundaries::no_value());
            item.color = no_value.or(colors.first()).cloned();
            Legend::new(vec![item])
        }
    }
}

/// Legend of a graduated size (width, height or radius)
///
/// Items carry the class size and the layer color. Without boundaries a
/// single item colored with the layer's "no value" color stands for the
/// whole layer.
pub fn graduated_size_legend(
    boundaries: Option<&Boundaries>,
    sizes: &[Value],
    no_value: Option<&Value>,
    layer_color: &LayerColor,
    shape: LegendShape,
) -> Legend {
    match boundaries {
        Some(boundaries) => {
            let items = class_items(boundaries, sizes, shape, |item, size| {
                item.with_color(layer_color.color.clone()).with_size(size.clone())
            });
            let no_value = no_value.map(|size| {
                LegendItem::new(shape)
                    .with_color(layer_color.no_value_or_color())
                    .with_size(size.clone())
                    .with_boundaries(LegendBoundaries::no_value())
            });
            descending(items, no_value)
        }
        None => Legend::new(vec![LegendItem::new(shape)
            .with_color(layer_color.no_value_or_color())
            .with_boundaries(LegendBoundaries::no_value())]),
    }
}
