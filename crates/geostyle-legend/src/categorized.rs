//! Legends of categorized properties

use crate::types::{Legend, LegendItem, LegendShape};
use geostyle_core::category::{split_fallback, Category};
use serde_json::Value;

/// Item field the category value is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendField {
    Color,
    Size,
}

/// One labelled item per named category, in configuration order
///
/// The fallback category, if any, comes last with a null label. Size
/// legends also carry the layer `color`.
pub fn categorized_legend(
    categories: &[Category],
    shape: LegendShape,
    field: LegendField,
    color: Option<&Value>,
) -> Legend {
    let item = |value: &Value, label: Value| {
        let item = LegendItem::new(shape).with_label(label);
        let item = match field {
            LegendField::Color => item.with_color(value.clone()),
            LegendField::Size => item.with_size(value.clone()),
        };
        match color {
            Some(color) => item.with_color(color.clone()),
            None => item,
        }
    };

    let (named, fallback) = split_fallback(categories);
    let mut items: Vec<LegendItem> = named
        .into_iter()
        .map(|c| item(&c.value, c.name.clone()))
        .collect();
    if let Some(value) = fallback {
        items.push(item(value, Value::Null));
    }
    Legend::new(items)
}
