//! Expression builders used by style generation

use crate::expression::Expression;
use geostyle_core::category::{split_fallback, Category};
use serde_json::Value;

/// Step expression selecting `values[i]` for the class starting at `boundaries[i]`
///
/// The first value is the base for inputs below `boundaries[1]`. Extra
/// boundaries or values beyond the shorter list are ignored. Returns `None`
/// when either list is empty.
pub fn gen_style_steps(input: Expression, boundaries: &[f64], values: &[Value]) -> Option<Expression> {
    let (base, outputs) = values.split_first()?;
    let stops = boundaries.get(1..)?;
    Some(Expression::Step {
        input: Box::new(input),
        base: Box::new(base.into()),
        stops: stops
            .iter()
            .zip(outputs)
            .map(|(&stop, output)| (stop, output.into()))
            .collect(),
    })
}

/// Linear interpolation from `boundaries[i]` to `values[i]`
pub fn gen_style_interpolate(input: Expression, boundaries: &[f64], values: &[f64]) -> Expression {
    Expression::Interpolate {
        input: Box::new(input),
        stops: boundaries
            .iter()
            .zip(values)
            .map(|(&stop, &output)| (stop, Expression::number(output)))
            .collect(),
    }
}

/// Guard an expression against features where `key` is not a number
///
/// Both present: `["case", ["==", ["typeof", key], "number"], with_value, with_no_value]`.
/// Only one present: that one unchanged.
pub fn get_style_no_value_condition(
    key: Expression,
    with_value: Option<Expression>,
    with_no_value: Option<Expression>,
) -> Option<Expression> {
    match (with_value, with_no_value) {
        (Some(with_value), Some(with_no_value)) => Some(Expression::Case {
            branches: vec![(Expression::is_number(key), with_value)],
            fallback: Box::new(with_no_value),
        }),
        (with_value, with_no_value) => with_value.or(with_no_value),
    }
}

/// Match expression mapping each named category of `field` to its value
///
/// A category with a null name is the fallback. When one exists the match
/// is wrapped as `["case", ["has", field], match, fallback]` so features
/// without the property take it too; otherwise unmatched features take
/// `default_no_value`. A fallback alone yields the fallback value, and no
/// categories at all yield `None`.
pub fn gen_categorized_value_style(
    field: &str,
    categories: &[Category],
    default_no_value: Value,
) -> Option<Expression> {
    if categories.is_empty() {
        return None;
    }
    let (named, fallback) = split_fallback(categories);
    if named.is_empty() {
        return fallback.map(Expression::from);
    }

    let matched = Expression::Match {
        input: Box::new(Expression::get(field)),
        arms: named
            .iter()
            .map(|c| (c.name.clone(), Expression::from(&c.value)))
            .collect(),
        fallback: Box::new(fallback.cloned().unwrap_or(default_no_value).into()),
    };

    Some(match fallback {
        Some(fallback) => Expression::Case {
            branches: vec![(Expression::has(field), matched)],
            fallback: Box::new(fallback.into()),
        },
        None => matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn colors() -> Vec<Value> {
        vec![json!("#aa0000"), json!("#770000"), json!("#330000"), json!("#000000")]
    }

    #[test]
    fn test_steps() {
        let expr = gen_style_steps(Expression::get("a"), &[1.0, 1.25, 1.5, 1.75, 2.0], &colors());
        assert_eq!(
            expr.unwrap().to_value(),
            json!(["step", ["get", "a"], "#aa0000", 1.25, "#770000", 1.5, "#330000", 1.75, "#000000"])
        );
    }

    #[test]
    fn test_steps_fewer_boundaries() {
        let expr = gen_style_steps(Expression::get("a"), &[1.0, 2.0, 2.0], &colors());
        assert_eq!(
            expr.unwrap().to_value(),
            json!(["step", ["get", "a"], "#aa0000", 2, "#770000", 2, "#330000"])
        );
    }

    #[test]
    fn test_steps_empty() {
        assert!(gen_style_steps(Expression::get("a"), &[], &colors()).is_none());
        assert!(gen_style_steps(Expression::get("a"), &[1.0, 2.0], &[]).is_none());
    }

    #[test]
    fn test_interpolate() {
        let expr = gen_style_interpolate(
            Expression::circle_radius("a"),
            &[0.0, 6.432750982580687],
            &[0.0, 100.0],
        );
        assert_eq!(
            expr.to_value(),
            json!([
                "interpolate",
                ["linear"],
                ["sqrt", ["/", ["get", "a"], ["pi"]]],
                0,
                0,
                6.432750982580687,
                100
            ])
        );
    }

    #[test]
    fn test_no_value_condition() {
        let expr = get_style_no_value_condition(
            Expression::get("b"),
            Some(Expression::number(0.4)),
            Some(Expression::number(0.0)),
        );
        assert_eq!(
            expr.unwrap().to_value(),
            json!(["case", ["==", ["typeof", ["get", "b"]], "number"], 0.4, 0])
        );
    }

    #[test]
    fn test_no_value_condition_partial() {
        let only_value =
            get_style_no_value_condition(Expression::get("b"), Some("#fff".into()), None);
        assert_eq!(only_value.unwrap().to_value(), json!("#fff"));

        let only_fallback =
            get_style_no_value_condition(Expression::get("b"), None, Some("#000".into()));
        assert_eq!(only_fallback.unwrap().to_value(), json!("#000"));

        assert!(get_style_no_value_condition(Expression::get("b"), None, None).is_none());
    }

    #[test]
    fn test_categorized() {
        let categories = vec![Category::new("forest", "#00aa00"), Category::new("water", "#0000aa")];
        let expr = gen_categorized_value_style("kind", &categories, json!("#DDDDDD"));
        assert_eq!(
            expr.unwrap().to_value(),
            json!(["match", ["get", "kind"], "forest", "#00aa00", "water", "#0000aa", "#DDDDDD"])
        );
    }

    #[test]
    fn test_categorized_with_fallback() {
        let categories = vec![
            Category::new("small", 2),
            Category::fallback(1),
            Category::new("large", 8),
        ];
        let expr = gen_categorized_value_style("kind", &categories, json!(0));
        assert_eq!(
            expr.unwrap().to_value(),
            json!([
                "case",
                ["has", "kind"],
                ["match", ["get", "kind"], "small", 2, "large", 8, 1],
                1
            ])
        );
    }

    #[test]
    fn test_categorized_only_fallback() {
        let expr = gen_categorized_value_style("kind", &[Category::fallback(5)], json!(0));
        assert_eq!(expr.unwrap().to_value(), json!(5));
    }

    #[test]
    fn test_categorized_empty() {
        assert!(gen_categorized_value_style("kind", &[], json!(0)).is_none());
    }

    proptest! {
        #[test]
        fn prop_step_arity(classes in 1usize..12) {
            let boundaries: Vec<f64> = (0..=classes).map(|i| i as f64).collect();
            let values: Vec<Value> = (0..classes).map(|i| json!(i)).collect();
            let expr = gen_style_steps(Expression::get("a"), &boundaries, &values).unwrap();
            let array = expr.to_value();
            prop_assert_eq!(array.as_array().unwrap().len(), 3 + 2 * (boundaries.len() - 2));
        }
    }
}
