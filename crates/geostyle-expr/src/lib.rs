//! Mapbox GL style expressions for generated map styles
//!
//! [`Expression`] is a typed tree covering the operators style generation
//! emits (`get`, `has`, `step`, `interpolate`, `case`, `match`, `==`,
//! `typeof`, `sqrt`, `/`, `pi`, `-`). It serializes to the nested-array
//! JSON form, with integral numbers written as integers.
//!
//! # Example
//!
//! ```rust
//! use geostyle_expr::{gen_style_steps, get_style_no_value_condition, Expression};
//! use serde_json::json;
//!
//! let steps = gen_style_steps(
//!     Expression::get("a"),
//!     &[0.0, 10.0, 20.0],
//!     &[json!("#aa0000"), json!("#770000")],
//! );
//! let style = get_style_no_value_condition(Expression::get("a"), steps, Some("#000000".into()));
//!
//! assert_eq!(
//!     serde_json::to_value(style.unwrap()).unwrap(),
//!     json!([
//!         "case",
//!         ["==", ["typeof", ["get", "a"]], "number"],
//!         ["step", ["get", "a"], "#aa0000", 10, "#770000"],
//!         "#000000"
//!     ])
//! );
//! ```

pub mod builders;
pub mod expression;

pub use builders::{
    gen_categorized_value_style, gen_style_interpolate, gen_style_steps,
    get_style_no_value_condition,
};
pub use expression::Expression;
