//! Typed style expression tree
//!
//! Only the part of the Mapbox GL expression grammar that style generation
//! emits is modelled. Trees serialize to the nested-array JSON form the
//! renderer consumes.

use geostyle_core::json_number;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// A Mapbox GL style expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Scalar literal: number, string, boolean or null
    Literal(Value),
    /// `["get", field]`
    Get(String),
    /// `["has", field]`
    Has(String),
    /// `["pi"]`
    Pi,
    /// `["sqrt", x]`
    Sqrt(Box<Expression>),
    /// `["/", a, b]`
    Div(Box<Expression>, Box<Expression>),
    /// `["-", x]`
    Negate(Box<Expression>),
    /// `["typeof", x]`
    TypeOf(Box<Expression>),
    /// `["==", a, b]`
    Equal(Box<Expression>, Box<Expression>),
    /// `["step", input, base, stop_1, output_1, ...]`
    Step {
        input: Box<Expression>,
        base: Box<Expression>,
        stops: Vec<(f64, Expression)>,
    },
    /// `["interpolate", ["linear"], input, stop_0, output_0, ...]`
    Interpolate {
        input: Box<Expression>,
        stops: Vec<(f64, Expression)>,
    },
    /// `["case", condition_1, output_1, ..., fallback]`
    Case {
        branches: Vec<(Expression, Expression)>,
        fallback: Box<Expression>,
    },
    /// `["match", input, label_1, output_1, ..., fallback]`
    Match {
        input: Box<Expression>,
        arms: Vec<(Value, Expression)>,
        fallback: Box<Expression>,
    },
}

impl Expression {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Numeric literal, integral values written as integers
    pub fn number(value: f64) -> Self {
        Self::Literal(json_number(value))
    }

    pub fn get(field: impl Into<String>) -> Self {
        Self::Get(field.into())
    }

    pub fn has(field: impl Into<String>) -> Self {
        Self::Has(field.into())
    }

    /// `["sqrt", ["/", ["get", field], ["pi"]]]`, the radius of a circle of area `field`
    pub fn circle_radius(field: impl Into<String>) -> Self {
        Self::Sqrt(Box::new(Self::Div(
            Box::new(Self::get(field)),
            Box::new(Self::Pi),
        )))
    }

    /// `["-", ["get", field]]`, drawing larger values first
    pub fn descending_sort_key(field: impl Into<String>) -> Self {
        Self::Negate(Box::new(Self::get(field)))
    }

    /// `["==", ["typeof", input], "number"]`
    pub fn is_number(input: Expression) -> Self {
        Self::Equal(
            Box::new(Self::TypeOf(Box::new(input))),
            Box::new(Self::literal("number")),
        )
    }

    /// Convert to the nested-array JSON form
    pub fn to_value(&self) -> Value {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Get(field) => json!(["get", field]),
            Self::Has(field) => json!(["has", field]),
            Self::Pi => json!(["pi"]),
            Self::Sqrt(x) => json!(["sqrt", x.to_value()]),
            Self::Div(a, b) => json!(["/", a.to_value(), b.to_value()]),
            Self::Negate(x) => json!(["-", x.to_value()]),
            Self::TypeOf(x) => json!(["typeof", x.to_value()]),
            Self::Equal(a, b) => json!(["==", a.to_value(), b.to_value()]),
            Self::Step { input, base, stops } => {
                let mut out = vec![json!("step"), input.to_value(), base.to_value()];
                for (stop, output) in stops {
                    out.push(json_number(*stop));
                    out.push(output.to_value());
                }
                Value::Array(out)
            }
            Self::Interpolate { input, stops } => {
                let mut out = vec![json!("interpolate"), json!(["linear"]), input.to_value()];
                for (stop, output) in stops {
                    out.push(json_number(*stop));
                    out.push(output.to_value());
                }
                Value::Array(out)
            }
            Self::Case { branches, fallback } => {
                let mut out = vec![json!("case")];
                for (condition, output) in branches {
                    out.push(condition.to_value());
                    out.push(output.to_value());
                }
                out.push(fallback.to_value());
                Value::Array(out)
            }
            Self::Match {
                input,
                arms,
                fallback,
            } => {
                let mut out = vec![json!("match"), input.to_value()];
                for (label, output) in arms {
                    out.push(label.clone());
                    out.push(output.to_value());
                }
                out.push(fallback.to_value());
                Value::Array(out)
            }
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&Value> for Expression {
    fn from(value: &Value) -> Self {
        Self::Literal(value.clone())
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        expr.to_value()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_forms() {
        assert_eq!(Expression::get("a").to_value(), json!(["get", "a"]));
        assert_eq!(Expression::has("a").to_value(), json!(["has", "a"]));
        assert_eq!(Expression::Pi.to_value(), json!(["pi"]));
        assert_eq!(Expression::number(100.0).to_value(), json!(100));
        assert_eq!(Expression::literal("#fff").to_value(), json!("#fff"));
    }

    #[test]
    fn test_circle_radius() {
        assert_eq!(
            Expression::circle_radius("a").to_value(),
            json!(["sqrt", ["/", ["get", "a"], ["pi"]]])
        );
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(
            Expression::descending_sort_key("a").to_value(),
            json!(["-", ["get", "a"]])
        );
    }

    #[test]
    fn test_is_number() {
        assert_eq!(
            Expression::is_number(Expression::get("b")).to_value(),
            json!(["==", ["typeof", ["get", "b"]], "number"])
        );
    }

    #[test]
    fn test_serialize_matches_to_value() {
        let expr = Expression::Step {
            input: Box::new(Expression::get("a")),
            base: Box::new(Expression::literal("#aa0000")),
            stops: vec![(10.0, Expression::literal("#770000"))],
        };
        assert_eq!(serde_json::to_value(&expr).unwrap(), expr.to_value());
        assert_eq!(
            serde_json::to_string(&expr).unwrap(),
            r##"["step",["get","a"],"#aa0000",10,"#770000"]"##
        );
    }
}
