//! JSON emission of numbers

use serde_json::{Number, Value};

/// Largest magnitude at which every integer is exactly representable
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert a float into a JSON number
///
/// Integral values are written as JSON integers so that thresholds such as
/// `10.0` render as `10`. Non-finite values have no JSON form and map to null.
pub fn json_number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}
