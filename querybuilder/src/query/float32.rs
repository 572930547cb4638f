//! `serialize_with` helpers for `f32` weights and tie-breakers
//!
//! Integral values encode without a fractional part (`3`, not `3.0`) and
//! others in their shortest `f32` form (`1.1`, not `1.100000023841858`).
//! NaN and infinities have no JSON form and fail the encode.

use serde::ser::Error;
use serde::Serializer;

pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if !value.is_finite() {
        return Err(S::Error::custom(format!(
            "non-finite number {} has no JSON representation",
            value
        )));
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return serializer.serialize_i64(value as i64);
    }
    let shortest = value
        .to_string()
        .parse::<f64>()
        .map_err(|e| S::Error::custom(e.to_string()))?;
    serializer.serialize_f64(shortest)
}

pub fn serialize_option<S: Serializer>(
    value: &Option<f32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize(value, serializer),
        None => serializer.serialize_none(),
    }
}
