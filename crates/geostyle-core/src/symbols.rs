//! Legend values for proportional symbols
//!
//! Implements the candidate/filter approach of "Self-Adjusting Legends for
//! Proportional Symbol Maps": generate "nice" values between the data
//! extremes, then keep those whose rendered circles are far enough apart to
//! be told apart when stacked.

use crate::{Error, Result};
use std::f64::consts::PI;

/// Bases of the "nice" values, walked in this order at every power of ten
const NICE_BASES: [f64; 3] = [5.0, 2.5, 1.0];

/// Descending "nice" values strictly between `min` and `max`
///
/// Returns an empty list when either bound is unknown. Fails when `min` is
/// not strictly positive, since the walk towards it would never end.
pub fn circle_boundaries_candidate(min: Option<f64>, max: Option<f64>) -> Result<Vec<f64>> {
    let (Some(min), Some(max)) = (min, max) else {
        return Ok(Vec::new());
    };
    if min <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "circle legend minimum must be strictly positive, got {min}"
        )));
    }
    if !max.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "circle legend maximum must be finite, got {max}"
        )));
    }
    if max <= min {
        return Ok(Vec::new());
    }

    let mut scale = 10f64.powf(max.log10().floor());
    let mut candidates = Vec::new();
    'walk: loop {
        for base in NICE_BASES {
            let value = scale * base;
            if value <= min {
                break 'walk;
            }
            if value < max {
                candidates.push(value);
            }
        }
        scale /= 10.0;
    }
    Ok(candidates)
}

/// Filter descending legend values by rendered height
///
/// `values` starts with the maximum and ends with the data minimum. The
/// first value is always kept, then each following candidate whose height
/// is at least `min_pixel_gap` below the last kept one. The trailing minimum
/// only bounds the walk. Heights are `sqrt(v / π) * r` with `r` chosen so
/// that `max_value` renders at `max_size`.
pub fn circle_boundaries_filter_values(
    values: &[f64],
    max_value: Option<f64>,
    max_size: Option<f64>,
    min_pixel_gap: f64,
) -> Vec<f64> {
    let (Some(max_value), Some(max_size)) = (max_value, max_size) else {
        return Vec::new();
    };
    let Some((&first, rest)) = values.split_first() else {
        return Vec::new();
    };

    let r = max_size / (max_value / PI).sqrt();
    let height = |v: f64| (v / PI).sqrt() * r;

    let mut kept = vec![first];
    let mut last_height = height(first);
    for &value in &rest[..rest.len().saturating_sub(1)] {
        let h = height(value);
        if last_height - h >= min_pixel_gap {
            kept.push(value);
            last_height = h;
        }
    }
    kept
}

/// Intermediate legend values for a linear size scale
pub fn size_boundaries_candidate(min: f64, max: f64) -> Vec<f64> {
    vec![(max - min) / 2.0]
}
