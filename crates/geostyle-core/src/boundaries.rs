//! Class boundaries
//!
//! N+1 non-decreasing thresholds delimiting N classes. Absence of
//! boundaries (insufficient data to classify) is expressed as
//! `Option<Boundaries>` by the producers, never as an empty list.

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::ops::Deref;

/// Validated, non-decreasing list of at least two thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries(Vec<f64>);

impl Boundaries {
    /// Validate a list of thresholds
    ///
    /// Fails with [`Error::InvalidConfig`] when fewer than two values are
    /// given, when a value is not finite, or when the list decreases.
    pub fn try_new(values: Vec<f64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::too_few_boundaries(values.len()));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig(
                "\"boundaries\" must only contain finite numbers".to_string(),
            ));
        }
        if values.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::InvalidConfig(
                "\"boundaries\" must be sorted in ascending order".to_string(),
            ));
        }
        Ok(Self(values))
    }

    /// Number of classes delimited
    pub fn class_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Lowest threshold
    pub fn first(&self) -> f64 {
        self.0[0]
    }

    /// Highest threshold
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Consecutive `(lower, upper)` pairs, one per class
    pub fn classes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Boundaries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Boundaries {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_new(values)
    }
}

impl Serialize for Boundaries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
