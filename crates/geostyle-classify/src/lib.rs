//! Class boundary computation for graduated map styles
//!
//! This crate turns a numeric feature property into N+1 ordered class
//! boundaries using one of three methods:
//!
//! - **Equal interval**: classes of identical width between min and max
//! - **Quantile**: classes holding the same number of features (`ntile`)
//! - **Jenks**: natural breaks, approximated with deterministic 1-D k-means
//!
//! When the property has no numeric value at all, no boundaries are
//! produced and callers fall back to a default style.
//!
//! # Example
//!
//! ```rust
//! use geostyle_classify::{discretize, ClassificationMethod};
//! use geostyle_core::GeoLayer;
//! use serde_json::json;
//!
//! let mut layer = GeoLayer::new(1);
//! layer.push(json!({ "a": 1 }));
//! layer.push(json!({ "a": 2 }));
//!
//! let boundaries = discretize(&layer, "a", ClassificationMethod::EqualInterval, 4)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(&boundaries[..], &[1.0, 1.25, 1.5, 1.75, 2.0]);
//! ```

pub mod equal_interval;
pub mod kmeans;
pub mod method;
pub mod quantile;
pub mod traits;

pub use equal_interval::EqualInterval;
pub use kmeans::{Cluster, Jenks, KMeans1d};
pub use method::ClassificationMethod;
pub use quantile::{ntile_buckets, Quantile};
pub use traits::Classifier;

pub use geostyle_core::{Boundaries, Error, Result};

use geostyle_core::FeatureSource;
use tracing::{debug, instrument};

/// Compute class boundaries of `field` with the given method
///
/// Returns `Ok(None)` when there is nothing to classify. Fewer than
/// `class_count + 1` boundaries come back from quantile and Jenks when the
/// data holds fewer values than classes.
#[instrument(skip(source), fields(layer = source.layer_id()))]
pub fn discretize<S: FeatureSource + ?Sized>(
    source: &S,
    field: &str,
    method: ClassificationMethod,
    class_count: usize,
) -> Result<Option<Boundaries>> {
    let boundaries = match method {
        ClassificationMethod::EqualInterval => EqualInterval.classify(source, field, class_count)?,
        ClassificationMethod::Quantile => Quantile.classify(source, field, class_count)?,
        ClassificationMethod::Jenks => Jenks::default().classify(source, field, class_count)?,
    };
    debug!(?boundaries, "discretized");
    Ok(boundaries)
}

/// Parse a method name and compute class boundaries
pub fn discretize_by_name<S: FeatureSource + ?Sized>(
    source: &S,
    field: &str,
    method: &str,
    class_count: usize,
) -> Result<Option<Boundaries>> {
    discretize(source, field, method.parse()?, class_count)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        discretize, Boundaries, ClassificationMethod, Classifier, EqualInterval, Error, Jenks,
        Quantile, Result,
    };
}
