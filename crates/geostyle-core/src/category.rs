//! Categories of a categorized analysis

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One category of a categorized property
///
/// A category whose `name` is null is the fallback applied to every feature
/// matching no other category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Value,
    pub value: Value,
}

impl Category {
    pub fn new(name: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create the fallback category
    pub fn fallback(value: impl Into<Value>) -> Self {
        Self {
            name: Value::Null,
            value: value.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.name.is_null()
    }
}

/// Named categories in order, and the value of the last fallback category
pub fn split_fallback(categories: &[Category]) -> (Vec<&Category>, Option<&Value>) {
    let mut named = Vec::with_capacity(categories.len());
    let mut fallback = None;
    for category in categories {
        if category.is_fallback() {
            fallback = Some(&category.value);
        } else {
            named.push(category);
        }
    }
    (named, fallback)
}
