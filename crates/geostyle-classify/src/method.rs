//! Classification methods

use geostyle_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Method used to split a numeric property into classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ClassificationMethod {
    /// Classes of identical width between min and max
    EqualInterval,
    /// Classes holding the same number of features
    Quantile,
    /// Natural breaks, approximated with 1-D k-means
    Jenks,
}

impl ClassificationMethod {
    pub const ALL: [Self; 3] = [Self::EqualInterval, Self::Quantile, Self::Jenks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EqualInterval => "equal_interval",
            Self::Quantile => "quantile",
            Self::Jenks => "jenks",
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

impl TryFrom<String> for ClassificationMethod {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClassificationMethod> for &'static str {
    fn from(method: ClassificationMethod) -> Self {
        method.as_str()
    }
}
