use crate::{CoreError, ErrorLocation};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output selector for classification predictions: class labels or
/// per-class probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Labels,
    Probabilities,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Labels => "labels",
            OutputKind::Probabilities => "probabilities",
        }
    }
}

impl FromStr for OutputKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labels" => Ok(OutputKind::Labels),
            "probabilities" => Ok(OutputKind::Probabilities),
            other => Err(CoreError::InvalidOutputKind {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
