use std::fmt;

use serde::{Deserialize, Serialize};

/// A deterministic project identifier derived from the row's zero-based
/// position in the input file.
///
/// Stable for a given input file and row order; not stable across
/// reordering or insertion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self(format!("project_{ordinal}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
