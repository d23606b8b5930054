//! Stage status vocabulary.
//!
//! Both input schemas share one closed set of status values. A missing
//! status is not an error; it defaults to [`StageStatus::Normal`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a single project stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// On track, nothing noteworthy.
    #[default]
    Normal,
    /// Blocking problem, needs immediate attention.
    Critical,
    /// At risk of slipping.
    Warning,
    /// Stage finished.
    Completed,
    /// Behind schedule.
    Delayed,
}

impl StageStatus {
    /// All accepted wire values, in declaration order.
    pub const ALLOWED: [&'static str; 5] =
        ["normal", "critical", "warning", "completed", "delayed"];

    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Normal => "normal",
            StageStatus::Critical => "critical",
            StageStatus::Warning => "warning",
            StageStatus::Completed => "completed",
            StageStatus::Delayed => "delayed",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(StageStatus::Normal),
            "critical" => Ok(StageStatus::Critical),
            "warning" => Ok(StageStatus::Warning),
            "completed" => Ok(StageStatus::Completed),
            "delayed" => Ok(StageStatus::Delayed),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}
