//! Canonical project and stage types.
//!
//! Both input schemas normalize to this one shape so the renderer never
//! branches on where a project came from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime::whole_days_between;
use crate::ids::ProjectId;
use crate::status::StageStatus;

/// A named, time-bounded phase of a project.
///
/// `start < end` holds strictly for every validated stage. Stages within
/// a project keep their input order and may overlap in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_days: i64,
    pub progress_percent: u8,
    pub status: StageStatus,
}

impl Stage {
    /// Build a stage, deriving `duration_days` from the span.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        progress_percent: u8,
        status: StageStatus,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            duration_days: whole_days_between(start, end),
            progress_percent,
            status,
        }
    }
}

/// One timeline row: a project with its ordered stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub team_lead: String,
    pub stages: Vec<Stage>,
    pub total_duration_days: i64,
}

impl Project {
    /// Earliest stage start within this project.
    pub fn earliest_start(&self) -> Option<NaiveDateTime> {
        self.stages.iter().map(|stage| stage.start).min()
    }

    /// Latest stage end within this project.
    pub fn latest_end(&self) -> Option<NaiveDateTime> {
        self.stages.iter().map(|stage| stage.end).max()
    }
}

/// Dataset-wide earliest start and latest end, used to bound the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub min_date: NaiveDateTime,
    pub max_date: NaiveDateTime,
}
