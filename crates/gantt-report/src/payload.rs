//! The data contract handed to the renderer.
//!
//! Canonical projects plus the dataset date range, serialized as JSON.
//! This is the sole boundary the normalization core exposes outward; the
//! HTML side only ever reads this shape.

use anyhow::{Context, Result};
use gantt_model::{DateRange, Project};
use serde::{Deserialize, Serialize};

/// Everything the chart front-end needs for one timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPayload {
    pub projects: Vec<Project>,
    pub date_range: DateRange,
}

impl ChartPayload {
    pub fn new(projects: Vec<Project>, date_range: DateRange) -> Self {
        Self {
            projects,
            date_range,
        }
    }

    /// Pretty-printed JSON for the project list alone.
    pub fn projects_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.projects).context("serialize project list")
    }

    /// Pretty-printed JSON for the date-range summary alone.
    pub fn date_range_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.date_range).context("serialize date range")
    }

    /// Pretty-printed JSON for the whole payload.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize chart payload")
    }
}
