//! Typed validation and normalization failures.
//!
//! Every variant carries enough context (row index, stage index, field
//! name, offending value, allowed set or bounds) that a caller can print
//! an actionable message without re-deriving it. All failures abort the
//! current conversion; the only documented default-fill is a missing
//! stage status, which is not an error.

use crate::schema::SchemaKind;
use crate::status::StageStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GanttError {
    /// Required columns are absent from the header row.
    #[error("missing required columns for {schema} format: {}", missing.join(", "))]
    Schema {
        schema: SchemaKind,
        missing: Vec<String>,
    },

    /// A cell that should hold structured or numeric data did not parse.
    #[error("row {row}: invalid value in '{field}': {detail}")]
    Format {
        row: usize,
        field: String,
        detail: String,
    },

    /// A date cell did not parse as a calendar date or ISO 8601 timestamp.
    #[error("row {row}{}: invalid date in '{field}': '{value}'", stage_suffix(*stage))]
    DateFormat {
        row: usize,
        stage: Option<usize>,
        field: String,
        value: String,
    },

    /// The decoded stage list is not a non-empty array.
    #[error("row {row}: stages must be a non-empty list")]
    Shape { row: usize },

    /// A mandatory stage field is missing.
    #[error("row {row}, stage {stage}: missing required field '{field}'")]
    Field {
        row: usize,
        stage: usize,
        field: String,
    },

    /// A chronological invariant was violated.
    #[error("row {row}{}: {detail}", stage_suffix(*stage))]
    Order {
        row: usize,
        stage: Option<usize>,
        detail: String,
    },

    /// A numeric value fell outside its allowed bounds.
    #[error(
        "row {row}{}: '{field}' must be between {min} and {max}, got {value}",
        stage_suffix(*stage)
    )]
    Range {
        row: usize,
        stage: Option<usize>,
        field: String,
        value: String,
        min: i64,
        max: i64,
    },

    /// A status value outside the fixed vocabulary.
    #[error(
        "row {row}{}: invalid status '{value}' in '{field}', must be one of: {}",
        stage_suffix(*stage),
        StageStatus::ALLOWED.join(", ")
    )]
    Enum {
        row: usize,
        stage: Option<usize>,
        field: String,
        value: String,
    },

    /// A date-range summary was requested for zero projects.
    #[error("no projects to summarize date range for")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, GanttError>;

fn stage_suffix(stage: Option<usize>) -> String {
    match stage {
        Some(index) => format!(", stage {index}"),
        None => String::new(),
    }
}
