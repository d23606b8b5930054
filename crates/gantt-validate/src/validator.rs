//! Per-row validation for both input schemas.
//!
//! Validation is fail-fast: the first violation found for a row aborts
//! the conversion. Specific rules:
//!
//! - dates must parse as calendar dates or ISO 8601 timestamps
//! - `preparing_start < preparing_end < execution_end` (legacy)
//! - `start < end` strictly, per stage (multi-stage)
//! - progress values must lie in [0, 100]
//! - status values, when present, must come from the fixed vocabulary
//!
//! Overlap between consecutive stages is observed but deliberately
//! accepted: stages commonly run in parallel.

use chrono::NaiveDateTime;
use gantt_ingest::CsvTable;
use gantt_model::{GanttError, Result, StageStatus, parse_timestamp};
use tracing::debug;

use crate::stages::{RawStage, decode_stages};

pub const PROGRESS_MIN: i64 = 0;
pub const PROGRESS_MAX: i64 = 100;

/// Validate one legacy-format row.
pub fn validate_legacy_row(table: &CsvTable, row: usize) -> Result<()> {
    require_project_name(table, row)?;
    let preparing_start = parse_date_field(table, row, "preparing_start")?;
    let preparing_end = parse_date_field(table, row, "preparing_end")?;
    let execution_end = parse_date_field(table, row, "execution_end")?;
    parse_progress_field(table, row)?;
    if preparing_start >= preparing_end {
        return Err(GanttError::Order {
            row,
            stage: None,
            detail: "preparing start date must be before preparing end date".to_string(),
        });
    }
    if preparing_end >= execution_end {
        return Err(GanttError::Order {
            row,
            stage: None,
            detail: "preparing end date must be before execution end date".to_string(),
        });
    }
    for field in ["preparing_status", "execution_status"] {
        parse_status_field(table, row, field)?;
    }
    Ok(())
}

/// Validate one multi-stage row.
pub fn validate_multistage_row(table: &CsvTable, row: usize) -> Result<()> {
    require_project_name(table, row)?;
    let raw = table.value(row, "stages").unwrap_or_default();
    let stages = decode_stages(raw, row)?;
    let mut previous_end: Option<NaiveDateTime> = None;
    for (stage_index, stage) in stages.iter().enumerate() {
        let (start, end) = validate_stage(stage, row, stage_index)?;
        if let Some(previous) = previous_end
            && start < previous
        {
            // Parallel stages are allowed; worth noting, not rejecting.
            debug!(row, stage = stage_index, "stage overlaps the previous one");
        }
        previous_end = Some(end);
    }
    Ok(())
}

fn validate_stage(
    stage: &RawStage,
    row: usize,
    stage_index: usize,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let start = parse_stage_date(&stage.start, row, stage_index, "start")?;
    let end = parse_stage_date(&stage.end, row, stage_index, "end")?;
    if start >= end {
        return Err(GanttError::Order {
            row,
            stage: Some(stage_index),
            detail: "start date must be before end date".to_string(),
        });
    }
    if !(PROGRESS_MIN as f64..=PROGRESS_MAX as f64).contains(&stage.progress) {
        return Err(GanttError::Range {
            row,
            stage: Some(stage_index),
            field: "progress".to_string(),
            value: stage.progress.to_string(),
            min: PROGRESS_MIN,
            max: PROGRESS_MAX,
        });
    }
    if let Some(status) = &stage.status {
        parse_status(status, row, Some(stage_index), "status")?;
    }
    Ok((start, end))
}

/// Parse and bounds-check a date cell of a legacy row.
pub fn parse_date_field(table: &CsvTable, row: usize, field: &str) -> Result<NaiveDateTime> {
    let value = table.value(row, field).unwrap_or_default();
    parse_timestamp(value).ok_or_else(|| GanttError::DateFormat {
        row,
        stage: None,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse and bounds-check the legacy `progress_percent` cell.
pub fn parse_progress_field(table: &CsvTable, row: usize) -> Result<u8> {
    let value = table.value(row, "progress_percent").unwrap_or_default();
    let parsed: i64 = value.parse().map_err(|_| GanttError::Format {
        row,
        field: "progress_percent".to_string(),
        detail: format!("expected an integer percentage, got '{value}'"),
    })?;
    if !(PROGRESS_MIN..=PROGRESS_MAX).contains(&parsed) {
        return Err(GanttError::Range {
            row,
            stage: None,
            field: "progress_percent".to_string(),
            value: value.to_string(),
            min: PROGRESS_MIN,
            max: PROGRESS_MAX,
        });
    }
    Ok(parsed as u8)
}

/// Parse an optional legacy status cell, defaulting to `normal`.
pub fn parse_status_field(table: &CsvTable, row: usize, field: &str) -> Result<StageStatus> {
    match table.value_non_empty(row, field) {
        Some(value) => parse_status(value, row, None, field),
        None => Ok(StageStatus::default()),
    }
}

/// Parse a stage date string with row and stage context.
pub fn parse_stage_date(
    value: &str,
    row: usize,
    stage: usize,
    field: &str,
) -> Result<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| GanttError::DateFormat {
        row,
        stage: Some(stage),
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse a status string against the fixed vocabulary.
pub fn parse_status(
    value: &str,
    row: usize,
    stage: Option<usize>,
    field: &str,
) -> Result<StageStatus> {
    value.parse().map_err(|_| GanttError::Enum {
        row,
        stage,
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn require_project_name(table: &CsvTable, row: usize) -> Result<()> {
    match table.value_non_empty(row, "project_name") {
        Some(_) => Ok(()),
        None => Err(GanttError::Format {
            row,
            field: "project_name".to_string(),
            detail: "must not be empty".to_string(),
        }),
    }
}
