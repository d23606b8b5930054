//! Row normalization into the canonical project shape.
//!
//! Exactly one canonical project comes out per input row, regardless of
//! source schema, so the renderer never branches on where a project came
//! from. Legacy rows become a fixed Preparing/Execution stage pair;
//! multi-stage rows keep their stages in input order.

use gantt_ingest::CsvTable;
use gantt_model::{
    GanttError, Project, ProjectId, Result, SchemaKind, Stage, StageStatus, whole_days_between,
};
use gantt_validate::{
    decode_stages, detect_schema, parse_date_field, parse_progress_field, parse_stage_date,
    parse_status, parse_status_field, validate_legacy_row, validate_multistage_row,
};
use tracing::{debug, info};

/// Normalize a legacy two-phase row.
///
/// The Preparing stage always carries `progress_percent == 100`: by the
/// time a legacy-format project appears in a timeline, its preparation
/// phase is considered complete. The row's own progress value applies to
/// the Execution stage.
pub fn normalize_legacy(table: &CsvTable, row: usize, ordinal: usize) -> Result<Project> {
    let preparing_start = parse_date_field(table, row, "preparing_start")?;
    let preparing_end = parse_date_field(table, row, "preparing_end")?;
    let execution_end = parse_date_field(table, row, "execution_end")?;
    let progress = parse_progress_field(table, row)?;
    let preparing_status = parse_status_field(table, row, "preparing_status")?;
    let execution_status = parse_status_field(table, row, "execution_status")?;
    let stages = vec![
        Stage::new(
            "Preparing",
            preparing_start,
            preparing_end,
            100,
            preparing_status,
        ),
        Stage::new(
            "Execution",
            preparing_end,
            execution_end,
            progress,
            execution_status,
        ),
    ];
    Ok(Project {
        id: ProjectId::from_ordinal(ordinal),
        name: text_field(table, row, "project_name"),
        category: text_field(table, row, "category"),
        priority: text_field(table, row, "priority"),
        description: text_field(table, row, "description"),
        team_lead: text_field(table, row, "team_lead"),
        stages,
        total_duration_days: whole_days_between(preparing_start, execution_end),
    })
}

/// Normalize a multi-stage row, preserving stage order.
///
/// `total_duration_days` spans this project's own earliest start to its
/// latest end, not the dataset-wide range.
pub fn normalize_multistage(table: &CsvTable, row: usize, ordinal: usize) -> Result<Project> {
    let raw = table.value(row, "stages").unwrap_or_default();
    let raw_stages = decode_stages(raw, row)?;
    let mut stages = Vec::with_capacity(raw_stages.len());
    for (stage_index, raw_stage) in raw_stages.iter().enumerate() {
        let start = parse_stage_date(&raw_stage.start, row, stage_index, "start")?;
        let end = parse_stage_date(&raw_stage.end, row, stage_index, "end")?;
        let status = match &raw_stage.status {
            Some(value) => parse_status(value, row, Some(stage_index), "status")?,
            None => StageStatus::default(),
        };
        stages.push(Stage::new(
            raw_stage.name.clone(),
            start,
            end,
            raw_stage.progress as u8,
            status,
        ));
    }
    // decode_stages guarantees a non-empty list.
    let earliest = stages.iter().map(|stage| stage.start).min().ok_or(
        GanttError::Shape { row },
    )?;
    let latest = stages
        .iter()
        .map(|stage| stage.end)
        .max()
        .ok_or(GanttError::Shape { row })?;
    Ok(Project {
        id: ProjectId::from_ordinal(ordinal),
        name: text_field(table, row, "project_name"),
        category: text_field(table, row, "category"),
        priority: text_field(table, row, "priority"),
        description: text_field(table, row, "description"),
        team_lead: text_field(table, row, "team_lead"),
        stages,
        total_duration_days: whole_days_between(earliest, latest),
    })
}

/// Validate and normalize an entire dataset, row by row in input order.
///
/// The schema is resolved once from the header row. Fail-fast: the first
/// violation aborts and no partial output is produced.
pub fn normalize_dataset(table: &CsvTable) -> Result<Vec<Project>> {
    let schema = detect_schema(&table.headers)?;
    info!(%schema, rows = table.rows.len(), "normalizing dataset");
    let mut projects = Vec::with_capacity(table.rows.len());
    for row in 0..table.rows.len() {
        let project = match schema {
            SchemaKind::Legacy => {
                validate_legacy_row(table, row)?;
                normalize_legacy(table, row, row)?
            }
            SchemaKind::MultiStage => {
                validate_multistage_row(table, row)?;
                normalize_multistage(table, row, row)?
            }
        };
        debug!(id = %project.id, stages = project.stages.len(), "normalized project");
        projects.push(project);
    }
    Ok(projects)
}

fn text_field(table: &CsvTable, row: usize, field: &str) -> String {
    table.value(row, field).unwrap_or_default().to_string()
}
