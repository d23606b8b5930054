//! Dataset-wide date range summarization.

use gantt_model::{DateRange, GanttError, Project, Result};

/// Scan every stage of every project and return the global earliest
/// start and latest end. Fails when there are no projects, since the
/// min/max would be undefined.
pub fn summarize_date_range(projects: &[Project]) -> Result<DateRange> {
    let min_date = projects
        .iter()
        .flat_map(|project| project.stages.iter().map(|stage| stage.start))
        .min()
        .ok_or(GanttError::EmptyDataset)?;
    let max_date = projects
        .iter()
        .flat_map(|project| project.stages.iter().map(|stage| stage.end))
        .max()
        .ok_or(GanttError::EmptyDataset)?;
    Ok(DateRange { min_date, max_date })
}
