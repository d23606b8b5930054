//! Self-contained HTML chart generation.
//!
//! The embedded template carries all markup, styling, and rendering
//! script; generation is two placeholder substitutions. No network
//! assets, so the output file can be opened or shared as-is.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::payload::ChartPayload;

const TEMPLATE: &str = include_str!("../assets/template.html");

const PROJECT_DATA_SLOT: &str = "{{PROJECT_DATA}}";
const DATE_RANGE_SLOT: &str = "{{DATE_RANGE}}";

/// Render the chart HTML for a payload.
pub fn render_html(payload: &ChartPayload) -> Result<String> {
    let html = TEMPLATE
        .replace(PROJECT_DATA_SLOT, &payload.projects_json()?)
        .replace(DATE_RANGE_SLOT, &payload.date_range_json()?);
    Ok(html)
}

/// Render the chart and write it to `path`, creating parent directories.
pub fn write_chart(payload: &ChartPayload, path: &Path) -> Result<()> {
    let html = render_html(payload)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("write chart: {}", path.display()))?;
    info!(path = %path.display(), projects = payload.projects.len(), "chart written");
    Ok(())
}

/// Write the raw JSON payload next to or instead of the chart.
pub fn write_payload_json(payload: &ChartPayload, path: &Path) -> Result<()> {
    let json = payload.to_json_pretty()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("write payload: {}", path.display()))?;
    Ok(())
}
