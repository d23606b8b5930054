//! Command implementations: the thin I/O glue around the conversion core.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use gantt_ingest::read_csv_table;
use gantt_model::{DateRange, Project, SchemaKind};
use gantt_normalize::{normalize_dataset, summarize_date_range};
use gantt_report::{ChartPayload, write_chart, write_payload_json};
use gantt_validate::detect_schema;

use crate::cli::{GenerateArgs, InspectArgs};

const DEFAULT_OUTPUT: &str = "output/gantt_chart.html";

/// Outcome of a successful `generate` run, for the summary printer.
#[derive(Debug)]
pub struct GenerateResult {
    pub output_file: PathBuf,
    pub json_file: Option<PathBuf>,
    pub projects: Vec<Project>,
    pub date_range: DateRange,
}

/// Outcome of an `inspect` run.
pub struct InspectResult {
    pub schema: Option<SchemaKind>,
    pub rows: usize,
    pub issue: Option<String>,
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let started = Instant::now();
    let span = info_span!("generate", csv = %args.csv_file.display());
    let _guard = span.enter();

    if !args.csv_file.is_file() {
        bail!("csv file not found: {}", args.csv_file.display());
    }
    let output_file = args
        .output_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let table = read_csv_table(&args.csv_file)?;
    let projects = normalize_dataset(&table)
        .with_context(|| format!("convert {}", args.csv_file.display()))?;
    let date_range = summarize_date_range(&projects)
        .with_context(|| format!("convert {}", args.csv_file.display()))?;

    let payload = ChartPayload::new(projects, date_range);
    write_chart(&payload, &output_file)?;
    if let Some(json_file) = &args.json_path {
        write_payload_json(&payload, json_file)?;
    }

    info!(
        projects = payload.projects.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "chart generated"
    );
    Ok(GenerateResult {
        output_file,
        json_file: args.json_path.clone(),
        projects: payload.projects,
        date_range: payload.date_range,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let span = info_span!("inspect", csv = %args.csv_file.display());
    let _guard = span.enter();

    if !args.csv_file.is_file() {
        bail!("csv file not found: {}", args.csv_file.display());
    }
    let table = read_csv_table(&args.csv_file)?;
    let rows = table.rows.len();
    let schema = match detect_schema(&table.headers) {
        Ok(kind) => kind,
        Err(error) => {
            return Ok(InspectResult {
                schema: None,
                rows,
                issue: Some(error.to_string()),
            });
        }
    };
    debug!(%schema, rows, "schema detected");
    let issue = normalize_dataset(&table).err().map(|error| error.to_string());
    Ok(InspectResult {
        schema: Some(schema),
        rows,
        issue,
    })
}
