//! Dataset-level schema detection.

use gantt_model::{GanttError, Result, STAGES_COLUMN, SchemaKind};

/// Decide which input schema a dataset uses from its header row.
///
/// Runs once per dataset. A `stages` column selects the multi-stage
/// format; its absence selects the legacy two-phase format. Fails with
/// a schema error naming every missing required column.
pub fn detect_schema(headers: &[String]) -> Result<SchemaKind> {
    let kind = if headers.iter().any(|header| header == STAGES_COLUMN) {
        SchemaKind::MultiStage
    } else {
        SchemaKind::Legacy
    };
    let missing: Vec<String> = kind
        .required_columns()
        .iter()
        .filter(|required| !headers.iter().any(|header| header == **required))
        .map(|required| (*required).to_string())
        .collect();
    if missing.is_empty() {
        Ok(kind)
    } else {
        Err(GanttError::Schema {
            schema: kind,
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn stages_column_selects_multistage() {
        let columns = headers(&[
            "project_name",
            "category",
            "priority",
            "description",
            "team_lead",
            "stages",
        ]);
        assert_eq!(detect_schema(&columns).unwrap(), SchemaKind::MultiStage);
    }

    #[test]
    fn absence_of_stages_selects_legacy() {
        let columns = headers(&[
            "project_name",
            "category",
            "priority",
            "preparing_start",
            "preparing_end",
            "execution_end",
            "progress_percent",
            "description",
            "team_lead",
        ]);
        assert_eq!(detect_schema(&columns).unwrap(), SchemaKind::Legacy);
    }

    #[test]
    fn reports_every_missing_column() {
        let columns = headers(&["project_name", "category", "priority"]);
        let error = detect_schema(&columns).unwrap_err();
        match error {
            GanttError::Schema { schema, missing } => {
                assert_eq!(schema, SchemaKind::Legacy);
                assert_eq!(
                    missing,
                    vec![
                        "preparing_start",
                        "preparing_end",
                        "execution_end",
                        "progress_percent",
                        "description",
                        "team_lead",
                    ]
                );
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn multistage_headers_must_be_complete() {
        let columns = headers(&["project_name", "stages"]);
        let error = detect_schema(&columns).unwrap_err();
        match error {
            GanttError::Schema { schema, .. } => assert_eq!(schema, SchemaKind::MultiStage),
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
