//! Decoding of the serialized stage list carried by multi-stage rows.
//!
//! One decoder is shared by validation and normalization so the two can
//! never disagree on the payload shape.

use gantt_model::{GanttError, Result};
use serde_json::Value;

/// A stage descriptor as it appears in the input, before date parsing
/// and bounds checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStage {
    pub name: String,
    pub start: String,
    pub end: String,
    pub progress: f64,
    pub status: Option<String>,
}

const MANDATORY_FIELDS: [&str; 4] = ["name", "start", "end", "progress"];

/// Decode a `stages` cell into raw stage descriptors.
///
/// Fails when the cell is not valid JSON, decodes to anything but a
/// non-empty array, or any stage omits a mandatory field.
pub fn decode_stages(raw: &str, row: usize) -> Result<Vec<RawStage>> {
    let value: Value = serde_json::from_str(raw).map_err(|error| GanttError::Format {
        row,
        field: "stages".to_string(),
        detail: format!("invalid JSON: {error}"),
    })?;
    let Value::Array(entries) = value else {
        return Err(GanttError::Shape { row });
    };
    if entries.is_empty() {
        return Err(GanttError::Shape { row });
    }
    let mut stages = Vec::with_capacity(entries.len());
    for (stage_index, entry) in entries.iter().enumerate() {
        let Value::Object(object) = entry else {
            return Err(GanttError::Shape { row });
        };
        for field in MANDATORY_FIELDS {
            if !object.contains_key(field) {
                return Err(GanttError::Field {
                    row,
                    stage: stage_index,
                    field: field.to_string(),
                });
            }
        }
        let name = text_field(object, "name", row, stage_index)?;
        let start = text_field(object, "start", row, stage_index)?;
        let end = text_field(object, "end", row, stage_index)?;
        let progress = match object.get("progress").and_then(Value::as_f64) {
            Some(number) => number,
            // Non-numeric progress hits the same bounds failure a
            // numeric out-of-range value would.
            None => {
                return Err(GanttError::Range {
                    row,
                    stage: Some(stage_index),
                    field: "progress".to_string(),
                    value: object.get("progress").map(Value::to_string).unwrap_or_default(),
                    min: 0,
                    max: 100,
                });
            }
        };
        let status = match object.get("status") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                return Err(GanttError::Enum {
                    row,
                    stage: Some(stage_index),
                    field: "status".to_string(),
                    value: other.to_string(),
                });
            }
        };
        stages.push(RawStage {
            name,
            start,
            end,
            progress,
            status,
        });
    }
    Ok(stages)
}

fn text_field(
    object: &serde_json::Map<String, Value>,
    field: &str,
    row: usize,
    stage: usize,
) -> Result<String> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(GanttError::Format {
            row,
            field: "stages".to_string(),
            detail: format!("stage {stage} field '{field}' must be a string, got {other}"),
        }),
        None => Err(GanttError::Field {
            row,
            stage,
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stage_list() {
        let raw = r#"[
            {"name": "Design", "start": "2024-01-01", "end": "2024-01-10", "progress": 80},
            {"name": "Build", "start": "2024-01-08", "end": "2024-02-01", "progress": 12.5, "status": "warning"}
        ]"#;
        let stages = decode_stages(raw, 0).expect("decode stages");
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].name, "Design");
        assert_eq!(stages[0].status, None);
        assert_eq!(stages[1].progress, 12.5);
        assert_eq!(stages[1].status.as_deref(), Some("warning"));
    }

    #[test]
    fn rejects_invalid_json() {
        let error = decode_stages("not json", 4).unwrap_err();
        assert!(matches!(error, GanttError::Format { row: 4, .. }));
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            decode_stages("[]", 1).unwrap_err(),
            GanttError::Shape { row: 1 }
        ));
        assert!(matches!(
            decode_stages("{\"name\": \"x\"}", 1).unwrap_err(),
            GanttError::Shape { row: 1 }
        ));
    }

    #[test]
    fn names_missing_field() {
        let raw = r#"[{"name": "Design", "start": "2024-01-01", "progress": 10}]"#;
        let error = decode_stages(raw, 2).unwrap_err();
        match error {
            GanttError::Field { row, stage, field } => {
                assert_eq!((row, stage), (2, 0));
                assert_eq!(field, "end");
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn non_string_text_field_is_a_format_failure() {
        let raw = r#"[{"name": 7, "start": "2024-01-01", "end": "2024-01-02", "progress": 10}]"#;
        let error = decode_stages(raw, 3).unwrap_err();
        match error {
            GanttError::Format { row, field, detail } => {
                assert_eq!(row, 3);
                assert_eq!(field, "stages");
                assert!(detail.contains("'name' must be a string"));
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn non_string_status_is_an_enum_failure() {
        let raw =
            r#"[{"name": "D", "start": "2024-01-01", "end": "2024-01-02", "progress": 10, "status": 5}]"#;
        let error = decode_stages(raw, 1).unwrap_err();
        match error {
            GanttError::Enum {
                row,
                stage,
                field,
                value,
            } => {
                assert_eq!((row, stage), (1, Some(0)));
                assert_eq!(field, "status");
                assert_eq!(value, "5");
            }
            other => panic!("expected enum error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_progress_is_a_range_failure() {
        let raw = r#"[{"name": "D", "start": "2024-01-01", "end": "2024-01-02", "progress": "high"}]"#;
        let error = decode_stages(raw, 0).unwrap_err();
        assert!(matches!(
            error,
            GanttError::Range {
                stage: Some(0),
                ..
            }
        ));
    }
}
