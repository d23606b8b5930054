//! Input schema detection constants.
//!
//! A dataset is homogeneous: the schema is decided once from the header
//! row, never per record. The presence of a `stages` column selects the
//! multi-stage format; its absence selects the legacy two-phase format.

use std::fmt;

/// Column whose presence selects the multi-stage schema.
pub const STAGES_COLUMN: &str = "stages";

/// Required columns for the legacy two-phase format.
pub const LEGACY_COLUMNS: [&str; 9] = [
    "project_name",
    "category",
    "priority",
    "preparing_start",
    "preparing_end",
    "execution_end",
    "progress_percent",
    "description",
    "team_lead",
];

/// Required columns for the multi-stage format.
pub const MULTISTAGE_COLUMNS: [&str; 6] = [
    "project_name",
    "category",
    "priority",
    "description",
    "team_lead",
    "stages",
];

/// Which of the two supported input formats a dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Fixed two-phase format: preparing + execution columns.
    Legacy,
    /// Variable-length format: a serialized stage list per row.
    MultiStage,
}

impl SchemaKind {
    /// The required column set for this schema.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SchemaKind::Legacy => &LEGACY_COLUMNS,
            SchemaKind::MultiStage => &MULTISTAGE_COLUMNS,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Legacy => f.write_str("legacy"),
            SchemaKind::MultiStage => f.write_str("multi-stage"),
        }
    }
}
