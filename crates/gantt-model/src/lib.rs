pub mod datetime;
pub mod error;
pub mod ids;
pub mod project;
pub mod schema;
pub mod status;

pub use datetime::{format_timestamp, parse_timestamp, whole_days_between};
pub use error::{GanttError, Result};
pub use ids::ProjectId;
pub use project::{DateRange, Project, Stage};
pub use schema::{LEGACY_COLUMNS, MULTISTAGE_COLUMNS, STAGES_COLUMN, SchemaKind};
pub use status::StageStatus;
