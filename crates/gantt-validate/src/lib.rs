pub mod schema;
pub mod stages;
pub mod validator;

pub use schema::detect_schema;
pub use stages::{RawStage, decode_stages};
pub use validator::{
    PROGRESS_MAX, PROGRESS_MIN, parse_date_field, parse_progress_field, parse_stage_date,
    parse_status, parse_status_field, validate_legacy_row, validate_multistage_row,
};
