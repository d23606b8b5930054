pub mod html;
pub mod payload;

pub use html::{render_html, write_chart, write_payload_json};
pub use payload::ChartPayload;
