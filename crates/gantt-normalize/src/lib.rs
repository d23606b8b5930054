pub mod normalize;
pub mod range;

pub use normalize::{normalize_dataset, normalize_legacy, normalize_multistage};
pub use range::summarize_date_range;
