pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;
pub mod normalize;

pub use domain::*;
pub use dto::CleanReportDto;
pub use error::CoreError;
pub use extract::extract_candidates;
pub use normalize::{clean_text, normalize, Normalized, Normalizer, TokenOutcome};
