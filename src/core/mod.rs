pub mod filters;
pub mod matcher;
pub mod recommend;
pub mod scoring;
pub mod zones;

pub use matcher::{MatchOutcome, Matcher};
pub use recommend::recommend_area;
pub use scoring::{fallback_score, FallbackPenalties};
