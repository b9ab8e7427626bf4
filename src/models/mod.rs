pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::*;
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, RankedMatch};
