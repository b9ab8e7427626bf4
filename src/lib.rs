//! Dorm Match - residence recommendation and roommate matching service
//!
//! This library powers the housing questionnaire backend: it recommends a
//! residential area from academic-proximity rules and ranks roommate
//! candidates through a filter/score/assemble pipeline, with LLM-backed
//! compatibility scoring and a deterministic rule-based fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommend_area, FallbackPenalties, MatchOutcome, Matcher};
pub use crate::models::{
    CandidateProfile, MatchRequest, MatchResponse, ScoredMatch, StudentProfile,
};
pub use crate::services::{CandidateDirectory, GeminiClient};
