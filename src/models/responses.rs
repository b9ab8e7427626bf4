//! Outbound response types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::MatchOutcome;
use crate::models::domain::{Confidence, ScoreSource, ScoredMatch};

/// Residence recommendation section of a match response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DormRecommendation {
    pub area: String,
    pub halls: Vec<String>,
}

/// One ranked roommate in the response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub user_id: String,
    pub name: String,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,
    pub compatibility_score: u8,
    pub confidence_level: Confidence,
    pub reasoning_summary: String,
    pub match_advice: String,
    pub is_alternative_match: bool,
    pub score_source: &'static str,
}

impl From<ScoredMatch> for RankedMatch {
    fn from(m: ScoredMatch) -> Self {
        Self {
            user_id: m.candidate_id,
            name: m.candidate_name,
            area: m.candidate_area.name().to_string(),
            hall: m.hall.map(str::to_string),
            compatibility_score: m.score,
            confidence_level: m.confidence,
            reasoning_summary: m.reasoning,
            match_advice: m.advice,
            is_alternative_match: m.is_alternative,
            score_source: match m.source {
                ScoreSource::Llm => "llm",
                ScoreSource::Fallback => "fallback",
            },
        }
    }
}

/// Full match response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub dorm_recommendation: DormRecommendation,
    pub ranked_matches: Vec<RankedMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub is_alternative: bool,
}

impl MatchResponse {
    /// Build the response from an assembled outcome. The recommendation
    /// may have been relocated during assembly, so hall lists follow the
    /// outcome's area.
    pub fn from_outcome(outcome: MatchOutcome) -> Self {
        let halls = crate::core::zones::halls(outcome.recommended_area);
        Self {
            dorm_recommendation: DormRecommendation {
                area: outcome.recommended_area.name().to_string(),
                halls: halls.iter().map(|h| h.to_string()).collect(),
            },
            ranked_matches: outcome.matches.into_iter().map(RankedMatch::from).collect(),
            message: outcome.message,
            is_alternative: outcome.is_alternative,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}
