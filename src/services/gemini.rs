//! Gemini scoring client.
//!
//! Compatibility scoring goes through the `generateContent` endpoint with a
//! structured-output schema, so the model always returns a parseable JSON
//! verdict. Transient failures are retried with jittered exponential
//! backoff; callers fall back to rule-based scoring when the client errors
//! out or was never configured with an API key.

use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::core::scoring;
use crate::models::{CandidateProfile, Confidence, ScoreSource, ScoredMatch, StudentProfile};

/// Errors that can occur when scoring through Gemini
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No API key configured")]
    MissingApiKey,
}

/// Which prompt a scoring call uses.
///
/// Primary matching embeds both students' priority rankings; broadened
/// searches score lifestyle traits only, since location preferences have
/// already been relaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    PriorityAware,
    TraitFocused,
}

/// The model's structured verdict for one candidate pair
#[derive(Debug, Clone, Deserialize)]
pub struct ModelVerdict {
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: i64,
    #[serde(rename = "confidenceLevel")]
    pub confidence_level: Confidence,
    #[serde(rename = "reasoningSummary")]
    pub reasoning_summary: String,
    #[serde(rename = "matchAdvice")]
    pub match_advice: String,
}

/// Gemini API client
pub struct GeminiClient {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_retries: u32,
    client: Client,
}

impl GeminiClient {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        model: String,
        timeout_secs: u64,
        max_retries: u32,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            max_retries,
            client,
        }
    }

    /// Whether an API key is available at all
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Score one candidate pair through the model.
    ///
    /// A verdict below the room-type threshold is zeroed so it cannot be
    /// ranked, and confidence is always re-derived locally from the score.
    pub async fn score_candidate(
        &self,
        user: &StudentProfile,
        candidate: &CandidateProfile,
        mode: PromptMode,
        threshold: u8,
    ) -> Result<ScoredMatch, GeminiError> {
        let verdict = self.request_verdict(user, candidate, mode).await?;

        let mut score = verdict.compatibility_score.clamp(0, 100) as u8;
        let mut reasoning = verdict.reasoning_summary;
        let mut advice = verdict.match_advice;

        if score < threshold {
            tracing::debug!(
                "model scored {} at {}, below threshold {}",
                candidate.profile.user_id,
                score,
                threshold
            );
            reasoning = format!(
                "Compatibility score of {}% fell below the {}% minimum for this room type.",
                score, threshold
            );
            advice = "This pairing is unlikely to work out day to day.".to_string();
            score = 0;
        }

        Ok(ScoredMatch {
            candidate_id: candidate.profile.user_id.clone(),
            candidate_name: candidate.profile.name.clone(),
            candidate_area: candidate.dorm_area,
            candidate_noise: candidate.profile.noise_level,
            candidate_gender: candidate.profile.gender_housing,
            score,
            confidence: scoring::classify_confidence(score, verdict.confidence_level),
            reasoning,
            advice,
            is_alternative: mode == PromptMode::TraitFocused,
            source: ScoreSource::Llm,
            hall: None,
        })
    }

    async fn request_verdict(
        &self,
        user: &StudentProfile,
        candidate: &CandidateProfile,
        mode: PromptMode,
    ) -> Result<ModelVerdict, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            api_key
        );

        let payload = build_payload(user, candidate, mode);

        let mut last_err = GeminiError::ApiError("no attempts made".to_string());
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let jitter: u64 = rand::thread_rng().gen_range(0..1000);
                let backoff = Duration::from_millis(1000u64 * (1u64 << (attempt - 1)) + jitter);
                tracing::warn!(
                    "retrying Gemini call for {} (attempt {}) after {:?}",
                    candidate.profile.user_id,
                    attempt + 1,
                    backoff
                );
                tokio::time::sleep(backoff).await;
            }

            match self.send_once(&url, &payload).await {
                Ok(verdict) => return Ok(verdict),
                Err(e) => {
                    tracing::warn!("Gemini call failed: {}", e);
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }

    async fn send_once(&self, url: &str, payload: &Value) -> Result<ModelVerdict, GeminiError> {
        let response = self.client.post(url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(GeminiError::ApiError(format!(
                "generateContent returned {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        parse_verdict(&body)
    }
}

/// Pull the structured verdict out of a generateContent response
fn parse_verdict(body: &Value) -> Result<ModelVerdict, GeminiError> {
    let text = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.pointer("/content/parts/0/text"))
        .and_then(Value::as_str)
        .ok_or_else(|| GeminiError::InvalidResponse("missing candidate text".into()))?;

    serde_json::from_str(text)
        .map_err(|e| GeminiError::InvalidResponse(format!("verdict parse failed: {}", e)))
}

fn build_payload(user: &StudentProfile, candidate: &CandidateProfile, mode: PromptMode) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": build_prompt(user, candidate, mode) }]
        }],
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_PROMPT }]
        },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": verdict_schema(),
            "temperature": 0.0
        }
    })
}

const SYSTEM_PROMPT: &str = "You are a roommate compatibility analyst for university \
housing. Compare two student lifestyle profiles and return a JSON verdict with an \
integer compatibilityScore from 0 to 100, a confidenceLevel of High, Medium or Low, \
a short reasoningSummary, and one sentence of matchAdvice. Opposed extremes in sleep \
schedule, tidiness or noise tolerance must drive the score sharply down.";

fn verdict_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "compatibilityScore": { "type": "INTEGER" },
            "confidenceLevel": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
            "reasoningSummary": { "type": "STRING" },
            "matchAdvice": { "type": "STRING" }
        },
        "required": ["compatibilityScore", "confidenceLevel", "reasoningSummary", "matchAdvice"]
    })
}

fn build_prompt(user: &StudentProfile, candidate: &CandidateProfile, mode: PromptMode) -> String {
    match mode {
        PromptMode::PriorityAware => format!(
            "Student A (requesting a match):\n{}\nPriorities (1 = most important, 4 = least): \
             location {}, privacy {}, amenities {}, social {}\n\n\
             Student B (candidate, lives in {}):\n{}\nPriorities: location {}, privacy {}, \
             amenities {}, social {}\n\n\
             Weigh the traits each student ranked as most important more heavily.",
            describe_traits(user),
            user.priorities.location,
            user.priorities.privacy,
            user.priorities.amenities,
            user.priorities.social,
            candidate.dorm_area,
            describe_traits(&candidate.profile),
            candidate.profile.priorities.location,
            candidate.profile.priorities.privacy,
            candidate.profile.priorities.amenities,
            candidate.profile.priorities.social,
        ),
        PromptMode::TraitFocused => format!(
            "Student A (requesting a match):\n{}\n\nStudent B (candidate):\n{}\n\n\
             Location preferences have already been relaxed for this search. \
             Judge day-to-day lifestyle compatibility only; ignore location and \
             stated priorities.",
            describe_traits(user),
            describe_traits(&candidate.profile),
        ),
    }
}

fn describe_traits(p: &StudentProfile) -> String {
    format!(
        "- sleep schedule: {:?}\n- tidiness: {:?}\n- noise tolerance: {:?}\n\
         - social level: {:?}\n- guest frequency: {:?}\n- preferred environment: {}\n\
         - community type: {}",
        p.sleep_schedule,
        p.tidiness,
        p.noise_level,
        p.social_level,
        p.guest_frequency,
        p.environment_pref.as_deref().unwrap_or("no preference"),
        p.community_type.as_deref().unwrap_or("no preference"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn profile(id: &str) -> StudentProfile {
        StudentProfile {
            user_id: id.to_string(),
            name: id.to_string(),
            major: "General".to_string(),
            college: None,
            year: YearStatus::Upperclass,
            room_type: RoomType::Double,
            is_honors: false,
            accessible: Default::default(),
            sleep_schedule: Default::default(),
            tidiness: Default::default(),
            noise_level: Default::default(),
            social_level: Default::default(),
            guest_frequency: Default::default(),
            environment_pref: None,
            community_type: None,
            gender_housing: Default::default(),
            break_housing: Default::default(),
            alcohol: Default::default(),
            priorities: Default::default(),
        }
    }

    fn candidate(id: &str) -> CandidateProfile {
        CandidateProfile {
            profile: profile(id),
            dorm_area: Area::Central,
        }
    }

    fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
        GeminiClient::new(
            server.url(),
            Some("test-key".to_string()),
            "gemini-2.5-pro".to_string(),
            5,
            0,
        )
    }

    fn verdict_body(score: i64, confidence: &str) -> String {
        let verdict = serde_json::json!({
            "compatibilityScore": score,
            "confidenceLevel": confidence,
            "reasoningSummary": "Aligned schedules and tidiness.",
            "matchAdvice": "Agree on quiet hours early."
        });
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": verdict.to_string() }] }
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_successful_score() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(verdict_body(88, "High"))
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::PriorityAware, 75)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.score, 88);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.source, ScoreSource::Llm);
        assert!(!result.is_alternative);
        assert_eq!(result.reasoning, "Aligned schedules and tidiness.");
    }

    #[tokio::test]
    async fn test_sub_threshold_verdict_is_zeroed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent?key=test-key")
            .with_status(200)
            .with_body(verdict_body(50, "High"))
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::PriorityAware, 75)
            .await
            .unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.reasoning.contains("below the 75%"));
    }

    #[tokio::test]
    async fn test_model_confidence_is_reclassified() {
        // Model claims High but the score is mid-band: Medium locally
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent?key=test-key")
            .with_status(200)
            .with_body(verdict_body(80, "High"))
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::PriorityAware, 75)
            .await
            .unwrap();

        assert_eq!(result.score, 80);
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[tokio::test]
    async fn test_trait_focused_mode_marks_alternative() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent?key=test-key")
            .with_status(200)
            .with_body(verdict_body(90, "High"))
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::TraitFocused, 60)
            .await
            .unwrap();

        assert!(result.is_alternative);
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent?key=test-key")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::PriorityAware, 75)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        let client = GeminiClient::new(
            "http://localhost:1".to_string(),
            None,
            "gemini-2.5-pro".to_string(),
            1,
            0,
        );
        let err = client
            .score_candidate(&profile("me"), &candidate("c1"), PromptMode::PriorityAware, 75)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::MissingApiKey));
        assert!(!client.is_configured());
    }

    #[test]
    fn test_malformed_body_rejected() {
        let body: Value = serde_json::json!({ "candidates": [] });
        assert!(matches!(
            parse_verdict(&body),
            Err(GeminiError::InvalidResponse(_))
        ));
    }
}
