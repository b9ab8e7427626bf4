use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{scoring, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, MatchResponse, ScoredMatch,
};
use crate::services::{CandidateDirectory, GeminiClient, PromptMode};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub directory: Arc<CandidateDirectory>,
    pub matcher: Matcher,
    /// Shortlisted candidates beyond this count keep their fallback scores
    pub max_scored_candidates: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /api/v1/match
///
/// Takes the housing questionnaire, recommends a residential area, and
/// returns ranked roommate matches. The top shortlisted candidates are
/// scored by the LLM when one is configured; everything else uses the
/// rule-based fallback.
async fn find_match(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let profile = req.into_inner().into_profile();
    tracing::info!(
        "Matching user {} ({}, {:?} room)",
        profile.user_id,
        profile.major,
        profile.room_type
    );

    let (recommendation, _) = state.matcher.search_areas(&profile);
    let shortlist = state.matcher.shortlist(&profile, &state.directory);
    let threshold = scoring::min_threshold(profile.room_type);

    let mut scored: Vec<ScoredMatch> = Vec::with_capacity(shortlist.len());
    for (index, (candidate, quick_score)) in shortlist.iter().enumerate() {
        // Only candidates already meeting the threshold are worth an API call
        let use_llm = index < state.max_scored_candidates
            && *quick_score >= threshold
            && state.gemini.is_configured();
        let m = if use_llm {
            match state
                .gemini
                .score_candidate(&profile, candidate, PromptMode::PriorityAware, threshold)
                .await
            {
                Ok(m) => m,
                Err(e) => {
                    // Per-candidate degradation: one bad call never fails the request
                    tracing::warn!(
                        "LLM scoring failed for {}, using fallback: {}",
                        candidate.profile.user_id,
                        e
                    );
                    state.matcher.fallback_match(&profile, candidate, false)
                }
            }
        } else {
            state.matcher.fallback_match(&profile, candidate, false)
        };
        scored.push(m);
    }

    let outcome = state
        .matcher
        .assemble(&profile, &recommendation, scored, &state.directory);

    tracing::info!(
        "Returning {} matches for user {} in {} (alternative: {})",
        outcome.matches.len(),
        profile.user_id,
        outcome.recommended_area,
        outcome.is_alternative
    );

    HttpResponse::Ok().json(MatchResponse::from_outcome(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn test_state() -> AppState {
        AppState {
            gemini: Arc::new(GeminiClient::new(
                "http://localhost:1".to_string(),
                None,
                "gemini-2.5-pro".to_string(),
                1,
                0,
            )),
            directory: Arc::new(CandidateDirectory::seeded()),
            matcher: Matcher::default(),
            max_scored_candidates: 5,
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_match_endpoint_without_llm() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "userId": "test-user",
                "name": "Test",
                "major": "Business",
                "college": "Isenberg School of Management",
                "studentYear": "upperclassmen",
                "roomType": "double"
            }))
            .to_request();

        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["dormRecommendation"]["area"], "Southwest");
        assert!(resp["rankedMatches"].as_array().is_some());
        for m in resp["rankedMatches"].as_array().unwrap() {
            assert_eq!(m["scoreSource"], "fallback");
        }
    }

    #[actix_web::test]
    async fn test_sub_threshold_candidates_skip_llm() {
        use crate::models::{
            Area, CandidateProfile, NoiseLevel, RoomType, SleepSchedule, SocialLevel,
            StudentProfile, Tidiness, YearStatus,
        };

        let mut server = mockito::Server::new_async().await;
        // A configured client, but no candidate earns an API call
        let mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let candidate = CandidateProfile {
            profile: StudentProfile {
                user_id: "loud-neighbor".to_string(),
                name: "Loud Neighbor".to_string(),
                major: "Business".to_string(),
                college: Some("Isenberg School of Management".to_string()),
                year: YearStatus::Upperclass,
                room_type: RoomType::Double,
                is_honors: false,
                accessible: Default::default(),
                sleep_schedule: SleepSchedule::NightOwl,
                tidiness: Tidiness::Messy,
                noise_level: NoiseLevel::Loud,
                social_level: SocialLevel::VerySocial,
                guest_frequency: Default::default(),
                environment_pref: None,
                community_type: None,
                gender_housing: Default::default(),
                break_housing: Default::default(),
                alcohol: Default::default(),
                priorities: Default::default(),
            },
            dorm_area: Area::Southwest,
        };

        let state = AppState {
            gemini: Arc::new(GeminiClient::new(
                server.url(),
                Some("test-key".to_string()),
                "gemini-2.5-pro".to_string(),
                5,
                0,
            )),
            directory: Arc::new(CandidateDirectory::new(vec![candidate])),
            matcher: Matcher::default(),
            max_scored_candidates: 5,
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "userId": "quiet-user",
                "name": "Quiet User",
                "major": "Business",
                "college": "Isenberg School of Management",
                "studentYear": "upperclassmen",
                "roomType": "double",
                "sleepSchedule": "early-bird",
                "tidiness": "very-tidy",
                "noiseLevel": "very-quiet",
                "socialLevel": "minimal-social"
            }))
            .to_request();

        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        mock.assert_async().await;
        assert!(resp["rankedMatches"]
            .as_array()
            .map_or(true, |m| m.is_empty()));
    }

    #[actix_web::test]
    async fn test_match_endpoint_rejects_oversized_name() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({ "name": "x".repeat(200) }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
