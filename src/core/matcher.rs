//! Roommate match assembly.
//!
//! The matcher is synchronous and deterministic. Handlers feed it
//! already-scored candidates (LLM or fallback) and it applies thresholds,
//! the logistical veto, broadened-search padding, group-room hall
//! assignment and final ranking.

use std::collections::HashMap;

use crate::core::{filters, recommend, scoring, zones};
use crate::models::{
    Area, CandidateFilter, CandidateProfile, Confidence, Recommendation, RoomType, ScoreSource,
    ScoredMatch, StudentProfile,
};
use crate::services::directory::CandidateDirectory;

const NO_MATCH_MESSAGE: &str = "No highly compatible matches were found even after broadening \
     the search across all residential areas. Consider adjusting your preferences.";

/// Final result of a match request
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub recommended_area: Area,
    pub matches: Vec<ScoredMatch>,
    pub message: Option<String>,
    pub is_alternative: bool,
}

/// Threshold, veto and assembly rules over scored candidates
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    penalties: scoring::FallbackPenalties,
}

impl Matcher {
    pub fn new(penalties: scoring::FallbackPenalties) -> Self {
        Self { penalties }
    }

    pub fn penalties(&self) -> &scoring::FallbackPenalties {
        &self.penalties
    }

    /// The residence recommendation plus the areas searched for roommates.
    ///
    /// Group rooms search every area that offers them; everyone else is
    /// matched within the recommended area only.
    pub fn search_areas(&self, profile: &StudentProfile) -> (Recommendation, Vec<Area>) {
        let recommendation = recommend::recommend_area(profile);
        let allowed = match profile.room_type {
            RoomType::Triple => zones::TRIPLE_AREAS.to_vec(),
            RoomType::Quad => zones::QUAD_AREAS.to_vec(),
            _ => vec![recommendation.area],
        };
        (recommendation, allowed)
    }

    /// Eligible candidates with their fallback scores, best first.
    ///
    /// Handlers take the top of this list for LLM scoring; the rest keep
    /// their fallback scores.
    pub fn shortlist<'a>(
        &self,
        profile: &StudentProfile,
        directory: &'a CandidateDirectory,
    ) -> Vec<(&'a CandidateProfile, u8)> {
        let (_, allowed) = self.search_areas(profile);
        let filter = CandidateFilter {
            exclude_user_id: profile.user_id.clone(),
            allowed_areas: allowed,
            year: profile.year,
        };

        let mut ranked: Vec<(&CandidateProfile, u8)> = directory
            .eligible(&filter)
            .into_iter()
            .map(|c| (c, scoring::fallback_score(profile, &c.profile, &self.penalties)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Build a fallback-scored match for one candidate
    pub fn fallback_match(
        &self,
        profile: &StudentProfile,
        candidate: &CandidateProfile,
        is_alternative: bool,
    ) -> ScoredMatch {
        let score = scoring::fallback_score(profile, &candidate.profile, &self.penalties);
        let advice = if is_alternative {
            "Alternative match based on lifestyle compatibility (location preferences relaxed)."
        } else {
            "Compare daily routines and shared-space expectations before committing."
        };
        ScoredMatch {
            candidate_id: candidate.profile.user_id.clone(),
            candidate_name: candidate.profile.name.clone(),
            candidate_area: candidate.dorm_area,
            candidate_noise: candidate.profile.noise_level,
            candidate_gender: candidate.profile.gender_housing,
            score,
            confidence: scoring::classify_confidence(score, Confidence::Medium),
            reasoning: format!(
                "Rule-based compatibility estimate: {}% based on lifestyle alignment.",
                score
            ),
            advice: advice.to_string(),
            is_alternative,
            source: ScoreSource::Fallback,
            hall: None,
        }
    }

    /// Broadened search: fallback-score candidates in every permissible
    /// area, keeping those over the threshold that survive the veto.
    pub fn alternative_matches(
        &self,
        profile: &StudentProfile,
        directory: &CandidateDirectory,
    ) -> Vec<ScoredMatch> {
        let allowed = match profile.room_type {
            RoomType::Triple => zones::TRIPLE_AREAS.to_vec(),
            RoomType::Quad => zones::QUAD_AREAS.to_vec(),
            _ => Area::ALL.to_vec(),
        };
        let filter = CandidateFilter {
            exclude_user_id: profile.user_id.clone(),
            allowed_areas: allowed,
            year: profile.year,
        };
        let threshold = scoring::min_threshold(profile.room_type);

        let mut out: Vec<ScoredMatch> = directory
            .eligible(&filter)
            .into_iter()
            .map(|c| self.fallback_match(profile, c, true))
            .filter(|m| m.score >= threshold && filters::passes_logistics(profile, m))
            .collect();
        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }

    /// Apply thresholds and the logistical veto, broaden when short, and
    /// assemble the final ranked list with hall assignments.
    pub fn assemble(
        &self,
        profile: &StudentProfile,
        recommendation: &Recommendation,
        scored: Vec<ScoredMatch>,
        directory: &CandidateDirectory,
    ) -> MatchOutcome {
        let threshold = scoring::min_threshold(profile.room_type);

        let mut survivors: Vec<ScoredMatch> = scored
            .into_iter()
            .filter(|m| m.score >= threshold)
            .filter(|m| filters::passes_logistics(profile, m))
            .collect();
        survivors.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "{} candidates survived threshold {} and logistics veto",
            survivors.len(),
            threshold
        );

        if profile.room_type.is_group_room() {
            self.assemble_group(profile, recommendation, survivors, directory)
        } else {
            self.assemble_pair(profile, recommendation, survivors, directory)
        }
    }

    /// A double/suite/apartment match: one primary roommate plus up to two
    /// ranked alternatives, three results total.
    fn assemble_pair(
        &self,
        profile: &StudentProfile,
        recommendation: &Recommendation,
        survivors: Vec<ScoredMatch>,
        directory: &CandidateDirectory,
    ) -> MatchOutcome {
        let mut matches = survivors;
        matches.truncate(3);

        if matches.len() < 3 {
            for alt in self.alternative_matches(profile, directory) {
                if matches.len() >= 3 {
                    break;
                }
                if matches.iter().any(|m| m.candidate_id == alt.candidate_id) {
                    continue;
                }
                matches.push(alt);
            }
        }

        // Pair matches room in the candidate's own area
        for m in &mut matches {
            m.hall = zones::halls(m.candidate_area).first().copied();
        }

        let (recommended_area, message) = match matches.first() {
            None => (recommendation.area, Some(NO_MATCH_MESSAGE.to_string())),
            // Broadened top match relocates the recommendation to them
            Some(top) if top.is_alternative => (top.candidate_area, None),
            Some(_) => (recommendation.area, None),
        };

        let is_alternative = matches.iter().any(|m| m.is_alternative);
        MatchOutcome {
            recommended_area,
            matches,
            message,
            is_alternative,
        }
    }

    /// A triple/quad match: every roommate must land in one hall, so the
    /// group is drawn from a single area.
    fn assemble_group(
        &self,
        profile: &StudentProfile,
        recommendation: &Recommendation,
        mut survivors: Vec<ScoredMatch>,
        directory: &CandidateDirectory,
    ) -> MatchOutcome {
        let required = profile.room_type.required_roommates();

        // Broaden on the fullest single area, not the total: survivors
        // scattered across areas cannot share a hall
        if best_area_count(&survivors) < required {
            for alt in self.alternative_matches(profile, directory) {
                if survivors.iter().any(|m| m.candidate_id == alt.candidate_id) {
                    continue;
                }
                survivors.push(alt);
            }
            survivors.sort_by(|a, b| b.score.cmp(&a.score));
        }

        let mut by_area: HashMap<Area, Vec<ScoredMatch>> = HashMap::new();
        for m in survivors {
            by_area.entry(m.candidate_area).or_default().push(m);
        }

        let chosen = choose_group_area(recommendation.area, &by_area, required);
        let mut picked = by_area.remove(&chosen).unwrap_or_default();
        picked.sort_by(|a, b| b.score.cmp(&a.score));
        picked.truncate(required);

        let hall = zones::halls(chosen).first().copied();
        for m in &mut picked {
            m.hall = hall;
        }

        let message = if picked.len() < required {
            Some(shortfall_message(profile.room_type, picked.len(), required))
        } else {
            None
        };

        let is_alternative = picked.iter().any(|m| m.is_alternative);
        MatchOutcome {
            recommended_area: chosen,
            matches: picked,
            message,
            is_alternative,
        }
    }
}

fn best_area_count(survivors: &[ScoredMatch]) -> usize {
    let mut counts: HashMap<Area, usize> = HashMap::new();
    for m in survivors {
        *counts.entry(m.candidate_area).or_default() += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}

/// Pick the area the group rooms in. The recommended area wins when it has
/// enough candidates; otherwise the fullest area that does; otherwise the
/// fullest area at all, scanned in a fixed order.
fn choose_group_area(
    recommended: Area,
    by_area: &HashMap<Area, Vec<ScoredMatch>>,
    required: usize,
) -> Area {
    let count = |area: Area| by_area.get(&area).map_or(0, Vec::len);

    if count(recommended) >= required {
        return recommended;
    }

    let mut best = (recommended, count(recommended));
    for area in Area::ALL {
        let n = count(area);
        if n >= required && n > best.1 {
            best = (area, n);
        }
    }
    if best.1 >= required {
        return best.0;
    }

    let mut fullest = (recommended, count(recommended));
    for area in Area::ALL {
        let n = count(area);
        if n > fullest.1 {
            fullest = (area, n);
        }
    }
    fullest.0
}

fn shortfall_message(room_type: RoomType, found: usize, required: usize) -> String {
    let label = match room_type {
        RoomType::Triple => "triple",
        RoomType::Quad => "quad",
        _ => "shared",
    };
    format!(
        "Only {} compatible roommate(s) found. A {} room requires {} roommates total \
         (you + {} others) in the same hall.",
        found,
        label,
        required + 1,
        required
    )
}
