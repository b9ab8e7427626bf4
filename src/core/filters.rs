//! Candidate eligibility predicates and the final logistical veto.

use crate::core::zones;
use crate::models::{
    AlcoholPolicy, Area, BreakHousing, CandidateFilter, CandidateProfile, GenderHousing,
    NoiseLevel, RoomType, ScoredMatch, StudentProfile, YearStatus,
};

/// Whether a roster candidate is eligible for a given search.
///
/// Linear-scan predicate: area membership, cohort match, the North/Sylvan
/// restriction for first-years, and per-area room-type availability.
pub fn is_eligible(candidate: &CandidateProfile, filter: &CandidateFilter) -> bool {
    if candidate.profile.user_id == filter.exclude_user_id {
        return false;
    }

    if !filter.allowed_areas.contains(&candidate.dorm_area) {
        return false;
    }

    if candidate.profile.year != filter.year {
        return false;
    }

    // First-years never room in upperclass-only areas
    if filter.year == YearStatus::FirstYear
        && zones::UPPERCLASS_ONLY_AREAS.contains(&candidate.dorm_area)
    {
        return false;
    }

    // Triple/quad candidates must live where those rooms exist
    match candidate.profile.room_type {
        RoomType::Triple if !zones::TRIPLE_AREAS.contains(&candidate.dorm_area) => return false,
        RoomType::Quad if !zones::QUAD_AREAS.contains(&candidate.dorm_area) => return false,
        _ => {}
    }

    true
}

/// Non-negotiable logistical veto, applied after scoring.
///
/// Break housing, quiet/loud conflicts, alcohol-free requirements and
/// single-gender needs can disqualify an otherwise high-scoring match.
pub fn passes_logistics(user: &StudentProfile, m: &ScoredMatch) -> bool {
    // Break housing: the candidate's area must stay open over breaks
    if user.break_housing == BreakHousing::Required
        && !zones::BREAK_AREAS.contains(&m.candidate_area)
    {
        return false;
    }

    // Hard noise conflict in either direction
    if (user.noise_level == NoiseLevel::VeryQuiet && m.candidate_noise == NoiseLevel::Loud)
        || (user.noise_level == NoiseLevel::Loud && m.candidate_noise == NoiseLevel::VeryQuiet)
    {
        return false;
    }

    // Alcohol-free students avoid Southwest and loud candidates
    if user.alcohol == AlcoholPolicy::Required
        && (m.candidate_area == Area::Southwest || m.candidate_noise == NoiseLevel::Loud)
    {
        return false;
    }

    // Single-gender need conflicts with an explicit gender-inclusive preference
    if user.gender_housing == GenderHousing::SingleGender
        && m.candidate_gender == GenderHousing::GenderInclusive
    {
        return false;
    }

    true
}
