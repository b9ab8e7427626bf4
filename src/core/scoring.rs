//! Deterministic compatibility scoring, used when the LLM is unavailable
//! and as the quick pre-ranking pass that picks candidates worth an LLM call.

use serde::Deserialize;

use crate::models::{
    Confidence, NoiseLevel, RoomType, SleepSchedule, SocialLevel, StudentProfile, Tidiness,
};

/// Fixed point penalties applied per trait pair
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FallbackPenalties {
    #[serde(default = "default_base")]
    pub base: u8,
    #[serde(default = "default_sleep_conflict")]
    pub sleep_conflict: u8,
    #[serde(default = "default_sleep_minor")]
    pub sleep_minor: u8,
    #[serde(default = "default_tidy_conflict")]
    pub tidy_conflict: u8,
    #[serde(default = "default_tidy_minor")]
    pub tidy_minor: u8,
    #[serde(default = "default_noise_conflict")]
    pub noise_conflict: u8,
    #[serde(default = "default_noise_minor")]
    pub noise_minor: u8,
    #[serde(default = "default_social_conflict")]
    pub social_conflict: u8,
    #[serde(default = "default_social_minor")]
    pub social_minor: u8,
}

fn default_base() -> u8 { 80 }
fn default_sleep_conflict() -> u8 { 25 }
fn default_sleep_minor() -> u8 { 10 }
fn default_tidy_conflict() -> u8 { 20 }
fn default_tidy_minor() -> u8 { 5 }
fn default_noise_conflict() -> u8 { 20 }
fn default_noise_minor() -> u8 { 5 }
fn default_social_conflict() -> u8 { 10 }
fn default_social_minor() -> u8 { 3 }

impl Default for FallbackPenalties {
    fn default() -> Self {
        Self {
            base: default_base(),
            sleep_conflict: default_sleep_conflict(),
            sleep_minor: default_sleep_minor(),
            tidy_conflict: default_tidy_conflict(),
            tidy_minor: default_tidy_minor(),
            noise_conflict: default_noise_conflict(),
            noise_minor: default_noise_minor(),
            social_conflict: default_social_conflict(),
            social_minor: default_social_minor(),
        }
    }
}

/// Whether two profiles sit at opposite extremes of any daily-living trait
pub fn has_major_conflict(a: &StudentProfile, b: &StudentProfile) -> bool {
    sleep_opposed(a.sleep_schedule, b.sleep_schedule)
        || tidy_opposed(a.tidiness, b.tidiness)
        || noise_opposed(a.noise_level, b.noise_level)
}

fn sleep_opposed(a: SleepSchedule, b: SleepSchedule) -> bool {
    matches!(
        (a, b),
        (SleepSchedule::EarlyBird, SleepSchedule::NightOwl)
            | (SleepSchedule::NightOwl, SleepSchedule::EarlyBird)
    )
}

fn tidy_opposed(a: Tidiness, b: Tidiness) -> bool {
    matches!(
        (a, b),
        (Tidiness::VeryTidy, Tidiness::Messy) | (Tidiness::Messy, Tidiness::VeryTidy)
    )
}

fn noise_opposed(a: NoiseLevel, b: NoiseLevel) -> bool {
    matches!(
        (a, b),
        (NoiseLevel::VeryQuiet, NoiseLevel::Loud) | (NoiseLevel::Loud, NoiseLevel::VeryQuiet)
    )
}

fn social_opposed(a: SocialLevel, b: SocialLevel) -> bool {
    matches!(
        (a, b),
        (SocialLevel::MinimalSocial, SocialLevel::VerySocial)
            | (SocialLevel::VerySocial, SocialLevel::MinimalSocial)
    )
}

/// Rule-based compatibility estimate (0-100).
///
/// Starts from a base score and subtracts a fixed penalty per trait pair:
/// full penalty for opposed extremes, a small one for any other difference.
/// A sub-75 result collapses to 0 when an extreme conflict caused it,
/// otherwise it is lifted back to 75.
pub fn fallback_score(a: &StudentProfile, b: &StudentProfile, p: &FallbackPenalties) -> u8 {
    let mut score = p.base as i32;

    if a.sleep_schedule != b.sleep_schedule {
        score -= if sleep_opposed(a.sleep_schedule, b.sleep_schedule) {
            p.sleep_conflict as i32
        } else {
            p.sleep_minor as i32
        };
    }

    if a.tidiness != b.tidiness {
        score -= if tidy_opposed(a.tidiness, b.tidiness) {
            p.tidy_conflict as i32
        } else {
            p.tidy_minor as i32
        };
    }

    if a.noise_level != b.noise_level {
        score -= if noise_opposed(a.noise_level, b.noise_level) {
            p.noise_conflict as i32
        } else {
            p.noise_minor as i32
        };
    }

    if a.social_level != b.social_level {
        score -= if social_opposed(a.social_level, b.social_level) {
            p.social_conflict as i32
        } else {
            p.social_minor as i32
        };
    }

    let score = score.clamp(0, 100);

    if score < 75 {
        if has_major_conflict(a, b) {
            return 0;
        }
        // Minor differences only: still a workable pairing
        return 75;
    }

    score as u8
}

/// Minimum compatibility threshold for a room type.
/// Triples and quads need flexibility, so their bar is lower.
pub fn min_threshold(room_type: RoomType) -> u8 {
    if room_type.is_group_room() {
        60
    } else {
        75
    }
}

/// Classify confidence from a compatibility score and the model's own
/// stated confidence (treated as Medium for fallback-scored matches).
pub fn classify_confidence(score: u8, model_confidence: Confidence) -> Confidence {
    if score >= 85 && model_confidence == Confidence::High {
        return Confidence::High;
    }
    if score < 75 {
        return Confidence::Low;
    }
    if score < 80 && model_confidence == Confidence::Low {
        return Confidence::Low;
    }
    Confidence::Medium
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn profile(
        sleep: SleepSchedule,
        tidy: Tidiness,
        noise: NoiseLevel,
        social: SocialLevel,
    ) -> StudentProfile {
        StudentProfile {
            user_id: "t".to_string(),
            name: "T".to_string(),
            major: "General".to_string(),
            college: None,
            year: YearStatus::Upperclass,
            room_type: RoomType::Double,
            is_honors: false,
            accessible: Default::default(),
            sleep_schedule: sleep,
            tidiness: tidy,
            noise_level: noise,
            social_level: social,
            guest_frequency: Default::default(),
            environment_pref: None,
            community_type: None,
            gender_housing: Default::default(),
            break_housing: Default::default(),
            alcohol: Default::default(),
            priorities: Default::default(),
        }
    }

    fn baseline() -> StudentProfile {
        profile(
            SleepSchedule::Balanced,
            Tidiness::Tidy,
            NoiseLevel::Quiet,
            SocialLevel::ModeratelySocial,
        )
    }

    #[test]
    fn test_identical_profiles_keep_base_score() {
        let a = baseline();
        let b = baseline();
        assert_eq!(fallback_score(&a, &b, &FallbackPenalties::default()), 80);
    }

    #[test]
    fn test_minor_differences_boosted_to_floor() {
        // sleep -10, tidy -5, noise -5 => 60, no extreme conflicts => lifted to 75
        let a = baseline();
        let b = profile(
            SleepSchedule::EarlyBird,
            Tidiness::VeryTidy,
            NoiseLevel::VeryQuiet,
            SocialLevel::ModeratelySocial,
        );
        assert_eq!(fallback_score(&a, &b, &FallbackPenalties::default()), 75);
    }

    #[test]
    fn test_opposed_extremes_collapse_to_zero() {
        let a = profile(
            SleepSchedule::EarlyBird,
            Tidiness::VeryTidy,
            NoiseLevel::VeryQuiet,
            SocialLevel::MinimalSocial,
        );
        let b = profile(
            SleepSchedule::NightOwl,
            Tidiness::Messy,
            NoiseLevel::Loud,
            SocialLevel::VerySocial,
        );
        assert_eq!(fallback_score(&a, &b, &FallbackPenalties::default()), 0);
    }

    #[test]
    fn test_conflict_check_is_symmetric() {
        let a = profile(
            SleepSchedule::NightOwl,
            Tidiness::Tidy,
            NoiseLevel::Quiet,
            SocialLevel::ModeratelySocial,
        );
        let mut b = baseline();
        b.sleep_schedule = SleepSchedule::EarlyBird;
        b.tidiness = Tidiness::Messy;
        // sleep conflict -25, tidy minor -5 => 50, opposed extreme present => 0
        assert_eq!(fallback_score(&a, &b, &FallbackPenalties::default()), 0);
        assert_eq!(fallback_score(&b, &a, &FallbackPenalties::default()), 0);
    }

    #[test]
    fn test_single_small_difference_stays_above_threshold() {
        let a = baseline();
        let mut b = baseline();
        b.social_level = SocialLevel::VerySocial;
        // social minor -3 => 77
        assert_eq!(fallback_score(&a, &b, &FallbackPenalties::default()), 77);
    }

    #[test]
    fn test_thresholds_by_room_type() {
        assert_eq!(min_threshold(RoomType::Double), 75);
        assert_eq!(min_threshold(RoomType::Suite), 75);
        assert_eq!(min_threshold(RoomType::Apartment), 75);
        assert_eq!(min_threshold(RoomType::Triple), 60);
        assert_eq!(min_threshold(RoomType::Quad), 60);
    }

    #[test]
    fn test_confidence_classification() {
        assert_eq!(classify_confidence(90, Confidence::High), Confidence::High);
        assert_eq!(classify_confidence(90, Confidence::Medium), Confidence::Medium);
        assert_eq!(classify_confidence(70, Confidence::High), Confidence::Low);
        assert_eq!(classify_confidence(78, Confidence::Low), Confidence::Low);
        assert_eq!(classify_confidence(78, Confidence::Medium), Confidence::Medium);
        assert_eq!(classify_confidence(82, Confidence::Low), Confidence::Medium);
    }
}
