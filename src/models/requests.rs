//! Inbound request types and their normalization into domain profiles.
//!
//! The frontend questionnaire is loose: fields go missing, priorities
//! arrive as strings or numbers, and accessibility is sometimes a bare
//! boolean. Everything is normalized here so the rest of the pipeline
//! works with fully-populated profiles.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{
    Accessibility, AlcoholPolicy, BreakHousing, GenderHousing, GuestFrequency, NoiseLevel,
    PriorityRanks, RoomType, SleepSchedule, SocialLevel, StudentProfile, Tidiness, YearStatus,
};

/// A match request as sent by the questionnaire frontend
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "name too long"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "major too long"))]
    pub major: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "college too long"))]
    pub college: Option<String>,
    #[serde(default)]
    pub student_year: Option<YearStatus>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default)]
    pub is_honors: Option<bool>,
    #[serde(default)]
    pub accessibility: Option<AccessibilityField>,
    #[serde(default)]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(default)]
    pub tidiness: Option<Tidiness>,
    #[serde(default)]
    pub noise_level: Option<NoiseLevel>,
    #[serde(default)]
    pub social_level: Option<SocialLevel>,
    #[serde(default)]
    pub guest_frequency: Option<GuestFrequency>,
    #[serde(default)]
    pub environment_pref: Option<String>,
    #[serde(default)]
    pub community_type: Option<String>,
    #[serde(default)]
    pub gender_inclusive_pref: Option<GenderHousing>,
    #[serde(default)]
    pub break_housing_pref: Option<BreakHousing>,
    #[serde(default)]
    pub alcohol_pref: Option<AlcoholPolicy>,
    #[serde(default)]
    pub priorities: Option<RawPriorities>,
    // Older frontend builds send the ranks as individual top-level fields
    #[serde(default)]
    pub location_priority: Option<RankValue>,
    #[serde(default)]
    pub privacy_priority: Option<RankValue>,
    #[serde(default)]
    pub amenities_priority: Option<RankValue>,
    #[serde(default)]
    pub social_priority: Option<RankValue>,
}

/// Accessibility arrives as a level or a bare boolean
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum AccessibilityField {
    Flag(bool),
    Level(Accessibility),
}

impl AccessibilityField {
    fn into_level(self) -> Accessibility {
        match self {
            AccessibilityField::Flag(true) => Accessibility::Yes,
            AccessibilityField::Flag(false) => Accessibility::No,
            AccessibilityField::Level(level) => level,
        }
    }
}

/// Priority ranks arrive as strings or numbers; missing keys rank last
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPriorities {
    #[serde(default)]
    pub location: Option<RankValue>,
    #[serde(default)]
    pub privacy: Option<RankValue>,
    #[serde(default)]
    pub amenities: Option<RankValue>,
    #[serde(default)]
    pub social: Option<RankValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RankValue {
    Number(u8),
    Text(String),
}

impl RankValue {
    fn rank(&self) -> u8 {
        let raw = match self {
            RankValue::Number(n) => *n,
            RankValue::Text(s) => s.trim().parse().unwrap_or(4),
        };
        raw.clamp(1, 4)
    }
}

impl RawPriorities {
    fn into_ranks(self) -> PriorityRanks {
        let rank = |v: Option<RankValue>| v.map_or(4, |v| v.rank());
        PriorityRanks {
            location: rank(self.location),
            privacy: rank(self.privacy),
            amenities: rank(self.amenities),
            social: rank(self.social),
        }
    }
}

impl MatchRequest {
    /// Normalize the request into a fully-populated profile.
    /// A missing user id gets a generated one.
    pub fn into_profile(self) -> StudentProfile {
        let user_id = self
            .user_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        // The priorities map wins; individual fields are the legacy form
        let priorities = match self.priorities {
            Some(raw) => raw.into_ranks(),
            None => RawPriorities {
                location: self.location_priority,
                privacy: self.privacy_priority,
                amenities: self.amenities_priority,
                social: self.social_priority,
            }
            .into_ranks(),
        };

        StudentProfile {
            user_id,
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Student".to_string()),
            major: self
                .major
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "General".to_string()),
            college: self.college.filter(|c| !c.trim().is_empty()),
            year: self.student_year.unwrap_or_default(),
            room_type: self.room_type.unwrap_or_default(),
            is_honors: self.is_honors.unwrap_or(false),
            accessible: self
                .accessibility
                .map_or(Accessibility::No, AccessibilityField::into_level),
            sleep_schedule: self.sleep_schedule.unwrap_or_default(),
            tidiness: self.tidiness.unwrap_or_default(),
            noise_level: self.noise_level.unwrap_or_default(),
            social_level: self.social_level.unwrap_or_default(),
            guest_frequency: self.guest_frequency.unwrap_or_default(),
            environment_pref: self.environment_pref.filter(|e| !e.trim().is_empty()),
            community_type: self.community_type.filter(|c| !c.trim().is_empty()),
            gender_housing: self.gender_inclusive_pref.unwrap_or_default(),
            break_housing: self.break_housing_pref.unwrap_or_default(),
            alcohol: self.alcohol_pref.unwrap_or_default(),
            priorities,
        }
    }
}
