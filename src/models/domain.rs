use serde::{Deserialize, Serialize};

/// Residential areas on campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Southwest,
    Central,
    Northeast,
    #[serde(rename = "Orchard Hill")]
    OrchardHill,
    North,
    Sylvan,
    #[serde(rename = "CHCRC")]
    Chcrc,
}

impl Area {
    /// All areas, in a fixed declared order
    pub const ALL: [Area; 7] = [
        Area::Southwest,
        Area::Central,
        Area::Northeast,
        Area::OrchardHill,
        Area::North,
        Area::Sylvan,
        Area::Chcrc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Area::Southwest => "Southwest",
            Area::Central => "Central",
            Area::Northeast => "Northeast",
            Area::OrchardHill => "Orchard Hill",
            Area::North => "North",
            Area::Sylvan => "Sylvan",
            Area::Chcrc => "CHCRC",
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Academic-proximity zones used only for table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    CentralHub,
    SouthwestHub,
    NortheastHub,
    OrchardHillHub,
    ChcrcHub,
    CentralScience,
    NorthScience,
    CentralCore,
    SouthwestHumanities,
}

/// Room types a student can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Double,
    Triple,
    Quad,
    Suite,
    Apartment,
}

impl RoomType {
    /// Number of roommates needed beyond the student themselves
    pub fn required_roommates(&self) -> usize {
        match self {
            RoomType::Triple => 2,
            RoomType::Quad => 3,
            _ => 1,
        }
    }

    pub fn is_group_room(&self) -> bool {
        matches!(self, RoomType::Triple | RoomType::Quad)
    }
}

/// Year cohort; the frontend sends several spellings for each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum YearStatus {
    #[serde(
        rename = "first-years",
        alias = "first-year",
        alias = "freshman",
        alias = "freshmen"
    )]
    FirstYear,
    #[default]
    #[serde(rename = "upperclassmen", alias = "upperclassman")]
    Upperclass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SleepSchedule {
    EarlyBird,
    #[default]
    Balanced,
    NightOwl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tidiness {
    VeryTidy,
    #[default]
    Tidy,
    ModeratelyTidy,
    Messy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseLevel {
    VeryQuiet,
    #[default]
    Quiet,
    Moderate,
    Loud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SocialLevel {
    MinimalSocial,
    #[default]
    ModeratelySocial,
    VerySocial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GuestFrequency {
    Never,
    Rarely,
    #[default]
    Monthly,
    Weekly,
    Daily,
}

/// Gender-related housing preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GenderHousing {
    SingleGender,
    GenderInclusive,
    #[default]
    NoPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BreakHousing {
    #[default]
    No,
    Preferred,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlcoholPolicy {
    #[default]
    NoPreference,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Yes,
    Preferred,
    #[default]
    No,
}

/// Priority rankings (1 = most important, 4 = least)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriorityRanks {
    #[serde(default = "default_rank")]
    pub location: u8,
    #[serde(default = "default_rank")]
    pub privacy: u8,
    #[serde(default = "default_rank")]
    pub amenities: u8,
    #[serde(default = "default_rank")]
    pub social: u8,
}

fn default_rank() -> u8 {
    4
}

impl Default for PriorityRanks {
    fn default() -> Self {
        Self {
            location: 4,
            privacy: 4,
            amenities: 4,
            social: 4,
        }
    }
}

/// A student's housing questionnaire, normalized from the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default = "default_major")]
    pub major: String,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(rename = "studentYear", default)]
    pub year: YearStatus,
    #[serde(rename = "roomType", default)]
    pub room_type: RoomType,
    #[serde(rename = "isHonors", default)]
    pub is_honors: bool,
    #[serde(default)]
    pub accessible: Accessibility,
    #[serde(rename = "sleepSchedule", default)]
    pub sleep_schedule: SleepSchedule,
    #[serde(default)]
    pub tidiness: Tidiness,
    #[serde(rename = "noiseLevel", default)]
    pub noise_level: NoiseLevel,
    #[serde(rename = "socialLevel", default)]
    pub social_level: SocialLevel,
    #[serde(rename = "guestFrequency", default)]
    pub guest_frequency: GuestFrequency,
    #[serde(rename = "environmentPref", default)]
    pub environment_pref: Option<String>,
    #[serde(rename = "communityType", default)]
    pub community_type: Option<String>,
    #[serde(rename = "genderInclusivePref", default)]
    pub gender_housing: GenderHousing,
    #[serde(rename = "breakHousingPref", default)]
    pub break_housing: BreakHousing,
    #[serde(rename = "alcoholPref", default)]
    pub alcohol: AlcoholPolicy,
    #[serde(default)]
    pub priorities: PriorityRanks,
}

fn default_major() -> String {
    "General".to_string()
}

/// A roster candidate: a profile plus their residential area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub profile: StudentProfile,
    #[serde(rename = "dormArea")]
    pub dorm_area: Area,
}

/// Match confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Where a compatibility score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Llm,
    Fallback,
}

/// A scored candidate flowing through the pipeline
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_area: Area,
    pub candidate_noise: NoiseLevel,
    pub candidate_gender: GenderHousing,
    pub score: u8,
    pub confidence: Confidence,
    pub reasoning: String,
    pub advice: String,
    pub is_alternative: bool,
    pub source: ScoreSource,
    /// Assigned during final assembly
    pub hall: Option<&'static str>,
}

/// Residence recommendation produced by the zone rules engine
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub area: Area,
    pub halls: Vec<&'static str>,
}

/// Roster eligibility query
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    pub exclude_user_id: String,
    pub allowed_areas: Vec<Area>,
    pub year: YearStatus,
}
