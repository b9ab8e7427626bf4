//! In-memory candidate roster.
//!
//! The matching service has no persistence layer: the candidate pool is a
//! hardcoded roster covering every residential area, both year cohorts, and
//! all room types. Eligibility queries run the linear-scan predicates from
//! the filters module.

use crate::core::filters;
use crate::models::{
    AlcoholPolicy, Area, BreakHousing, CandidateFilter, CandidateProfile, GenderHousing,
    GuestFrequency, NoiseLevel, PriorityRanks, RoomType, SleepSchedule, SocialLevel,
    StudentProfile, Tidiness, YearStatus,
};

/// Candidate roster with eligibility queries
#[derive(Debug, Clone)]
pub struct CandidateDirectory {
    roster: Vec<CandidateProfile>,
}

impl CandidateDirectory {
    pub fn new(roster: Vec<CandidateProfile>) -> Self {
        Self { roster }
    }

    /// The seeded roster used by the service
    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn all(&self) -> &[CandidateProfile] {
        &self.roster
    }

    /// Candidates passing the eligibility predicates for this search
    pub fn eligible(&self, filter: &CandidateFilter) -> Vec<&CandidateProfile> {
        let matched: Vec<&CandidateProfile> = self
            .roster
            .iter()
            .filter(|c| filters::is_eligible(c, filter))
            .collect();

        tracing::debug!(
            "roster filter: {} of {} candidates eligible for areas {:?}",
            matched.len(),
            self.roster.len(),
            filter.allowed_areas
        );

        matched
    }
}

impl Default for CandidateDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn student(
    id: &str,
    name: &str,
    major: &str,
    college: &str,
    year: YearStatus,
    room: RoomType,
) -> StudentProfile {
    StudentProfile {
        user_id: id.to_string(),
        name: name.to_string(),
        major: major.to_string(),
        college: Some(college.to_string()),
        year,
        room_type: room,
        is_honors: false,
        accessible: Default::default(),
        sleep_schedule: SleepSchedule::Balanced,
        tidiness: Tidiness::ModeratelyTidy,
        noise_level: NoiseLevel::Moderate,
        social_level: SocialLevel::ModeratelySocial,
        guest_frequency: GuestFrequency::Weekly,
        environment_pref: Some("balanced".to_string()),
        community_type: Some("general".to_string()),
        gender_housing: GenderHousing::NoPreference,
        break_housing: BreakHousing::No,
        alcohol: AlcoholPolicy::NoPreference,
        priorities: PriorityRanks::default(),
    }
}

fn ranks(location: u8, privacy: u8, amenities: u8, social: u8) -> PriorityRanks {
    PriorityRanks {
        location,
        privacy,
        amenities,
        social,
    }
}

fn seed_roster() -> Vec<CandidateProfile> {
    use Area::*;
    use RoomType::*;
    use YearStatus::*;

    vec![
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::VeryTidy,
                noise_level: NoiseLevel::VeryQuiet,
                social_level: SocialLevel::MinimalSocial,
                guest_frequency: GuestFrequency::Rarely,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                gender_housing: GenderHousing::SingleGender,
                priorities: ranks(1, 2, 3, 4),
                ..student("candidate-2", "Sam", "Business", "Isenberg School of Management", Upperclass, Double)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::NightOwl,
                tidiness: Tidiness::Messy,
                noise_level: NoiseLevel::Loud,
                social_level: SocialLevel::VerySocial,
                guest_frequency: GuestFrequency::Daily,
                environment_pref: Some("party-friendly".to_string()),
                community_type: Some("diverse-multicultural".to_string()),
                gender_housing: GenderHousing::GenderInclusive,
                break_housing: BreakHousing::Required,
                priorities: ranks(2, 4, 1, 3),
                ..student("candidate-3", "Alex", "English", "College of Humanities and Fine Arts", Upperclass, Double)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                priorities: ranks(3, 2, 4, 1),
                ..student("candidate-4", "Chris", "Mathematics", "College of Natural Sciences", Upperclass, Double)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::VeryTidy,
                noise_level: NoiseLevel::VeryQuiet,
                social_level: SocialLevel::MinimalSocial,
                guest_frequency: GuestFrequency::Never,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                gender_housing: GenderHousing::SingleGender,
                priorities: ranks(1, 2, 3, 4),
                ..student("candidate-5", "Jane", "Engineering", "Daniel J. Riccio Jr. College of Engineering", FirstYear, Double)
            },
            dorm_area: Northeast,
        },
        CandidateProfile {
            profile: StudentProfile {
                environment_pref: Some("community-focused".to_string()),
                community_type: Some("tight-knit".to_string()),
                gender_housing: GenderHousing::GenderInclusive,
                priorities: ranks(2, 3, 4, 1),
                ..student("candidate-6", "Ben", "Biology", "College of Natural Sciences", FirstYear, Double)
            },
            dorm_area: OrchardHill,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::VeryTidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Rarely,
                community_type: Some("honors-focused".to_string()),
                is_honors: true,
                priorities: ranks(1, 2, 3, 4),
                ..student("candidate-7", "Chloe", "History", "Commonwealth Honors College", Upperclass, Double)
            },
            dorm_area: Chcrc,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::NightOwl,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                social_level: SocialLevel::MinimalSocial,
                guest_frequency: GuestFrequency::Rarely,
                environment_pref: Some("independent-living".to_string()),
                break_housing: BreakHousing::Required,
                priorities: ranks(3, 1, 2, 4),
                ..student("candidate-8", "David", "Computer Science", "College of Info. & Computer Sciences", Upperclass, Apartment)
            },
            dorm_area: North,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::VeryTidy,
                noise_level: NoiseLevel::VeryQuiet,
                social_level: SocialLevel::MinimalSocial,
                guest_frequency: GuestFrequency::Never,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                gender_housing: GenderHousing::SingleGender,
                priorities: ranks(1, 2, 3, 4),
                ..student("candidate-9", "Ella", "Chemistry", "College of Natural Sciences", Upperclass, Double)
            },
            dorm_area: Northeast,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::NightOwl,
                tidiness: Tidiness::Messy,
                noise_level: NoiseLevel::Loud,
                social_level: SocialLevel::VerySocial,
                guest_frequency: GuestFrequency::Daily,
                environment_pref: Some("party-friendly".to_string()),
                community_type: Some("social-focused".to_string()),
                break_housing: BreakHousing::Required,
                priorities: ranks(4, 3, 2, 1),
                ..student("candidate-10", "Frank", "General Studies", "General/Other", FirstYear, Double)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 2, 3, 3),
                ..student("candidate-13", "Ian", "Psychology", "College of Social and Behavioral Sciences", FirstYear, Double)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                community_type: Some("academic-focused".to_string()),
                gender_housing: GenderHousing::SingleGender,
                priorities: ranks(2, 2, 3, 4),
                ..student("candidate-14", "Julia", "English", "College of Humanities and Fine Arts", FirstYear, Double)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 2, 3, 2),
                ..student("candidate-15", "Kevin", "Business", "Isenberg School of Management", Upperclass, Double)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                environment_pref: Some("independent-living".to_string()),
                gender_housing: GenderHousing::SingleGender,
                break_housing: BreakHousing::Required,
                priorities: ranks(2, 1, 3, 4),
                ..student("candidate-11", "Grace", "Management", "Isenberg School of Management", Upperclass, Apartment)
            },
            dorm_area: North,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::NightOwl,
                environment_pref: Some("independent-living".to_string()),
                gender_housing: GenderHousing::GenderInclusive,
                break_housing: BreakHousing::Required,
                priorities: ranks(2, 1, 3, 4),
                ..student("candidate-12", "Hannah", "Computer Science", "College of Info. & Computer Sciences", Upperclass, Suite)
            },
            dorm_area: Sylvan,
        },
        // Triples: Central, Orchard Hill, Northeast, Southwest
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                community_type: Some("academic-focused".to_string()),
                priorities: ranks(2, 2, 3, 4),
                ..student("triple-central-1", "Taylor", "Business", "Isenberg School of Management", FirstYear, Triple)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 2, 3, 3),
                ..student("triple-central-2", "Morgan", "Psychology", "College of Social and Behavioral Sciences", FirstYear, Triple)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::VeryTidy,
                noise_level: NoiseLevel::Quiet,
                social_level: SocialLevel::MinimalSocial,
                guest_frequency: GuestFrequency::Rarely,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                priorities: ranks(1, 2, 3, 4),
                ..student("triple-central-3", "Riley", "Mathematics", "College of Natural Sciences", Upperclass, Triple)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                environment_pref: Some("community-focused".to_string()),
                community_type: Some("tight-knit".to_string()),
                gender_housing: GenderHousing::GenderInclusive,
                priorities: ranks(2, 3, 4, 1),
                ..student("triple-orchard-1", "Casey", "Biology", "College of Natural Sciences", FirstYear, Triple)
            },
            dorm_area: OrchardHill,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("triple-orchard-2", "Jordan", "English", "College of Humanities and Fine Arts", FirstYear, Triple)
            },
            dorm_area: OrchardHill,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                priorities: ranks(1, 2, 3, 4),
                ..student("triple-northeast-1", "Avery", "Engineering", "Daniel J. Riccio Jr. College of Engineering", FirstYear, Triple)
            },
            dorm_area: Northeast,
        },
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Rarely,
                environment_pref: Some("quiet-academic".to_string()),
                community_type: Some("academic-focused".to_string()),
                priorities: ranks(1, 2, 3, 4),
                ..student("triple-northeast-2", "Quinn", "Computer Science", "College of Info. & Computer Sciences", FirstYear, Triple)
            },
            dorm_area: Northeast,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("triple-southwest-1", "Sage", "General Studies", "General/Other", FirstYear, Triple)
            },
            dorm_area: Southwest,
        },
        // Quads: Central, Orchard Hill, Southwest (never Northeast)
        CandidateProfile {
            profile: StudentProfile {
                sleep_schedule: SleepSchedule::EarlyBird,
                tidiness: Tidiness::Tidy,
                noise_level: NoiseLevel::Quiet,
                guest_frequency: GuestFrequency::Monthly,
                community_type: Some("academic-focused".to_string()),
                priorities: ranks(2, 2, 3, 4),
                ..student("quad-central-1", "River", "Business", "Isenberg School of Management", FirstYear, Quad)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 2, 3, 3),
                ..student("quad-central-2", "Phoenix", "Psychology", "College of Social and Behavioral Sciences", FirstYear, Quad)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("quad-central-3", "Skyler", "Communication", "College of Social and Behavioral Sciences", FirstYear, Quad)
            },
            dorm_area: Central,
        },
        CandidateProfile {
            profile: StudentProfile {
                environment_pref: Some("community-focused".to_string()),
                community_type: Some("tight-knit".to_string()),
                gender_housing: GenderHousing::GenderInclusive,
                priorities: ranks(2, 3, 4, 1),
                ..student("quad-orchard-1", "Blake", "Biology", "College of Natural Sciences", FirstYear, Quad)
            },
            dorm_area: OrchardHill,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("quad-orchard-2", "Cameron", "English", "College of Humanities and Fine Arts", FirstYear, Quad)
            },
            dorm_area: OrchardHill,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("quad-southwest-1", "Emery", "General Studies", "General/Other", FirstYear, Quad)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                environment_pref: Some("balanced".to_string()),
                community_type: Some("sports-athletic".to_string()),
                priorities: ranks(2, 3, 2, 1),
                ..student("quad-southwest-2", "Finley", "Kinesiology", "School of Public Health and Health Sciences", FirstYear, Quad)
            },
            dorm_area: Southwest,
        },
        CandidateProfile {
            profile: StudentProfile {
                priorities: ranks(2, 3, 2, 1),
                ..student("quad-southwest-3", "Hayden", "Psychology", "College of Social and Behavioral Sciences", FirstYear, Quad)
            },
            dorm_area: Southwest,
        },
    ]
}
