//! Residence recommendation: academic-proximity rules over the zone tables.

use crate::core::zones;
use crate::models::{Area, Recommendation, StudentProfile, YearStatus, Zone};

/// Resolve the academic zone for a student.
///
/// A specific college wins outright; an unrecognized one lands centrally.
/// A generic or missing college falls back to keyword inference from the
/// major, and finally to the legacy major map (collapsed onto the hub
/// zones it predates).
pub fn resolve_zone(profile: &StudentProfile) -> Zone {
    if let Some(college) = profile
        .college
        .as_deref()
        .filter(|c| !c.is_empty() && *c != zones::GENERAL_COLLEGE)
    {
        return zones::zone_for_college(college).unwrap_or(Zone::CentralHub);
    }

    if let Some(zone) = zones::infer_college(&profile.major, profile.is_honors)
        .and_then(zones::zone_for_college)
    {
        return zone;
    }

    match zones::legacy_zone_for_major(&profile.major) {
        Zone::CentralScience => Zone::OrchardHillHub,
        Zone::NorthScience => Zone::NortheastHub,
        _ => Zone::CentralHub,
    }
}

/// Recommend a residential area for a student.
///
/// Picks the highest-proximity area for the student's academic zone, then
/// applies two hard rules: North is upperclass-only, and honors students
/// get CHCRC whenever their zone reaches it.
pub fn recommend_area(profile: &StudentProfile) -> Recommendation {
    let zone = resolve_zone(profile);
    let mut area = best_area(zone);

    if profile.year == YearStatus::FirstYear && area == Area::North {
        area = if matches!(zone, Zone::NortheastHub | Zone::NorthScience) {
            Area::Northeast
        } else {
            Area::Central
        };
        tracing::info!("blocked North for first-year student, redirecting to {}", area);
    }

    if profile.is_honors && zones::zone_reaches(zone, Area::Chcrc) {
        area = Area::Chcrc;
        tracing::info!("honors student, recommending CHCRC");
    }

    Recommendation {
        area,
        halls: zones::halls(area).to_vec(),
    }
}

/// First maximum in the zone's declared proximity order.
/// Ties are broken by table position, so the order in the tables matters.
fn best_area(zone: Zone) -> Area {
    let mut best = (Area::Central, 0u8);
    for &(area, score) in zones::proximity(zone) {
        if score > best.1 {
            best = (area, score);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;

    fn profile(major: &str, college: Option<&str>, year: YearStatus, honors: bool) -> StudentProfile {
        StudentProfile {
            user_id: "u1".to_string(),
            name: "Test".to_string(),
            major: major.to_string(),
            college: college.map(str::to_string),
            year,
            room_type: RoomType::Double,
            is_honors: honors,
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

    #[test]
    fn test_business_student_gets_southwest() {
        let p = profile(
            "Business",
            Some("Isenberg School of Management"),
            YearStatus::Upperclass,
            false,
        );
        assert_eq!(recommend_area(&p).area, Area::Southwest);
    }

    #[test]
    fn test_engineering_major_inferred_to_northeast() {
        // No college given: inferred from major keywords
        let p = profile("Chemical Engineering", None, YearStatus::Upperclass, false);
        assert_eq!(resolve_zone(&p), Zone::NortheastHub);
        assert_eq!(recommend_area(&p).area, Area::Northeast);
    }

    #[test]
    fn test_generic_college_uses_legacy_major_map() {
        // "Biology" has no inference keyword path via a generic college,
        // but the explicit college resolves it first
        let p = profile("Biology", Some("College of Natural Sciences"), YearStatus::FirstYear, false);
        assert_eq!(resolve_zone(&p), Zone::OrchardHillHub);
        assert_eq!(recommend_area(&p).area, Area::OrchardHill);
    }

    #[test]
    fn test_unrecognized_college_lands_central() {
        // An explicit but unknown college decides the zone by itself;
        // the major never gets a say
        let p = profile(
            "Computer Science",
            Some("School of Wizardry"),
            YearStatus::Upperclass,
            false,
        );
        assert_eq!(resolve_zone(&p), Zone::CentralHub);
        assert_eq!(recommend_area(&p).area, Area::Central);
    }

    #[test]
    fn test_unknown_everything_defaults_central() {
        let p = profile("General", Some(zones::GENERAL_COLLEGE), YearStatus::Upperclass, false);
        assert_eq!(resolve_zone(&p), Zone::CentralHub);
        assert_eq!(recommend_area(&p).area, Area::Central);
    }

    #[test]
    fn test_honors_override_to_chcrc() {
        let p = profile(
            "History",
            Some("College of Humanities and Fine Arts"),
            YearStatus::Upperclass,
            true,
        );
        assert_eq!(recommend_area(&p).area, Area::Chcrc);
    }

    #[test]
    fn test_honors_flag_alone_resolves_honors_college() {
        let p = profile("Interdisciplinary Studies", None, YearStatus::Upperclass, true);
        assert_eq!(resolve_zone(&p), Zone::ChcrcHub);
        assert_eq!(recommend_area(&p).area, Area::Chcrc);
    }

    #[test]
    fn test_tied_proximity_breaks_by_table_order() {
        // Several zones tie at 5; the first entry in the table must win
        let p = profile("English", None, YearStatus::Upperclass, false);
        // English infers College of Humanities and Fine Arts -> CentralHub -> Central
        assert_eq!(recommend_area(&p).area, Area::Central);

        let honors = profile(
            "Biology",
            Some("Commonwealth Honors College"),
            YearStatus::Upperclass,
            false,
        );
        // ChcrcHub ties CHCRC/Central at 5; CHCRC is declared first
        assert_eq!(recommend_area(&honors).area, Area::Chcrc);
    }

    #[test]
    fn test_recommendation_includes_halls() {
        let p = profile("English", Some("College of Humanities and Fine Arts"), YearStatus::FirstYear, false);
        let rec = recommend_area(&p);
        assert_eq!(rec.area, Area::Central);
        assert!(rec.halls.contains(&"Gorman Hall"));
    }
}
