//! Static academic-proximity and hall lookup tables.
//!
//! These tables are calibrated against the campus map: each academic zone
//! maps to per-area proximity scores (5 = best), and each residential area
//! to its halls. Room-type and break-housing availability are fixed
//! per-area constraints.

use crate::models::{Area, Zone};

/// Canonical college names recognized by the zone lookup
pub const GENERAL_COLLEGE: &str = "General/Other";

/// Primary academic proximity map (college-based, highly specific)
pub fn zone_for_college(college: &str) -> Option<Zone> {
    let zone = match college {
        "Isenberg School of Management" => Zone::SouthwestHub,
        "College of Natural Sciences" => Zone::OrchardHillHub,
        "College of Info. & Computer Sciences" => Zone::NortheastHub,
        "Daniel J. Riccio Jr. College of Engineering" => Zone::NortheastHub,
        "College of Humanities and Fine Arts" => Zone::CentralHub,
        "College of Social and Behavioral Sciences" => Zone::CentralHub,
        "Elaine Marieb College of Nursing" => Zone::OrchardHillHub,
        "School of Public Health and Health Sciences" => Zone::NortheastHub,
        "College of Education" => Zone::NortheastHub,
        "Commonwealth Honors College" => Zone::ChcrcHub,
        "Stockbridge School of Agriculture" => Zone::OrchardHillHub,
        "School of Public Policy" => Zone::CentralHub,
        GENERAL_COLLEGE => Zone::CentralHub,
        _ => return None,
    };
    Some(zone)
}

/// Infer a college from major keywords when no specific college was given
pub fn infer_college(major: &str, is_honors: bool) -> Option<&'static str> {
    let major = major.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| major.contains(n));

    if contains_any(&["computer", "engineering", "physics", "chemistry", "math"]) {
        if major.contains("engineering") {
            return Some("Daniel J. Riccio Jr. College of Engineering");
        }
        if major.contains("computer") {
            return Some("College of Info. & Computer Sciences");
        }
        return Some("College of Natural Sciences");
    }
    if contains_any(&["business", "management", "marketing", "finance", "accounting", "economics"]) {
        return Some("Isenberg School of Management");
    }
    if contains_any(&["english", "history", "language", "art", "music", "theater", "architecture", "film"]) {
        return Some("College of Humanities and Fine Arts");
    }
    if contains_any(&["psychology", "sociology", "political", "journalism", "anthropology", "afro-american"]) {
        return Some("College of Social and Behavioral Sciences");
    }
    if contains_any(&["biology", "biochemistry", "environmental science"]) {
        return Some("College of Natural Sciences");
    }
    if major.contains("nursing") {
        return Some("Elaine Marieb College of Nursing");
    }
    if contains_any(&["public health", "kinesiology"]) {
        return Some("School of Public Health and Health Sciences");
    }
    if major.contains("education") {
        return Some("College of Education");
    }
    if major.contains("agriculture") {
        return Some("Stockbridge School of Agriculture");
    }
    if major.contains("honors") || is_honors {
        return Some("Commonwealth Honors College");
    }
    None
}

/// Legacy fallback map (major-based), used only when the college is generic
pub fn legacy_zone_for_major(major: &str) -> Zone {
    match major {
        // STEM & engineering
        "Computer Science" | "Engineering" | "Biomedical Engineering" | "Chemical Engineering"
        | "Physics" | "Chemistry" | "Mathematics" => Zone::NorthScience,
        "Biology" | "Biochemistry" | "Environmental Science" => Zone::CentralScience,
        // Business & management
        "Business" | "Management" | "Accounting" | "Economics" | "General Studies" => {
            Zone::CentralCore
        }
        // Health sciences
        "Nursing" => Zone::CentralScience,
        "Public Health" => Zone::NorthScience,
        "Kinesiology" => Zone::NortheastHub,
        // Humanities & fine arts
        "English" | "History" | "Languages" => Zone::SouthwestHumanities,
        "Art & Design" | "Architecture" | "Film and Video Studies" => Zone::CentralHub,
        // Social sciences
        "Psychology" | "Political Science" | "Sociology" | "Anthropology" | "Journalism"
        | "Afro-American Studies" => Zone::CentralHub,
        // Education & agriculture
        "Education" => Zone::NortheastHub,
        "Agriculture" => Zone::OrchardHillHub,
        _ => Zone::CentralCore,
    }
}

/// Per-area proximity scores for a zone, in recommendation order.
/// The recommended area is the first maximum in this order.
pub fn proximity(zone: Zone) -> &'static [(Area, u8)] {
    use Area::*;
    match zone {
        Zone::CentralHub => &[
            (Central, 5), (Chcrc, 4), (Southwest, 4), (Northeast, 3),
            (OrchardHill, 2), (North, 3), (Sylvan, 2),
        ],
        Zone::SouthwestHub => &[
            (Southwest, 5), (Central, 4), (Chcrc, 3), (OrchardHill, 2),
            (Northeast, 2), (North, 2), (Sylvan, 2),
        ],
        Zone::NortheastHub => &[
            (Northeast, 5), (North, 4), (Sylvan, 3), (OrchardHill, 3),
            (Central, 2), (Chcrc, 2), (Southwest, 1),
        ],
        Zone::OrchardHillHub => &[
            (OrchardHill, 5), (Central, 4), (Chcrc, 3), (Northeast, 3),
            (Southwest, 2), (North, 2), (Sylvan, 3),
        ],
        Zone::ChcrcHub => &[
            (Chcrc, 5), (Central, 5), (Southwest, 4), (OrchardHill, 3),
            (Northeast, 2), (North, 2), (Sylvan, 2),
        ],
        Zone::CentralScience => &[
            (Central, 5), (Chcrc, 5), (OrchardHill, 4), (Northeast, 3),
            (Southwest, 3), (North, 2), (Sylvan, 3),
        ],
        Zone::NorthScience => &[
            (Northeast, 5), (North, 4), (OrchardHill, 3), (Central, 2),
            (Chcrc, 2), (Southwest, 1), (Sylvan, 3),
        ],
        Zone::CentralCore => &[
            (Central, 5), (Chcrc, 5), (Southwest, 5), (OrchardHill, 3),
            (Northeast, 3), (North, 3), (Sylvan, 3),
        ],
        Zone::SouthwestHumanities => &[
            (Southwest, 5), (Central, 5), (Chcrc, 3), (Sylvan, 3),
            (OrchardHill, 2), (Northeast, 2), (North, 2),
        ],
    }
}

/// Whether a zone's proximity table includes an area at all
pub fn zone_reaches(zone: Zone, area: Area) -> bool {
    proximity(zone).iter().any(|(a, _)| *a == area)
}

/// Halls per residential area, closest first
pub fn halls(area: Area) -> &'static [&'static str] {
    match area {
        Area::Southwest => &[
            "Cance Hall", "James Hall", "MacKimmie Hall", "Kennedy Hall",
            "Prince Hall", "Melville Hall", "Thoreau Hall",
        ],
        Area::Central => &[
            "Gorman Hall", "Butterfield Hall", "Brooks Hall", "Chadbourne Hall",
            "Greenough Hall", "Van Meter Hall", "Coolidge Hall",
        ],
        Area::Northeast => &[
            "Knowlton Hall", "Crabtree Hall", "Leach Hall", "Hamlin Hall",
            "Dwight Hall", "Mary Lyon Hall", "Johnson Hall",
        ],
        Area::OrchardHill => &["Webster Hall", "Dickinson Hall", "Grayson Hall", "Field Hall"],
        Area::Chcrc => &["Oak Hall", "Sycamore Hall", "Birch Hall", "Elm Hall", "Maple Hall"],
        Area::North => &["North A", "North B", "North C", "North D"],
        Area::Sylvan => &["Brown Hall", "Cashin Hall", "McNamara Hall"],
    }
}

/// Areas offering triple rooms
pub const TRIPLE_AREAS: [Area; 4] = [
    Area::Central,
    Area::OrchardHill,
    Area::Northeast,
    Area::Southwest,
];

/// Areas offering quad rooms (Northeast has none)
pub const QUAD_AREAS: [Area; 3] = [Area::Central, Area::OrchardHill, Area::Southwest];

/// Areas with halls that stay open over academic breaks
pub const BREAK_AREAS: [Area; 6] = [
    Area::Central,
    Area::Southwest,
    Area::OrchardHill,
    Area::North,
    Area::Sylvan,
    Area::Chcrc,
];

/// Areas restricted to upperclass students
pub const UPPERCLASS_ONLY_AREAS: [Area; 2] = [Area::North, Area::Sylvan];
