// Criterion benchmarks for dorm-match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dorm_match::core::{fallback_score, recommend_area, FallbackPenalties, Matcher};
use dorm_match::models::{
    Area, CandidateProfile, NoiseLevel, RoomType, SleepSchedule, SocialLevel, StudentProfile,
    Tidiness, YearStatus,
};
use dorm_match::services::CandidateDirectory;

fn create_profile(id: usize) -> StudentProfile {
    let sleep = match id % 3 {
        0 => SleepSchedule::EarlyBird,
        1 => SleepSchedule::Balanced,
        _ => SleepSchedule::NightOwl,
    };
    let tidy = match id % 4 {
        0 => Tidiness::VeryTidy,
        1 => Tidiness::Tidy,
        2 => Tidiness::ModeratelyTidy,
        _ => Tidiness::Messy,
    };
    let noise = match id % 4 {
        0 => NoiseLevel::VeryQuiet,
        1 => NoiseLevel::Quiet,
        2 => NoiseLevel::Moderate,
        _ => NoiseLevel::Loud,
    };
    StudentProfile {
        user_id: format!("bench-{}", id),
        name: format!("Student {}", id),
        major: "English".to_string(),
        college: Some("College of Humanities and Fine Arts".to_string()),
        year: YearStatus::Upperclass,
        room_type: RoomType::Double,
        is_honors: false,
        accessible: Default::default(),
        sleep_schedule: sleep,
        tidiness: tidy,
        noise_level: noise,
        social_level: SocialLevel::ModeratelySocial,
        guest_frequency: Default::default(),
        environment_pref: None,
        community_type: None,
        gender_housing: Default::default(),
        break_housing: Default::default(),
        alcohol: Default::default(),
        priorities: Default::default(),
    }
}

fn create_candidate(id: usize) -> CandidateProfile {
    let area = Area::ALL[id % Area::ALL.len()];
    CandidateProfile {
        profile: create_profile(id),
        dorm_area: area,
    }
}

fn requesting_user() -> StudentProfile {
    let mut p = create_profile(1);
    p.user_id = "bench-user".to_string();
    p
}

fn bench_fallback_score(c: &mut Criterion) {
    let penalties = FallbackPenalties::default();
    let a = create_profile(1);
    let b = create_profile(2);

    c.bench_function("fallback_score", |bench| {
        bench.iter(|| fallback_score(black_box(&a), black_box(&b), black_box(&penalties)));
    });
}

fn bench_recommendation(c: &mut Criterion) {
    let user = requesting_user();

    c.bench_function("recommend_area", |bench| {
        bench.iter(|| recommend_area(black_box(&user)));
    });
}

fn bench_match_pipeline(c: &mut Criterion) {
    let matcher = Matcher::default();
    let user = requesting_user();

    let mut group = c.benchmark_group("match_pipeline");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let roster: Vec<CandidateProfile> =
            (0..*candidate_count).map(create_candidate).collect();
        let directory = CandidateDirectory::new(roster);

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    let (recommendation, _) = matcher.search_areas(black_box(&user));
                    let scored: Vec<_> = matcher
                        .shortlist(&user, &directory)
                        .into_iter()
                        .map(|(candidate, _)| matcher.fallback_match(&user, candidate, false))
                        .collect();
                    matcher.assemble(&user, &recommendation, scored, &directory)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fallback_score,
    bench_recommendation,
    bench_match_pipeline
);
criterion_main!(benches);
