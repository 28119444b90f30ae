use chrono::Duration;
use fluency_core::{FluencyScores, Phase};
use fluency_path::{
    ActivityKind, FixedClock, LearningPathEngine, Priority, RecommendationCategory,
};
use fluency_test_utils::{
    create_category, create_record, create_record_with, create_uniform, fixed_now,
    seeded_categories, TEST_STUDENT,
};
use pretty_assertions::assert_eq;

fn engine() -> LearningPathEngine<FixedClock> {
    LearningPathEngine::with_clock(FixedClock::at(fixed_now()))
}

#[test]
fn empty_progress_is_a_new_student() {
    let path = engine().analyze(TEST_STUDENT, &[], &seeded_categories());

    assert_eq!(path.student_id.as_str(), TEST_STUDENT);
    assert_eq!(path.current_phase, Phase::Counting);
    assert_eq!(path.overall_progress, FluencyScores::default());
    assert!(path.strengths.is_empty());
    assert!(path.growth_areas.is_empty());
    assert!(path.recommendations.is_empty());
    assert!(path.milestones.is_empty());
    assert_eq!(path.generated_at, fixed_now());
}

#[test]
fn single_mastered_category() {
    let progress = vec![create_record_with(
        "add-doubles",
        FluencyScores::new(95, 90, 85, 88),
        Phase::Mastery,
    )];
    let path = engine().analyze(TEST_STUDENT, &progress, &seeded_categories());

    assert_eq!(path.overall_progress, FluencyScores::new(95, 90, 85, 88));
    assert_eq!(path.current_phase, Phase::Mastery);
    assert_eq!(
        path.strengths,
        vec![
            "Doubles (addition)",
            "Strong accuracy",
            "Good speed and efficiency",
            "Flexible strategy use",
        ]
    );
    assert!(path.growth_areas.is_empty());
    assert!(path.recommendations.is_empty());
    assert!(path.milestones.is_empty());
}

#[test]
fn single_struggling_category() {
    let progress = vec![create_record("add-plus-minus-1-2", 45)];
    let path = engine().analyze(TEST_STUDENT, &progress, &seeded_categories());

    assert_eq!(path.recommendations.len(), 1);
    let rec = &path.recommendations[0];
    assert_eq!(rec.id, "urgent-add-plus-minus-1-2");
    assert_eq!(rec.title, "Focus on +/- 1 or 2");
    assert_eq!(
        rec.description,
        "This foundational area needs immediate attention. Current accuracy: 45%"
    );
    assert_eq!(rec.priority, Priority::High);
    assert_eq!(rec.category, RecommendationCategory::Foundational);
    assert_eq!(rec.estimated_time, 30);
    assert_eq!(rec.target_facts, vec!["3+1", "7+2", "9-1", "5-2"]);
    assert!(rec.prerequisites.is_empty());
    assert_eq!(rec.next_steps, vec!["Achieve 75% accuracy in +/- 1 or 2"]);
    assert_eq!(rec.suggested_activities.len(), 3);
    assert_eq!(
        rec.suggested_activities[2].game_id.as_deref(),
        Some("racing-bears")
    );

    assert_eq!(path.milestones.len(), 1);
    let milestone = &path.milestones[0];
    assert_eq!(milestone.id, "milestone-add-plus-minus-1-2");
    assert_eq!(milestone.title, "Master +/- 1 or 2");
    assert_eq!(milestone.target_date, fixed_now() + Duration::weeks(4));
    assert_eq!(milestone.required_accuracy, 90);
    assert!(!milestone.is_completed);

    assert_eq!(
        path.growth_areas,
        vec![
            "+/- 1 or 2 (addition)",
            "Accuracy needs improvement",
            "Speed and efficiency",
            "Strategy flexibility",
        ]
    );
}

#[test]
fn mixed_performance_adds_self_assessment() {
    let progress = vec![
        create_record("add-plus-minus-1-2", 95),
        create_record("add-doubles", 50),
        create_record("add-combinations-10", 72),
    ];
    let path = engine().analyze(TEST_STUDENT, &progress, &seeded_categories());

    let ids: Vec<_> = path.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "urgent-add-doubles",
            "advance-add-combinations-10",
            "comprehensive-assessment",
        ]
    );

    let advance = &path.recommendations[1];
    assert_eq!(advance.priority, Priority::Medium);
    assert_eq!(advance.estimated_time, 20);
    assert_eq!(advance.prerequisites, vec!["70% accuracy in Combinations of 10"]);
    assert_eq!(
        advance.suggested_activities[0].game_id.as_deref(),
        Some("sum-war")
    );

    let assessment = &path.recommendations[2];
    assert_eq!(assessment.category, RecommendationCategory::Assessment);
    assert_eq!(assessment.estimated_time, 15);
    assert!(assessment.target_facts.is_empty());
    assert_eq!(assessment.suggested_activities.len(), 1);
    assert_eq!(
        assessment.suggested_activities[0].kind,
        ActivityKind::Assessment
    );
    assert_eq!(
        assessment.next_steps,
        vec!["Use assessment insights to focus practice"]
    );

    let offsets: Vec<_> = path
        .milestones
        .iter()
        .map(|m| m.target_date - fixed_now())
        .collect();
    assert_eq!(offsets, vec![Duration::weeks(4), Duration::weeks(2)]);
}

#[test]
fn only_first_two_urgent_and_first_three_milestones() {
    let (progress, categories) = create_uniform(6, 40);
    let path = engine().analyze(TEST_STUDENT, &progress, &categories);

    let ids: Vec<_> = path.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["urgent-cat-0", "urgent-cat-1"]);

    let milestone_ids: Vec<_> = path.milestones.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        milestone_ids,
        vec!["milestone-cat-0", "milestone-cat-1", "milestone-cat-2"]
    );
}

#[test]
fn five_candidates_truncate_to_four_dropping_assessment() {
    let categories = seeded_categories();
    let progress = vec![
        create_record("add-plus-minus-1-2", 10),
        create_record("add-doubles", 20),
        create_record("add-combinations-10", 80),
        create_record("add-10-plus", 82),
        create_record("mult-0-1", 30),
    ];
    let path = engine().analyze(TEST_STUDENT, &progress, &categories);

    let ids: Vec<_> = path.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "urgent-add-plus-minus-1-2",
            "urgent-add-doubles",
            "advance-add-combinations-10",
            "advance-add-10-plus",
        ]
    );
}

#[test]
fn milestones_skip_mastered_records_before_capping() {
    let categories = seeded_categories();
    let progress = vec![
        create_record("add-plus-minus-1-2", 95),
        create_record("add-doubles", 92),
        create_record("add-combinations-10", 85),
        create_record("add-10-plus", 65),
        create_record("mult-2-5-10", 55),
        create_record("mult-0-1", 70),
    ];
    let path = engine().analyze(TEST_STUDENT, &progress, &categories);

    let summary: Vec<_> = path
        .milestones
        .iter()
        .map(|m| (m.category.as_str(), (m.target_date - fixed_now()).num_weeks()))
        .collect();
    assert_eq!(
        summary,
        vec![("Combinations of 10", 1), ("10 + facts", 2), ("2s, 5s, 10s", 4)]
    );
    assert!(path.milestones.iter().all(|m| !m.is_completed));
}

#[test]
fn orphan_records_count_toward_averages_only() {
    let categories = vec![create_category("known", "Known", fluency_core::Operation::Addition)];
    let progress = vec![
        create_record_with("known", FluencyScores::new(95, 95, 95, 95), Phase::Mastery),
        create_record_with("missing", FluencyScores::new(45, 45, 45, 45), Phase::Counting),
    ];
    let path = engine().analyze(TEST_STUDENT, &progress, &categories);

    assert_eq!(path.overall_progress, FluencyScores::new(70, 70, 70, 70));
    // mean weight 1.0
    assert_eq!(path.current_phase, Phase::Deriving);
    assert_eq!(path.strengths, vec!["Known (addition)"]);
    assert_eq!(
        path.growth_areas,
        vec![
            "Accuracy needs improvement",
            "Speed and efficiency",
            "Strategy flexibility",
            "Strategy development",
        ]
    );
    // the orphan is urgent but has no category to describe; mixed signal still counts it
    let ids: Vec<_> = path.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["comprehensive-assessment"]);
    assert!(path.milestones.is_empty());
}

#[test]
fn analysis_is_idempotent_under_a_frozen_clock() {
    let progress = vec![
        create_record("add-doubles", 50),
        create_record("mult-squares", 75),
        create_record("add-10-plus", 91),
    ];
    let categories = seeded_categories();
    let engine = engine();

    let first = engine.analyze(TEST_STUDENT, &progress, &categories);
    let second = engine.analyze(TEST_STUDENT, &progress, &categories);
    assert_eq!(first, second);
}

#[test]
fn inputs_are_not_mutated() {
    let progress = vec![create_record("add-doubles", 50)];
    let categories = seeded_categories();
    let before = (progress.clone(), categories.clone());

    let _ = engine().analyze(TEST_STUDENT, &progress, &categories);
    assert_eq!((progress, categories), before);
}

#[test]
fn json_output_matches_wire_shape() {
    let progress = vec![create_record("add-doubles", 50)];
    let path = engine().analyze(TEST_STUDENT, &progress, &seeded_categories());
    let json = serde_json::to_value(&path).unwrap();

    assert_eq!(json["studentId"], TEST_STUDENT);
    assert_eq!(json["currentPhase"], "counting");
    assert_eq!(json["overallProgress"]["strategyUse"], 50);
    assert_eq!(json["recommendations"][0]["priority"], "high");
    assert_eq!(
        json["recommendations"][0]["suggestedActivities"][0]["type"],
        "strategy-instruction"
    );
    assert_eq!(json["nextMilestones"][0]["requiredAccuracy"], 90);
    assert_eq!(path.total_estimated_minutes(), 30);
}

#[test]
fn every_activity_game_is_in_the_game_catalog() {
    let games = fluency_store::GameCatalog::seeded();
    let focuses = [fluency_path::ActivityFocus::Intensive, fluency_path::ActivityFocus::Building];

    for category in seeded_categories() {
        for focus in focuses {
            for activity in fluency_path::activities_for(&category, focus) {
                if let Some(game_id) = activity.game_id {
                    assert!(
                        games.get(&game_id).is_some(),
                        "{} maps to unknown game {game_id}",
                        category.id
                    );
                }
            }
        }
    }
    assert!(games.get(fluency_path::DEFAULT_GAME).is_some());
}
