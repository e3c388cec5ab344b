use super::common::{summary, wiscar_with_dimensions};
use crate::assessment::domain::{Section, WiscarDimension};
use crate::assessment::recommendation::{
    RecommendationConfig, RecommendationEngine, ThresholdError, Tier,
};
use crate::assessment::service::AssessmentService;
use crate::assessment::session::AssessmentSession;
use crate::assessment::scoring::ScoreBand;

fn recommend(psychometric: u8, technical: u8, wiscar: u8) -> crate::assessment::AssessmentResult {
    RecommendationEngine::default().recommend(
        &summary(Section::Psychometric, psychometric),
        &summary(Section::Technical, technical),
        &summary(Section::Wiscar, wiscar),
    )
}

#[test]
fn strong_profile_is_recommended() {
    let result = recommend(80, 80, 80);

    assert_eq!(result.overall_score, 80);
    assert_eq!(result.tier, Tier::Yes);
    assert!(result.skill_gaps.is_empty());
    assert_eq!(
        result.next_steps,
        vec![
            "Join the Java Developer Community",
            "Build a GitHub portfolio",
            "Complete a full stack project",
            "Practice with hands-on labs and tutorials",
        ]
    );
    assert_eq!(result.learning_path.len(), 4);
    assert!(result.alternatives.is_empty());
    assert_eq!(result.section_scores.len(), 3);
    assert_eq!(result.section_scores[1].band_label, "Strong");
}

#[test]
fn weak_profile_collects_every_section_gap() {
    let result = recommend(40, 30, 40);

    // (40 + 30 + 40) / 3 = 36.67
    assert_eq!(result.overall_score, 37);
    assert_eq!(result.tier, Tier::No);
    assert_eq!(
        result.skill_gaps,
        vec![
            "Core Java fundamentals",
            "OOP concepts",
            "Spring Boot framework",
            "REST API development",
            "Database integration",
            "Structured problem solving",
            "Working within established frameworks",
        ]
    );
    assert!(result.learning_path.is_empty());
    assert_eq!(result.alternatives.len(), 4);
}

#[test]
fn tier_boundaries_are_inclusive() {
    assert_eq!(recommend(75, 75, 75).tier, Tier::Yes);
    assert_eq!(recommend(74, 74, 74).tier, Tier::Maybe);
    assert_eq!(recommend(55, 55, 55).tier, Tier::Maybe);
    assert_eq!(recommend(54, 54, 54).tier, Tier::No);
}

#[test]
fn configured_thresholds_move_the_tier() {
    let config = RecommendationConfig {
        maybe_threshold: 60,
        ..RecommendationConfig::standard()
    };
    let engine = RecommendationEngine::new(config).expect("valid thresholds");
    let result = engine.recommend(
        &summary(Section::Psychometric, 57),
        &summary(Section::Technical, 57),
        &summary(Section::Wiscar, 57),
    );
    assert_eq!(result.tier, Tier::No);
}

#[test]
fn technical_score_between_framework_and_fundamentals_thresholds() {
    let result = recommend(90, 65, 90);
    assert_eq!(
        result.skill_gaps,
        vec!["Core Java fundamentals", "OOP concepts"]
    );
}

#[test]
fn weak_wiscar_dimensions_add_gaps() {
    let wiscar = wiscar_with_dimensions(
        70,
        &[
            (WiscarDimension::Will, 80),
            (WiscarDimension::Interest, 40),
            (WiscarDimension::Skill, 59),
            (WiscarDimension::Cognitive, 60),
            (WiscarDimension::Ability, 20),
            (WiscarDimension::RealWorld, 100),
        ],
    );
    let result = RecommendationEngine::default().recommend(
        &summary(Section::Psychometric, 90),
        &summary(Section::Technical, 90),
        &wiscar,
    );

    // interest and real-world have no gap rule
    assert_eq!(
        result.skill_gaps,
        vec![
            "Technical skill confidence",
            "Learning from feedback and reflection",
        ]
    );
}

#[test]
fn career_matches_never_fall_below_baseline() {
    let low: Vec<u8> = recommend(50, 30, 50)
        .career_matches
        .iter()
        .map(|career| career.match_percentage)
        .collect();
    assert_eq!(low, vec![70, 65, 60, 55]);

    let high = recommend(90, 88, 90).career_matches;
    assert!(high
        .iter()
        .all(|career| career.match_percentage == 88 && career.band == ScoreBand::High));
    assert_eq!(high[0].title, "Java Full Stack Developer");
}

#[test]
fn result_serializes_tier_and_skips_empty_paths() {
    let value = serde_json::to_value(recommend(80, 80, 80)).expect("serializes");
    assert_eq!(value["tier"], "yes");
    assert!(value.get("alternatives").is_none());
    assert_eq!(value["learning_path"].as_array().map(Vec::len), Some(4));
}

#[test]
fn inverted_thresholds_are_rejected_at_construction() {
    let config = RecommendationConfig {
        maybe_threshold: 80,
        yes_threshold: 75,
        ..RecommendationConfig::standard()
    };
    let expected = ThresholdError::Inverted { maybe: 80, yes: 75 };

    assert_eq!(
        RecommendationEngine::new(config.clone()).map(|_| ()),
        Err(expected.clone())
    );
    assert!(matches!(
        AssessmentService::new(config.clone()),
        Err(ref err) if *err == expected
    ));
    assert!(matches!(
        AssessmentSession::new(config),
        Err(ref err) if *err == expected
    ));
}

#[test]
fn maybe_tier_offers_alternatives_but_guidance_keeps_the_learning_phases() {
    let result = recommend(60, 55, 55);

    assert_eq!(result.overall_score, 57);
    assert_eq!(result.tier, Tier::Maybe);
    assert!(result.learning_path.is_empty());
    assert_eq!(result.alternatives.len(), 4);
    assert_eq!(result.guidance.overall_score, 57);
    assert_eq!(result.guidance.learning_phases.len(), 4);
    assert!(result.guidance.alternatives.is_empty());
}

#[test]
fn guidance_switches_to_alternative_careers_below_fifty_five() {
    let at = recommend(55, 55, 55).guidance;
    assert_eq!(at.learning_phases.len(), 4);
    assert!(at.alternatives.is_empty());

    let below = recommend(54, 54, 54).guidance;
    assert!(below.learning_phases.is_empty());
    assert_eq!(below.alternatives.len(), 5);
    assert_eq!(below.career_paths.len(), 5);
    assert_eq!(below.skill_map.len(), 8);
}
