use super::config::RecommendationConfig;
use serde::{Deserialize, Serialize};

/// Final categorical recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Yes,
    Maybe,
    No,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Yes => "YES",
            Tier::Maybe => "MAYBE",
            Tier::No => "NO",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Tier::Yes => "Java Full Stack is an Excellent Fit for You!",
            Tier::Maybe => "Java Full Stack Could Be Right with Preparation",
            Tier::No => "Consider Alternative Paths",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Tier::Yes => "You show strong alignment across psychological fit, technical readiness, and holistic assessment dimensions.",
            Tier::Maybe => "You have potential but may need to strengthen certain areas before diving deep into Java Full Stack.",
            Tier::No => "Based on your current profile, other technology paths might be a better fit for your interests and skills.",
        }
    }
}

pub(crate) fn select_tier(overall_score: u8, config: &RecommendationConfig) -> Tier {
    if overall_score >= config.yes_threshold {
        Tier::Yes
    } else if overall_score >= config.maybe_threshold {
        Tier::Maybe
    } else {
        Tier::No
    }
}

pub(crate) fn next_steps(tier: Tier) -> Vec<String> {
    let steps: &[&str] = match tier {
        Tier::Yes => &[
            "Join the Java Developer Community",
            "Build a GitHub portfolio",
            "Complete a full stack project",
            "Practice with hands-on labs and tutorials",
        ],
        Tier::Maybe => &[
            "Strengthen Core Java and OOP fundamentals",
            "Work through a structured Spring Boot tutorial",
            "Build a small REST API project end to end",
            "Retake the assessment after focused practice",
        ],
        Tier::No => &[
            "Explore the alternative technology paths",
            "Try a short introductory programming course",
            "Revisit the assessment once your goals are clearer",
        ],
    };

    steps.iter().map(|step| step.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningStage {
    pub stage: &'static str,
    pub modules: Vec<&'static str>,
    pub duration: &'static str,
}

/// Staged path offered only with a `Yes`; the other tiers get alternatives instead.
pub(crate) fn learning_path(tier: Tier) -> Vec<LearningStage> {
    if tier != Tier::Yes {
        return Vec::new();
    }

    vec![
        LearningStage {
            stage: "Foundation",
            modules: vec!["Java Basics", "OOP Principles", "Version Control (Git)"],
            duration: "2-4 weeks",
        },
        LearningStage {
            stage: "Intermediate",
            modules: vec![
                "Spring Boot Fundamentals",
                "REST API Development",
                "Frontend Basics (React/Angular)",
            ],
            duration: "6-8 weeks",
        },
        LearningStage {
            stage: "Advanced",
            modules: vec![
                "Full Stack Project",
                "Database Integration",
                "DevOps Basics",
            ],
            duration: "8-12 weeks",
        },
        LearningStage {
            stage: "Portfolio & Certification",
            modules: vec![
                "Build Portfolio Projects",
                "Prepare for Java Certification",
            ],
            duration: "4-6 weeks",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativePath {
    pub title: &'static str,
    pub reason: &'static str,
}

pub(crate) fn alternatives(tier: Tier) -> Vec<AlternativePath> {
    if tier == Tier::Yes {
        return Vec::new();
    }

    vec![
        AlternativePath {
            title: "Frontend Development",
            reason: "Focus on UI/UX and web interfaces",
        },
        AlternativePath {
            title: "Python Backend",
            reason: "Simpler backend stack, rapid prototyping",
        },
        AlternativePath {
            title: "Cloud/DevOps",
            reason: "Infrastructure, automation, and deployment",
        },
        AlternativePath {
            title: "Business Analysis",
            reason: "Bridge business and technology",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_score_range() {
        let config = RecommendationConfig::standard();
        assert_eq!(select_tier(100, &config), Tier::Yes);
        assert_eq!(select_tier(75, &config), Tier::Yes);
        assert_eq!(select_tier(74, &config), Tier::Maybe);
        assert_eq!(select_tier(55, &config), Tier::Maybe);
        assert_eq!(select_tier(54, &config), Tier::No);
        assert_eq!(select_tier(0, &config), Tier::No);
    }

    #[test]
    fn stricter_maybe_boundary_is_honored() {
        let config = RecommendationConfig {
            maybe_threshold: 60,
            ..RecommendationConfig::standard()
        };
        assert_eq!(select_tier(59, &config), Tier::No);
        assert_eq!(select_tier(60, &config), Tier::Maybe);
    }

    #[test]
    fn next_steps_are_selected_wholesale_by_tier() {
        assert_eq!(next_steps(Tier::Yes).len(), 4);
        assert_eq!(next_steps(Tier::Maybe).len(), 4);
        assert_eq!(next_steps(Tier::No).len(), 3);
        assert_eq!(next_steps(Tier::Yes)[0], "Join the Java Developer Community");
    }

    #[test]
    fn learning_path_and_alternatives_follow_tier() {
        assert_eq!(learning_path(Tier::Yes).len(), 4);
        assert!(learning_path(Tier::Maybe).is_empty());
        assert!(learning_path(Tier::No).is_empty());
        assert!(alternatives(Tier::Yes).is_empty());
        assert_eq!(alternatives(Tier::Maybe).len(), 4);
        assert_eq!(alternatives(Tier::No).len(), 4);
    }
}
