//! Career and learning guidance shown after the recommendation: the Java career
//! paths, a required-versus-current skill map, and either the eight month learning
//! phases or a set of alternative careers depending on the overall score.

use super::config::RecommendationConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Demand {
    Medium,
    High,
    VeryHigh,
}

impl Demand {
    pub const fn label(self) -> &'static str {
        match self {
            Demand::Medium => "Medium",
            Demand::High => "High",
            Demand::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub salary_range: &'static str,
    pub demand: Demand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    None,
    Beginner,
    Intermediate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRequirement {
    pub skill: &'static str,
    pub current: SkillLevel,
    pub required: SkillLevel,
    pub gap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPhase {
    pub title: &'static str,
    pub months: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeCareer {
    pub title: &'static str,
    pub description: &'static str,
    pub reason: &'static str,
}

/// Guidance block; exactly one of `learning_phases` and `alternatives` is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerGuidance {
    pub overall_score: u8,
    pub career_paths: Vec<CareerPath>,
    pub skill_map: Vec<SkillRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_phases: Vec<LearningPhase>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<AlternativeCareer>,
}

impl CareerGuidance {
    pub fn skill_gaps(&self) -> impl Iterator<Item = &SkillRequirement> {
        self.skill_map.iter().filter(|entry| entry.gap)
    }
}

const CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        title: "Java Full Stack Developer",
        description: "Build complete web applications with both frontend and backend",
        skills: &["Java", "Spring Boot", "React/Angular", "REST APIs", "Database"],
        salary_range: "$75k - $120k",
        demand: Demand::High,
    },
    CareerPath {
        title: "Backend Developer (Java)",
        description: "Focus on server-side logic, APIs, and business processes",
        skills: &["Java", "Spring", "Microservices", "Database", "Security"],
        salary_range: "$70k - $110k",
        demand: Demand::VeryHigh,
    },
    CareerPath {
        title: "Java Software Engineer",
        description: "Build large-scale enterprise systems and applications",
        skills: &["Java", "System Design", "Architecture", "Performance", "Testing"],
        salary_range: "$80k - $130k",
        demand: Demand::High,
    },
    CareerPath {
        title: "Cloud Developer (Java + AWS/Azure)",
        description: "Develop cloud-native applications and microservices",
        skills: &["Java", "Spring Boot", "AWS/Azure", "Docker", "Kubernetes"],
        salary_range: "$85k - $140k",
        demand: Demand::VeryHigh,
    },
    CareerPath {
        title: "Tech Lead (Java)",
        description: "Lead development teams and architectural decisions",
        skills: &["Java", "Leadership", "Architecture", "Mentoring", "CI/CD"],
        salary_range: "$100k - $160k",
        demand: Demand::Medium,
    },
];

// Reference levels for an entry-level candidate; not derived from the responses.
const SKILL_LEVELS: &[(&str, SkillLevel, SkillLevel)] = &[
    ("Java Core", SkillLevel::Beginner, SkillLevel::Intermediate),
    ("Spring Boot", SkillLevel::None, SkillLevel::Beginner),
    ("REST APIs", SkillLevel::Beginner, SkillLevel::Intermediate),
    ("SQL/Database", SkillLevel::Intermediate, SkillLevel::Intermediate),
    ("Frontend (HTML/CSS/JS)", SkillLevel::Beginner, SkillLevel::Beginner),
    ("Git/Version Control", SkillLevel::Beginner, SkillLevel::Intermediate),
    ("Testing", SkillLevel::None, SkillLevel::Beginner),
    ("Docker/CI/CD", SkillLevel::None, SkillLevel::Beginner),
];

const LEARNING_PHASES: &[LearningPhase] = &[
    LearningPhase {
        title: "Foundation",
        months: "Months 1-2",
        items: &[
            "Java Fundamentals (Data types, OOP, Loops)",
            "Java Collections & Exception Handling",
            "Basic SQL and Database Concepts",
            "Git Version Control Basics",
        ],
    },
    LearningPhase {
        title: "Framework Mastery",
        months: "Months 3-4",
        items: &[
            "Spring Boot Essentials (MVC, DI, REST)",
            "Building REST APIs with Spring",
            "Database Integration (JPA/Hibernate)",
            "Testing with JUnit and Mockito",
        ],
    },
    LearningPhase {
        title: "Full Stack Development",
        months: "Months 5-6",
        items: &[
            "Frontend with HTML/CSS + JavaScript",
            "React or Angular Basics",
            "Full Stack Project (CRUD + Authentication)",
            "API Documentation and Testing",
        ],
    },
    LearningPhase {
        title: "Professional Skills",
        months: "Months 7-8",
        items: &[
            "Docker and Containerization",
            "CI/CD Pipeline Setup",
            "Security Best Practices",
            "Performance Optimization",
        ],
    },
];

const ALTERNATIVE_CAREERS: &[AlternativeCareer] = &[
    AlternativeCareer {
        title: "Frontend Development",
        description: "Focus on user interfaces with React, Vue, or Angular",
        reason: "If you prefer visual development and user experience",
    },
    AlternativeCareer {
        title: "MERN Stack",
        description: "JavaScript-based full stack (MongoDB, Express, React, Node.js)",
        reason: "If you prefer JavaScript ecosystem over Java",
    },
    AlternativeCareer {
        title: "Python Full Stack",
        description: "Django or Flask backend with React frontend",
        reason: "If you prefer Python's syntax and ecosystem",
    },
    AlternativeCareer {
        title: "UI/UX Design",
        description: "Focus on user interface design and user experience",
        reason: "If you're more visually inclined and creative",
    },
    AlternativeCareer {
        title: "No-Code/Low-Code",
        description: "Build applications using platforms like Bubble or Webflow",
        reason: "If you want to build without extensive coding",
    },
];

pub(crate) fn career_guidance(overall_score: u8, config: &RecommendationConfig) -> CareerGuidance {
    let on_path = overall_score >= config.guidance_path_threshold;

    CareerGuidance {
        overall_score,
        career_paths: CAREER_PATHS.to_vec(),
        skill_map: SKILL_LEVELS
            .iter()
            .map(|&(skill, current, required)| SkillRequirement {
                skill,
                current,
                required,
                gap: current < required,
            })
            .collect(),
        learning_phases: if on_path {
            LEARNING_PHASES.to_vec()
        } else {
            Vec::new()
        },
        alternatives: if on_path {
            Vec::new()
        } else {
            ALTERNATIVE_CAREERS.to_vec()
        },
    }
}
