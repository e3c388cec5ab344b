use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest point value a single answer can earn.
pub const MAX_POINTS: u8 = 5;

/// Top-level parts of the assessment, each scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Evaluation",
            Self::Technical => "Technical & Aptitude",
            Self::Wiscar => "WISCAR Framework",
        }
    }
}

/// Personality and motivation traits measured by the psychometric section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Conscientiousness,
    Openness,
    Grit,
    HollandInvestigative,
    HollandConventional,
    MotivationalStyle,
    GrowthMindset,
    CognitiveStyle,
    ComplexityTolerance,
    TeamCollaboration,
    EnterpriseMindset,
    LearningStyle,
}

impl TraitCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conscientiousness => "Conscientiousness",
            Self::Openness => "Openness",
            Self::Grit => "Grit",
            Self::HollandInvestigative => "Holland Code - Investigative",
            Self::HollandConventional => "Holland Code - Conventional",
            Self::MotivationalStyle => "Motivational Style",
            Self::GrowthMindset => "Growth Mindset",
            Self::CognitiveStyle => "Cognitive Style",
            Self::ComplexityTolerance => "Tolerance for Complexity",
            Self::TeamCollaboration => "Team Collaboration",
            Self::EnterpriseMindset => "Enterprise Mindset",
            Self::LearningStyle => "Learning Style",
        }
    }
}

/// Knowledge areas covered by the technical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalArea {
    GeneralAptitude,
    FoundationalKnowledge,
    JavaStack,
}

impl TechnicalArea {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralAptitude => "General Aptitude",
            Self::FoundationalKnowledge => "Foundational Knowledge",
            Self::JavaStack => "Java Stack Specific",
        }
    }
}

/// The six readiness dimensions of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Will => "Drive, grit, consistency",
            Self::Interest => "Curiosity & purpose-fit",
            Self::Skill => "Current technical/soft skills",
            Self::Cognitive => "Mental processing for complexity",
            Self::Ability => "Growth mindset & reflection",
            Self::RealWorld => "Job alignment, use-case clarity",
        }
    }
}

/// Scoring bucket a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "section", content = "category", rename_all = "snake_case")]
pub enum Category {
    Psychometric(TraitCategory),
    Technical(TechnicalArea),
    Wiscar(WiscarDimension),
}

impl Category {
    pub const fn section(self) -> Section {
        match self {
            Self::Psychometric(_) => Section::Psychometric,
            Self::Technical(_) => Section::Technical,
            Self::Wiscar(_) => Section::Wiscar,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric(category) => category.label(),
            Self::Technical(area) => area.label(),
            Self::Wiscar(dimension) => dimension.label(),
        }
    }
}

/// Five-point label sets. Values stay 1..=5 whichever labels are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Agreement,
    Confidence,
    Comfort,
    Importance,
}

impl Scale {
    pub const fn labels(self) -> [&'static str; MAX_POINTS as usize] {
        match self {
            Self::Agreement => [
                "Strongly Disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly Agree",
            ],
            Self::Confidence => [
                "Not Confident",
                "Slightly Confident",
                "Moderately Confident",
                "Very Confident",
                "Extremely Confident",
            ],
            Self::Comfort => [
                "Very Uncomfortable",
                "Uncomfortable",
                "Neutral",
                "Comfortable",
                "Very Comfortable",
            ],
            Self::Importance => [
                "Not Important",
                "Slightly Important",
                "Moderately Important",
                "Very Important",
                "Extremely Important",
            ],
        }
    }
}

/// Answer format of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Scale(Scale),
    Knowledge {
        options: Vec<&'static str>,
        correct: usize,
        explanation: &'static str,
    },
    /// Captures a preference; required for completeness but never scored.
    Preference { options: Vec<&'static str> },
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub prompt: &'static str,
    /// Short description of what the question measures, e.g. "structure preference".
    pub focus: Option<&'static str>,
    pub kind: QuestionKind,
}

impl Question {
    pub fn section(&self) -> Section {
        self.category.section()
    }

    pub fn option_count(&self) -> usize {
        match &self.kind {
            QuestionKind::Scale(_) => MAX_POINTS as usize,
            QuestionKind::Knowledge { options, .. } | QuestionKind::Preference { options } => {
                options.len()
            }
        }
    }

    pub fn is_scored(&self) -> bool {
        !matches!(self.kind, QuestionKind::Preference { .. })
    }

    pub fn options(&self) -> Vec<AnswerOption> {
        match &self.kind {
            QuestionKind::Scale(scale) => scale
                .labels()
                .into_iter()
                .zip(1..=MAX_POINTS)
                .map(|(label, points)| AnswerOption {
                    label,
                    value: OptionValue::Points(points),
                })
                .collect(),
            QuestionKind::Knowledge {
                options, correct, ..
            } => options
                .iter()
                .copied()
                .enumerate()
                .map(|(index, label)| AnswerOption {
                    label,
                    value: OptionValue::Correct(index == *correct),
                })
                .collect(),
            QuestionKind::Preference { options } => options
                .iter()
                .copied()
                .map(|label| AnswerOption {
                    label,
                    value: OptionValue::Unscored,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: OptionValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    Points(u8),
    Correct(bool),
    Unscored,
}

/// Selected option index per question id for one assessment attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, usize>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, option_index: usize) {
        self.answers.insert(question_id.into(), option_index);
    }

    pub fn with(mut self, question_id: impl Into<String>, option_index: usize) -> Self {
        self.record(question_id, option_index);
        self
    }

    pub fn selected(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.answers.iter().map(|(id, index)| (id.as_str(), *index))
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        let mut responses = Self::new();
        for (id, index) in iter {
            responses.record(id, index);
        }
        responses
    }
}
