mod rules;
mod wiscar;

use super::catalog::QuestionCatalog;
use super::domain::{Category, ResponseSet, Section, WiscarDimension};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub(crate) use rules::mean_percentage;

/// Stateless scorer that turns a response set into a section result.
pub struct SectionScorer {
    catalog: &'static QuestionCatalog,
}

impl SectionScorer {
    pub fn new(catalog: &'static QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    /// Scores one section. Answers to questions from other sections are ignored.
    pub fn score(
        &self,
        section: Section,
        responses: &ResponseSet,
    ) -> Result<SectionResult, ScoringError> {
        let questions = self.catalog.questions(section);
        let tally = rules::tally_section(section, questions, responses)?;

        let overall = match section {
            Section::Wiscar => wiscar::overall(&tally.categories),
            Section::Psychometric | Section::Technical => {
                rules::percentage(tally.points, tally.scored_questions)
            }
        };

        debug!(
            ?section,
            overall,
            scored = tally.scored_questions,
            "section scored"
        );

        Ok(SectionResult {
            section,
            overall,
            band: ScoreBand::from_score(overall),
            categories: tally.categories,
            correct_answers: tally.correct_answers,
            knowledge_questions: tally.knowledge_questions,
            responses: tally.responses,
        })
    }
}

/// Percentage earned within one category of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub percentage: u8,
    pub points: u32,
    pub max_points: u32,
    pub questions: u32,
}

/// Scored output of one section; never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionResult {
    pub section: Section,
    pub overall: u8,
    pub band: ScoreBand,
    pub categories: Vec<CategoryScore>,
    pub correct_answers: u32,
    pub knowledge_questions: u32,
    pub responses: ResponseSet,
}

impl SectionResult {
    pub fn category(&self, category: Category) -> Option<u8> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.percentage)
    }

    pub fn dimension(&self, dimension: WiscarDimension) -> Option<u8> {
        self.category(Category::Wiscar(dimension))
    }

    pub fn band_label(&self) -> &'static str {
        self.band.label_for(self.section)
    }
}

/// Coarse bucket used when displaying a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::High
        } else if score >= 60 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label_for(self, section: Section) -> &'static str {
        match (section, self) {
            (Section::Psychometric, Self::High) => "Excellent",
            (Section::Psychometric, Self::Moderate) => "Good",
            (Section::Psychometric, Self::Low) => "Needs Work",
            (Section::Technical, Self::High) => "Strong",
            (Section::Technical, Self::Moderate) => "Moderate",
            (Section::Technical, Self::Low) => "Developing",
            (Section::Wiscar, Self::High) => "Ready",
            (Section::Wiscar, Self::Moderate) => "Emerging",
            (Section::Wiscar, Self::Low) => "Not Yet Ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("{section:?} section is missing responses for {}", .missing.join(", "))]
    IncompleteResponses {
        section: Section,
        missing: Vec<String>,
    },
    #[error("option {index} is out of range for question {question_id} ({option_count} options)")]
    InvalidOptionIndex {
        question_id: String,
        index: usize,
        option_count: usize,
    },
}
