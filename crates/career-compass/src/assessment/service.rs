use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerOption, Question, ResponseSet, Section};
use super::recommendation::{
    AssessmentResult, RecommendationConfig, RecommendationEngine, ThresholdError,
};
use super::scoring::{ScoringError, SectionResult, SectionScorer};

/// Service composing the catalog, section scorer, and recommendation rubric.
pub struct AssessmentService {
    catalog: &'static QuestionCatalog,
    scorer: SectionScorer,
    engine: Arc<RecommendationEngine>,
}

impl AssessmentService {
    pub fn new(config: RecommendationConfig) -> Result<Self, ThresholdError> {
        Ok(Self::with_engine(RecommendationEngine::new(config)?))
    }

    pub fn standard() -> Self {
        Self::with_engine(RecommendationEngine::standard())
    }

    fn with_engine(engine: RecommendationEngine) -> Self {
        let catalog = QuestionCatalog::standard();
        Self {
            catalog,
            scorer: SectionScorer::new(catalog),
            engine: Arc::new(engine),
        }
    }

    pub fn questions(&self, section: Section) -> Vec<QuestionView> {
        self.catalog
            .questions(section)
            .iter()
            .map(QuestionView::from)
            .collect()
    }

    pub fn score_section(
        &self,
        section: Section,
        responses: &ResponseSet,
    ) -> Result<SectionResult, ServiceError> {
        let result = self.scorer.score(section, responses)?;
        info!(?section, overall = result.overall, "section scored");
        Ok(result)
    }

    /// Score all three sections from one response set and aggregate them.
    pub fn assess(&self, responses: &ResponseSet) -> Result<AssessmentReport, ServiceError> {
        let psychometric = self.score_section(Section::Psychometric, responses)?;
        let technical = self.score_section(Section::Technical, responses)?;
        let wiscar = self.score_section(Section::Wiscar, responses)?;

        let result = self.engine.recommend(&psychometric, &technical, &wiscar);
        info!(
            overall_score = result.overall_score,
            tier = result.tier.label(),
            "assessment recommendation ready"
        );

        Ok(AssessmentReport {
            psychometric,
            technical,
            wiscar,
            result,
        })
    }
}

/// Section results bundled with the aggregate recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub psychometric: SectionResult,
    pub technical: SectionResult,
    pub wiscar: SectionResult,
    pub result: AssessmentResult,
}

/// Presentation-ready view of a question. Correct answers are not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub section: Section,
    pub category: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
    pub options: Vec<&'static str>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            section: question.section(),
            category: question.category.label(),
            prompt: question.prompt,
            focus: question.focus,
            options: question
                .options()
                .into_iter()
                .map(|AnswerOption { label, .. }| label)
                .collect(),
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
