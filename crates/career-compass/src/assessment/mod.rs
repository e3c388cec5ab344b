//! Career readiness assessment: question catalog, section scoring, WISCAR
//! aggregation, and the final recommendation.

mod answer_sheet;
pub mod catalog;
pub mod domain;
pub mod recommendation;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use answer_sheet::{AnswerSheet, AnswerSheetError};
pub use catalog::QuestionCatalog;
pub use domain::{
    AnswerOption, Category, OptionValue, Question, QuestionKind, ResponseSet, Scale, Section,
    TechnicalArea, TraitCategory, WiscarDimension, MAX_POINTS,
};
pub use recommendation::{
    AlternativeCareer, AlternativePath, AssessmentResult, CareerGuidance, CareerMatch, CareerPath,
    Demand, LearningPhase, LearningStage, RecommendationConfig, RecommendationEngine,
    SectionScore, SkillLevel, SkillRequirement, ThresholdError, Tier,
};
pub use router::assessment_router;
pub use scoring::{CategoryScore, ScoreBand, ScoringError, SectionResult, SectionScorer};
pub use service::{AssessmentReport, AssessmentService, QuestionView, ServiceError};
pub use session::{AssessmentSession, NavigationError, SectionProgress, Step};
