use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{
    Category, Question, QuestionKind, ResponseSet, Section, WiscarDimension,
};
use crate::assessment::scoring::{CategoryScore, ScoreBand, SectionResult};
use crate::assessment::service::AssessmentService;
use crate::assessment::session::{AssessmentSession, Step};

pub(super) fn catalog() -> &'static QuestionCatalog {
    QuestionCatalog::standard()
}

/// Top of the scale and the correct option when `high`, otherwise the bottom of the
/// scale and a wrong option. Preferences always take their first option.
pub(super) fn answer_for(question: &Question, high: bool) -> usize {
    match &question.kind {
        QuestionKind::Scale(_) => {
            if high {
                4
            } else {
                0
            }
        }
        QuestionKind::Knowledge {
            options, correct, ..
        } => {
            if high {
                *correct
            } else {
                (*correct + 1) % options.len()
            }
        }
        QuestionKind::Preference { .. } => 0,
    }
}

pub(super) fn section_responses(section: Section, high: bool) -> ResponseSet {
    catalog()
        .questions(section)
        .iter()
        .map(|question| (question.id, answer_for(question, high)))
        .collect()
}

pub(super) fn full_responses(high: bool) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for section in Section::ordered() {
        for (id, index) in section_responses(section, high).iter() {
            responses.record(id, index);
        }
    }
    responses
}

/// A section result carrying only an overall score.
pub(super) fn summary(section: Section, overall: u8) -> SectionResult {
    SectionResult {
        section,
        overall,
        band: ScoreBand::from_score(overall),
        categories: Vec::new(),
        correct_answers: 0,
        knowledge_questions: 0,
        responses: ResponseSet::new(),
    }
}

pub(super) fn wiscar_with_dimensions(overall: u8, dimensions: &[(WiscarDimension, u8)]) -> SectionResult {
    let mut result = summary(Section::Wiscar, overall);
    result.categories = dimensions
        .iter()
        .map(|(dimension, percentage)| CategoryScore {
            category: Category::Wiscar(*dimension),
            label: dimension.label(),
            percentage: *percentage,
            points: 0,
            max_points: 15,
            questions: 3,
        })
        .collect();
    result
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::standard())
}

/// Answers every question until the session reaches the results step.
pub(super) fn walk_to_results(mut session: AssessmentSession, high: bool) -> AssessmentSession {
    while session.step() != Step::Results {
        session = match session.current_question() {
            None => session.start().expect("session starts"),
            Some(question) => session
                .answer(answer_for(question, high))
                .expect("answer accepted")
                .next()
                .expect("advances"),
        };
    }
    session
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json")
}
