use career_compass::assessment::{Category, Question, QuestionKind, TechnicalArea};
use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Scripted candidates used by the demo command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Profile {
    /// Agrees strongly and answers every knowledge check correctly
    #[default]
    Strong,
    /// Neutral on every scale; knows the fundamentals but not the Java stack
    Moderate,
    /// Mostly disagrees and misses every knowledge check
    Developing,
}

impl Profile {
    pub(crate) fn answer_for(self, question: &Question) -> usize {
        match (&question.kind, self) {
            (QuestionKind::Scale(_), Profile::Strong) => 4,
            (QuestionKind::Scale(_), Profile::Moderate) => 2,
            (QuestionKind::Scale(_), Profile::Developing) => 1,
            (QuestionKind::Knowledge { correct, .. }, Profile::Strong) => *correct,
            (QuestionKind::Knowledge { correct, options, .. }, Profile::Moderate) => {
                if question.category == Category::Technical(TechnicalArea::JavaStack) {
                    (*correct + 1) % options.len()
                } else {
                    *correct
                }
            }
            (QuestionKind::Knowledge { correct, options, .. }, Profile::Developing) => {
                (*correct + 1) % options.len()
            }
            (QuestionKind::Preference { .. }, _) => 0,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Profile::Strong => "strong",
            Profile::Moderate => "moderate",
            Profile::Developing => "developing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::assessment::{QuestionCatalog, Section};

    #[test]
    fn profile_answers_stay_within_options() {
        let catalog = QuestionCatalog::standard();
        for profile in Profile::value_variants() {
            for section in Section::ordered() {
                for question in catalog.questions(section) {
                    assert!(
                        profile.answer_for(question) < question.option_count(),
                        "{profile:?} answered {} out of range",
                        question.id
                    );
                }
            }
        }
    }
}
