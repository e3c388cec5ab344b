//! Step navigation for a single assessment attempt.
//!
//! Every transition consumes the session and hands back the next one, so the
//! controller only ever holds one current value.

use super::catalog::QuestionCatalog;
use super::domain::{Question, ResponseSet, Section};
use super::recommendation::{
    AssessmentResult, RecommendationConfig, RecommendationEngine, ThresholdError,
};
use super::scoring::{ScoringError, SectionResult, SectionScorer};
use super::service::AssessmentReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Intro,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl Step {
    pub const fn section(self) -> Option<Section> {
        match self {
            Step::Psychometric => Some(Section::Psychometric),
            Step::Technical => Some(Section::Technical),
            Step::Wiscar => Some(Section::Wiscar),
            Step::Intro | Step::Results => None,
        }
    }

    const fn for_section(section: Section) -> Self {
        match section {
            Section::Psychometric => Step::Psychometric,
            Section::Technical => Step::Technical,
            Section::Wiscar => Step::Wiscar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("the current question has not been answered")]
    AwaitingAnswer,
    #[error("no question is active while on the {0:?} step")]
    NotInSection(Step),
    #[error("already at the first step")]
    NoPreviousStep,
    #[error("the assessment is already complete")]
    AlreadyComplete,
    #[error("the assessment has already started")]
    AlreadyStarted,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Position within the current section, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section: Section,
    pub position: usize,
    pub total: usize,
}

impl SectionProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.position * 100 + self.total / 2) / self.total).min(100) as u8
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: &'static QuestionCatalog,
    engine: RecommendationEngine,
    step: Step,
    cursor: usize,
    responses: ResponseSet,
    psychometric: Option<SectionResult>,
    technical: Option<SectionResult>,
    wiscar: Option<SectionResult>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new(config: RecommendationConfig) -> Result<Self, ThresholdError> {
        Ok(Self::with_engine(
            QuestionCatalog::standard(),
            RecommendationEngine::new(config)?,
        ))
    }

    pub fn with_engine(catalog: &'static QuestionCatalog, engine: RecommendationEngine) -> Self {
        Self {
            catalog,
            engine,
            step: Step::Intro,
            cursor: 0,
            responses: ResponseSet::new(),
            psychometric: None,
            technical: None,
            wiscar: None,
            result: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        let section = self.step.section()?;
        self.catalog.questions(section).get(self.cursor)
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.current_question()
            .and_then(|question| self.responses.selected(question.id))
    }

    pub fn progress(&self) -> Option<SectionProgress> {
        let section = self.step.section()?;
        Some(SectionProgress {
            section,
            position: self.cursor + 1,
            total: self.catalog.questions(section).len(),
        })
    }

    pub fn section_result(&self, section: Section) -> Option<&SectionResult> {
        match section {
            Section::Psychometric => self.psychometric.as_ref(),
            Section::Technical => self.technical.as_ref(),
            Section::Wiscar => self.wiscar.as_ref(),
        }
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Section results plus the recommendation, once the session reaches results.
    pub fn report(&self) -> Option<AssessmentReport> {
        Some(AssessmentReport {
            psychometric: self.psychometric.clone()?,
            technical: self.technical.clone()?,
            wiscar: self.wiscar.clone()?,
            result: self.result.clone()?,
        })
    }

    pub fn start(self) -> Result<Self, NavigationError> {
        if self.step != Step::Intro {
            return Err(NavigationError::AlreadyStarted);
        }
        Ok(Self {
            step: Step::Psychometric,
            cursor: 0,
            ..self
        })
    }

    /// Records or overwrites the answer to the current question.
    pub fn answer(mut self, option_index: usize) -> Result<Self, NavigationError> {
        let question = self
            .current_question()
            .ok_or(NavigationError::NotInSection(self.step))?;

        let option_count = question.option_count();
        if option_index >= option_count {
            return Err(ScoringError::InvalidOptionIndex {
                question_id: question.id.to_string(),
                index: option_index,
                option_count,
            }
            .into());
        }

        self.responses.record(question.id, option_index);
        Ok(self)
    }

    pub fn next(mut self) -> Result<Self, NavigationError> {
        let section = match self.step {
            Step::Results => return Err(NavigationError::AlreadyComplete),
            Step::Intro => return self.start(),
            step => step.section().ok_or(NavigationError::NotInSection(step))?,
        };

        if self.selected_option().is_none() {
            return Err(NavigationError::AwaitingAnswer);
        }

        if self.cursor + 1 < self.catalog.questions(section).len() {
            self.cursor += 1;
            return Ok(self);
        }

        let scorer = SectionScorer::new(self.catalog);
        let result = scorer.score(section, &self.responses)?;
        match section {
            Section::Psychometric => {
                self.psychometric = Some(result);
                self.step = Step::Technical;
            }
            Section::Technical => {
                self.technical = Some(result);
                self.step = Step::Wiscar;
            }
            Section::Wiscar => {
                self.wiscar = Some(result);
                self.step = Step::Results;
            }
        }
        self.cursor = 0;

        if self.step == Step::Results {
            self.result = self.aggregate();
        }

        Ok(self)
    }

    pub fn back(mut self) -> Result<Self, NavigationError> {
        if self.step.section().is_some() && self.cursor > 0 {
            self.cursor -= 1;
            return Ok(self);
        }

        let previous = match self.step {
            Step::Intro => return Err(NavigationError::NoPreviousStep),
            Step::Psychometric => {
                self.step = Step::Intro;
                self.cursor = 0;
                return Ok(self);
            }
            Step::Technical => Section::Psychometric,
            Step::Wiscar => Section::Technical,
            Step::Results => Section::Wiscar,
        };

        // Leaving a section backwards drops its result; it is rescored on the way forward.
        match previous {
            Section::Psychometric => self.psychometric = None,
            Section::Technical => self.technical = None,
            Section::Wiscar => {
                self.wiscar = None;
                self.result = None;
            }
        }
        self.step = Step::for_section(previous);
        self.cursor = self.catalog.questions(previous).len().saturating_sub(1);
        Ok(self)
    }

    /// Discards every response and result and returns to the intro.
    pub fn restart(self) -> Self {
        Self::with_engine(self.catalog, self.engine)
    }

    fn aggregate(&self) -> Option<AssessmentResult> {
        Some(self.engine.recommend(
            self.psychometric.as_ref()?,
            self.technical.as_ref()?,
            self.wiscar.as_ref()?,
        ))
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::with_engine(QuestionCatalog::standard(), RecommendationEngine::standard())
    }
}
