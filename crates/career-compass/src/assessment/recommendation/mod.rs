mod careers;
mod config;
mod gaps;
mod guidance;
mod policy;

pub use careers::CareerMatch;
pub use config::{RecommendationConfig, ThresholdError};
pub use guidance::{
    AlternativeCareer, CareerGuidance, CareerPath, Demand, LearningPhase, SkillLevel,
    SkillRequirement,
};
pub use policy::{AlternativePath, LearningStage, Tier};

use super::domain::Section;
use super::scoring::{mean_percentage, ScoreBand, SectionResult};
use gaps::{detect_gaps, GapInputs};
use serde::Serialize;
use tracing::debug;

/// Stateless aggregator that applies the rubric to three section results.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Result<Self, ThresholdError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn standard() -> Self {
        Self {
            config: RecommendationConfig::standard(),
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        psychometric: &SectionResult,
        technical: &SectionResult,
        wiscar: &SectionResult,
    ) -> AssessmentResult {
        let overall_score =
            mean_percentage(&[psychometric.overall, technical.overall, wiscar.overall]);
        let tier = self.tier_for(overall_score);

        let skill_gaps = detect_gaps(
            &GapInputs {
                psychometric,
                technical,
                wiscar,
            },
            &self.config,
        );

        let section_scores = [psychometric, technical, wiscar]
            .into_iter()
            .map(|result| SectionScore {
                section: result.section,
                score: result.overall,
                band: result.band,
                band_label: result.band_label(),
            })
            .collect();

        debug!(
            overall_score,
            ?tier,
            gaps = skill_gaps.len(),
            "recommendation computed"
        );

        AssessmentResult {
            overall_score,
            tier,
            headline: tier.headline(),
            description: tier.description(),
            section_scores,
            skill_gaps,
            next_steps: policy::next_steps(tier),
            career_matches: careers::career_matches(technical.overall),
            learning_path: policy::learning_path(tier),
            alternatives: policy::alternatives(tier),
            guidance: self.guidance(overall_score),
        }
    }

    pub fn tier_for(&self, overall_score: u8) -> Tier {
        policy::select_tier(overall_score, &self.config)
    }

    /// Career guidance for an overall score, independent of the tier.
    pub fn guidance(&self, overall_score: u8) -> CareerGuidance {
        guidance::career_guidance(overall_score, &self.config)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section: Section,
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

/// Final aggregate derived entirely from the three section results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub overall_score: u8,
    pub tier: Tier,
    pub headline: &'static str,
    pub description: &'static str,
    pub section_scores: Vec<SectionScore>,
    pub skill_gaps: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_path: Vec<LearningStage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<AlternativePath>,
    pub guidance: CareerGuidance,
}

impl AssessmentResult {
    /// Gaps with repeats removed, first occurrence wins.
    pub fn distinct_gaps(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for gap in &self.skill_gaps {
            if !seen.contains(&gap.as_str()) {
                seen.push(gap.as_str());
            }
        }
        seen
    }
}
