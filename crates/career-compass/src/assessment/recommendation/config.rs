use serde::{Deserialize, Serialize};

/// Rubric thresholds applied when turning section scores into a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Overall score at or above which the tier is `Yes`.
    pub yes_threshold: u8,
    /// Overall score at or above which the tier is `Maybe`.
    pub maybe_threshold: u8,
    /// Overall score at or above which career guidance lays out the learning phases
    /// instead of alternative careers.
    pub guidance_path_threshold: u8,
    pub fundamentals_gap_below: u8,
    pub framework_gap_below: u8,
    pub psychometric_gap_below: u8,
    pub dimension_gap_below: u8,
}

impl RecommendationConfig {
    pub const fn standard() -> Self {
        Self {
            yes_threshold: 75,
            maybe_threshold: 55,
            guidance_path_threshold: 55,
            fundamentals_gap_below: 70,
            framework_gap_below: 60,
            psychometric_gap_below: 60,
            dimension_gap_below: 60,
        }
    }

    /// Tiers must partition 0..=100, so every threshold stays within range and
    /// maybe sits strictly below yes.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let thresholds = [
            ("yes", self.yes_threshold),
            ("maybe", self.maybe_threshold),
            ("guidance path", self.guidance_path_threshold),
            ("fundamentals gap", self.fundamentals_gap_below),
            ("framework gap", self.framework_gap_below),
            ("psychometric gap", self.psychometric_gap_below),
            ("dimension gap", self.dimension_gap_below),
        ];
        if let Some((name, value)) = thresholds.into_iter().find(|(_, value)| *value > 100) {
            return Err(ThresholdError::OutOfRange { name, value });
        }

        if self.maybe_threshold >= self.yes_threshold {
            return Err(ThresholdError::Inverted {
                maybe: self.maybe_threshold,
                yes: self.yes_threshold,
            });
        }

        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{name} threshold {value} is above 100")]
    OutOfRange { name: &'static str, value: u8 },
    #[error("maybe threshold ({maybe}) must be lower than yes threshold ({yes})")]
    Inverted { maybe: u8, yes: u8 },
}
