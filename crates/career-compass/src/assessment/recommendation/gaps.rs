use super::super::domain::WiscarDimension;
use super::super::scoring::SectionResult;
use super::config::RecommendationConfig;

pub(crate) struct GapInputs<'a> {
    pub psychometric: &'a SectionResult,
    pub technical: &'a SectionResult,
    pub wiscar: &'a SectionResult,
}

/// Rules fire independently and append in declaration order. Duplicates are kept;
/// callers may dedupe for display.
pub(crate) fn detect_gaps(inputs: &GapInputs<'_>, config: &RecommendationConfig) -> Vec<String> {
    let mut gaps: Vec<&'static str> = Vec::new();

    if inputs.technical.overall < config.fundamentals_gap_below {
        gaps.extend(["Core Java fundamentals", "OOP concepts"]);
    }

    if inputs.technical.overall < config.framework_gap_below {
        gaps.extend([
            "Spring Boot framework",
            "REST API development",
            "Database integration",
        ]);
    }

    if inputs.psychometric.overall < config.psychometric_gap_below {
        gaps.extend([
            "Structured problem solving",
            "Working within established frameworks",
        ]);
    }

    let dimension_rules = [
        (
            WiscarDimension::Will,
            "Learning consistency and follow-through",
        ),
        (WiscarDimension::Skill, "Technical skill confidence"),
        (
            WiscarDimension::Cognitive,
            "Systematic debugging and logical reasoning",
        ),
        (
            WiscarDimension::Ability,
            "Learning from feedback and reflection",
        ),
    ];
    for (dimension, gap) in dimension_rules {
        // a dimension missing from the result never fires
        let below = inputs
            .wiscar
            .dimension(dimension)
            .map(|score| score < config.dimension_gap_below)
            .unwrap_or(false);
        if below {
            gaps.push(gap);
        }
    }

    gaps.into_iter().map(str::to_string).collect()
}
