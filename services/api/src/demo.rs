use crate::infra::Profile;
use career_compass::assessment::{
    AnswerSheet, AssessmentReport, AssessmentService, AssessmentSession, CareerGuidance,
    NavigationError, SectionResult,
};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scripted candidate to walk through the assessment
    #[arg(long, value_enum, default_value_t = Profile::Strong)]
    pub(crate) profile: Profile,
    /// Print the full report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with `question_id,option_index` columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the full report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, json } = args;
    let config = AppConfig::load()?;

    let report = walk_session(AssessmentSession::new(config.recommendation)?, profile)?;
    if json {
        print_json(&report)
    } else {
        println!("Career readiness demo ({} profile)", profile.label());
        render_report(&report);
        Ok(())
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, json } = args;
    let config = AppConfig::load()?;

    let service = AssessmentService::new(config.recommendation)?;
    let report = score_sheet(&answers, &service)?;

    if json {
        print_json(&report)
    } else {
        println!("Career readiness report for {}", answers.display());
        render_report(&report);
        Ok(())
    }
}

pub(crate) fn score_sheet(
    path: &Path,
    service: &AssessmentService,
) -> Result<AssessmentReport, AppError> {
    let responses = AnswerSheet::from_path(path)?;
    Ok(service.assess(&responses)?)
}

/// Drives the session one question at a time, the way the web flow does.
pub(crate) fn walk_session(
    session: AssessmentSession,
    profile: Profile,
) -> Result<AssessmentReport, AppError> {
    let mut session = session.start()?;
    while let Some(question) = session.current_question() {
        session = session.answer(profile.answer_for(question))?.next()?;
    }

    session
        .report()
        .ok_or_else(|| NavigationError::AwaitingAnswer.into())
}

fn print_json(report: &AssessmentReport) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_report(report: &AssessmentReport) {
    let result = &report.result;

    println!();
    for section in [&report.psychometric, &report.technical, &report.wiscar] {
        render_section(section);
    }

    println!(
        "\nOverall readiness {}% -> {}",
        result.overall_score,
        result.tier.label()
    );
    println!("{}", result.headline);
    println!("{}", result.description);

    if result.skill_gaps.is_empty() {
        println!("\nNo skill gaps detected");
    } else {
        println!("\nSkill gaps:");
        for gap in result.distinct_gaps() {
            println!("  - {gap}");
        }
    }

    println!("\nNext steps:");
    for step in &result.next_steps {
        println!("  - {step}");
    }

    println!("\nCareer matches:");
    for career in &result.career_matches {
        println!(
            "  - {}: {}% ({})",
            career.title,
            career.match_percentage,
            career.requirements.join(", ")
        );
    }

    if !result.learning_path.is_empty() {
        println!("\nLearning path:");
        for stage in &result.learning_path {
            println!(
                "  - {} [{}]: {}",
                stage.stage,
                stage.duration,
                stage.modules.join(", ")
            );
        }
    }

    if !result.alternatives.is_empty() {
        println!("\nAlternative paths:");
        for path in &result.alternatives {
            println!("  - {}: {}", path.title, path.reason);
        }
    }

    render_guidance(&result.guidance);
}

fn render_guidance(guidance: &CareerGuidance) {
    println!("\nCareer paths with Full Stack Java:");
    for path in &guidance.career_paths {
        println!(
            "  - {} ({} demand, {}): {}",
            path.title,
            path.demand.label(),
            path.salary_range,
            path.skills.join(", ")
        );
    }

    println!("\nRequired vs current skills:");
    for entry in &guidance.skill_map {
        let status = if entry.gap { "gap" } else { "ready" };
        println!(
            "  - {:<24} {:?} -> {:?} [{status}]",
            entry.skill, entry.current, entry.required
        );
    }

    if !guidance.learning_phases.is_empty() {
        println!("\n8-month learning path:");
        for (index, phase) in guidance.learning_phases.iter().enumerate() {
            println!("  {}. {} ({})", index + 1, phase.title, phase.months);
            for item in phase.items {
                println!("     - {item}");
            }
        }
    }

    if !guidance.alternatives.is_empty() {
        println!("\nAlternative careers:");
        for career in &guidance.alternatives {
            println!(
                "  - {}: {} (consider if: {})",
                career.title, career.description, career.reason
            );
        }
    }
}

fn render_section(section: &SectionResult) {
    println!(
        "{}: {}% ({})",
        section.section.label(),
        section.overall,
        section.band_label()
    );
    for category in &section.categories {
        println!("    {:<28} {:>3}%", category.label, category.percentage);
    }
    if section.knowledge_questions > 0 {
        println!(
            "    {} of {} knowledge checks correct",
            section.correct_answers, section.knowledge_questions
        );
    }
}
