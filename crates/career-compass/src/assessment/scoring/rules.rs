use super::super::domain::{Category, Question, QuestionKind, ResponseSet, Section, MAX_POINTS};
use super::{CategoryScore, ScoringError};

/// Points earned by one answer; `None` for unscored preference questions.
pub(crate) fn points_for(question: &Question, option_index: usize) -> Result<Option<u8>, ScoringError> {
    let option_count = question.option_count();
    if option_index >= option_count {
        return Err(ScoringError::InvalidOptionIndex {
            question_id: question.id.to_string(),
            index: option_index,
            option_count,
        });
    }

    let points = match &question.kind {
        QuestionKind::Scale(_) => Some(option_index as u8 + 1),
        QuestionKind::Knowledge { correct, .. } if option_index == *correct => Some(MAX_POINTS),
        QuestionKind::Knowledge { .. } => Some(0),
        QuestionKind::Preference { .. } => None,
    };

    Ok(points)
}

/// `round(100 * points / (5 * questions))`, halves rounding up.
pub(crate) fn percentage(points: u32, questions: u32) -> u8 {
    if questions == 0 {
        return 0;
    }
    let max_points = questions * MAX_POINTS as u32;
    let scaled = (200 * points + max_points) / (2 * max_points);
    scaled.min(100) as u8
}

/// Rounded mean of already-computed percentages, halves rounding up.
pub(crate) fn mean_percentage(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let count = values.len() as u32;
    let sum: u32 = values.iter().map(|value| *value as u32).sum();
    ((2 * sum + count) / (2 * count)).min(100) as u8
}

pub(crate) struct SectionTally {
    pub categories: Vec<CategoryScore>,
    pub points: u32,
    pub scored_questions: u32,
    pub correct_answers: u32,
    pub knowledge_questions: u32,
    pub responses: ResponseSet,
}

pub(crate) fn tally_section(
    section: Section,
    questions: &[Question],
    responses: &ResponseSet,
) -> Result<SectionTally, ScoringError> {
    let missing: Vec<String> = questions
        .iter()
        .filter(|question| responses.selected(question.id).is_none())
        .map(|question| question.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteResponses { section, missing });
    }

    let mut categories: Vec<CategoryScore> = Vec::new();
    let mut tally = SectionTally {
        categories: Vec::new(),
        points: 0,
        scored_questions: 0,
        correct_answers: 0,
        knowledge_questions: 0,
        responses: ResponseSet::new(),
    };

    for question in questions {
        let Some(selected) = responses.selected(question.id) else {
            continue;
        };
        tally.responses.record(question.id, selected);

        let Some(points) = points_for(question, selected)? else {
            continue;
        };

        if let QuestionKind::Knowledge { correct, .. } = &question.kind {
            tally.knowledge_questions += 1;
            if selected == *correct {
                tally.correct_answers += 1;
            }
        }

        tally.points += points as u32;
        tally.scored_questions += 1;

        let entry = category_entry(&mut categories, question.category);
        entry.points += points as u32;
        entry.max_points += MAX_POINTS as u32;
        entry.questions += 1;
    }

    for category in &mut categories {
        category.percentage = percentage(category.points, category.questions);
    }
    tally.categories = categories;

    Ok(tally)
}

fn category_entry(categories: &mut Vec<CategoryScore>, category: Category) -> &mut CategoryScore {
    let position = match categories
        .iter()
        .position(|entry| entry.category == category)
    {
        Some(position) => position,
        None => {
            categories.push(CategoryScore {
                category,
                label: category.label(),
                percentage: 0,
                points: 0,
                max_points: 0,
                questions: 0,
            });
            categories.len() - 1
        }
    };
    &mut categories[position]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        // 1 of 2 knowledge points at 5 each: 5/10 -> 50
        assert_eq!(percentage(5, 2), 50);
        // 7/15 = 46.67
        assert_eq!(percentage(7, 3), 47);
        // 9/40 = 22.5
        assert_eq!(percentage(9, 8), 23);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn mean_percentage_rounds_half_up() {
        assert_eq!(mean_percentage(&[100, 100, 100, 100, 100, 0]), 83);
        assert_eq!(mean_percentage(&[50, 51]), 51);
        assert_eq!(mean_percentage(&[]), 0);
    }

    #[test]
    fn half_correct_knowledge_block_scores_fifty() {
        use super::super::super::catalog::QuestionCatalog;
        use super::super::super::domain::TechnicalArea;

        let java: Vec<Question> = QuestionCatalog::standard()
            .questions(Section::Technical)
            .iter()
            .filter(|question| question.category == Category::Technical(TechnicalArea::JavaStack))
            .cloned()
            .collect();
        assert_eq!(java.len(), 6);

        let responses: ResponseSet = java
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let QuestionKind::Knowledge { correct, options, .. } = &question.kind else {
                    panic!("java questions are knowledge checks");
                };
                let index = if position % 2 == 0 {
                    *correct
                } else {
                    (*correct + 1) % options.len()
                };
                (question.id, index)
            })
            .collect();

        let tally = tally_section(Section::Technical, &java, &responses).expect("complete");
        assert_eq!(tally.correct_answers, 3);
        assert_eq!(tally.knowledge_questions, 6);
        assert_eq!(percentage(tally.points, tally.scored_questions), 50);
    }
}
