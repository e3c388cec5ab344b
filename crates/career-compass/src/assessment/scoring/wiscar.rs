use super::super::domain::Category;
use super::rules::mean_percentage;
use super::CategoryScore;

/// WISCAR overall is the mean of the dimension percentages, not a flat per-question
/// mean, so a dimension with fewer questions weighs the same as the others.
pub(super) fn overall(categories: &[CategoryScore]) -> u8 {
    let dimensions: Vec<u8> = categories
        .iter()
        .filter(|entry| matches!(entry.category, Category::Wiscar(_)))
        .map(|entry| entry.percentage)
        .collect();

    mean_percentage(&dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::WiscarDimension;

    fn dimension(dimension: WiscarDimension, percentage: u8, questions: u32) -> CategoryScore {
        CategoryScore {
            category: Category::Wiscar(dimension),
            label: dimension.label(),
            percentage,
            points: 0,
            max_points: questions * 5,
            questions,
        }
    }

    #[test]
    fn averages_dimensions_rather_than_questions() {
        let categories = vec![
            dimension(WiscarDimension::Will, 100, 3),
            dimension(WiscarDimension::Interest, 100, 3),
            dimension(WiscarDimension::Skill, 100, 3),
            dimension(WiscarDimension::Cognitive, 100, 3),
            dimension(WiscarDimension::Ability, 100, 3),
            dimension(WiscarDimension::RealWorld, 0, 1),
        ];

        // A flat per-question mean would be 15/16 = 94.
        assert_eq!(overall(&categories), 83);
    }

    #[test]
    fn divides_by_dimensions_present() {
        let categories = vec![
            dimension(WiscarDimension::Will, 80, 3),
            dimension(WiscarDimension::Interest, 60, 3),
        ];
        assert_eq!(overall(&categories), 70);
    }
}
