use super::super::scoring::ScoreBand;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub title: &'static str,
    pub description: &'static str,
    pub match_percentage: u8,
    pub band: ScoreBand,
    pub requirements: Vec<&'static str>,
}

struct CareerTemplate {
    title: &'static str,
    description: &'static str,
    baseline: u8,
    requirements: &'static [&'static str],
}

const CAREERS: &[CareerTemplate] = &[
    CareerTemplate {
        title: "Java Full Stack Developer",
        description: "Build complete web applications with both frontend and backend",
        baseline: 70,
        requirements: &["Java", "Spring Boot", "React/Angular", "SQL"],
    },
    CareerTemplate {
        title: "Spring Boot Developer",
        description: "Specialize in backend and REST APIs with Spring Boot",
        baseline: 65,
        requirements: &["Java", "Spring Boot", "REST APIs"],
    },
    CareerTemplate {
        title: "Backend Engineer (Java)",
        description: "Focus on server-side logic, APIs, and business processes",
        baseline: 60,
        requirements: &["Java", "APIs", "Database", "OOP"],
    },
    CareerTemplate {
        title: "DevOps-enabled Full Stack Engineer",
        description: "Integrate DevOps practices into full stack development",
        baseline: 55,
        requirements: &["Java", "CI/CD", "Docker", "Cloud"],
    },
];

/// The technical score can raise a career's match above its baseline, never lower it.
pub(crate) fn career_matches(technical_score: u8) -> Vec<CareerMatch> {
    CAREERS
        .iter()
        .map(|career| {
            let match_percentage = technical_score.max(career.baseline);
            CareerMatch {
                title: career.title,
                description: career.description,
                match_percentage,
                band: ScoreBand::from_score(match_percentage),
                requirements: career.requirements.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_technical_score_falls_back_to_baselines() {
        let matches: Vec<u8> = career_matches(30)
            .iter()
            .map(|career| career.match_percentage)
            .collect();
        assert_eq!(matches, vec![70, 65, 60, 55]);
    }

    #[test]
    fn strong_technical_score_lifts_every_match() {
        let matches = career_matches(88);
        assert!(matches.iter().all(|career| career.match_percentage == 88));
        assert!(matches.iter().all(|career| career.band == ScoreBand::High));
    }

    #[test]
    fn mid_score_only_lifts_lower_baselines() {
        let matches: Vec<u8> = career_matches(62)
            .iter()
            .map(|career| career.match_percentage)
            .collect();
        assert_eq!(matches, vec![70, 65, 62, 62]);
    }
}
