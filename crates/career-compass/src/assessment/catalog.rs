use std::sync::OnceLock;

use super::domain::{
    Category, Question, QuestionKind, Scale, Section, TechnicalArea, TraitCategory,
    WiscarDimension,
};

#[derive(Debug)]
pub struct QuestionCatalog {
    psychometric: Vec<Question>,
    technical: Vec<Question>,
    wiscar: Vec<Question>,
}

impl QuestionCatalog {
    /// Process-wide catalog shared by every session and request.
    pub fn standard() -> &'static Self {
        static CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self {
            psychometric: psychometric_questions(),
            technical: technical_questions(),
            wiscar: wiscar_questions(),
        })
    }

    pub fn questions(&self, section: Section) -> &[Question] {
        match section {
            Section::Psychometric => &self.psychometric,
            Section::Technical => &self.technical,
            Section::Wiscar => &self.wiscar,
        }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        Section::ordered()
            .into_iter()
            .flat_map(|section| self.questions(section))
            .find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.psychometric.len() + self.technical.len() + self.wiscar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn likert(
    id: &'static str,
    category: TraitCategory,
    prompt: &'static str,
    focus: &'static str,
) -> Question {
    Question {
        id,
        category: Category::Psychometric(category),
        prompt,
        focus: Some(focus),
        kind: QuestionKind::Scale(Scale::Agreement),
    }
}

fn psychometric_questions() -> Vec<Question> {
    use TraitCategory::*;

    vec![
        likert(
            "structure_0",
            Conscientiousness,
            "I enjoy building robust systems that handle large-scale business logic.",
            "structure preference",
        ),
        likert(
            "structure_1",
            Conscientiousness,
            "I prefer clarity and structure in my daily work.",
            "structure preference",
        ),
        likert(
            "investigative_0",
            Openness,
            "I often explore how systems work behind the scenes.",
            "investigative nature",
        ),
        likert(
            "openness_0",
            Openness,
            "I enjoy learning new programming frameworks and tools.",
            "learning openness",
        ),
        likert(
            "detail_0",
            Conscientiousness,
            "I pay close attention to code quality and best practices.",
            "detail orientation",
        ),
        likert(
            "persistence_0",
            Grit,
            "I persist through challenging debugging sessions until I find solutions.",
            "persistence",
        ),
        likert(
            "analytical_0",
            HollandInvestigative,
            "I enjoy analyzing complex problems and finding systematic solutions.",
            "analytical thinking",
        ),
        likert(
            "conventional_0",
            HollandConventional,
            "I work well within established frameworks and conventions.",
            "conventional preference",
        ),
        likert(
            "motivation_0",
            MotivationalStyle,
            "I'm more motivated by solving interesting problems than by salary alone.",
            "intrinsic motivation",
        ),
        likert(
            "growth_0",
            GrowthMindset,
            "I believe my programming abilities can be developed through practice.",
            "growth mindset",
        ),
        likert(
            "structured_0",
            CognitiveStyle,
            "I prefer working with well-defined specifications and requirements.",
            "structured thinking",
        ),
        likert(
            "complexity_0",
            ComplexityTolerance,
            "I don't mind working with verbose but powerful frameworks like Spring.",
            "complexity tolerance",
        ),
        likert(
            "team_0",
            TeamCollaboration,
            "I work well in teams following established development processes.",
            "team collaboration",
        ),
        likert(
            "business_0",
            EnterpriseMindset,
            "I'm interested in building applications that serve business needs.",
            "business orientation",
        ),
        likert(
            "practical_0",
            LearningStyle,
            "I learn best through hands-on practice and structured tutorials.",
            "practical learning",
        ),
    ]
}

fn knowledge(
    id: &'static str,
    category: Category,
    prompt: &'static str,
    options: Vec<&'static str>,
    correct: usize,
    explanation: &'static str,
) -> Question {
    Question {
        id,
        category,
        prompt,
        focus: None,
        kind: QuestionKind::Knowledge {
            options,
            correct,
            explanation,
        },
    }
}

fn technical_questions() -> Vec<Question> {
    let aptitude = Category::Technical(TechnicalArea::GeneralAptitude);
    let foundation = Category::Technical(TechnicalArea::FoundationalKnowledge);
    let java = Category::Technical(TechnicalArea::JavaStack);

    vec![
        knowledge(
            "aptitude_0",
            aptitude,
            "If A = 2, B = 4, and C = A + B, what is C * 2?",
            vec!["8", "10", "12", "14"],
            2,
            "C = 2 + 4 = 6, so C * 2 = 12",
        ),
        knowledge(
            "aptitude_1",
            aptitude,
            "What comes next in the sequence: 2, 6, 18, 54, ?",
            vec!["108", "162", "216", "324"],
            1,
            "Each number is multiplied by 3, so 54 x 3 = 162",
        ),
        knowledge(
            "aptitude_2",
            aptitude,
            "In a flowchart, what does a diamond shape represent?",
            vec!["Process", "Decision", "Input/Output", "Start/End"],
            1,
            "Diamond shapes represent decision points in flowcharts",
        ),
        knowledge(
            "aptitude_3",
            aptitude,
            "If it takes 5 machines 5 minutes to make 5 widgets, how long does it take 100 machines to make 100 widgets?",
            vec!["5 minutes", "20 minutes", "100 minutes", "500 minutes"],
            0,
            "Each machine makes 1 widget in 5 minutes, so 100 machines make 100 widgets in 5 minutes",
        ),
        knowledge(
            "foundation_0",
            foundation,
            "Which of the following is NOT a fundamental OOP principle?",
            vec!["Encapsulation", "Inheritance", "Polymorphism", "Compilation"],
            3,
            "The four OOP principles are Encapsulation, Inheritance, Polymorphism, and Abstraction",
        ),
        knowledge(
            "foundation_1",
            foundation,
            "What is the purpose of a 'for' loop?",
            vec![
                "To make decisions",
                "To repeat code a specific number of times",
                "To define functions",
                "To handle errors",
            ],
            1,
            "A for loop is used to repeat code a specific number of times",
        ),
        knowledge(
            "foundation_2",
            foundation,
            "In HTML, which tag is used to create a hyperlink?",
            vec!["<link>", "<url>", "<a>", "<href>"],
            2,
            "The <a> tag is used to create hyperlinks in HTML",
        ),
        knowledge(
            "foundation_3",
            foundation,
            "What does SQL stand for?",
            vec![
                "Structured Query Language",
                "System Query Language",
                "Standard Query Language",
                "Simple Query Language",
            ],
            0,
            "SQL stands for Structured Query Language",
        ),
        knowledge(
            "foundation_4",
            foundation,
            "Which CSS property is used to change the text color?",
            vec!["font-color", "text-color", "color", "foreground-color"],
            2,
            "The 'color' property is used to change text color in CSS",
        ),
        knowledge(
            "java_0",
            java,
            "Which of the following is the correct way to declare a String variable in Java?",
            vec![
                "String str = 'Hello';",
                "String str = \"Hello\";",
                "string str = \"Hello\";",
                "Str str = \"Hello\";",
            ],
            1,
            "Java strings use double quotes and the String type is capitalized",
        ),
        knowledge(
            "java_1",
            java,
            "What is the purpose of the 'try-catch' block in Java?",
            vec![
                "To define methods",
                "To handle exceptions",
                "To create loops",
                "To declare variables",
            ],
            1,
            "Try-catch blocks are used to handle exceptions in Java",
        ),
        knowledge(
            "java_2",
            java,
            "Which interface is commonly used for storing key-value pairs in Java?",
            vec!["List", "Set", "Map", "Queue"],
            2,
            "The Map interface is used for key-value pair storage",
        ),
        knowledge(
            "java_3",
            java,
            "What does REST stand for in web development?",
            vec![
                "Representational State Transfer",
                "Remote State Transfer",
                "Relational State Transfer",
                "Responsive State Transfer",
            ],
            0,
            "REST stands for Representational State Transfer",
        ),
        knowledge(
            "java_4",
            java,
            "In Spring Boot, what annotation is used to mark a class as a REST controller?",
            vec!["@Controller", "@RestController", "@Service", "@Component"],
            1,
            "@RestController combines @Controller and @ResponseBody for REST endpoints",
        ),
        knowledge(
            "java_5",
            java,
            "What is JSON primarily used for?",
            vec![
                "Database storage",
                "Data interchange",
                "User interface",
                "Security",
            ],
            1,
            "JSON is primarily used for data interchange",
        ),
    ]
}

fn rated(
    id: &'static str,
    dimension: WiscarDimension,
    scale: Scale,
    prompt: &'static str,
) -> Question {
    Question {
        id,
        category: Category::Wiscar(dimension),
        prompt,
        focus: Some(dimension.description()),
        kind: QuestionKind::Scale(scale),
    }
}

fn preference(
    id: &'static str,
    dimension: WiscarDimension,
    prompt: &'static str,
    options: Vec<&'static str>,
) -> Question {
    Question {
        id,
        category: Category::Wiscar(dimension),
        prompt,
        focus: Some(dimension.description()),
        kind: QuestionKind::Preference { options },
    }
}

fn wiscar_questions() -> Vec<Question> {
    use WiscarDimension::*;

    let cognitive = Category::Wiscar(Cognitive);

    vec![
        rated(
            "will_0",
            Will,
            Scale::Agreement,
            "I often stick to learning goals even when it's hard or boring.",
        ),
        rated(
            "will_1",
            Will,
            Scale::Agreement,
            "I have completed challenging projects or courses in the past.",
        ),
        rated(
            "will_2",
            Will,
            Scale::Agreement,
            "I'm willing to spend evenings and weekends learning Full Stack Java.",
        ),
        rated(
            "interest_0",
            Interest,
            Scale::Agreement,
            "I'm curious about how enterprise applications are built and scaled.",
        ),
        rated(
            "interest_1",
            Interest,
            Scale::Agreement,
            "I enjoy understanding both frontend and backend development.",
        ),
        rated(
            "interest_2",
            Interest,
            Scale::Agreement,
            "I'm excited about working with Java frameworks like Spring Boot.",
        ),
        rated(
            "skill_0",
            Skill,
            Scale::Confidence,
            "Rate your confidence in Object-Oriented Programming concepts.",
        ),
        rated(
            "skill_1",
            Skill,
            Scale::Confidence,
            "Rate your confidence in database design and SQL queries.",
        ),
        rated(
            "skill_2",
            Skill,
            Scale::Confidence,
            "Rate your confidence in web development (HTML, CSS, JavaScript).",
        ),
        knowledge(
            "cognitive_0",
            cognitive,
            "If all Bloops are Razzles and all Razzles are Lazzles, are all Bloops Lazzles?",
            vec!["Yes", "No", "Cannot be determined"],
            0,
            "Set inclusion is transitive, so every Bloop is also a Lazzle",
        ),
        knowledge(
            "cognitive_1",
            cognitive,
            "You're debugging a complex application with multiple layers. How do you approach it?",
            vec![
                "Start randomly checking different parts",
                "Systematically trace through each layer",
                "Ask for help immediately",
                "Use only logs to understand the issue",
            ],
            1,
            "Tracing each layer in turn isolates the fault without guesswork",
        ),
        rated(
            "cognitive_2",
            Cognitive,
            Scale::Comfort,
            "How comfortable are you with learning interconnected systems (database + backend + frontend)?",
        ),
        rated(
            "ability_0",
            Ability,
            Scale::Agreement,
            "When I fail at something, I analyze what went wrong and improve.",
        ),
        rated(
            "ability_1",
            Ability,
            Scale::Agreement,
            "I actively seek feedback to improve my skills.",
        ),
        rated(
            "ability_2",
            Ability,
            Scale::Agreement,
            "I can adapt my learning style based on the material.",
        ),
        preference(
            "real_world_0",
            RealWorld,
            "Which Java career path appeals to you most?",
            vec![
                "Full Stack Developer (Frontend + Backend)",
                "Backend Developer (APIs + Business Logic)",
                "DevOps Engineer (Deployment + Infrastructure)",
                "Enterprise Architect (System Design)",
            ],
        ),
        preference(
            "real_world_1",
            RealWorld,
            "What type of applications do you want to build?",
            vec![
                "E-commerce platforms",
                "Banking and financial systems",
                "Healthcare management systems",
                "Social media platforms",
            ],
        ),
        rated(
            "real_world_2",
            RealWorld,
            Scale::Importance,
            "How important is job market demand in your career choice?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_expected_section_sizes() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.questions(Section::Psychometric).len(), 15);
        assert_eq!(catalog.questions(Section::Technical).len(), 15);
        assert_eq!(catalog.questions(Section::Wiscar).len(), 18);
        assert_eq!(catalog.len(), 48);
    }

    #[test]
    fn question_ids_are_unique_across_sections() {
        let catalog = QuestionCatalog::standard();
        let mut seen = HashSet::new();
        for section in Section::ordered() {
            for question in catalog.questions(section) {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
                assert_eq!(question.section(), section);
            }
        }
    }

    #[test]
    fn knowledge_questions_flag_exactly_one_valid_answer() {
        let catalog = QuestionCatalog::standard();
        for section in Section::ordered() {
            for question in catalog.questions(section) {
                if let QuestionKind::Knowledge {
                    options, correct, ..
                } = &question.kind
                {
                    assert!(*correct < options.len(), "{} correct index", question.id);
                    let flagged = question
                        .options()
                        .iter()
                        .filter(|option| {
                            option.value == super::super::domain::OptionValue::Correct(true)
                        })
                        .count();
                    assert_eq!(flagged, 1, "{} flags one answer", question.id);
                }
            }
        }
    }

    #[test]
    fn every_wiscar_dimension_has_scored_questions() {
        let catalog = QuestionCatalog::standard();
        for dimension in WiscarDimension::ordered() {
            let scored = catalog
                .questions(Section::Wiscar)
                .iter()
                .filter(|question| question.category == Category::Wiscar(dimension))
                .filter(|question| question.is_scored())
                .count();
            assert!(scored > 0, "{:?} has no scored questions", dimension);
        }
    }

    #[test]
    fn lookup_by_id_spans_sections() {
        let catalog = QuestionCatalog::standard();
        let question = catalog.question("java_4").expect("java question present");
        assert_eq!(question.category, Category::Technical(TechnicalArea::JavaStack));
        assert!(catalog.question("unknown_9").is_none());
    }
}
