use serde::Serialize;

use super::domain::{Category, Question, QuestionOption};

/// The eight-question bank in presentation order.
///
/// Static content: the engine reads it but never mutates it. Option ids are
/// 1-based within each question; the tie-break heuristics key off their
/// zero-based index.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, question_id: u8) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "When starting a new project, what's your first instinct?",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Plan every detail and organize resources",
                    scores: vec![(Category::Tidy, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Set the perfect mood and ambiance",
                    scores: vec![(Category::Illuma, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Dive in and explore possibilities",
                    scores: vec![(Category::Nomad, 2.0)],
                },
            ],
        },
        Question {
            id: 2,
            text: "Your ideal weekend workshop involves:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Building something functional from scratch",
                    scores: vec![(Category::Maker, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Improving existing tools and methods",
                    scores: vec![(Category::Reform, 1.0), (Category::Maker, 1.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Creating something beautiful and atmospheric",
                    scores: vec![(Category::Illuma, 2.0)],
                },
            ],
        },
        Question {
            id: 3,
            text: "When choosing tools, you prioritize:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Reliability and proven track record",
                    scores: vec![(Category::Tidy, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Versatility and atmospheric quality",
                    scores: vec![(Category::Illuma, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Portability and adventure-readiness",
                    scores: vec![(Category::Nomad, 2.0)],
                },
            ],
        },
        Question {
            id: 4,
            text: "Your approach to problem-solving is:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Systematic and methodical",
                    scores: vec![(Category::Maker, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Innovative and experimental",
                    scores: vec![(Category::Reform, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Aesthetic and visually-driven",
                    scores: vec![(Category::Visual, 2.0)],
                },
            ],
        },
        Question {
            id: 5,
            text: "In a team setting, you naturally:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Organize tasks and ensure quality",
                    scores: vec![(Category::Maker, 1.0), (Category::Tidy, 1.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Push boundaries and suggest improvements",
                    scores: vec![(Category::Reform, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Focus on presentation and user experience",
                    scores: vec![(Category::Visual, 2.0)],
                },
            ],
        },
        Question {
            id: 6,
            text: "Your workspace style reflects:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Clean organization and efficiency",
                    scores: vec![(Category::Tidy, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Functional tools within easy reach",
                    scores: vec![(Category::Maker, 1.0), (Category::Reform, 1.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Inspiring aesthetics and mood lighting",
                    scores: vec![(Category::Visual, 1.0), (Category::Illuma, 1.0)],
                },
            ],
        },
        Question {
            id: 7,
            text: "When learning something new, you prefer:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Step-by-step instructions and practice",
                    scores: vec![(Category::Maker, 1.0), (Category::Tidy, 1.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Exploring and discovering your own way",
                    scores: vec![(Category::Nomad, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Understanding the artistry and vision behind it",
                    scores: vec![(Category::Illuma, 1.0), (Category::Visual, 1.0)],
                },
            ],
        },
        Question {
            id: 8,
            text: "Your motivation comes from:",
            options: vec![
                QuestionOption {
                    id: 1,
                    text: "Perfecting and optimizing systems",
                    scores: vec![(Category::Reform, 2.0)],
                },
                QuestionOption {
                    id: 2,
                    text: "Freedom and new experiences",
                    scores: vec![(Category::Nomad, 2.0)],
                },
                QuestionOption {
                    id: 3,
                    text: "Creating beautiful, impactful designs",
                    scores: vec![(Category::Visual, 2.0)],
                },
            ],
        },
    ]
}

/// Static display profile shown on the result card for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreativeProfile {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub product: &'static str,
    pub theme: &'static str,
}

impl Category {
    /// Total lookup over the closed enum; catalog completeness is enforced by
    /// tests, not runtime checks.
    pub fn profile(self) -> &'static CreativeProfile {
        match self {
            Category::Maker => &MAKER_PROFILE,
            Category::Tidy => &TIDY_PROFILE,
            Category::Illuma => &ILLUMA_PROFILE,
            Category::Reform => &REFORM_PROFILE,
            Category::Nomad => &NOMAD_PROFILE,
            Category::Visual => &VISUAL_PROFILE,
        }
    }
}

static MAKER_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Maker,
    title: "The Assembler",
    description: "You have a natural gift for building and creating. Your logical, systematic approach turns ideas into reality with precision and craftsmanship.",
    traits: &["Logical", "Systematic", "Detail-oriented", "Reliable"],
    product: "SNAPBLOCK - Perfect for your building mindset",
    theme: "from-blue-500 to-cyan-500",
};

static TIDY_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Tidy,
    title: "The Guardian",
    description: "Organization is your superpower. You create order from chaos and ensure everything runs smoothly with your meticulous attention to detail.",
    traits: &["Organized", "Efficient", "Quality-focused", "Dependable"],
    product: "Electric Spray - For your perfect cleaning standards",
    theme: "from-green-500 to-emerald-500",
};

static ILLUMA_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Illuma,
    title: "The Light Seeker",
    description: "You have an intuitive sense for atmosphere and mood. Your sensitivity to environment creates spaces that inspire and comfort.",
    traits: &["Atmospheric", "Intuitive", "Mood-conscious", "Inspiring"],
    product: "Camplight - To set the perfect ambiance",
    theme: "from-yellow-500 to-orange-500",
};

static REFORM_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Reform,
    title: "The Innovator",
    description: "You see potential for improvement everywhere. Your hands-on approach and innovative thinking constantly push boundaries.",
    traits: &["Innovative", "Hands-on", "Progressive", "Solution-focused"],
    product: "12V Brush Tool Set - For your endless improvements",
    theme: "from-purple-500 to-pink-500",
};

static NOMAD_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Nomad,
    title: "The Explorer",
    description: "Freedom and adventure fuel your creativity. Your spontaneous, adaptable nature thrives on new experiences and challenges.",
    traits: &["Free-spirited", "Adaptable", "Adventure-seeking", "Spontaneous"],
    product: "Air Pump Pro - Ready for any adventure",
    theme: "from-red-500 to-orange-500",
};

static VISUAL_PROFILE: CreativeProfile = CreativeProfile {
    category: Category::Visual,
    title: "The Visionary",
    description: "Aesthetics and visual perfection drive your decisions. Your keen eye for design creates experiences that captivate and inspire.",
    traits: &["Aesthetic", "Perfectionist", "Trend-conscious", "Visually-driven"],
    product: "Laser Measure - Precision for perfect results",
    theme: "from-indigo-500 to-purple-500",
};
