//! Content Synthesis
//!
//! Templated title, goal, resources, task, icon and XP for each level type.
//! All text is placeholder content built from the skill name.

use crate::types::{BossReward, LevelType, QuizQuestion, Resource, ResourceKind, Task};

/// Maximum resources attached to a level
pub const MAX_RESOURCES: usize = 2;

const BASICS_ICONS: [&str; 4] = ["🌱", "📖", "🔰", "💡"];
const CONCEPT_ICONS: [&str; 4] = ["🎨", "🧩", "⚙️", "🔬"];
const PRACTICE_ICONS: [&str; 4] = ["💼", "🛠️", "⚡", "🎯"];
const CHALLENGE_ICONS: [&str; 4] = ["🧠", "🎮", "⚔️", "🏃"];
const BOSS_ICONS: [&str; 4] = ["👑", "🏆", "💎", "🦸"];

const MCQ_OPTIONS: [&str; 4] = [
    "Option A (to be filled)",
    "Option B (to be filled)",
    "Option C (to be filled)",
    "Option D (to be filled)",
];

const BOSS_REQUIREMENTS: [&str; 4] = [
    "Demonstrate mastery",
    "Include all sub-concepts",
    "Professional quality",
    "Deploy live",
];

const BOSS_DESCRIPTION: &str = "Your major project milestone!";

/// Synthesized content of one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelContent {
    pub title: String,
    pub goal: String,
    pub icon: String,
    pub resources: Vec<Resource>,
    pub task: Task,
    pub xp_reward: u32,
    pub boss: Option<BossReward>,
}

/// Build the content of level `number` for `skill_name`
pub fn synthesize(number: u32, level_type: LevelType, skill_name: &str) -> LevelContent {
    LevelContent {
        title: title(level_type, skill_name),
        goal: goal(level_type, skill_name),
        icon: icon(level_type, number).to_string(),
        resources: resources(level_type, skill_name),
        task: task(level_type, skill_name),
        xp_reward: xp_reward(level_type),
        boss: boss_reward(level_type, skill_name),
    }
}

pub fn title(level_type: LevelType, skill: &str) -> String {
    match level_type {
        LevelType::Basics => format!("Intro to {}", skill),
        LevelType::Concept => format!("Understanding {}", skill),
        LevelType::Practice => format!("Build with {}", skill),
        LevelType::Challenge => format!("Quick {} Quiz", skill),
        LevelType::Boss => format!("BOSS: {} Challenge", skill),
    }
}

pub fn goal(level_type: LevelType, skill: &str) -> String {
    match level_type {
        LevelType::Basics => format!("Learn the fundamentals of {}", skill),
        LevelType::Concept => format!("Understand how {} works", skill),
        LevelType::Practice => format!("Build something with {}", skill),
        LevelType::Challenge => format!("Test your {} knowledge", skill),
        LevelType::Boss => format!("Complete a real project using {}", skill),
    }
}

fn icon_set(level_type: LevelType) -> &'static [&'static str; 4] {
    match level_type {
        LevelType::Basics => &BASICS_ICONS,
        LevelType::Concept => &CONCEPT_ICONS,
        LevelType::Practice => &PRACTICE_ICONS,
        LevelType::Challenge => &CHALLENGE_ICONS,
        LevelType::Boss => &BOSS_ICONS,
    }
}

/// Icon for a level, cycling through the type's set by level number
pub fn icon(level_type: LevelType, number: u32) -> &'static str {
    let set = icon_set(level_type);
    set[(number.saturating_sub(1) as usize) % set.len()]
}

pub fn xp_reward(level_type: LevelType) -> u32 {
    match level_type {
        LevelType::Basics => 100,
        LevelType::Concept => 150,
        LevelType::Practice => 200,
        LevelType::Challenge => 100,
        LevelType::Boss => 500,
    }
}

fn search_terms(skill: &str) -> String {
    skill.replace(' ', "+")
}

pub fn resources(level_type: LevelType, skill: &str) -> Vec<Resource> {
    let terms = search_terms(skill);
    let mut resources = match level_type {
        LevelType::Basics | LevelType::Concept => vec![
            Resource {
                kind: ResourceKind::Video,
                title: format!("{} Explained in 10 Minutes", skill),
                url: format!("https://youtube.com/search?q={}+tutorial", terms),
                duration: "10 min".to_string(),
            },
            Resource {
                kind: ResourceKind::Article,
                title: format!("{} Cheatsheet", skill),
                url: format!("https://google.com/search?q={}+cheatsheet", terms),
                duration: "5 min read".to_string(),
            },
        ],
        LevelType::Practice => vec![Resource {
            kind: ResourceKind::Interactive,
            title: format!("{} Playground", skill),
            url: format!("https://codepen.io/search/pens?q={}", terms),
            duration: "Hands-on".to_string(),
        }],
        LevelType::Challenge | LevelType::Boss => Vec::new(),
    };
    resources.truncate(MAX_RESOURCES);
    resources
}

pub fn task(level_type: LevelType, skill: &str) -> Task {
    match level_type {
        LevelType::Basics => Task::Mcq {
            question: format!("What is the main purpose of {}?", skill),
            options: MCQ_OPTIONS.iter().map(|o| o.to_string()).collect(),
            correct_answer: MCQ_OPTIONS[0].to_string(),
            hint: "Review the first resource".to_string(),
        },
        LevelType::Concept => Task::Code {
            question: format!("Write a simple example using {}", skill),
            starter_code: "// Your code here".to_string(),
            expected_output: "Basic functionality".to_string(),
            hint: "Start with the simplest example".to_string(),
        },
        LevelType::Practice => Task::Project {
            question: format!("Build a mini project with {}", skill),
            requirements: vec![
                format!("Use {} correctly", skill),
                "Make it functional".to_string(),
                "Add basic styling".to_string(),
            ],
            submission_type: "codepen_link".to_string(),
        },
        LevelType::Challenge => Task::Quiz {
            questions: vec![QuizQuestion {
                question: format!("Question about {}", skill),
                options: ["A", "B", "C", "D"].iter().map(|o| o.to_string()).collect(),
                correct_answer: "A".to_string(),
            }],
            passing_score: 80,
        },
        LevelType::Boss => Task::BossProject {
            question: format!("Build a complete project showcasing {}", skill),
            requirements: BOSS_REQUIREMENTS.iter().map(|r| r.to_string()).collect(),
            submission_type: "github_repo".to_string(),
            review_required: true,
        },
    }
}

pub fn boss_reward(level_type: LevelType, skill: &str) -> Option<BossReward> {
    level_type.is_boss().then(|| BossReward {
        badge_earned: format!("{} Master", skill),
        description: BOSS_DESCRIPTION.to_string(),
    })
}
