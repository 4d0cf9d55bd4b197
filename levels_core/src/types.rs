//! Level Roadmap Types
//!
//! Core data structures for the level-based roadmap: the skill input, the
//! generated levels and milestones, and the document that bundles them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================
// SKILL INPUT
// ============================================================

/// One entry of a linear curriculum, as supplied by a template provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Learning stage label: "Beginner", "Intermediate", "Advanced"
    #[serde(default)]
    pub stage: String,
    /// Estimated hours to learn
    #[serde(default)]
    pub hours: u32,
}

impl Skill {
    pub fn new(name: &str, stage: &str, hours: u32) -> Self {
        Self {
            name: name.to_string(),
            stage: stage.to_string(),
            hours,
        }
    }

    /// A skill with only a name, as used by ad hoc callers
    pub fn named(name: &str) -> Self {
        Self::new(name, "", 0)
    }
}

// ============================================================
// LEVEL TYPE
// ============================================================

/// Content category of a level. Levels cycle through these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelType {
    Basics,
    Concept,
    Practice,
    Challenge,
    Boss,
}

impl LevelType {
    /// The fixed 5-cycle
    pub const CYCLE: [LevelType; 5] = [
        LevelType::Basics,
        LevelType::Concept,
        LevelType::Practice,
        LevelType::Challenge,
        LevelType::Boss,
    ];

    /// Type of the level with the given 1-based number
    pub fn for_number(number: u32) -> Self {
        let index = (number.saturating_sub(1) as usize) % Self::CYCLE.len();
        Self::CYCLE[index]
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, LevelType::Boss)
    }
}

// ============================================================
// LEVEL STATUS
// ============================================================

/// Lock state of a level: locked -> unlocked -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Locked,
    Unlocked,
    Completed,
}

// ============================================================
// PATH POSITION
// ============================================================

/// Coordinate on the visual path, in percent of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

// ============================================================
// RESOURCES
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Article,
    Interactive,
}

/// A learning resource attached to a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
    pub duration: String,
}

// ============================================================
// TASKS
// ============================================================

/// Single question inside a quiz task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Task payload of a level, one variant per level type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    Mcq {
        question: String,
        options: Vec<String>,
        correct_answer: String,
        hint: String,
    },
    Code {
        question: String,
        starter_code: String,
        expected_output: String,
        hint: String,
    },
    Project {
        question: String,
        requirements: Vec<String>,
        submission_type: String,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
        passing_score: u32,
    },
    BossProject {
        question: String,
        requirements: Vec<String>,
        submission_type: String,
        review_required: bool,
    },
}

impl Task {
    pub fn kind(&self) -> &'static str {
        match self {
            Task::Mcq { .. } => "mcq",
            Task::Code { .. } => "code",
            Task::Project { .. } => "project",
            Task::Quiz { .. } => "quiz",
            Task::BossProject { .. } => "boss_project",
        }
    }
}

// ============================================================
// LEVEL
// ============================================================

/// Extra reward carried only by boss levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossReward {
    pub badge_earned: String,
    pub description: String,
}

/// One unit of the generated progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(rename = "level_number")]
    pub number: u32,
    pub level_type: LevelType,
    pub title: String,
    pub status: LevelStatus,
    pub icon: String,
    pub position: Position,
    pub estimated_minutes: u32,
    pub goal: String,
    pub resources: Vec<Resource>,
    pub task: Task,
    pub xp_reward: u32,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub boss: Option<BossReward>,
}

// ============================================================
// MILESTONE
// ============================================================

/// Badge awarded on reaching every 5th level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub level: u32,
    pub title: String,
    pub badge: String,
    pub description: String,
}

// ============================================================
// ROADMAP DOCUMENT
// ============================================================

/// Summary metadata of a roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapMeta {
    pub career_goal: String,
    pub learning_level: String,
    pub total_levels: u32,
    pub estimated_days: u32,
    pub current_level: u32,
    pub progress_percentage: f64,
    pub streak_days: u32,
}

/// Aggregated learner statistics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoadmapStats {
    pub total_xp: u32,
    pub levels_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub badges_earned: Vec<String>,
    pub time_spent_minutes: u32,
}

/// Complete output of one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    #[serde(rename = "roadmap")]
    pub meta: RoadmapMeta,
    pub levels: Vec<Level>,
    pub milestones: Vec<Milestone>,
    pub stats: RoadmapStats,
}

impl RoadmapDocument {
    pub fn level(&self, number: u32) -> Option<&Level> {
        // numbers are contiguous from 1
        number
            .checked_sub(1)
            .and_then(|index| self.levels.get(index as usize))
            .filter(|level| level.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_type_cycle() {
        assert_eq!(LevelType::for_number(1), LevelType::Basics);
        assert_eq!(LevelType::for_number(5), LevelType::Boss);
        assert_eq!(LevelType::for_number(6), LevelType::Basics);
        assert_eq!(LevelType::for_number(14), LevelType::Challenge);
    }

    #[test]
    fn test_task_serializes_with_kind_tag() {
        let task = Task::Quiz {
            questions: vec![],
            passing_score: 80,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "quiz");
        assert_eq!(json["passing_score"], 80);
        assert_eq!(task.kind(), "quiz");
    }

    #[test]
    fn test_skill_deserializes_with_name_only() {
        let skill: Skill = serde_json::from_str(r#"{"name": "HTML Basics"}"#).unwrap();
        assert_eq!(skill, Skill::named("HTML Basics"));
    }
}
