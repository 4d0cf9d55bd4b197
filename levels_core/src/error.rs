use thiserror::Error;

/// Errors raised by the layers around roadmap generation.
///
/// Generation itself cannot fail; these come from template lookup and the
/// progress store.
#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Unknown career goal: {0}")]
    UnknownCareerGoal(String),

    #[error("Invalid learning level: {0}")]
    InvalidLearningLevel(String),

    #[error("Roadmap not found: {0}")]
    RoadmapNotFound(String),

    #[error("Roadmap {0} has no level data")]
    NotLevelBasedRoadmap(String),

    #[error("Not authorized to access this roadmap")]
    Unauthorized,

    #[error("Level {level} does not exist in roadmap {roadmap_id}")]
    LevelNotFound { roadmap_id: String, level: u32 },

    #[error("Level {level} is locked")]
    LevelLocked { level: u32 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoadmapError>;
