//! Level Roadmap Core
//!
//! Turns a linear skill curriculum into a game-style level progression:
//! - Level expansion per learner tier
//! - Templated level content, XP and path layout
//! - Milestone badges every 5 levels
//! - Completion tracking with a shared status rule

// Generation engine
pub mod assembler;
pub mod content;
pub mod expander;
pub mod layout;
pub mod milestones;
pub mod types;

// Progress and persistence
pub mod error;
pub mod progress;
pub mod store;
pub mod templates;

pub use assembler::{generate_roadmap, RoadmapAssembler};
pub use error::{Result, RoadmapError};
pub use expander::Tier;
pub use progress::{apply_progress, CompletionRecord};
pub use store::{CompletionOutcome, DashboardSummary, ProgressStore, RoadmapSummary};
pub use templates::{BuiltinTemplates, SkillTemplateProvider};
pub use types::*;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
