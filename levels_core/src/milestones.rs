//! Milestones
//!
//! A badge every 5 levels, named after the career goal. There are only five
//! ranks, so no milestone exists past level 25.

use crate::types::Milestone;

/// Levels per milestone block
pub const MILESTONE_INTERVAL: u32 = 5;

const MILESTONE_RANKS: [&str; 5] = ["Beginner", "Apprentice", "Practitioner", "Expert", "Master"];
const MILESTONE_BADGES: [&str; 5] = ["🌟", "⭐", "💫", "✨", "🌠"];

/// Milestones for a roadmap of `level_count` levels
pub fn build_milestones(level_count: usize, career_goal: &str) -> Vec<Milestone> {
    let blocks = level_count / MILESTONE_INTERVAL as usize;

    MILESTONE_RANKS
        .iter()
        .zip(MILESTONE_BADGES.iter())
        .take(blocks)
        .enumerate()
        .map(|(i, (rank, badge))| {
            let level = MILESTONE_INTERVAL * (i as u32 + 1);
            Milestone {
                level,
                title: format!("{} {}", career_goal, rank),
                badge: badge.to_string(),
                description: format!("Reached level {}!", level),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_milestone_before_first_block() {
        assert!(build_milestones(0, "Web Developer").is_empty());
        assert!(build_milestones(4, "Web Developer").is_empty());
    }

    #[test]
    fn test_milestone_levels_and_titles() {
        let milestones = build_milestones(12, "Data Analyst");
        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].level, 5);
        assert_eq!(milestones[0].title, "Data Analyst Beginner");
        assert_eq!(milestones[0].badge, "🌟");
        assert_eq!(milestones[1].level, 10);
        assert_eq!(milestones[1].title, "Data Analyst Apprentice");
        assert_eq!(milestones[1].description, "Reached level 10!");
    }

    #[test]
    fn test_capped_at_level_25() {
        let milestones = build_milestones(40, "App Developer");
        assert_eq!(milestones.len(), 5);
        assert_eq!(milestones[4].level, 25);
        assert_eq!(milestones[4].title, "App Developer Master");
    }
}
