//! Roadmap Assembly
//!
//! Composes expansion, content synthesis, path layout and milestones into a
//! single `RoadmapDocument`. Generation is pure: same input, same output.

use crate::content;
use crate::expander::{plan_levels, PlannedLevel, Tier};
use crate::layout::PathLayout;
use crate::milestones::build_milestones;
use crate::progress::initial_status;
use crate::types::{Level, RoadmapDocument, RoadmapMeta, RoadmapStats, Skill};

/// Minutes of study assumed per day
pub const MINUTES_PER_DAY: u32 = 60;

/// Builds roadmap documents on top of a path layout
#[derive(Debug, Clone, Copy)]
pub struct RoadmapAssembler<'a> {
    layout: &'a PathLayout,
}

impl Default for RoadmapAssembler<'static> {
    fn default() -> Self {
        Self::new(PathLayout::standard())
    }
}

impl<'a> RoadmapAssembler<'a> {
    pub fn new(layout: &'a PathLayout) -> Self {
        Self { layout }
    }

    /// Generate the level roadmap for `skills`
    pub fn assemble(
        &self,
        skills: &[Skill],
        career_goal: &str,
        learning_level: &str,
    ) -> RoadmapDocument {
        let tier = Tier::from_learning_level(learning_level);
        let levels: Vec<Level> = plan_levels(skills, tier)
            .iter()
            .map(|planned| self.build_level(planned))
            .collect();

        let milestones = build_milestones(levels.len(), career_goal);

        log::debug!(
            "[GENERATOR] {} skills -> {} levels, {} milestones ({:?} tier)",
            skills.len(),
            levels.len(),
            milestones.len(),
            tier
        );

        RoadmapDocument {
            meta: RoadmapMeta {
                career_goal: career_goal.to_string(),
                learning_level: learning_level.to_string(),
                total_levels: levels.len() as u32,
                estimated_days: estimated_days(&levels),
                current_level: 1,
                progress_percentage: 0.0,
                streak_days: 0,
            },
            levels,
            milestones,
            stats: RoadmapStats::default(),
        }
    }

    fn build_level(&self, planned: &PlannedLevel<'_>) -> Level {
        let content = content::synthesize(planned.number, planned.level_type, &planned.skill.name);

        Level {
            number: planned.number,
            level_type: planned.level_type,
            title: content.title,
            status: initial_status(planned.number),
            icon: content.icon,
            position: self.layout.position_for(planned.number),
            estimated_minutes: planned.estimated_minutes,
            goal: content.goal,
            resources: content.resources,
            task: content.task,
            xp_reward: content.xp_reward,
            completed_at: None,
            boss: content.boss,
        }
    }
}

/// Days to finish at one hour a day; never less than 1
pub fn estimated_days(levels: &[Level]) -> u32 {
    let total_minutes: u32 = levels.iter().map(|l| l.estimated_minutes).sum();
    total_minutes / MINUTES_PER_DAY + 1
}

/// Generate a level roadmap with the standard path layout
pub fn generate_roadmap(
    skills: &[Skill],
    career_goal: &str,
    learning_level: &str,
) -> RoadmapDocument {
    RoadmapAssembler::default().assemble(skills, career_goal, learning_level)
}
