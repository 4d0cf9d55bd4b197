//! Level Expansion
//!
//! Decides how many levels each skill becomes and how long each level takes,
//! based on the learner's tier.

use crate::types::{LevelType, Skill};

/// Learner proficiency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Per-tier expansion policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPolicy {
    pub levels_per_skill: f64,
    pub minutes_per_level: u32,
}

impl Tier {
    /// Map a learning-level label to a tier. Anything that is not
    /// "Beginner" or "Intermediate" lands in Advanced.
    pub fn from_learning_level(label: &str) -> Self {
        match label {
            "Beginner" => Tier::Beginner,
            "Intermediate" => Tier::Intermediate,
            _ => Tier::Advanced,
        }
    }

    pub fn policy(&self) -> TierPolicy {
        match self {
            Tier::Beginner => TierPolicy {
                levels_per_skill: 2.0,
                minutes_per_level: 30,
            },
            Tier::Intermediate => TierPolicy {
                levels_per_skill: 1.0,
                minutes_per_level: 45,
            },
            Tier::Advanced => TierPolicy {
                levels_per_skill: 0.5,
                minutes_per_level: 90,
            },
        }
    }
}

impl TierPolicy {
    /// Whole levels emitted per skill.
    ///
    /// The fraction is truncated before the floor of one is applied, so the
    /// Advanced tier's 0.5 still yields one level per skill.
    pub fn levels_for_skill(&self) -> u32 {
        (self.levels_per_skill.trunc() as u32).max(1)
    }

    /// Minutes for a level of the given type; boss levels take twice as long
    pub fn minutes_for(&self, level_type: LevelType) -> u32 {
        if level_type.is_boss() {
            self.minutes_per_level * 2
        } else {
            self.minutes_per_level
        }
    }
}

/// A level slot before content is synthesized
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLevel<'a> {
    pub number: u32,
    pub level_type: LevelType,
    pub skill: &'a Skill,
    pub estimated_minutes: u32,
}

/// Expand skills into numbered level slots, in input order
pub fn plan_levels(skills: &[Skill], tier: Tier) -> Vec<PlannedLevel<'_>> {
    let policy = tier.policy();
    let per_skill = policy.levels_for_skill();
    let mut planned = Vec::with_capacity(skills.len() * per_skill as usize);
    let mut number = 1u32;

    for skill in skills {
        for _ in 0..per_skill {
            let level_type = LevelType::for_number(number);
            planned.push(PlannedLevel {
                number,
                level_type,
                skill,
                estimated_minutes: policy.minutes_for(level_type),
            });
            number += 1;
        }
    }

    planned
}
