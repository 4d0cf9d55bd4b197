//! Progress Rule
//!
//! The single status rule used both when a roadmap is generated (no
//! completions yet) and when a stored roadmap is read back with its
//! completion entries merged in.
//!
//! Rule:
//! - levels with a completion entry are `completed`
//! - the level right after the highest completed number is `unlocked`
//! - every other level is `locked`

use crate::types::{LevelStatus, RoadmapDocument};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One stored completion of a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub level_number: u32,
    pub completed_at: DateTime<Utc>,
    pub xp_earned: u32,
    pub time_spent_minutes: u32,
}

/// Completed level numbers, summarized for the status rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    completed: BTreeSet<u32>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[CompletionRecord]) -> Self {
        Self {
            completed: records.iter().map(|r| r.level_number).collect(),
        }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.completed.contains(&number)
    }

    /// Highest completed level number, 0 when nothing is completed
    pub fn highest(&self) -> u32 {
        self.completed.iter().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

/// Status of level `number` given the completed set
pub fn status_for(number: u32, completed: &CompletionSet) -> LevelStatus {
    if completed.contains(number) {
        LevelStatus::Completed
    } else if number == completed.highest() + 1 {
        LevelStatus::Unlocked
    } else {
        LevelStatus::Locked
    }
}

/// Status of a freshly generated level
pub fn initial_status(number: u32) -> LevelStatus {
    status_for(number, &CompletionSet::new())
}

/// Streak lengths over the distinct completion days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Compute streaks from completion timestamps.
///
/// The current streak is the run ending on the latest completion day, and
/// only counts if that day is `today` or the day before.
pub fn streaks(records: &[CompletionRecord], today: NaiveDate) -> Streaks {
    let days: BTreeSet<NaiveDate> = records.iter().map(|r| r.completed_at.date_naive()).collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for day in &days {
        run = match previous {
            Some(prev) if *day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*day);
    }

    // `run` now holds the streak ending on the latest day
    let current = match previous {
        Some(last) if today - last <= Duration::days(1) => run,
        _ => 0,
    };

    Streaks { current, longest }
}

fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of completed levels in percent, rounded to 2 decimals; 0 when
/// there are no levels
pub fn progress_percentage(levels_completed: u32, total_levels: u32) -> f64 {
    if total_levels == 0 {
        return 0.0;
    }
    round_percentage(levels_completed as f64 / total_levels as f64 * 100.0)
}

/// Build a read view of `document` with the completion entries merged in.
///
/// The input document is left untouched.
pub fn apply_progress(
    document: &RoadmapDocument,
    records: &[CompletionRecord],
    today: NaiveDate,
) -> RoadmapDocument {
    let mut view = document.clone();
    let completed = CompletionSet::from_records(records);
    let by_level: HashMap<u32, &CompletionRecord> =
        records.iter().map(|r| (r.level_number, r)).collect();

    let mut badges_earned = Vec::new();
    for level in &mut view.levels {
        level.status = status_for(level.number, &completed);
        level.completed_at = by_level.get(&level.number).map(|r| r.completed_at);
        if level.status == LevelStatus::Completed {
            if let Some(boss) = &level.boss {
                badges_earned.push(boss.badge_earned.clone());
            }
        }
    }

    let streaks = streaks(records, today);
    let total_levels = view.meta.total_levels;
    let levels_completed = completed.len() as u32;

    view.stats.total_xp = records.iter().map(|r| r.xp_earned).sum();
    view.stats.levels_completed = levels_completed;
    view.stats.time_spent_minutes = records.iter().map(|r| r.time_spent_minutes).sum();
    view.stats.badges_earned = badges_earned;
    view.stats.current_streak = streaks.current;
    view.stats.longest_streak = streaks.longest;

    view.meta.streak_days = streaks.current;
    view.meta.current_level = (completed.highest() + 1).min(total_levels).max(1);
    view.meta.progress_percentage = progress_percentage(levels_completed, total_levels);

    view
}
