//! Progress Store
//!
//! SQLite-backed persistence for generated roadmaps and level completions.
//! Stored documents are never modified; progress lives in `level_progress`
//! and is merged into a read view on every read.

use crate::error::{Result, RoadmapError};
use crate::progress::{self, CompletionRecord, CompletionSet};
use crate::types::{LevelStatus, RoadmapDocument};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS roadmaps (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        career_goal TEXT NOT NULL,
        learning_level TEXT NOT NULL,
        existing_skills TEXT NOT NULL DEFAULT '[]',
        document TEXT,
        created_at TEXT NOT NULL,
        last_activity TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_roadmaps_user_id ON roadmaps(user_id);
    CREATE TABLE IF NOT EXISTS level_progress (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        roadmap_id TEXT NOT NULL,
        level_number INTEGER NOT NULL,
        completed_at TEXT NOT NULL,
        xp_earned INTEGER NOT NULL DEFAULT 0,
        time_spent_minutes INTEGER NOT NULL DEFAULT 0,
        task_answer TEXT,
        FOREIGN KEY (roadmap_id) REFERENCES roadmaps (id) ON DELETE CASCADE,
        UNIQUE(roadmap_id, level_number)
    );
";

// ============================================================
// STORE RECORDS
// ============================================================

/// Result of submitting a level completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionOutcome {
    pub level_number: u32,
    pub xp_earned: u32,
    /// False when the level had already been completed
    pub newly_completed: bool,
}

/// Listing entry for a stored roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub id: String,
    pub career_goal: String,
    pub learning_level: String,
    /// Skills the learner reported already knowing
    pub existing_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub level_based: bool,
    pub total_levels: u32,
    pub levels_completed: u32,
    pub progress_percentage: f64,
}

/// Progress across all roadmaps of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub roadmaps: Vec<RoadmapSummary>,
    pub total_levels: u32,
    pub completed_levels: u32,
    pub overall_progress: f64,
}

struct StoredRoadmap {
    user_id: String,
    document: Option<String>,
}

struct SummaryRow {
    id: String,
    career_goal: String,
    learning_level: String,
    existing_skills: String,
    created_at: String,
    document: Option<String>,
    levels_completed: u32,
}

impl SummaryRow {
    fn into_summary(self) -> Result<RoadmapSummary> {
        let total_levels = match &self.document {
            Some(payload) => serde_json::from_str::<RoadmapDocument>(payload)?.meta.total_levels,
            None => 0,
        };

        Ok(RoadmapSummary {
            existing_skills: serde_json::from_str(&self.existing_skills)?,
            created_at: parse_timestamp(&self.created_at),
            level_based: self.document.is_some(),
            total_levels,
            levels_completed: self.levels_completed,
            progress_percentage: progress::progress_percentage(self.levels_completed, total_levels),
            id: self.id,
            career_goal: self.career_goal,
            learning_level: self.learning_level,
        })
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

// ============================================================
// PROGRESS STORE
// ============================================================

/// SQLite-backed roadmap and progress store
#[derive(Clone)]
pub struct ProgressStore {
    conn: Arc<Mutex<Connection>>,
}

impl ProgressStore {
    /// Open (or create) a store at `db_path`
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = db_path.unwrap_or_else(|| PathBuf::from("level_roadmap.db"));
        log::info!("[STORE] Opening progress store at {}", path.display());
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Create an in-memory store for testing
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // writes are single statements or transactions
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Persist a generated document; returns the new roadmap id
    pub fn save_roadmap(&self, user_id: &str, document: &RoadmapDocument) -> Result<String> {
        self.save_roadmap_with_existing_skills(user_id, document, &[])
    }

    /// Persist a generated document along with the skills the learner
    /// already has
    pub fn save_roadmap_with_existing_skills(
        &self,
        user_id: &str,
        document: &RoadmapDocument,
        existing_skills: &[String],
    ) -> Result<String> {
        let payload = serde_json::to_string(document)?;
        let id = self.insert_roadmap(
            user_id,
            &document.meta.career_goal,
            &document.meta.learning_level,
            existing_skills,
            Some(payload),
        )?;
        log::info!(
            "[STORE] Saved roadmap {} for user {} ({} levels)",
            id,
            user_id,
            document.meta.total_levels
        );
        Ok(id)
    }

    /// Persist a roadmap row without level data (skill-list roadmaps)
    pub fn save_legacy_roadmap(
        &self,
        user_id: &str,
        career_goal: &str,
        learning_level: &str,
    ) -> Result<String> {
        self.insert_roadmap(user_id, career_goal, learning_level, &[], None)
    }

    fn insert_roadmap(
        &self,
        user_id: &str,
        career_goal: &str,
        learning_level: &str,
        existing_skills: &[String],
        document: Option<String>,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let existing = serde_json::to_string(existing_skills)?;
        let conn = self.lock();
        conn.execute(
            "INSERT INTO roadmaps
                (id, user_id, career_goal, learning_level, existing_skills,
                 document, created_at, last_activity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![id, user_id, career_goal, learning_level, existing, document, now],
        )?;
        Ok(id)
    }

    fn load(conn: &Connection, roadmap_id: &str, user_id: &str) -> Result<RoadmapDocument> {
        let stored = conn
            .query_row(
                "SELECT user_id, document FROM roadmaps WHERE id = ?1",
                [roadmap_id],
                |row| {
                    Ok(StoredRoadmap {
                        user_id: row.get(0)?,
                        document: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| RoadmapError::RoadmapNotFound(roadmap_id.to_string()))?;

        if stored.user_id != user_id {
            log::warn!("[STORE] User {} denied access to roadmap {}", user_id, roadmap_id);
            return Err(RoadmapError::Unauthorized);
        }

        let payload = stored
            .document
            .ok_or_else(|| RoadmapError::NotLevelBasedRoadmap(roadmap_id.to_string()))?;
        Ok(serde_json::from_str(&payload)?)
    }

    fn load_completions(conn: &Connection, roadmap_id: &str) -> Result<Vec<CompletionRecord>> {
        let mut stmt = conn.prepare(
            "SELECT level_number, completed_at, xp_earned, time_spent_minutes
             FROM level_progress
             WHERE roadmap_id = ?1
             ORDER BY level_number ASC",
        )?;

        let rows = stmt.query_map([roadmap_id], |row| {
            let completed_at: String = row.get(1)?;
            Ok(CompletionRecord {
                level_number: row.get(0)?,
                completed_at: parse_timestamp(&completed_at),
                xp_earned: row.get(2)?,
                time_spent_minutes: row.get(3)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Record that `user_id` completed `level_number`.
    ///
    /// Submitting an already completed level succeeds with zero XP and writes
    /// nothing. Levels must be completed in order.
    pub fn record_completion(
        &self,
        roadmap_id: &str,
        user_id: &str,
        level_number: u32,
        task_answer: Option<&str>,
    ) -> Result<CompletionOutcome> {
        let mut conn = self.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let document = Self::load(&tx, roadmap_id, user_id)?;
        let level = document.level(level_number).ok_or_else(|| RoadmapError::LevelNotFound {
            roadmap_id: roadmap_id.to_string(),
            level: level_number,
        })?;

        let completions = Self::load_completions(&tx, roadmap_id)?;
        let completed = CompletionSet::from_records(&completions);

        match progress::status_for(level_number, &completed) {
            LevelStatus::Completed => {
                log::debug!(
                    "[STORE] Level {} of roadmap {} already completed",
                    level_number,
                    roadmap_id
                );
                return Ok(CompletionOutcome {
                    level_number,
                    xp_earned: 0,
                    newly_completed: false,
                });
            }
            LevelStatus::Locked => {
                return Err(RoadmapError::LevelLocked { level: level_number });
            }
            LevelStatus::Unlocked => {}
        }

        let now = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT INTO level_progress
                (roadmap_id, level_number, completed_at, xp_earned, time_spent_minutes, task_answer)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                roadmap_id,
                level_number,
                now,
                level.xp_reward,
                level.estimated_minutes,
                task_answer,
            ],
        )?;
        tx.execute(
            "UPDATE roadmaps SET last_activity = ?1 WHERE id = ?2",
            params![now, roadmap_id],
        )?;
        tx.commit()?;

        log::info!(
            "[STORE] Level {} of roadmap {} completed (+{} XP)",
            level_number,
            roadmap_id,
            level.xp_reward
        );

        Ok(CompletionOutcome {
            level_number,
            xp_earned: level.xp_reward,
            newly_completed: true,
        })
    }

    /// Completion entries of a roadmap, by level number
    pub fn completions(&self, roadmap_id: &str) -> Result<Vec<CompletionRecord>> {
        let conn = self.lock();
        Self::load_completions(&conn, roadmap_id)
    }

    /// The stored document with progress merged in
    pub fn read_with_progress(&self, roadmap_id: &str, user_id: &str) -> Result<RoadmapDocument> {
        let conn = self.lock();
        let document = Self::load(&conn, roadmap_id, user_id)?;
        let completions = Self::load_completions(&conn, roadmap_id)?;
        Ok(progress::apply_progress(
            &document,
            &completions,
            Utc::now().date_naive(),
        ))
    }

    /// All roadmaps of a user with their progress, newest first
    pub fn list_roadmaps(&self, user_id: &str) -> Result<Vec<RoadmapSummary>> {
        let rows = {
            let conn = self.lock();
            let mut stmt = conn.prepare(
                "SELECT r.id, r.career_goal, r.learning_level, r.existing_skills,
                        r.created_at, r.document,
                        (SELECT COUNT(*) FROM level_progress p WHERE p.roadmap_id = r.id)
                 FROM roadmaps r
                 WHERE r.user_id = ?1
                 ORDER BY r.created_at DESC",
            )?;

            let rows = stmt.query_map([user_id], |row| {
                Ok(SummaryRow {
                    id: row.get(0)?,
                    career_goal: row.get(1)?,
                    learning_level: row.get(2)?,
                    existing_skills: row.get(3)?,
                    created_at: row.get(4)?,
                    document: row.get(5)?,
                    levels_completed: row.get(6)?,
                })
            })?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        rows.into_iter().map(SummaryRow::into_summary).collect()
    }

    /// Totals across every roadmap of a user
    pub fn dashboard(&self, user_id: &str) -> Result<DashboardSummary> {
        let roadmaps = self.list_roadmaps(user_id)?;
        let total_levels = roadmaps.iter().map(|r| r.total_levels).sum();
        let completed_levels = roadmaps.iter().map(|r| r.levels_completed).sum();

        Ok(DashboardSummary {
            overall_progress: progress::progress_percentage(completed_levels, total_levels),
            total_levels,
            completed_levels,
            roadmaps,
        })
    }
}
