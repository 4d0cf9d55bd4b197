// Integration tests for completion tracking on a file-backed store
use levels_core::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn web_developer_roadmap() -> RoadmapDocument {
    let skills = BuiltinTemplates::new()
        .skills_for("Web Developer", "Beginner")
        .expect("template");
    generate_roadmap(&skills, "Web Developer", "Beginner")
}

#[test]
fn test_progress_survives_reopen() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("progress.db");

    let roadmap_id = {
        let store = ProgressStore::new(Some(db_path.clone())).unwrap();
        let id = store.save_roadmap("alice", &web_developer_roadmap()).unwrap();
        for level in 1..=5 {
            let outcome = store.record_completion(&id, "alice", level, None).unwrap();
            assert!(outcome.newly_completed);
        }
        id
    };

    let store = ProgressStore::new(Some(db_path)).unwrap();
    let view = store.read_with_progress(&roadmap_id, "alice").unwrap();

    assert_eq!(view.stats.levels_completed, 5);
    // basics + concept + practice + challenge + boss
    assert_eq!(view.stats.total_xp, 100 + 150 + 200 + 100 + 500);
    assert_eq!(view.stats.time_spent_minutes, 4 * 30 + 60);
    assert_eq!(view.stats.badges_earned, vec!["JavaScript Basics Master".to_string()]);
    assert_eq!(view.meta.current_level, 6);
    assert_eq!(view.meta.progress_percentage, 25.0);
    assert_eq!(view.levels[5].status, LevelStatus::Unlocked);
    assert!(view.levels[6..].iter().all(|l| l.status == LevelStatus::Locked));

    // streaks against the day of the last stored completion
    let completions = store.completions(&roadmap_id).unwrap();
    let last_day = completions
        .iter()
        .map(|c| c.completed_at.date_naive())
        .max()
        .unwrap();
    let first_day = completions
        .iter()
        .map(|c| c.completed_at.date_naive())
        .min()
        .unwrap();
    let replay = apply_progress(&view, &completions, last_day);
    assert!(replay.stats.current_streak >= 1);
    assert_eq!(replay.meta.streak_days, replay.stats.current_streak);
    assert_eq!(
        replay.stats.longest_streak as i64,
        (last_day - first_day).num_days() + 1
    );
}

#[test]
fn test_stored_document_is_not_patched() {
    let store = ProgressStore::in_memory().unwrap();
    let original = web_developer_roadmap();
    let id = store.save_roadmap("bob", &original).unwrap();

    store.record_completion(&id, "bob", 1, Some("Option A (to be filled)")).unwrap();
    let view = store.read_with_progress(&id, "bob").unwrap();
    assert_ne!(view, original);

    let completions = store.completions(&id).unwrap();
    assert_eq!(completions.len(), 1);

    // merging no completions reproduces the generated document
    let replay = apply_progress(&view, &[], chrono::Utc::now().date_naive());
    assert_eq!(replay, original);
}

#[test]
fn test_concurrent_duplicate_submissions() {
    let store = Arc::new(ProgressStore::in_memory().unwrap());
    let id = store.save_roadmap("carol", &web_developer_roadmap()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || store.record_completion(&id, "carol", 1, None).unwrap())
        })
        .collect();

    let outcomes: Vec<CompletionOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes.iter().filter(|o| o.newly_completed).count(), 1);
    assert_eq!(outcomes.iter().map(|o| o.xp_earned).sum::<u32>(), 100);
    assert_eq!(store.completions(&id).unwrap().len(), 1);
}

#[test]
fn test_empty_roadmap_progress() {
    let store = ProgressStore::in_memory().unwrap();
    let id = store
        .save_roadmap("dave", &generate_roadmap(&[], "Web Developer", "Beginner"))
        .unwrap();

    let view = store.read_with_progress(&id, "dave").unwrap();
    assert_eq!(view.meta.progress_percentage, 0.0);
    assert_eq!(view.meta.current_level, 1);
    assert_eq!(view.meta.estimated_days, 1);
    assert!(matches!(
        store.record_completion(&id, "dave", 1, None),
        Err(RoadmapError::LevelNotFound { .. })
    ));
}

#[test]
fn test_list_roadmaps_per_user() {
    let store = ProgressStore::in_memory().unwrap();
    store.save_roadmap("erin", &web_developer_roadmap()).unwrap();
    store.save_legacy_roadmap("erin", "App Developer", "Intermediate").unwrap();
    store.save_roadmap("frank", &web_developer_roadmap()).unwrap();

    let listed = store.list_roadmaps("erin").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.iter().filter(|r| r.level_based).count(), 1);
    assert!(store.list_roadmaps("nobody").unwrap().is_empty());
}

#[test]
fn test_listing_and_dashboard_track_completions() {
    let store = ProgressStore::in_memory().unwrap();
    let known = vec!["HTML Basics".to_string()];
    let id = store
        .save_roadmap_with_existing_skills("gina", &web_developer_roadmap(), &known)
        .unwrap();
    store.record_completion(&id, "gina", 1, None).unwrap();

    let listed = store.list_roadmaps("gina").unwrap();
    let json = serde_json::to_value(&listed[0]).unwrap();
    assert_eq!(json["progress_percentage"], 5.0);
    assert_eq!(json["levels_completed"], 1);
    assert_eq!(json["total_levels"], 20);
    assert_eq!(json["existing_skills"], serde_json::json!(["HTML Basics"]));

    let dashboard = store.dashboard("gina").unwrap();
    assert_eq!(dashboard.total_levels, 20);
    assert_eq!(dashboard.completed_levels, 1);
    assert_eq!(dashboard.overall_progress, 5.0);
}
