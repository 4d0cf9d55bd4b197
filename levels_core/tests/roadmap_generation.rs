// Integration tests for level generation across tiers and curriculum sizes
use levels_core::*;

fn skills(n: usize) -> Vec<Skill> {
    (1..=n).map(|i| Skill::new(&format!("Skill {}", i), "Beginner", 10)).collect()
}

#[test]
fn test_level_count_per_tier() {
    for n in [0usize, 1, 3, 7, 13] {
        let input = skills(n);
        assert_eq!(generate_roadmap(&input, "Goal", "Beginner").meta.total_levels as usize, 2 * n);
        assert_eq!(generate_roadmap(&input, "Goal", "Intermediate").meta.total_levels as usize, n);
        assert_eq!(generate_roadmap(&input, "Goal", "Advanced").meta.total_levels as usize, n);
        assert_eq!(generate_roadmap(&input, "Goal", "Guru").meta.total_levels as usize, n);
    }
}

#[test]
fn test_numbers_types_and_initial_status() {
    let doc = generate_roadmap(&skills(9), "Web Developer", "Beginner");

    for (i, level) in doc.levels.iter().enumerate() {
        assert_eq!(level.number as usize, i + 1);
        assert_eq!(level.level_type, LevelType::CYCLE[i % 5]);
        assert!(level.resources.len() <= 2);
        assert!(level.completed_at.is_none());
        assert_eq!(level.boss.is_some(), level.level_type == LevelType::Boss);

        let expected = if i == 0 { LevelStatus::Unlocked } else { LevelStatus::Locked };
        assert_eq!(level.status, expected);
    }
}

#[test]
fn test_milestones_and_days() {
    let doc = generate_roadmap(&skills(15), "Web Developer", "Beginner");
    assert_eq!(doc.meta.total_levels, 30);
    assert_eq!(doc.milestones.len(), 5);
    assert_eq!(doc.milestones.last().map(|m| m.level), Some(25));
    assert_eq!(doc.milestones[2].title, "Web Developer Practitioner");

    // 24 regular levels at 30 min, 6 boss levels at 60 min
    let minutes: u32 = doc.levels.iter().map(|l| l.estimated_minutes).sum();
    assert_eq!(minutes, 24 * 30 + 6 * 60);
    assert_eq!(doc.meta.estimated_days, minutes / 60 + 1);

    let short = generate_roadmap(&skills(7), "Data Analyst", "Intermediate");
    assert_eq!(short.milestones.len(), 1);
    assert_eq!(short.milestones[0].level, 5);
}

#[test]
fn test_positions_repeat_past_twenty() {
    let doc = generate_roadmap(&skills(30), "Goal", "Intermediate");
    let last = doc.levels[19].position;
    assert!(doc.levels[20..].iter().all(|l| l.position == last));
    assert_eq!(doc.levels[0].position, Position { x: 50, y: 10 });
}

#[test]
fn test_generation_is_deterministic() {
    let templates = BuiltinTemplates::new();
    let input = templates.skills_for("App Developer", "Beginner").unwrap();
    let first = generate_roadmap(&input, "App Developer", "Beginner");
    let second = generate_roadmap(&input, "App Developer", "Beginner");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_document_wire_format() {
    let skill: Skill = serde_json::from_str(r#"{"name": "HTML Basics"}"#).unwrap();
    let doc = generate_roadmap(&[skill], "Web Developer", "Beginner");
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["roadmap"]["career_goal"], "Web Developer");
    assert_eq!(json["roadmap"]["total_levels"], 2);
    assert_eq!(json["roadmap"]["estimated_days"], 2);
    assert_eq!(json["roadmap"]["current_level"], 1);
    assert_eq!(json["milestones"], serde_json::json!([]));
    assert_eq!(json["stats"]["badges_earned"], serde_json::json!([]));

    let level = &json["levels"][0];
    assert_eq!(level["level_number"], 1);
    assert_eq!(level["level_type"], "basics");
    assert_eq!(level["title"], "Intro to HTML Basics");
    assert_eq!(level["status"], "unlocked");
    assert_eq!(level["xp_reward"], 100);
    assert_eq!(level["estimated_minutes"], 30);
    assert_eq!(level["task"]["type"], "mcq");
    assert_eq!(level["resources"][0]["type"], "video");
    assert!(level["completed_at"].is_null());
    assert!(level.get("badge_earned").is_none());

    let second = &json["levels"][1];
    assert_eq!(second["level_type"], "concept");
    assert_eq!(second["status"], "locked");
    assert_eq!(second["xp_reward"], 150);
}

#[test]
fn test_boss_level_wire_format_round_trips() {
    let doc = generate_roadmap(&skills(5), "Goal", "Intermediate");
    let json = serde_json::to_value(&doc).unwrap();
    let boss = &json["levels"][4];
    assert_eq!(boss["title"], "BOSS: Skill 5 Challenge");
    assert_eq!(boss["badge_earned"], "Skill 5 Master");
    assert_eq!(boss["description"], "Your major project milestone!");
    assert_eq!(boss["task"]["type"], "boss_project");
    assert_eq!(boss["estimated_minutes"], 90);

    let parsed: RoadmapDocument = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, doc);
}
