//! Skill Templates
//!
//! Built-in curricula per career goal and learning level. This is the
//! validation layer in front of the generator: it rejects goals and levels it
//! has no curriculum for.

use crate::error::{Result, RoadmapError};
use crate::types::Skill;

/// One skill of a built-in curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTemplate {
    pub name: &'static str,
    pub stage: &'static str,
    pub hours: u32,
}

impl SkillTemplate {
    pub fn to_skill(&self) -> Skill {
        Skill::new(self.name, self.stage, self.hours)
    }
}

/// Curricula for one career goal
#[derive(Debug, Clone, Copy)]
pub struct CareerTemplate {
    pub career_goal: &'static str,
    pub beginner: &'static [SkillTemplate],
    pub intermediate: &'static [SkillTemplate],
}

/// Source of skill lists for roadmap generation
pub trait SkillTemplateProvider {
    fn career_goals(&self) -> Vec<String>;

    fn learning_levels(&self) -> Vec<String>;

    fn skills_for(&self, career_goal: &str, learning_level: &str) -> Result<Vec<Skill>>;
}

const fn skill(name: &'static str, stage: &'static str, hours: u32) -> SkillTemplate {
    SkillTemplate { name, stage, hours }
}

static WEB_DEVELOPER_BEGINNER: [SkillTemplate; 10] = [
    skill("HTML Basics", "Beginner", 10),
    skill("CSS Fundamentals", "Beginner", 15),
    skill("JavaScript Basics", "Beginner", 20),
    skill("Responsive Design", "Beginner", 12),
    skill("Git & GitHub", "Beginner", 8),
    skill("Frontend Framework (React/Vue)", "Intermediate", 30),
    skill("Backend Basics (Node.js/Python)", "Intermediate", 25),
    skill("Databases (SQL)", "Intermediate", 20),
    skill("REST APIs", "Intermediate", 15),
    skill("Deployment & Hosting", "Intermediate", 10),
];

static WEB_DEVELOPER_INTERMEDIATE: [SkillTemplate; 10] = [
    skill("Advanced JavaScript (ES6+)", "Intermediate", 20),
    skill("State Management (Redux/Vuex)", "Intermediate", 15),
    skill("Backend Framework (Express/FastAPI)", "Intermediate", 25),
    skill("Authentication & Security", "Advanced", 20),
    skill("Database Design & Optimization", "Advanced", 18),
    skill("Testing (Unit & Integration)", "Advanced", 15),
    skill("CI/CD Pipelines", "Advanced", 12),
    skill("Docker & Containers", "Advanced", 20),
    skill("Cloud Services (AWS/GCP)", "Advanced", 25),
    skill("Performance Optimization", "Advanced", 15),
];

static DATA_ANALYST_BEGINNER: [SkillTemplate; 10] = [
    skill("Excel Fundamentals", "Beginner", 15),
    skill("Statistics Basics", "Beginner", 20),
    skill("SQL for Data Analysis", "Beginner", 25),
    skill("Python Basics", "Beginner", 20),
    skill("Data Visualization Basics", "Beginner", 12),
    skill("Pandas & NumPy", "Intermediate", 25),
    skill("Data Cleaning Techniques", "Intermediate", 18),
    skill("Tableau/Power BI", "Intermediate", 20),
    skill("Statistical Analysis", "Intermediate", 22),
    skill("Business Intelligence Concepts", "Intermediate", 15),
];

static DATA_ANALYST_INTERMEDIATE: [SkillTemplate; 10] = [
    skill("Advanced SQL Queries", "Intermediate", 20),
    skill("Python Data Analysis Libraries", "Intermediate", 25),
    skill("Machine Learning Basics", "Advanced", 30),
    skill("A/B Testing & Experimentation", "Advanced", 18),
    skill("Big Data Tools (Spark)", "Advanced", 25),
    skill("Advanced Data Visualization", "Advanced", 15),
    skill("Predictive Analytics", "Advanced", 20),
    skill("Data Warehousing", "Advanced", 18),
    skill("ETL Processes", "Advanced", 15),
    skill("Dashboard Design & Strategy", "Advanced", 12),
];

static APP_DEVELOPER_BEGINNER: [SkillTemplate; 10] = [
    skill("Programming Fundamentals", "Beginner", 20),
    skill("Mobile UI/UX Basics", "Beginner", 15),
    skill("Choose Platform (iOS/Android)", "Beginner", 10),
    skill("Swift/Kotlin Basics", "Beginner", 30),
    skill("Mobile App Architecture", "Beginner", 18),
    skill("API Integration", "Intermediate", 20),
    skill("Local Data Storage", "Intermediate", 15),
    skill("Navigation Patterns", "Intermediate", 12),
    skill("Testing Mobile Apps", "Intermediate", 15),
    skill("App Store Deployment", "Intermediate", 10),
];

static APP_DEVELOPER_INTERMEDIATE: [SkillTemplate; 10] = [
    skill("Cross-Platform Development (React Native/Flutter)", "Intermediate", 35),
    skill("Advanced State Management", "Intermediate", 18),
    skill("Push Notifications", "Advanced", 12),
    skill("In-App Purchases", "Advanced", 15),
    skill("App Performance Optimization", "Advanced", 20),
    skill("Security Best Practices", "Advanced", 18),
    skill("Offline Functionality", "Advanced", 15),
    skill("App Analytics Integration", "Advanced", 10),
    skill("CI/CD for Mobile Apps", "Advanced", 15),
    skill("Advanced Animation & Gestures", "Advanced", 20),
];

pub static CAREER_TEMPLATES: [CareerTemplate; 3] = [
    CareerTemplate {
        career_goal: "Web Developer",
        beginner: &WEB_DEVELOPER_BEGINNER,
        intermediate: &WEB_DEVELOPER_INTERMEDIATE,
    },
    CareerTemplate {
        career_goal: "Data Analyst",
        beginner: &DATA_ANALYST_BEGINNER,
        intermediate: &DATA_ANALYST_INTERMEDIATE,
    },
    CareerTemplate {
        career_goal: "App Developer",
        beginner: &APP_DEVELOPER_BEGINNER,
        intermediate: &APP_DEVELOPER_INTERMEDIATE,
    },
];

/// Learning levels with a built-in curriculum
pub const SUPPORTED_LEARNING_LEVELS: [&str; 2] = ["Beginner", "Intermediate"];

/// The built-in template catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    fn find(&self, career_goal: &str) -> Option<&'static CareerTemplate> {
        CAREER_TEMPLATES.iter().find(|t| t.career_goal == career_goal)
    }
}

impl SkillTemplateProvider for BuiltinTemplates {
    fn career_goals(&self) -> Vec<String> {
        CAREER_TEMPLATES.iter().map(|t| t.career_goal.to_string()).collect()
    }

    fn learning_levels(&self) -> Vec<String> {
        SUPPORTED_LEARNING_LEVELS.iter().map(|l| l.to_string()).collect()
    }

    fn skills_for(&self, career_goal: &str, learning_level: &str) -> Result<Vec<Skill>> {
        let template = self
            .find(career_goal)
            .ok_or_else(|| RoadmapError::UnknownCareerGoal(career_goal.to_string()))?;

        let skills = match learning_level.to_lowercase().as_str() {
            "beginner" => template.beginner,
            "intermediate" => template.intermediate,
            _ => return Err(RoadmapError::InvalidLearningLevel(learning_level.to_string())),
        };

        Ok(skills.iter().map(SkillTemplate::to_skill).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_goals() {
        let goals = BuiltinTemplates::new().career_goals();
        assert_eq!(goals, vec!["Web Developer", "Data Analyst", "App Developer"]);
    }

    #[test]
    fn test_skills_for_goal() {
        let skills = BuiltinTemplates::new()
            .skills_for("Web Developer", "Beginner")
            .unwrap();
        assert_eq!(skills.len(), 10);
        assert_eq!(skills[0], Skill::new("HTML Basics", "Beginner", 10));

        let lower = BuiltinTemplates::new()
            .skills_for("Data Analyst", "intermediate")
            .unwrap();
        assert_eq!(lower[0].name, "Advanced SQL Queries");
    }

    #[test]
    fn test_rejects_unknown_goal_and_level() {
        let templates = BuiltinTemplates::new();
        assert!(matches!(
            templates.skills_for("Astronaut", "Beginner"),
            Err(RoadmapError::UnknownCareerGoal(_))
        ));
        assert!(matches!(
            templates.skills_for("App Developer", "Advanced"),
            Err(RoadmapError::InvalidLearningLevel(_))
        ));
    }
}
