//! Web API Module
//!
//! RESTful endpoints for generating level roadmaps and tracking completions.
//! All endpoints return JSON. Ownership is checked against the caller-supplied
//! `user_id`; token issuance lives outside this service.

use crate::config::ServerConfig;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use levels_core::{
    generate_roadmap, BuiltinTemplates, ProgressStore, RoadmapError, SkillTemplateProvider,
};
use serde::{Deserialize, Serialize};

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub store: ProgressStore,
    pub templates: Box<dyn SkillTemplateProvider + Send + Sync>,
}

impl AppState {
    pub fn new(store: ProgressStore) -> Self {
        Self::with_templates(store, Box::new(BuiltinTemplates::new()))
    }

    pub fn with_templates(
        store: ProgressStore,
        templates: Box<dyn SkillTemplateProvider + Send + Sync>,
    ) -> Self {
        Self { store, templates }
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct CreateRoadmapRequest {
    pub user_id: String,
    pub career_goal: String,
    pub learning_level: String,
    #[serde(default)]
    pub existing_skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct CompleteLevelRequest {
    pub user_id: String,
    pub task_answer: Option<String>,
}

#[derive(Serialize)]
pub struct CareerGoalsResponse {
    pub career_goals: Vec<String>,
    pub learning_levels: Vec<String>,
}

#[derive(Serialize)]
pub struct CreatedRoadmap {
    pub roadmap_id: String,
    pub roadmap: levels_core::RoadmapDocument,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Map a domain error to an HTTP response
fn error_response(err: &RoadmapError) -> HttpResponse {
    let body = ApiResponse::<()>::error(&err.to_string());
    match err {
        RoadmapError::UnknownCareerGoal(_) | RoadmapError::InvalidLearningLevel(_) => {
            HttpResponse::BadRequest().json(body)
        }
        RoadmapError::RoadmapNotFound(_) | RoadmapError::LevelNotFound { .. } => {
            HttpResponse::NotFound().json(body)
        }
        RoadmapError::Unauthorized => HttpResponse::Forbidden().json(body),
        RoadmapError::NotLevelBasedRoadmap(_) | RoadmapError::LevelLocked { .. } => {
            HttpResponse::Conflict().json(body)
        }
        RoadmapError::Database(_) | RoadmapError::Serialization(_) => {
            log::error!("[API] Internal error: {}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Level Roadmap API",
        "version": levels_core::get_version()
    }))
}

/// Career goals and learning levels with a built-in curriculum
async fn get_career_goals(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(CareerGoalsResponse {
        career_goals: data.templates.career_goals(),
        learning_levels: data.templates.learning_levels(),
    }))
}

/// Generate and store a level roadmap
async fn create_roadmap(
    data: web::Data<AppState>,
    req: web::Json<CreateRoadmapRequest>,
) -> impl Responder {
    let skills = match data.templates.skills_for(&req.career_goal, &req.learning_level) {
        Ok(skills) => skills,
        Err(e) => return error_response(&e),
    };

    // canonical label, so "beginner" lands in the Beginner tier
    let learning_level = data
        .templates
        .learning_levels()
        .into_iter()
        .find(|level| level.eq_ignore_ascii_case(&req.learning_level))
        .unwrap_or_else(|| req.learning_level.clone());

    let roadmap = generate_roadmap(&skills, &req.career_goal, &learning_level);

    match data
        .store
        .save_roadmap_with_existing_skills(&req.user_id, &roadmap, &req.existing_skills)
    {
        Ok(roadmap_id) => {
            log::info!(
                "[API] Created roadmap {} for user {} ({} levels)",
                roadmap_id,
                req.user_id,
                roadmap.meta.total_levels
            );
            HttpResponse::Created().json(ApiResponse::success(CreatedRoadmap {
                roadmap_id,
                roadmap,
            }))
        }
        Err(e) => error_response(&e),
    }
}

/// List a user's roadmaps
async fn list_roadmaps(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match data.store.list_roadmaps(&user_id) {
        Ok(roadmaps) => HttpResponse::Ok().json(ApiResponse::success(roadmaps)),
        Err(e) => error_response(&e),
    }
}

/// Progress totals across a user's roadmaps
async fn get_dashboard(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match data.store.dashboard(&user_id) {
        Ok(dashboard) => HttpResponse::Ok().json(ApiResponse::success(dashboard)),
        Err(e) => error_response(&e),
    }
}

/// Get a roadmap with progress merged in
async fn get_roadmap(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    let roadmap_id = path.into_inner();

    match data.store.read_with_progress(&roadmap_id, &query.user_id) {
        Ok(roadmap) => HttpResponse::Ok().json(ApiResponse::success(roadmap)),
        Err(e) => error_response(&e),
    }
}

/// Mark a level as completed
async fn complete_level(
    data: web::Data<AppState>,
    path: web::Path<(String, u32)>,
    req: web::Json<CompleteLevelRequest>,
) -> impl Responder {
    let (roadmap_id, level_number) = path.into_inner();

    match data.store.record_completion(
        &roadmap_id,
        &req.user_id,
        level_number,
        req.task_answer.as_deref(),
    ) {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(outcome)),
        Err(e) => error_response(&e),
    }
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/career-goals", web::get().to(get_career_goals))
        .route("/api/roadmaps", web::post().to(create_roadmap))
        .route("/api/users/{user_id}/roadmaps", web::get().to(list_roadmaps))
        .route("/api/users/{user_id}/dashboard", web::get().to(get_dashboard))
        .route("/api/roadmaps/{roadmap_id}", web::get().to(get_roadmap))
        .route(
            "/api/roadmaps/{roadmap_id}/levels/{level_number}/complete",
            web::post().to(complete_level),
        );
}

/// Configure and run the API server
pub async fn run_server(config: &ServerConfig) -> std::io::Result<()> {
    let store = ProgressStore::new(Some(config.db_path.clone()))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let state = web::Data::new(AppState::new(store));

    log::info!("[API] Level Roadmap API starting at http://{}:{}", config.host, config.port);
    log::info!("[API]   GET  /api/career-goals                         - Career goals");
    log::info!("[API]   POST /api/roadmaps                             - Generate roadmap");
    log::info!("[API]   GET  /api/users/:id/roadmaps                   - List roadmaps");
    log::info!("[API]   GET  /api/users/:id/dashboard                  - Progress totals");
    log::info!("[API]   GET  /api/roadmaps/:id?user_id=                - Roadmap with progress");
    log::info!("[API]   POST /api/roadmaps/:id/levels/:level/complete  - Complete level");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
