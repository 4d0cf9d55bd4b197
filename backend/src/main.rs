//! Level Roadmap Backend - Main Entry Point
//!
//! Starts the web API server for level roadmaps.

use level_roadmap::{api::run_server, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Level Roadmap - Learn one level at a time    ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env();
    log::info!("[CONFIG] Using database at {}", config.db_path.display());

    run_server(&config).await
}
