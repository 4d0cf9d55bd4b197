//! Level Roadmap Backend
//!
//! HTTP surface over `levels_core`:
//! - Roadmap generation from built-in career templates
//! - Per-user roadmap listing
//! - Level completion with progress merged on read

pub mod api;
pub mod config;

pub use api::*;
pub use config::ServerConfig;
