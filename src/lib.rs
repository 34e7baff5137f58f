//! TTMS Timetable Management System
//!
//! A Rust REST JSON API over university timetable data, built around a
//! clash detection and analytics engine for academic sessions and semesters.

use std::sync::Arc;

pub mod api;
pub mod clash;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
