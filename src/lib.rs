//! Library bookkeeping server
//!
//! An in-memory REST JSON API over books, members, authors and categories,
//! with borrow/return and reservation lifecycles and live availability.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{Repository, Store};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build a fresh store and the services over it
    pub fn new(config: AppConfig) -> Self {
        let store = if config.library.seed {
            Store::seeded(services::today())
        } else {
            Store::default()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(Repository::new(store))),
        }
    }
}
