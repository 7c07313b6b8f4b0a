//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle for health checks; `None` when the service runs
    /// over a store that is not backed by PostgreSQL.
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the PostgreSQL-backed user store into the service.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(repo, config.hash_cost));

        Self {
            user_service,
            database: Some(database),
        }
    }

    /// Create state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            database: None,
        }
    }
}
