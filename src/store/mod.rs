pub mod firestore;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{FetchFailure, StoreError};
use crate::projects::Project;

pub use firestore::FirestoreRepository;

/// Read-only source of portfolio projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    fn name(&self) -> &'static str;

    /// Every project in the collection, newest `created_at` first.
    async fn list_projects(&self) -> Result<Vec<Project>, FetchFailure>;
}

/// The repository handle placed into the Leptos context.
pub type SharedRepository = Arc<dyn ProjectRepository>;

/// Projects held in memory, returned in the same order a store query on
/// `createdAt` descending would produce.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    projects: Vec<Project>,
}

impl InMemoryRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Load a JSON array of projects.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a list of projects.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&contents)?;
        Ok(Self::new(projects))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_projects(&self) -> Result<Vec<Project>, FetchFailure> {
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }
}

/// Pick the project store described by the configuration.
///
/// Firestore wins when configured; otherwise projects come from the seed
/// file, or the gallery stays empty.
///
/// # Errors
///
/// Fails when the Firestore client cannot be built or the seed file is
/// unreadable.
pub fn from_config(config: &Config) -> Result<SharedRepository, StoreError> {
    let repository: SharedRepository = if let Some(firestore) = &config.firestore {
        Arc::new(FirestoreRepository::new(firestore)?)
    } else if let Some(path) = &config.seed_file {
        Arc::new(InMemoryRepository::from_json_file(path)?)
    } else {
        tracing::warn!("no project store configured, gallery will be empty");
        Arc::new(InMemoryRepository::default())
    };

    tracing::info!(store = repository.name(), "project store ready");
    Ok(repository)
}
