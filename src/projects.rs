//! Portfolio project records and the gallery's render state.
//!
//! [`Project`] is shared between the server (where it is read from the
//! document store) and the hydrated client (where it arrives through the
//! [`list_projects`] server function).

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Path prefix that project image names are resolved against.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// A single portfolio entry as stored in the `projects` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned identifier, only used as the list key.
    pub id: String,
    pub title: String,
    pub about: String,
    pub image_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
    /// Ordering key, never displayed.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// The live demo URL, if one is set and non-empty.
    #[must_use]
    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_link.as_deref())
    }

    /// The source repository URL, if one is set and non-empty.
    #[must_use]
    pub fn source_link(&self) -> Option<&str> {
        non_empty(self.source_link.as_deref())
    }

    /// Inline style for the card's background image.
    ///
    /// The name is appended to [`UPLOADS_PREFIX`] as is; only characters
    /// that would end the quoted `url('...')` are escaped.
    #[must_use]
    pub fn image_style(&self) -> String {
        format!(
            "background: url('{UPLOADS_PREFIX}{}') no-repeat center center/cover; min-height: 400px",
            escape_css_string(&self.image_name)
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn escape_css_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\a "),
            '\r' => escaped.push_str("\\d "),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// What the gallery is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    Loading,
    Empty,
    Populated(Vec<Project>),
}

impl GalleryState {
    /// Settle the gallery once the fetch has completed.
    ///
    /// A failed fetch is logged and rendered exactly like an empty
    /// collection.
    pub fn from_fetch<E: std::fmt::Display>(result: Result<Vec<Project>, E>) -> Self {
        match result {
            Ok(projects) if projects.is_empty() => Self::Empty,
            Ok(projects) => Self::Populated(projects),
            Err(e) => {
                leptos::logging::error!("error fetching projects: {e}");
                Self::Empty
            }
        }
    }
}

/// Fetch every project, newest first, from the repository provided in the
/// request context.
///
/// # Errors
///
/// Returns a [`ServerFnError`] when no repository is available or the store
/// read fails.
#[server]
pub async fn list_projects() -> Result<Vec<Project>, ServerFnError> {
    use crate::store::SharedRepository;

    let repository = use_context::<SharedRepository>()
        .ok_or_else(|| ServerFnError::new("project repository not provided"))?;

    match repository.list_projects().await {
        Ok(projects) => {
            tracing::debug!(count = projects.len(), "fetched projects");
            Ok(projects)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch projects");
            Err(ServerFnError::new(e))
        }
    }
}
