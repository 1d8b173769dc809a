use leptos::prelude::*;

use super::ProjectCard;
use crate::projects::{list_projects, GalleryState};

pub const LOADING_TEXT: &str = "Loading projects...";
pub const EMPTY_TEXT: &str = "No projects available at the moment.";

/// The project gallery. Fetches the collection once per mount and renders
/// the loading message until it settles.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = Resource::new(|| (), |()| list_projects());

    view! {
        <Suspense fallback=|| view! { <ProjectGallery state=GalleryState::Loading /> }>
            {move || Suspend::new(async move {
                let state = GalleryState::from_fetch(projects.await);
                view! { <ProjectGallery state /> }
            })}
        </Suspense>
    }
}

#[component]
pub fn ProjectGallery(state: GalleryState) -> impl IntoView {
    match state {
        GalleryState::Loading => view! { <GalleryMessage text=LOADING_TEXT /> }.into_any(),
        GalleryState::Empty => view! { <GalleryMessage text=EMPTY_TEXT /> }.into_any(),
        GalleryState::Populated(projects) => view! {
            <div class="projects" id="project_list">
                <For
                    each=move || projects.clone()
                    key=|project| project.id.clone()
                    children=|project| view! { <ProjectCard project /> }
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn GalleryMessage(text: &'static str) -> impl IntoView {
    view! {
        <div class="gallery-message">
            <p>{text}</p>
        </div>
    }
}
