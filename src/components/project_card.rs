use leptos::prelude::*;

use crate::projects::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let image_style = project.image_style();
    let live_link = project.live_link().map(str::to_owned);
    let source_link = project.source_link().map(str::to_owned);

    // No container at all when there is nothing to badge.
    let badges = (!project.tags.is_empty()).then(|| {
        view! {
            <div class="badges">
                {project
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="badge">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <div class="project-card">
            <div class="project-image" style=image_style></div>
            <div class="project-content">
                <h2 class="project-title">{project.title}</h2>
                <p class="project-about">{project.about}</p>
                {badges}
                <div class="buttons">
                    {live_link.map(|href| view! {
                        <a href=href class="btn live-demo" target="_blank" rel="noreferrer">
                            "Live Project ↗"
                        </a>
                    })}
                    {source_link.map(|href| view! {
                        <a href=href class="btn view-source" target="_blank" rel="noreferrer">
                            <i class="fab fa-github"></i>
                            " View Source"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
