use leptos::prelude::*;

#[component]
pub fn ProjectsHeader() -> impl IntoView {
    view! {
        <section class="projects-header">
            <div class="section-heading section-heading--dark">
                <h2>"Our " <span class="gradient-text">"Portfolio"</span></h2>
                <p>"Explore the innovative projects we've delivered for our clients"</p>
            </div>
        </section>
    }
}
