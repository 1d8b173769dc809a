use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [("50+", "Projects"), ("30+", "Clients"), ("5+", "Years")];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__shape hero__shape--ring" aria-hidden="true"></div>
            <div class="hero__shape hero__shape--block" aria-hidden="true"></div>
            <div class="hero__content">
                <h1 class="hero__headline">
                    "Building Digital" <br /> "Solutions That" <br />
                    <span class="gradient-text">"Matter"</span>
                </h1>
                <h2 class="hero__tagline">"Innovative Technology Company"</h2>
                <p class="hero__summary">
                    "We transform ideas into powerful, scalable products that drive business growth. "
                    "From mobile applications to web solutions, we deliver technology that makes an impact."
                </p>
                <div class="hero__actions">
                    <a href="#project_list" class="btn btn--primary">"View Our Work"</a>
                    <a href="#contact" class="btn btn--outline">"Get Started"</a>
                </div>
                <div class="hero__stats">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="hero__stat">
                                <div class="hero__stat-value gradient-text">{value}</div>
                                <div class="hero__stat-label">{label}</div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
