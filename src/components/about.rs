use leptos::prelude::*;

const PILLARS: [(&str, &str); 3] = [
    ("Our Mission", "Empowering businesses through innovative technology solutions"),
    ("Our Expertise", "Flutter, React, Node.js, Firebase, AWS, and modern tech stack"),
    ("Our Promise", "Quality delivery, transparent communication, and ongoing support"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <div class="about__inner">
                <div class="about__copy">
                    <h1 class="about__headline">
                        "Why Choose " <span class="gradient-text">"Teddverse?"</span>
                    </h1>
                    <p class="about__lead">"Your trusted partner in digital transformation"</p>
                    <div class="about__pillars">
                        {PILLARS
                            .into_iter()
                            .map(|(title, body)| view! {
                                <div class="about__pillar">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <a href="#contact" class="btn btn--primary">"Get In Touch →"</a>
                </div>
                <div class="about__logo">
                    <img src="/images/teddverse-logo.png" alt="Teddverse Technologies" />
                </div>
            </div>
        </section>
    }
}
