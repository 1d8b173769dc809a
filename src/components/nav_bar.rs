use leptos::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#services", "Services"),
    ("#project_list", "Projects"),
    ("#contact", "Get In Touch"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="container nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    <img src="/images/teddverse-logo.png" alt="Teddverse Technologies" />
                    <span class="nav-bar__name">
                        "Teddverse" <span class="nav-bar__suffix">"Technologies"</span>
                    </span>
                </a>
                <ul class="nav-bar__links">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            let class = if href == "#contact" { "nav-bar__cta" } else { "nav-bar__link" };
                            view! {
                                <li>
                                    <a href=href class=class>{label}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
