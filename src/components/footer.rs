use leptos::prelude::*;

const SITE_URL: &str = "https://www.teddverse.pro";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copyright">"© 2025 Teddverse Technologies. All rights reserved."</p>
            <p class="footer__site">
                <a href=SITE_URL target="_blank" rel="noreferrer">"www.teddverse.pro"</a>
            </p>
        </footer>
    }
}
