use leptos::prelude::*;

const EMAIL: &str = "bolu@teddverse.pro";
const PHONE: &str = "+2348020560976";
const PHONE_DISPLAY: &str = "+234 802 056 0976";
const LOCATION: &str = "Akure, Nigeria";

#[component]
pub fn Contact() -> impl IntoView {
    let details = [("Email", EMAIL), ("Phone", PHONE_DISPLAY), ("Location", LOCATION)];

    view! {
        <section class="contact" id="contact">
            <h2 class="contact__headline">
                "Let's Build Something " <span class="gradient-text">"Great"</span>
            </h2>
            <p class="contact__lead">
                "Ready to transform your ideas into reality? Get in touch with us today and let's start building your next digital success story."
            </p>
            <div class="contact__actions">
                <a href=format!("mailto:{EMAIL}") class="btn btn--primary">"📧 Email Us"</a>
                <a href=format!("tel:{PHONE}") class="btn btn--outline">"📞 Call Us"</a>
            </div>
            <div class="contact__details">
                {details
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="contact__detail">
                            <div class="contact__detail-label">{label}</div>
                            <div class="contact__detail-value">{value}</div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
