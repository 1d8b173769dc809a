use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "uil uil-mobile-android",
        title: "Mobile App Development",
        summary: "Native and cross-platform mobile solutions",
    },
    Service {
        icon: "uil uil-globe",
        title: "Web Development",
        summary: "Responsive and scalable web applications",
    },
    Service {
        icon: "uil uil-palette",
        title: "UI/UX Design",
        summary: "User-centered design that converts",
    },
    Service {
        icon: "uil uil-cloud",
        title: "Cloud Solutions",
        summary: "Scalable backend and infrastructure",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services" id="services">
            <div class="section-heading">
                <h2>"Our Core Services"</h2>
                <p>"Comprehensive technology solutions tailored to your business needs"</p>
            </div>
            <div class="services__grid">
                {SERVICES
                    .into_iter()
                    .map(|service| view! {
                        <div class="service-tile">
                            <div class="service-tile__icon">
                                <i class=service.icon></i>
                            </div>
                            <h3 class="service-tile__title">{service.title}</h3>
                            <p class="service-tile__summary">{service.summary}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
