use leptos::prelude::*;

use crate::shared::components::stagger_delay;
use crate::shared::icons::icon_sized;

/// Преимущество компании в блоке "About"
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tone: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "award",
        title: "Award winning company",
        description: "We've received Certificate of Excellence award from TripAdvisor.",
        tone: "yellow",
    },
    Feature {
        icon: "map-pin",
        title: "Local Experts",
        description: "When you book with us, you get the best price and a local expert guide.",
        tone: "green",
    },
    Feature {
        icon: "shield",
        title: "Trusted Payments",
        description: "Book via our secure payment platform. Enjoy flexible payment options.",
        tone: "blue",
    },
];

#[component]
pub fn Info() -> impl IntoView {
    view! {
        <section id="about" class="info-section">
            <div class="container">
                <p class="info-section__lead">
                    "As a dedicated tour operator, we provide customized travel experiences across Somalia and the Horn of Africa, ensuring seamless journeys. Our packages highlight top destinations, optimize routes, and offer affordable arrangements, always prioritizing reasonable pricing to make exploration accessible for all."
                </p>
                <div class="info-section__grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            let style = format!(
                                "animation-delay: {}ms;",
                                200 + stagger_delay(index)
                            );
                            view! {
                                <div class="feature fade-in-up" style=style>
                                    <div class=format!("feature__icon feature__icon--{}", feature.tone)>
                                        {icon_sized(feature.icon, 32)}
                                    </div>
                                    <h3 class="feature__title">{feature.title}</h3>
                                    <p class="feature__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
