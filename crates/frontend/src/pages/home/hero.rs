use leptos::prelude::*;

use crate::shared::components::ui::CustomButton;

const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?ixlib=rb-4.0.3&auto=format&fit=crop&w=2073&q=80";

#[component]
pub fn Hero() -> impl IntoView {
    let style = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.7)), url('{}');",
        HERO_BACKGROUND
    );

    view! {
        <section id="home" class="hero" style=style>
            <div class="hero__inner fade-in-up">
                <h1 class="hero__title">"Welcome to Sahan Tourism"</h1>
                <p class="hero__lead">
                    "At Sahan Tourism, we embody the spirit of Sahan, the Somali term for nomadic scouts or pathfinders who navigate the safest and most resourceful routes for their communities."
                </p>
                <div class="hero__actions">
                    <CustomButton size="lg" href="#about">"Learn more"</CustomButton>
                    <CustomButton variant="outline" size="lg" href="#packages">
                        "Book now"
                    </CustomButton>
                </div>
            </div>
        </section>
    }
}
