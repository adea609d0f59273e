//! Навбар главной: прозрачный поверх hero, меняет вид после прокрутки.

use contracts::shared::navigation::NavLink;
use contracts::shared::site_config::site_config;
use leptos::prelude::*;

use super::mobile_menu::MobileMenu;
use super::nav_search::NavSearch;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::CustomButton;
use crate::shared::icons::{icon, icon_sized};

/// Якорные ссылки на разделы главной
fn home_links() -> Vec<NavLink> {
    vec![
        NavLink::new("home", "#home"),
        NavLink::new("about us", "#about"),
        NavLink::new("destination", "#destination"),
        NavLink::new("packages", "#packages"),
        NavLink::new("gallery", "#gallery"),
        NavLink::new("blogs", "#blogs"),
        NavLink::new("contact us", "#contact"),
    ]
}

const SOCIAL_LINKS: &[(&str, &str)] = &[("facebook", "#"), ("twitter", "#"), ("youtube", "#")];

#[component]
pub fn HomeNavbar() -> impl IntoView {
    let ctx = use_app_context();
    let is_scrolled = ctx.is_scrolled();
    let config = site_config();
    let links = home_links();

    view! {
        <header class="home-navbar" class:home-navbar--scrolled=move || is_scrolled.get()>
            // Верхняя полоса: на десктопе скрывается после прокрутки
            <div class="home-navbar__top">
                <div class="container home-navbar__top-grid">
                    <a href=config.helpline_href.clone() class="home-navbar__helpline">
                        <span class="home-navbar__helpline-icon">{icon_sized("phone", 16)}</span>
                        <span class="home-navbar__helpline-text">
                            <span class="home-navbar__helpline-label">"Need Help?"</span>
                            <span class="home-navbar__helpline-number">{config.helpline_label.clone()}</span>
                        </span>
                    </a>

                    <a href="/" class="home-navbar__logo">
                        <img src="/logo.png" alt="Logo" width="48" height="48" />
                        <span class="home-navbar__brand">
                            <span class="home-navbar__brand-name">{config.brand_name.clone()}</span>
                            <span class="home-navbar__brand-tagline">{config.brand_tagline.clone()}</span>
                        </span>
                    </a>

                    <div class="home-navbar__actions">
                        <div class="desktop-only">
                            <NavSearch is_scrolled=is_scrolled />
                        </div>
                        <button
                            class="home-navbar__menu-btn mobile-only"
                            aria-label="Open Menu"
                            on:click=move |_| ctx.toggle_mobile_menu()
                        >
                            {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                        </button>
                    </div>
                </div>
            </div>

            // Нижняя полоса: прилипает к верху после прокрутки
            <div class="home-navbar__bottom">
                <div class="container home-navbar__bottom-row">
                    <div class="home-navbar__social desktop-only">
                        {SOCIAL_LINKS.iter().map(|(name, href)| view! {
                            <a href=*href class="home-navbar__social-link" aria-label=*name>
                                {icon_sized(name, 12)}
                            </a>
                        }).collect_view()}
                    </div>

                    <nav class="desktop-only">
                        <ul class="home-navbar__links">
                            {links.iter().map(|link| view! {
                                <li>
                                    <a href=link.href.clone() class="home-navbar__link">
                                        {link.name.clone()}
                                        <span class="home-navbar__link-underline"></span>
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </nav>

                    <CustomButton href="#packages">"Book Now"</CustomButton>

                    <Show when=move || !is_scrolled.get()>
                        <div class="home-navbar__social mobile-only">
                            {SOCIAL_LINKS.iter().take(2).map(|(name, href)| view! {
                                <a href=*href class="home-navbar__social-link" aria-label=*name>
                                    {icon_sized(name, 16)}
                                </a>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </header>

        <MobileMenu links=links />
    }
}
