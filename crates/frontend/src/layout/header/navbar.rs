//! Навбар внутренних страниц: белый, липкий, с подсветкой текущего раздела.

use contracts::shared::navigation::{is_nav_active, NavLink};
use contracts::shared::site_config::site_config;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::mobile_menu::MobileMenu;
use super::nav_search::NavSearch;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::CustomButton;
use crate::shared::icons::{icon, icon_sized};

pub fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new("home", "/"),
        NavLink::new("about us", "/about"),
        NavLink::new("destination", "/destinations"),
        NavLink::new("packages", "/packages"),
        NavLink::new("gallery", "/gallery"),
        NavLink::new("blogs", "/blogs"),
        NavLink::new("contact us", "/contact"),
    ]
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let pathname = use_location().pathname;
    let config = site_config();
    let links = site_links();

    view! {
        <header class="site-navbar">
            <div class="container site-navbar__row">
                <a href=config.helpline_href.clone() class="site-navbar__helpline desktop-only">
                    <span class="site-navbar__helpline-icon">{icon_sized("phone", 16)}</span>
                    <span class="site-navbar__helpline-number">{config.helpline_label.clone()}</span>
                </a>

                <a href="/" class="site-navbar__logo">
                    <img src="/logo.png" alt="Logo" width="40" height="40" />
                    <span class="site-navbar__brand-name">{config.brand_name.clone()}</span>
                </a>

                <nav class="desktop-only">
                    <ul class="site-navbar__links">
                        {links.iter().map(|link| {
                            let href = link.href.clone();
                            view! {
                                <li>
                                    <a
                                        href=link.href.clone()
                                        class="site-navbar__link"
                                        class:site-navbar__link--active=move || is_nav_active(&pathname.get(), &href)
                                    >
                                        {link.name.clone()}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </nav>

                <div class="site-navbar__actions">
                    <div class="desktop-only">
                        <NavSearch is_scrolled=Signal::derive(|| true) />
                    </div>
                    <CustomButton href="/packages" class="desktop-only">"Book Now"</CustomButton>
                    <button
                        class="site-navbar__menu-btn mobile-only"
                        aria-label="Open Menu"
                        on:click=move |_| ctx.toggle_mobile_menu()
                    >
                        {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>
        </header>

        <MobileMenu links=links />
    }
}
