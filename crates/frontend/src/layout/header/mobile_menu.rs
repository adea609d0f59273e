use contracts::shared::navigation::{is_nav_active, NavLink};
use contracts::shared::site_config::site_config;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::nav_search::MobileNavSearch;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::{icon, icon_sized};

/// Выезжающее меню для мобильных экранов
#[component]
pub fn MobileMenu(links: Vec<NavLink>) -> impl IntoView {
    let ctx = use_app_context();
    let pathname = use_location().pathname;
    let close = Callback::new(move |_: ()| ctx.close_mobile_menu());
    let brand = site_config().brand_name.clone();

    view! {
        <Show when=move || ctx.mobile_menu_open.get()>
            <div class="mobile-menu__overlay" on:click=move |_| ctx.close_mobile_menu()></div>
            <div class="mobile-menu">
                <div class="mobile-menu__header">
                    <span class="mobile-menu__brand">{brand.clone()}</span>
                    <button
                        class="mobile-menu__close"
                        aria-label="Close Menu"
                        on:click=move |_| ctx.close_mobile_menu()
                    >
                        {icon("x")}
                    </button>
                </div>

                <MobileNavSearch on_select=close />

                <nav class="mobile-menu__nav">
                    <ul>
                        {links.clone().into_iter().enumerate().map(|(index, link)| {
                            let href = link.href.clone();
                            let style = format!("animation-delay: {}ms;", index * 100);
                            view! {
                                <li class="mobile-menu__item" style=style>
                                    <a
                                        href=link.href.clone()
                                        class="mobile-menu__link"
                                        class:mobile-menu__link--active=move || is_nav_active(&pathname.get(), &href)
                                        on:click=move |_| ctx.close_mobile_menu()
                                    >
                                        <span class="mobile-menu__bullet"></span>
                                        {link.name.clone()}
                                        <span class="mobile-menu__chevron">{icon_sized("chevron-right", 16)}</span>
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </nav>
            </div>
        </Show>
    }
}
