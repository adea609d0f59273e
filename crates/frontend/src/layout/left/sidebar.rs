//! Боковое меню админки: группы разделов, подсветка текущего, профиль.

use contracts::shared::navigation::is_nav_active;
use contracts::shared::site_config::site_config;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    name: &'static str,
    href: &'static str,
    icon: &'static str,
    badge: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    title: &'static str,
    items: Vec<MenuItem>,
}

const fn item(name: &'static str, href: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        name,
        href,
        icon,
        badge: None,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            title: "Overview",
            items: vec![
                item("Dashboard", "/admin", "layout-dashboard"),
                item("Analytics", "/admin/analytics", "bar-chart"),
            ],
        },
        MenuGroup {
            title: "Bookings",
            items: vec![
                MenuItem {
                    badge: Some("12"),
                    ..item("All Bookings", "/admin/bookings", "calendar")
                },
                item("Payments", "/admin/payments", "dollar-sign"),
            ],
        },
        MenuGroup {
            title: "Content",
            items: vec![
                item("Destinations", "/admin/destinations", "map-pin"),
                item("Packages", "/admin/packages", "file-text"),
                item("Gallery", "/admin/gallery", "image"),
            ],
        },
        MenuGroup {
            title: "Management",
            items: vec![
                item("Customers", "/admin/customers", "users"),
                item("Promotions", "/admin/promotions", "bell"),
                item("Settings", "/admin/settings", "settings"),
            ],
        },
    ]
}

/// Название раздела для хлебных крошек; по умолчанию "Dashboard"
pub fn section_title(pathname: &str) -> &'static str {
    get_menu_groups()
        .into_iter()
        .flat_map(|group| group.items)
        .find(|item| is_nav_active(pathname, item.href))
        .map(|item| item.name)
        .unwrap_or("Dashboard")
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let pathname = use_location().pathname;
    let collapsed = move || ctx.sidebar_collapsed.get();
    let config = site_config();

    view! {
        <div class="app-sidebar__content">
            <button
                class="app-sidebar__toggle"
                title=move || if collapsed() { "Expand sidebar" } else { "Collapse sidebar" }
                on:click=move |_| ctx.toggle_sidebar()
            >
                {move || if collapsed() { icon("chevron-right") } else { icon("chevron-left") }}
            </button>

            <nav class="app-sidebar__nav">
                {get_menu_groups().into_iter().map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <Show when=move || !collapsed()>
                                <h3 class="app-sidebar__group-title">{group.title}</h3>
                            </Show>
                            <ul class="app-sidebar__items">
                                {group.items.into_iter().map(|item| {
                                    let href = item.href;
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || is_nav_active(&pathname.get(), href)
                                                title=item.name
                                            >
                                                <span class="app-sidebar__item-icon">{icon(item.icon)}</span>
                                                <Show when=move || !collapsed()>
                                                    <span class="app-sidebar__item-label">{item.name}</span>
                                                    {item.badge.map(|b| view! {
                                                        <span class="app-sidebar__item-badge">{b}</span>
                                                    })}
                                                </Show>
                                            </a>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__profile" class:app-sidebar__profile--collapsed=collapsed>
                <div class="app-sidebar__avatar">{icon("user")}</div>
                <Show when=move || !collapsed()>
                    <div class="app-sidebar__profile-text">
                        <p class="app-sidebar__profile-name">{config.admin_name.clone()}</p>
                        <p class="app-sidebar__profile-email">{config.admin_email.clone()}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("/admin"), "Dashboard");
        assert_eq!(section_title("/admin/bookings"), "All Bookings");
        assert_eq!(section_title("/admin/destinations/1"), "Destinations");
        assert_eq!(section_title("/admin/unknown"), "Dashboard");
    }
}
