//! Шапка админки: хлебные крошки, быстрый поиск, "Quick Add",
//! уведомления и настройки.

pub mod admin_search;
pub mod notifications_dropdown;
pub mod quick_add_dropdown;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::left::section_title;
use crate::shared::icons::icon_sized;
use admin_search::AdminSearch;
use notifications_dropdown::NotificationsDropdown;
use quick_add_dropdown::QuickAddDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let pathname = use_location().pathname;
    let current_section = move || section_title(&pathname.get());

    view! {
        <div class="top-header">
            <nav class="top-header__breadcrumb" aria-label="Breadcrumb">
                <ol>
                    <li><a href="/admin">"Admin"</a></li>
                    <li class="top-header__breadcrumb-current">
                        {icon_sized("chevron-right", 12)}
                        <span>{current_section}</span>
                    </li>
                </ol>
            </nav>

            <div class="top-header__actions">
                <AdminSearch />
                <QuickAddDropdown />
                <NotificationsDropdown />
                <button
                    class="top-header__icon-btn"
                    title="Settings"
                    on:click=|_| log::debug!("settings clicked")
                >
                    {icon_sized("settings", 16)}
                </button>
            </div>
        </div>
    }
}
