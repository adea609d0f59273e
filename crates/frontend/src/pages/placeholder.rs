use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::domain::a003_booking::ui::list::BookingList;
use crate::layout::left::section_title;
use crate::shared::components::PageHeader;
use crate::shared::components::ui::CustomButton;

/// Публичная страница без наполнения
#[component]
pub fn PlaceholderPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="placeholder-page">
            <div class="container">
                <h1 class="placeholder-page__title">{title}</h1>
                <p class="placeholder-page__text">"This page is coming soon."</p>
                <CustomButton variant="outline" href="/">"Back to home"</CustomButton>
            </div>
        </section>
    }
}

/// Раздел админки `/admin/:section`; "bookings" показывает полный список,
/// остальные разделы пока пустые
#[component]
pub fn AdminSectionPage() -> impl IntoView {
    let params = use_params_map();
    let pathname = use_location().pathname;
    let section = move || params.with(|p| p.get("section").unwrap_or_default());
    let title = move || section_title(&pathname.get());

    view! {
        {move || {
            if section() == "bookings" {
                view! { <BookingList title="All Bookings" /> }.into_any()
            } else {
                view! {
                    <div class="admin-section">
                        <PageHeader title=title()>
                            {()}
                        </PageHeader>
                        <div class="admin-section__empty">"This section is under development."</div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
