use leptos::prelude::*;

use crate::shared::icons::icon_sized;

const CREATE_ITEMS: &[(&str, &str)] = &[
    ("New Booking", "calendar"),
    ("Add Package", "globe"),
    ("Add Customer", "user"),
    ("Add Destination", "globe"),
];

/// Кнопка "Quick Add" со списком создаваемых сущностей
#[component]
pub fn QuickAddDropdown() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="header-dropdown">
            <button
                class="top-header__primary-btn"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon_sized("plus", 16)}
                <span class="desktop-only">"Quick Add"</span>
                {icon_sized("chevron-down", 16)}
            </button>

            <Show when=move || open.get()>
                <div class="header-dropdown__backdrop" on:click=move |_| open.set(false)></div>
                <div class="header-dropdown__panel">
                    <div class="header-dropdown__label">"Create New"</div>
                    <div class="header-dropdown__separator"></div>
                    {CREATE_ITEMS.iter().map(|(label, icon_name)| view! {
                        <button
                            class="header-dropdown__item"
                            on:click=move |_| {
                                log::info!("quick add: {}", label);
                                open.set(false);
                            }
                        >
                            {icon_sized(icon_name, 16)}
                            {*label}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
