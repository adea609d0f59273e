use contracts::enums::{classify_status, status_label};
use leptos::prelude::*;

/// Бейдж с вариантом оформления
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", иначе "neutral"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса бронирования; неизвестный статус оформляется как "pending"
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let style = move || classify_status(&status.get());

    view! {
        <span class=move || style().css_class()>
            {move || status_label(&status.get())}
        </span>
    }
}
