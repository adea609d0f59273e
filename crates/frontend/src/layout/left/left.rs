use leptos::prelude::*;

use crate::layout::global_context::use_app_context;

/// Боковая колонка админки: 280px, в свёрнутом виде 80px
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=is_collapsed
        >
            {children()}
        </aside>
    }
}
