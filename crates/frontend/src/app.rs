use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::site_config::load_site_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Ошибка встроенной конфигурации не фатальна: работаем на значениях по умолчанию
    if let Err(e) = load_site_config() {
        log::error!("{:#}", e);
    }

    let ctx = AppGlobalContext::new();
    ctx.init_scroll_tracking();
    provide_context(ctx);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
