use contracts::shared::scroll::ScrollState;
use contracts::shared::site_config::site_config;
use leptos::prelude::*;
use web_sys::window;

/// Состояние оболочки сайта, общее для навбаров и админки.
///
/// Флаг "прокручено" не хранится: он выводится из смещения прокрутки окна.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Текущее смещение прокрутки окна, px
    pub scroll_offset: RwSignal<f64>,
    pub scroll_state: ScrollState,
    pub mobile_menu_open: RwSignal<bool>,
    pub mobile_search_open: RwSignal<bool>,
    /// Свёрнутая боковая панель админки (80px вместо 280px)
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            scroll_offset: RwSignal::new(current_scroll_offset()),
            scroll_state: site_config().scroll_state(),
            mobile_menu_open: RwSignal::new(false),
            mobile_search_open: RwSignal::new(false),
            sidebar_collapsed: RwSignal::new(false),
        }
    }

    /// Подписка на прокрутку окна. Вызывается один раз при старте приложения.
    pub fn init_scroll_tracking(&self) {
        let offset = self.scroll_offset;
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            offset.set(current_scroll_offset());
        });
    }

    pub fn is_scrolled(&self) -> Signal<bool> {
        let offset = self.scroll_offset;
        let scroll_state = self.scroll_state;
        Signal::derive(move || scroll_state.is_scrolled(offset.get()))
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
        log::debug!("mobile menu open: {}", self.mobile_menu_open.get_untracked());
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }

    pub fn toggle_mobile_search(&self) {
        self.mobile_search_open.update(|open| *open = !*open);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
        log::debug!(
            "admin sidebar collapsed: {}",
            self.sidebar_collapsed.get_untracked()
        );
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
