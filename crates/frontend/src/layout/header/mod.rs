pub mod home_navbar;
pub mod mobile_menu;
pub mod nav_search;
pub mod navbar;

pub use home_navbar::HomeNavbar;
pub use navbar::Navbar;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Главная получает прозрачный навбар, остальные страницы обычный
#[component]
pub fn ConditionalNavbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let is_home = Memo::new(move |_| pathname.with(|p| p == "/"));

    move || {
        if is_home.get() {
            view! { <HomeNavbar /> }.into_any()
        } else {
            view! { <Navbar /> }.into_any()
        }
    }
}
