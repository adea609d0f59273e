pub mod global_context;
pub mod header;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Оболочка админки.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |     Content (<Outlet/>)      |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <div class="admin-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <div class="admin-layout__main">
                <TopHeader />
                <main class="admin-layout__content">
                    <div class="container">
                        <Outlet />
                    </div>
                </main>
            </div>
        </div>
    }
}
