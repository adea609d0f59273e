use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::AdminOverviewDashboard;
use crate::layout::header::ConditionalNavbar;
use crate::layout::AdminShell;
use crate::pages::{AdminSectionPage, HomePage, PlaceholderPage};

/// Маршруты сайта. Навбар рендерится на всех страницах, включая админку;
/// админка получает свою оболочку (сайдбар + шапка) под ним.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <ConditionalNavbar />
            <div class="site-content">
                <Routes fallback=|| view! { <PlaceholderPage title="Page not found" /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=|| view! { <PlaceholderPage title="About Us" /> } />
                    <Route path=path!("/destinations") view=|| view! { <PlaceholderPage title="Destinations" /> } />
                    <Route path=path!("/destinations/:id") view=|| view! { <PlaceholderPage title="Destination" /> } />
                    <Route path=path!("/packages") view=|| view! { <PlaceholderPage title="Packages" /> } />
                    <Route path=path!("/packages/:id/book") view=|| view! { <PlaceholderPage title="Book Package" /> } />
                    <Route path=path!("/gallery") view=|| view! { <PlaceholderPage title="Gallery" /> } />
                    <Route path=path!("/blogs") view=|| view! { <PlaceholderPage title="Blogs" /> } />
                    <Route path=path!("/contact") view=|| view! { <PlaceholderPage title="Contact Us" /> } />
                    <ParentRoute path=path!("/admin") view=AdminShell>
                        <Route path=path!("") view=AdminOverviewDashboard />
                        <Route path=path!(":section") view=AdminSectionPage />
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}
