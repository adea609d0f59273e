use leptos::prelude::*;
use thaw::*;

use super::activity::{AlertsPanel, RecentActivity};
use super::quick_actions::QuickActions;
use crate::dashboards::d100_admin_overview::data;
use crate::domain::a003_booking::ui::list::BookingList;
use crate::shared::components::{stagger_delay, CardAnimated, PageHeader, StatCard};
use crate::shared::icons::icon;

/// Обзор админки `/admin`
#[component]
pub fn AdminOverviewDashboard() -> impl IntoView {
    view! {
        <div id="d100_admin_overview--dashboard" class="admin-overview">
            <PageHeader
                title="Dashboard Overview"
                subtitle="Welcome back! Here's what's happening with your tourism business.".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| log::debug!("dashboard filters requested")
                >
                    {icon("filter")}
                    "Filters"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| log::info!("new booking requested from dashboard")
                >
                    {icon("plus")}
                    "New Booking"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                {data::dashboard_stats()
                    .into_iter()
                    .enumerate()
                    .map(|(index, stat)| view! {
                        <CardAnimated delay_ms=stagger_delay(index)>
                            <StatCard stat=stat />
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>

            <QuickActions actions=data::quick_actions() />

            <BookingList />

            <div class="admin-overview__panels">
                <RecentActivity items=data::recent_activity() />
                <AlertsPanel items=data::alerts() />
            </div>
        </div>
    }
}
