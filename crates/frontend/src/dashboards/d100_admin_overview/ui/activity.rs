use contracts::dashboards::d100_admin_overview::{ActivityItem, AlertItem};
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn RecentActivity(items: Vec<ActivityItem>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("trending-up")}"Recent Activity"</h2>
            </div>
            <div class="activity-list">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class="activity-item">
                            <span class=item.kind.dot_class()></span>
                            <div class="activity-item__body">
                                <p class="activity-item__action">{item.action}</p>
                                <p class="activity-item__time">{item.time}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Служебные оповещения; цвет рамки задаёт приоритет
#[component]
pub fn AlertsPanel(items: Vec<AlertItem>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("alert-circle")}"Notifications"</h2>
            </div>
            <div class="alert-list">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class=item.priority.css_class()>
                            <h4 class="alert-item__title">{item.title}</h4>
                            <p class="alert-item__message">{item.message}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
