use contracts::dashboards::d100_admin_overview::DashboardStat;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Карточка показателя: иконка, значение, изменение со стрелкой тренда
#[component]
pub fn StatCard(stat: DashboardStat) -> impl IntoView {
    let DashboardStat {
        title,
        value,
        change,
        trend,
        icon: icon_name,
    } = stat;

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__icon">{icon(&icon_name)}</div>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{value}</div>
                <span class=trend.css_class()>
                    {icon(trend.icon_name())}
                    <span>{change}</span>
                    <span class="stat-card__period">" from last month"</span>
                </span>
            </div>
        </div>
    }
}
