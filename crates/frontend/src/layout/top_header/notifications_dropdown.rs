use contracts::domain::a004_notification::{unread_count, Notification};
use contracts::enums::NotificationKind;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;

fn notifications() -> Vec<Notification> {
    let n = |id: u32,
             kind: NotificationKind,
             title: &str,
             message: &str,
             time: &str,
             read: bool| Notification {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read,
        time: time.to_string(),
    };
    vec![
        n(
            1,
            NotificationKind::Booking,
            "New booking received",
            "Ahmed Hassan booked Mogadishu City Tour for 4 guests",
            "2 minutes ago",
            false,
        ),
        n(
            2,
            NotificationKind::Inquiry,
            "New customer inquiry",
            "Sarah Johnson asked about Somaliland Adventure package",
            "15 minutes ago",
            false,
        ),
        n(
            3,
            NotificationKind::Alert,
            "Payment confirmation needed",
            "Booking BK-002 requires payment verification",
            "1 hour ago",
            true,
        ),
        n(
            4,
            NotificationKind::Success,
            "Package updated successfully",
            "Mogadishu Tour package has been updated with new pricing",
            "3 hours ago",
            true,
        ),
    ]
}

/// Колокольчик со счётчиком непрочитанных и выпадающим списком
#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let items = notifications();
    let unread = unread_count(&items);
    let open = RwSignal::new(false);
    let items = StoredValue::new(items);

    view! {
        <div class="header-dropdown">
            <button
                class="top-header__icon-btn top-header__bell"
                title="Notifications"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon_sized("bell", 16)}
                {(unread > 0).then(|| view! {
                    <span class="top-header__bell-count">{unread}</span>
                })}
            </button>

            <Show when=move || open.get()>
                <div class="header-dropdown__backdrop" on:click=move |_| open.set(false)></div>
                <div class="header-dropdown__panel header-dropdown__panel--wide">
                    <div class="header-dropdown__label">
                        "Notifications"
                        {(unread > 0).then(|| view! {
                            <span class="badge badge--neutral">{format!("{} new", unread)}</span>
                        })}
                    </div>
                    <div class="header-dropdown__separator"></div>
                    <div class="notifications__list">
                        {items.get_value().into_iter().map(|n| view! {
                            <div class="notifications__item">
                                <div class=format!("notifications__icon {}", n.kind.color_class())>
                                    {icon_sized(n.kind.icon_name(), 16)}
                                </div>
                                <div class="notifications__body">
                                    <div class="notifications__title-row">
                                        <p class="notifications__title" class:notifications__title--unread=!n.read>
                                            {n.title.clone()}
                                        </p>
                                        {(!n.read).then(|| view! { <span class="notifications__unread-dot"></span> })}
                                    </div>
                                    <p class="notifications__message">{n.message.clone()}</p>
                                    <div class="notifications__time">
                                        {icon_sized("clock", 12)}
                                        {n.time.clone()}
                                    </div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="header-dropdown__separator"></div>
                    <button class="header-dropdown__footer" on:click=move |_| open.set(false)>
                        "View all notifications"
                    </button>
                </div>
            </Show>
        </div>
    }
}
