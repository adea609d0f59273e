use contracts::domain::a005_search_entry::AdminSearchEntry;
use contracts::enums::SearchEntryKind;
use contracts::shared::search::FilteredView;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};

fn search_entries() -> Vec<AdminSearchEntry> {
    vec![
        AdminSearchEntry::new(SearchEntryKind::Booking, "Booking BK-001", "/admin/bookings/1"),
        AdminSearchEntry::new(SearchEntryKind::Customer, "Ahmed Hassan", "/admin/customers/1"),
        AdminSearchEntry::new(SearchEntryKind::Package, "Mogadishu City Tour", "/admin/packages/1"),
        AdminSearchEntry::new(SearchEntryKind::Destination, "Somaliland", "/admin/destinations/1"),
    ]
}

/// Быстрый поиск по записям админки
#[component]
pub fn AdminSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let entries = StoredValue::new(search_entries());
    let results = Memo::new(move |_| {
        query.with(|q| entries.with_value(|all| FilteredView::produce(all, q)))
    });

    view! {
        <div class="admin-search">
            <SearchInput value=query placeholder="Search bookings, customers..." class="admin-search__input" />
            <Show when=move || !query.get().is_empty()>
                <div class="admin-search__results">
                    {move || {
                        let filtered = results.get();
                        if filtered.is_empty() {
                            return view! { <NoResults query=filtered.query().to_string() /> }.into_any();
                        }
                        let q = filtered.query().to_string();
                        filtered.items().iter().map(|entry| {
                            let kind = entry.kind;
                            view! {
                                <a
                                    href=entry.href.clone()
                                    class="admin-search__item"
                                    on:click=move |_| query.set(String::new())
                                >
                                    {icon_sized(kind.icon_name(), 16)}
                                    <span class="admin-search__name">{highlight_matches(&entry.name, &q)}</span>
                                    <span class="admin-search__kind">{kind.display_name()}</span>
                                </a>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
