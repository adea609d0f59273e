//! Поиск в навбаре: направления, туры и быстрые ссылки по одному запросу.

use contracts::domain::a001_destination::Destination;
use contracts::domain::a002_tour_package::TourPackage;
use contracts::shared::navigation::QuickLink;
use contracts::shared::search::NavSearchResults;
use leptos::prelude::*;

use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};

fn destinations() -> Vec<Destination> {
    vec![
        Destination::new("Mogadishu", "Somalia"),
        Destination::new("Hargeisa", "Somalia"),
        Destination::new("Berbera", "Somalia"),
        Destination::new("Kismayo", "Somalia"),
    ]
}

fn packages() -> Vec<TourPackage> {
    vec![
        TourPackage::new("Somali Coast Adventure", "7 Days", "$899"),
        TourPackage::new("Historical Somalia Tour", "5 Days", "$649"),
        TourPackage::new("Cultural Experience Package", "10 Days", "$1299"),
    ]
}

fn quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink::new("About Us", "#about"),
        QuickLink::new("Contact", "#contact"),
        QuickLink::new("Gallery", "#gallery"),
    ]
}

/// Выдача по запросу; источники создаются один раз на экземпляр поиска
fn use_nav_results(query: RwSignal<String>) -> Memo<NavSearchResults> {
    let sources = StoredValue::new((destinations(), packages(), quick_links()));
    Memo::new(move |_| {
        query.with(|q| {
            sources.with_value(|(d, p, l)| NavSearchResults::produce(d, p, l, q))
        })
    })
}

/// Сгруппированный список результатов
#[component]
fn NavSearchResultsList(
    results: Memo<NavSearchResults>,
    /// Вызывается при выборе любого пункта
    on_select: Callback<()>,
) -> impl IntoView {
    move || {
        let results = results.get();
        if !results.has_results() {
            let query = results.query().to_string();
            return view! { <NoResults query=query /> }.into_any();
        }
        let query = results.query().to_string();

        let destinations = (!results.destinations.is_empty()).then(|| {
            let q = query.clone();
            view! {
                <div class="nav-search__group">
                    <h4 class="nav-search__heading">"Destinations"</h4>
                    {results.destinations.items().iter().map(|dest| view! {
                        <a href="/destinations" class="nav-search__item" on:click=move |_| on_select.run(())>
                            <span class="nav-search__item-icon nav-search__item-icon--blue">{icon_sized("map-pin", 16)}</span>
                            <div>
                                <p class="nav-search__item-title">{highlight_matches(&dest.name, &q)}</p>
                                <p class="nav-search__item-meta">{highlight_matches(&dest.country, &q)}</p>
                            </div>
                        </a>
                    }).collect_view()}
                </div>
            }
        });

        let packages = (!results.packages.is_empty()).then(|| {
            let q = query.clone();
            view! {
                <div class="nav-search__group nav-search__group--separated">
                    <h4 class="nav-search__heading">"Tour Packages"</h4>
                    {results.packages.items().iter().map(|pkg| view! {
                        <a href="/packages" class="nav-search__item" on:click=move |_| on_select.run(())>
                            <span class="nav-search__item-icon nav-search__item-icon--green">{icon_sized("calendar", 16)}</span>
                            <div class="nav-search__item-body">
                                <p class="nav-search__item-title">{highlight_matches(&pkg.name, &q)}</p>
                                <div class="nav-search__item-meta">
                                    <span>{pkg.duration.clone()}</span>
                                    <span>"•"</span>
                                    <span class="nav-search__price">{pkg.price.clone()}</span>
                                </div>
                            </div>
                        </a>
                    }).collect_view()}
                </div>
            }
        });

        let quick_links = (!results.quick_links.is_empty()).then(|| {
            let q = query.clone();
            view! {
                <div class="nav-search__group nav-search__group--separated">
                    <h4 class="nav-search__heading">"Quick Links"</h4>
                    {results.quick_links.items().iter().map(|link| view! {
                        <a href=link.href.clone() class="nav-search__item" on:click=move |_| on_select.run(())>
                            <span class="nav-search__dot"></span>
                            <p class="nav-search__item-title">{highlight_matches(&link.name, &q)}</p>
                        </a>
                    }).collect_view()}
                </div>
            }
        });

        view! {
            <div class="nav-search__results">
                {destinations}
                {packages}
                {quick_links}
            </div>
        }
        .into_any()
    }
}

/// Кнопка поиска с выпадающей панелью (десктоп)
#[component]
pub fn NavSearch(#[prop(into)] is_scrolled: Signal<bool>) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let results = use_nav_results(query);

    let close = Callback::new(move |_: ()| open.set(false));

    view! {
        <div class="nav-search">
            <button
                class="nav-search__toggle"
                class:nav-search__toggle--scrolled=move || is_scrolled.get()
                aria-label="Search"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("search")}
            </button>
            <Show when=move || open.get()>
                <div class="nav-search__backdrop" on:click=move |_| open.set(false)></div>
                <div class="nav-search__dropdown">
                    <SearchInput
                        value=query
                        placeholder="Search destinations, packages..."
                        class="nav-search__input"
                        autofocus=true
                    />
                    <NavSearchResultsList results=results on_select=close />
                </div>
            </Show>
        </div>
    }
}

/// Поиск в мобильном меню: результаты видны, только когда запрос не пуст
#[component]
pub fn MobileNavSearch(
    /// Закрыть меню после перехода
    on_select: Callback<()>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = use_nav_results(query);

    view! {
        <div class="mobile-search">
            <SearchInput value=query placeholder="Search destinations, packages..." />
            <Show when=move || !query.get().is_empty()>
                <div class="mobile-search__results">
                    <NavSearchResultsList results=results on_select=on_select />
                </div>
            </Show>
        </div>
    }
}
