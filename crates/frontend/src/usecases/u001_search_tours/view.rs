use contracts::shared::search::no_results_message;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_search_tours::{SearchTours, CHECKIN_INPUT_FORMAT};
use leptos::prelude::*;
use thaw::*;

use super::state::{create_state, destination_options};
use crate::shared::date_utils::today;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::highlight_matches;

/// Форма поиска туров на главной. Сетевых запросов нет: запрос пишется в лог.
#[component]
pub fn TripSearchBox() -> impl IntoView {
    let state = create_state();
    let options = StoredValue::new(destination_options());
    let limits = state.with_untracked(|s| s.form.duration_limits());
    let min_checkin = today().format(CHECKIN_INPUT_FORMAT).to_string();

    let visible_options = Memo::new(move |_| {
        options.with_value(|opts| state.with(|s| s.visible_destinations(opts)))
    });
    let destination_label = move || {
        options.with_value(|opts| {
            state.with(|s| s.form.destination_label(opts).map(str::to_string))
        })
    };

    let on_duration_from = move |ev: leptos::ev::Event| {
        if let Ok(days) = event_target_value(&ev).parse::<u32>() {
            state.update(|s| s.form.set_duration_from(days));
        }
    };
    let on_duration_to = move |ev: leptos::ev::Event| {
        if let Ok(days) = event_target_value(&ev).parse::<u32>() {
            state.update(|s| s.form.set_duration_to(days));
        }
    };

    let on_checkin = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            if let Err(e) = s.form.set_checkin_input(&value, today()) {
                log::warn!("check-in date ignored: {:#}", e);
            }
        });
    };

    let on_search = move |_| {
        let request = state.with_untracked(|s| s.form.to_request());
        match request.to_json() {
            Ok(json) => log::info!("{}: search data: {}", SearchTours::full_name(), json),
            Err(e) => log::error!("failed to serialize search request: {:#}", e),
        }
    };

    view! {
        <section class="trip-search">
            <div class="container">
                <div class="trip-search__card">
                    <div class="trip-search__grid">
                        // Направление
                        <div class="trip-search__field">
                            <label class="trip-search__label">{icon_sized("map-pin", 16)}"Destination"</label>
                            <div class="destination-select">
                                <button
                                    type="button"
                                    class="destination-select__trigger"
                                    on:click=move |_| state.update(|s| s.toggle_destination_list())
                                >
                                    {move || destination_label().unwrap_or_else(|| "Select destination".to_string())}
                                    {icon_sized("chevron-down", 16)}
                                </button>
                                <Show when=move || state.with(|s| s.destination_open)>
                                    <div class="destination-select__dropdown">
                                        <input
                                            type="text"
                                            class="destination-select__filter"
                                            placeholder="Type to filter..."
                                            prop:value=move || state.with(|s| s.destination_query.query().to_string())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                state.update(|s| s.destination_query.set_query(value));
                                            }
                                        />
                                        {move || {
                                            let filtered = visible_options.get();
                                            if filtered.is_empty() {
                                                return view! {
                                                    <div class="search-empty">{no_results_message(filtered.query())}</div>
                                                }
                                                .into_any();
                                            }
                                            let query = filtered.query().to_string();
                                            filtered
                                                .into_items()
                                                .into_iter()
                                                .map(|option| {
                                                    let value = option.value.clone();
                                                    let selected = move || state.with(|s| s.form.destination() == value);
                                                    let pick = option.value.clone();
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="destination-select__option"
                                                            class:destination-select__option--selected=selected
                                                            on:click=move |_| state.update(|s| s.select_destination(&pick))
                                                        >
                                                            {highlight_matches(&option.label, &query)}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }}
                                    </div>
                                </Show>
                            </div>
                        </div>

                        // Длительность
                        <div class="trip-search__field">
                            <label class="trip-search__label">{icon_sized("clock", 16)}"Duration"</label>
                            <div class="duration-range">
                                <div class="duration-range__values">
                                    <span>{move || format!("{} days", state.with(|s| s.form.duration().0))}</span>
                                    <span>{move || format!("{} days", state.with(|s| s.form.duration().1))}</span>
                                </div>
                                <input
                                    type="range"
                                    class="duration-range__input"
                                    min=limits.min
                                    max=limits.max
                                    step="1"
                                    prop:value=move || state.with(|s| s.form.duration().0.to_string())
                                    on:input=on_duration_from
                                />
                                <input
                                    type="range"
                                    class="duration-range__input"
                                    min=limits.min
                                    max=limits.max
                                    step="1"
                                    prop:value=move || state.with(|s| s.form.duration().1.to_string())
                                    on:input=on_duration_to
                                />
                            </div>
                        </div>

                        // Дата заезда
                        <div class="trip-search__field">
                            <label class="trip-search__label">{icon_sized("calendar", 16)}"Check-in Date"</label>
                            <div class="checkin-field">
                                <span
                                    class="checkin-field__label"
                                    class:checkin-field__label--empty=move || state.with(|s| s.form.checkin().is_none())
                                >
                                    {move || state.with(|s| s.form.checkin_button_label())}
                                </span>
                                <input
                                    type="date"
                                    class="checkin-field__input"
                                    min=min_checkin
                                    prop:value=move || {
                                        state.with(|s| {
                                            s.form
                                                .checkin()
                                                .map(|d| d.format(CHECKIN_INPUT_FORMAT).to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:change=on_checkin
                                />
                            </div>
                        </div>

                        // Гости
                        <div class="trip-search__field">
                            <label class="trip-search__label">{icon_sized("users", 16)}"Persons"</label>
                            <div class="persons-counter">
                                <button
                                    type="button"
                                    class="persons-counter__button"
                                    title="Remove person"
                                    disabled=move || state.with(|s| !s.form.can_decrement_persons())
                                    on:click=move |_| state.update(|s| s.form.decrement_persons())
                                >
                                    {icon_sized("minus", 16)}
                                </button>
                                <span class="persons-counter__value">
                                    {move || state.with(|s| s.form.persons_label())}
                                </span>
                                <button
                                    type="button"
                                    class="persons-counter__button"
                                    title="Add person"
                                    disabled=move || state.with(|s| !s.form.can_increment_persons())
                                    on:click=move |_| state.update(|s| s.form.increment_persons())
                                >
                                    {icon_sized("plus", 16)}
                                </button>
                            </div>
                        </div>

                        <div class="trip-search__submit">
                            <Button appearance=ButtonAppearance::Primary on_click=on_search>
                                {icon("search")}
                                "Search Tours"
                            </Button>
                        </div>
                    </div>

                    // Сводка выбранных значений
                    <div class="trip-search__summary">
                        {move || destination_label().map(|label| view! {
                            <span class="summary-chip summary-chip--blue">{icon_sized("map-pin", 14)}{label}</span>
                        })}
                        <span class="summary-chip summary-chip--green">
                            {icon_sized("clock", 14)}
                            {move || state.with(|s| s.form.duration_label())}
                        </span>
                        {move || state.with(|s| s.form.checkin_summary_label()).map(|label| view! {
                            <span class="summary-chip summary-chip--purple">{icon_sized("calendar", 14)}{label}</span>
                        })}
                        <span class="summary-chip summary-chip--orange">
                            {icon_sized("users", 14)}
                            {move || state.with(|s| s.form.persons_summary_label())}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
