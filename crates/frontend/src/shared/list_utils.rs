//! Общие элементы поисковых списков: поле ввода, подсветка совпадений,
//! пустая выдача.

use contracts::shared::search::no_results_message;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;

/// Подсветка совпадений в тексте (без учёта регистра).
///
/// Запрос не обрезается: подсвечивается ровно то, что нашёл фильтр.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Байтовые диапазоны непересекающихся вхождений `query` в `text`.
///
/// Сравнение идёт посимвольно в нижнем регистре; символ, чей нижний
/// регистр состоит из нескольких символов, сравнивается как есть.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let hay: Vec<(usize, char)> = text
        .char_indices()
        .map(|(i, c)| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => (i, l),
                _ => (i, c),
            }
        })
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let window = &hay[i..i + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let start = window[0].0;
            let end = hay
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Поле поиска: значение пишется в сигнал на каждое нажатие клавиши
#[component]
pub fn SearchInput(
    /// Текущее значение запроса
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Дополнительный CSS-класс обёртки
    #[prop(optional, into)]
    class: String,
    #[prop(optional)]
    autofocus: bool,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class=format!("search-input {}", class)>
            <span class="search-input__icon">{icon_sized("search", 16)}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                autofocus=autofocus
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| value.set(String::new())
                >
                    {icon_sized("x", 14)}
                </button>
            </Show>
        </div>
    }
}

/// Пустая выдача с запросом, выведенным как есть
#[component]
pub fn NoResults(#[prop(into)] query: Signal<String>) -> impl IntoView {
    view! {
        <div class="search-empty">{move || no_results_message(&query.get())}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Hargeisa", "HA"), vec![(0, 2)]);
        assert_eq!(match_ranges("Berbera", "er"), vec![(1, 3), (4, 6)]);
    }

    #[test]
    fn test_match_ranges_empty_and_missing() {
        assert!(match_ranges("Mogadishu", "").is_empty());
        assert!(match_ranges("Mogadishu", "zzz").is_empty());
        assert!(match_ranges("Kismayo", "kismayo ").is_empty());
    }

    #[test]
    fn test_match_ranges_non_ascii() {
        // "é" занимает два байта
        assert_eq!(match_ranges("Café Mocha", "é m"), vec![(3, 7)]);
    }
}
