//! CardAnimated: карточка Thaw с анимацией появления.
//!
//! Анимация `card-appear` описана в `style/main.css`. Для каскада карточек
//! задержка растёт с индексом (`delay_ms = index * 80`).

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 80;

/// Задержка анимации для карточки с номером `index`
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс карточки
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 240);
    }
}
