use leptos::prelude::*;

/// Кнопка сайта (градиентная "pill"): варианты primary, secondary, outline
/// и размеры sm, md, lg. С `href` отображается ссылкой.
#[component]
pub fn CustomButton(
    /// "primary" (по умолчанию), "secondary" или "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "sm" (по умолчанию), "md" или "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    href: Option<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let css_class = move || {
        let variant_class = match variant.get().as_deref().unwrap_or("primary") {
            "secondary" => "custom-button--secondary",
            "outline" => "custom-button--outline",
            _ => "custom-button--primary",
        };
        let size_class = match size.get().as_deref().unwrap_or("sm") {
            "md" => "custom-button--md",
            "lg" => "custom-button--lg",
            _ => "custom-button--sm",
        };
        format!(
            "custom-button {} {} {}",
            variant_class,
            size_class,
            class.get().unwrap_or_default()
        )
    };

    match href {
        Some(href) => view! {
            <a href=href class=css_class>
                <span class="custom-button__label">{children()}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=css_class
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |ev| {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            >
                <span class="custom-button__label">{children()}</span>
            </button>
        }
        .into_any(),
    }
}
