use contracts::dashboards::d100_admin_overview::QuickAction;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Быстрое действие: кнопка открывает диалог-заглушку
#[component]
fn QuickActionButton(action: QuickAction) -> impl IntoView {
    let open = RwSignal::new(false);
    let title = action.title.clone();

    view! {
        <button
            class="quick-action"
            on:click=move |_| {
                log::debug!("quick action opened: {}", title);
                open.set(true);
            }
        >
            <div class="quick-action__icon">{icon(&action.icon)}</div>
            <h3 class="quick-action__title">{action.title.clone()}</h3>
            <p class="quick-action__description">{action.description.clone()}</p>
        </button>

        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{action.title.clone()}</DialogTitle>
                    <DialogContent>
                        <p class="quick-action__dialog-text">{QuickAction::DIALOG_MESSAGE}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open.set(false)
                        >
                            {QuickAction::DIALOG_TITLE}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
pub fn QuickActions(actions: Vec<QuickAction>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("check-circle")}"Quick Actions"</h2>
            </div>
            <div class="quick-actions">
                {actions
                    .into_iter()
                    .map(|action| view! { <QuickActionButton action=action /> })
                    .collect_view()}
            </div>
        </div>
    }
}
