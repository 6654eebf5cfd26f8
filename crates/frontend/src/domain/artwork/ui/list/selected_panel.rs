//! Панель «Выбранные произведения».
//!
//! Всегда показывает весь Selection Set, независимо от открытой страницы;
//! записи берутся из хранилища, а не из текущего окна таблицы.

use crate::domain::artwork::selection::SelectionStore;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SelectedPanel() -> impl IntoView {
    let store = use_context::<SelectionStore>().expect("SelectionStore context not found");
    let selected = store.all_selected();
    let count = store.count();

    view! {
        <div class="selected-panel">
            <div class="selected-panel__header">
                <h3 class="selected-panel__title">"Выбранные произведения"</h3>
                <Badge variant="primary".to_string()>
                    {move || count.get().to_string()}
                </Badge>
                <Show when=move || { count.get() > 0 }>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.clear()
                    >
                        "Снять всё"
                    </Button>
                </Show>
            </div>

            {move || {
                if selected.get().is_empty() {
                    view! {
                        <div class="selected-panel__empty">"Ничего не выбрано"</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="selected-panel__list">
                            <For
                                each=move || selected.get()
                                key=|item| item.id
                                children=move |item| {
                                    let id = item.id;
                                    let title = item.display_title().to_string();
                                    let artist = item.artist_display.clone().unwrap_or_default();
                                    view! {
                                        <li class="selected-panel__item">
                                            <span class="selected-panel__item-title" title=title.clone()>
                                                {title.clone()}
                                            </span>
                                            <span class="selected-panel__item-artist">{artist}</span>
                                            <button
                                                class="selected-panel__remove"
                                                title="Убрать из выбранного"
                                                on:click=move |_| store.remove(id)
                                            >
                                                {icon("x")}
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
