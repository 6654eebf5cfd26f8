//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - каркас страницы (шапка + основная область)
//! - `TopHeader` - заголовок приложения со счётчиком выбранного

use crate::domain::artwork::selection::SelectionStore;
use crate::domain::artwork::ui::list::ArtworkList;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Верхняя панель: название приложения и общий счётчик выбранных записей.
#[component]
fn TopHeader() -> impl IntoView {
    let store = use_context::<SelectionStore>().expect("SelectionStore context not found");
    let selected_count = store.count();

    view! {
        <header data-zone="header" class="app-header">
            <div class="app-header__left">
                {icon("palette")}
                <span class="app-header__title">"Каталог произведений"</span>
            </div>
            <div class="app-header__right">
                <span class="app-header__label">"Выбрано:"</span>
                <Badge variant="primary".to_string()>
                    {move || selected_count.get().to_string()}
                </Badge>
            </div>
        </header>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                <ArtworkList />
            </div>
        </div>
    }
}
