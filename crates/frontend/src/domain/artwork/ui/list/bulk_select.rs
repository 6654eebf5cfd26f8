//! Панель массового выбора: «выбрать первые N строк текущей страницы».
//!
//! Открывается кликом по заголовку колонки «Название». Значение вне
//! диапазона `[1, длина страницы]` блокирует кнопку, а не падает в рантайме.

use contracts::domain::artwork::record::Artwork;
use leptos::prelude::*;
use thaw::*;

/// Допустимо ли значение N для страницы из `page_len` строк.
pub fn is_valid_bulk_count(n: usize, page_len: usize) -> bool {
    n >= 1 && n <= page_len
}

#[component]
pub fn BulkSelectPanel(
    /// Записи текущей страницы (в порядке отображения).
    #[prop(into)]
    page_items: Signal<Vec<Artwork>>,

    /// Вызывается с проверенным N по кнопке «Выбрать».
    on_submit: Callback<usize>,

    /// Закрытие панели без выбора.
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (raw_value, set_raw_value) = signal(String::new());

    let parsed = Signal::derive(move || raw_value.get().trim().parse::<usize>().ok());
    let page_len = Signal::derive(move || page_items.get().len());
    let is_valid = Signal::derive(move || {
        matches!(parsed.get(), Some(n) if is_valid_bulk_count(n, page_len.get()))
    });

    view! {
        <div class="bulk-select-panel">
            <span class="bulk-select-panel__label">"Выбрать первые"</span>
            <input
                type="number"
                class="bulk-select-panel__input"
                placeholder=move || format!("1..{}", page_len.get())
                min="1"
                max=move || page_len.get().to_string()
                prop:value=move || raw_value.get()
                on:input=move |ev| set_raw_value.set(event_target_value(&ev))
            />
            <span class="bulk-select-panel__label">"строк этой страницы"</span>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !is_valid.get())
                on_click=move |_| {
                    if let Some(n) = parsed.get() {
                        if is_valid_bulk_count(n, page_len.get()) {
                            on_submit.run(n);
                            set_raw_value.set(String::new());
                        }
                    }
                }
            >
                "Выбрать"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_cancel.run(())
            >
                "Отмена"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_is_inclusive() {
        assert!(is_valid_bulk_count(1, 12));
        assert!(is_valid_bulk_count(5, 12));
        assert!(is_valid_bulk_count(12, 12));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(!is_valid_bulk_count(0, 12));
        assert!(!is_valid_bulk_count(13, 12));
    }

    #[test]
    fn empty_page_accepts_nothing() {
        assert!(!is_valid_bulk_count(1, 0));
    }
}
