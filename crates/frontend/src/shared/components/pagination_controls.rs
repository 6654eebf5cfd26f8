use crate::shared::icons::icon;
use leptos::prelude::*;

/// Переиспользуемые элементы пагинации: первая/предыдущая/следующая/последняя
/// страница, метка «страница / всего (записей)» и выбор размера страницы.
///
/// Номер страницы 0-based в сигналах и callback'ах, 1-based в метке.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [12, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![12, 25, 50, 100]);
    let fallback_size = page_size_opts[0];

    let has_prev = move || current_page.get() > 0;
    let has_next = move || current_page.get() + 1 < total_pages.get();

    let go_to = move |page: usize| on_page_change.run(page);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(0)
                disabled=move || !has_prev()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_prev() {
                        go_to(current_page.get() - 1);
                    }
                }
                disabled=move || !has_prev()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next() {
                        go_to(current_page.get() + 1);
                    }
                }
                disabled=move || !has_next()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        go_to(total - 1);
                    }
                }
                disabled=move || !has_next()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                title="Записей на странице"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
