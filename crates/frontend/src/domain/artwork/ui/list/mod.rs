pub mod bulk_select;
pub mod selected_panel;
pub mod state;

use self::bulk_select::BulkSelectPanel;
use self::selected_panel::SelectedPanel;
use self::state::{create_state, page_from_url, sync_page_to_url};
use crate::domain::artwork::api::fetch_artworks;
use crate::domain::artwork::selection::SelectionStore;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::artwork::record::{Artwork, ArtworkId};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ArtworkList() -> impl IntoView {
    let store = use_context::<SelectionStore>().expect("SelectionStore context not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_bulk_panel, set_show_bulk_panel) = signal(false);

    // Текущее окно страницы; заменяется целиком при каждой загрузке.
    let page_items: RwSignal<Vec<Artwork>> = RwSignal::new(Vec::new());

    // Номер последнего запроса; ответ устаревшего запроса отбрасывается,
    // чтобы медленная страница не перекрыла уже открытую следующую.
    let request_seq = StoredValue::new(0u64);

    let load_page = move |page: usize| {
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        let page_size = state.with_untracked(|s| s.page_size);

        spawn_local(async move {
            let result = fetch_artworks(page, page_size).await;

            if request_seq.get_value() != seq {
                // Пользователь успел перелистнуть дальше
                return;
            }

            match result {
                Ok(fetched) => {
                    log!(
                        "Loaded page {}: {} artworks of {}",
                        page + 1,
                        fetched.data.len(),
                        fetched.pagination.total
                    );
                    let total = fetched.pagination.total as usize;
                    let total_pages = fetched.total_pages(page_size);
                    page_items.set(fetched.data);
                    state.update(|s| {
                        s.page = page;
                        s.total_count = total;
                        s.total_pages = total_pages;
                        s.is_loaded = true;
                    });
                    sync_page_to_url(page);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::warn!("Не удалось загрузить страницу {}: {}", page + 1, e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Первая загрузка: страница из URL либо первая.
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            let initial = page_from_url().unwrap_or(0);
            load_page(initial);
        }
    });

    let go_to_page = move |new_page: usize| {
        load_page(new_page);
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| s.page_size = new_size);
        load_page(0);
    };

    let refresh = move || {
        load_page(state.with_untracked(|s| s.page));
    };

    // ===== Выбор строк =====

    let items_signal = Signal::derive(move || page_items.get());
    let selected_signal = store.ids();

    let on_row_toggle = Callback::new(move |(id, checked): (ArtworkId, bool)| {
        // Чекбокс знает только id; запись берём из текущего окна страницы
        let item = page_items.get_untracked().into_iter().find(|a| a.id == id);
        if let Some(artwork) = item {
            store.toggle(artwork, checked);
        }
    });

    let toggle_all = move |check_all: bool| {
        let items = page_items.get_untracked();
        if check_all {
            let n = items.len();
            store.bulk_add_first_n(&items, n);
        } else {
            for item in items.iter() {
                store.remove(item.id);
            }
        }
    };

    let on_bulk_submit = Callback::new(move |n: usize| {
        let items = page_items.get_untracked();
        let added = store.bulk_add_first_n(&items, n);
        log!("Bulk select: {} requested, {} newly added", n, added);
        set_show_bulk_panel.set(false);
    });

    let on_bulk_cancel = Callback::new(move |_: ()| {
        set_show_bulk_panel.set(false);
    });

    view! {
        <PageFrame page_id="artwork--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Произведения искусства"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.get().total_count.to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <div class="list-toolbar__center">
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=vec![12, 25, 50, 100]
                        />
                    </div>
                </div>

                <Show when=move || show_bulk_panel.get()>
                    <BulkSelectPanel
                        page_items=items_signal
                        on_submit=on_bulk_submit
                        on_cancel=on_bulk_cancel
                    />
                </Show>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:id="artwork-table" attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=items_signal
                                    selected=selected_signal
                                    get_id=Callback::new(|row: Artwork| row.id)
                                    on_change=Callback::new(toggle_all)
                                />

                                <TableHeaderCell resizable=false min_width=220.0>
                                    <div
                                        class=move || if show_bulk_panel.get() {
                                            "table__bulk-toggle table__bulk-toggle--open"
                                        } else {
                                            "table__bulk-toggle"
                                        }
                                        title="Выбрать первые N строк страницы"
                                        on:click=move |_| set_show_bulk_panel.update(|v| *v = !*v)
                                    >
                                        "Название"
                                        {icon("chevron-down")}
                                    </div>
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Происхождение"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=200.0>
                                    "Художник"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=200.0>
                                    "Надписи"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=90.0>
                                    "Начало"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=90.0>
                                    "Конец"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|item| item.id
                                children=move |item| {
                                    let title = item.display_title().to_string();
                                    let origin = item.place_of_origin.clone().unwrap_or_default();
                                    let artist = item.artist_display.clone().unwrap_or_default();
                                    let inscriptions = item.inscriptions.clone().unwrap_or_default();
                                    let date_start = item.date_start.map(|y| y.to_string()).unwrap_or_default();
                                    let date_end = item.date_end.map(|y| y.to_string()).unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=item.id
                                                selected=selected_signal
                                                on_change=on_row_toggle
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=title.clone()>{title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{origin}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{artist}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{inscriptions}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">{date_start}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">{date_end}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || {
                        !loading.get() && state.get().is_loaded && page_items.get().is_empty()
                    }>
                        <div class="table-empty">"Нет данных"</div>
                    </Show>
                </div>

                <SelectedPanel />
            </div>
        </PageFrame>
    }
}
