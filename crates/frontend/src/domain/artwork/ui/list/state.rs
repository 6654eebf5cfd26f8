use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Размер страницы по умолчанию — столько записей API отдаёт без `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Clone, Debug)]
pub struct ArtworkListState {
    // pagination
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    // load flag
    pub is_loaded: bool,
}

impl Default for ArtworkListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ArtworkListState> {
    RwSignal::new(ArtworkListState::default())
}

// ============================================================================
// Синхронизация номера страницы с URL (?page=N, 1-based)
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct PageQuery {
    page: usize,
}

/// Разбирает строку запроса и возвращает 0-based номер страницы.
/// В URL страницы нумеруются с 1; `page=0` и мусор отбрасываются.
pub fn parse_page_param(query: &str) -> Option<usize> {
    let query = query.trim_start_matches('?');
    let parsed: PageQuery = serde_qs::from_str(query).ok()?;
    parsed.page.checked_sub(1)
}

/// 0-based номер страницы из текущего URL.
pub fn page_from_url() -> Option<usize> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_page_param(&search)
}

/// Записывает номер страницы в URL через History.replace_state,
/// не создавая записи в истории браузера.
pub fn sync_page_to_url(page: usize) {
    let query = match serde_qs::to_string(&PageQuery { page: page + 1 }) {
        Ok(q) => q,
        Err(_) => return,
    };
    let new_url = format!("?{}", query);

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let current_search = window.location().search().unwrap_or_default();
    if current_search == new_url {
        return;
    }

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_param_is_one_based() {
        assert_eq!(parse_page_param("page=1"), Some(0));
        assert_eq!(parse_page_param("?page=3"), Some(2));
        assert_eq!(parse_page_param("page=10810"), Some(10809));
    }

    #[test]
    fn parse_page_param_rejects_garbage() {
        assert_eq!(parse_page_param(""), None);
        assert_eq!(parse_page_param("page=0"), None);
        assert_eq!(parse_page_param("page=abc"), None);
        assert_eq!(parse_page_param("page=-2"), None);
        assert_eq!(parse_page_param("other=5"), None);
    }
}
