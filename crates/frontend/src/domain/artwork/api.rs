//! Адаптер источника данных - публичный REST API Art Institute of Chicago.
//!
//! Один GET-запрос на каждый переход страницы; без повторов, backoff
//! и кэширования ранее загруженных страниц.

use contracts::domain::artwork::page::ArtworksPage;
use gloo_net::http::Request;

/// Базовый URL публичного API (без завершающего слэша).
pub const API_BASE: &str = "https://api.artic.edu/api/v1";

/// Поля записи, запрашиваемые у API. Ограничивает ответ колонками таблицы.
const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Собирает URL страницы каталога.
///
/// `page` — 0-based номер страницы в состоянии списка; API ожидает 1-based.
pub fn artworks_url(page: usize, limit: usize) -> String {
    format!(
        "{}/artworks?page={}&limit={}&fields={}",
        API_BASE,
        page + 1,
        limit,
        ARTWORK_FIELDS
    )
}

/// Загружает одно окно страницы каталога.
///
/// Ошибка сети, не-2xx статус и некорректный JSON возвращаются как `Err`
/// с готовым для показа сообщением. Типизированная десериализация в
/// [`ArtworksPage`] и есть проверка схемы на границе адаптера.
pub async fn fetch_artworks(page: usize, limit: usize) -> Result<ArtworksPage, String> {
    let url = artworks_url(page, limit);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !(200..300).contains(&response.status()) {
        return Err(format!("Ошибка сервера: HTTP {}", response.status()));
    }

    response
        .json::<ArtworksPage>()
        .await
        .map_err(|e| format!("Ошибка парсинга ответа: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artworks_url_is_one_based() {
        assert_eq!(
            artworks_url(0, 12),
            "https://api.artic.edu/api/v1/artworks?page=1&limit=12&fields=id,title,place_of_origin,artist_display,inscriptions,date_start,date_end"
        );
    }

    #[test]
    fn artworks_url_passes_page_and_limit() {
        let url = artworks_url(4, 100);
        assert!(url.contains("page=5"));
        assert!(url.contains("limit=100"));
    }
}
