use serde::{Deserialize, Serialize};

use super::record::Artwork;

/// Метаданные пагинации из ответа API. Обязателен только `total`;
/// остальное API может не прислать, и клиент считает страницы сам.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,

    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub current_page: Option<u32>,

    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Одно окно страницы каталога: записи текущей страницы плюс общий счётчик.
/// Заменяется целиком при каждом переходе; историю страниц никто не хранит.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworksPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl ArtworksPage {
    /// Число страниц при текущем размере страницы.
    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(self.pagination.total as usize, page_size)
    }
}

/// Число страниц для `total` записей по `page_size` на страницу.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_page_envelope() {
        let json = r#"{
            "data": [
                { "id": 1, "title": "A" },
                { "id": 2, "title": "B" }
            ],
            "pagination": { "total": 129714, "limit": 12, "current_page": 1, "total_pages": 10810 }
        }"#;

        let page: ArtworksPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 129714);
        assert_eq!(page.pagination.limit, Some(12));
    }

    #[test]
    fn pagination_total_is_required() {
        let json = r#"{ "data": [], "pagination": {} }"#;
        assert!(serde_json::from_str::<ArtworksPage>(json).is_err());
    }

    #[test]
    fn pagination_extras_are_optional() {
        let json = r#"{ "data": [], "pagination": { "total": 5 } }"#;
        let page: ArtworksPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, None);
    }

    #[test]
    fn total_pages_math() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(129714, 12), 10810);
        // Деление на ноль страниц не имеет смысла, но и не должно падать
        assert_eq!(total_pages(100, 0), 0);
    }
}
