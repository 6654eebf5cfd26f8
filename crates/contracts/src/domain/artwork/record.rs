use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор произведения в каталоге Art Institute of Chicago.
/// Стабилен между страницами выдачи.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl ArtworkId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u64>()
            .map(ArtworkId::new)
            .map_err(|e| format!("Invalid artwork id: {}", e))
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Запись о произведении искусства.
///
/// Все поля, кроме id, в ответе API могут быть null или отсутствовать,
/// поэтому моделируются как `Option`. После загрузки запись не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i32>,

    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Название для отображения; пустое или отсутствующее заменяется заглушкой.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Без названия")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": 129884,
            "title": "Starry Night and the Astronauts",
            "place_of_origin": "United States",
            "artist_display": "Alma Thomas\nAmerican, 1891-1978",
            "inscriptions": null,
            "date_start": 1972,
            "date_end": 1972
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, ArtworkId(129884));
        assert_eq!(artwork.title.as_deref(), Some("Starry Night and the Astronauts"));
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_start, Some(1972));
    }

    #[test]
    fn deserialize_tolerates_missing_fields() {
        // API отдаёт только запрошенные поля; null и отсутствие равнозначны
        let json = r#"{ "id": 42, "title": null }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, ArtworkId(42));
        assert_eq!(artwork.title, None);
        assert_eq!(artwork.place_of_origin, None);
        assert_eq!(artwork.date_end, None);
    }

    #[test]
    fn missing_id_is_a_parse_error() {
        let json = r#"{ "title": "Untitled" }"#;
        assert!(serde_json::from_str::<Artwork>(json).is_err());
    }

    #[test]
    fn display_title_fallback() {
        let mut artwork: Artwork = serde_json::from_str(r#"{ "id": 7 }"#).unwrap();
        assert_eq!(artwork.display_title(), "Без названия");

        artwork.title = Some("  ".to_string());
        assert_eq!(artwork.display_title(), "Без названия");

        artwork.title = Some("Nighthawks".to_string());
        assert_eq!(artwork.display_title(), "Nighthawks");
    }

    #[test]
    fn id_string_round_trip() {
        let id = ArtworkId::new(129884);
        assert_eq!(ArtworkId::from_string(&id.as_string()), Ok(id));
        assert!(ArtworkId::from_string("not-a-number").is_err());
    }
}
