//! Selection Store - кросс-страничное хранилище выбранных записей.
//!
//! Map-представление (id → запись): панель выбранного рендерится без
//! обращения к текущему окну страницы. Порядок записей — порядок добавления.
//! Навигация по страницам хранилище не трогает; записи уходят только
//! по явному снятию выбора.

use contracts::domain::artwork::record::{Artwork, ArtworkId};
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

/// Чистое состояние выбора, без реактивной обвязки и `web_sys`.
///
/// Инвариант: `order` и `items` всегда содержат один и тот же набор id,
/// без дубликатов.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    order: Vec<ArtworkId>,
    items: HashMap<ArtworkId, Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет запись. Повторное добавление того же id не меняет позицию.
    pub fn add(&mut self, artwork: Artwork) {
        let id = artwork.id;
        if self.items.insert(id, artwork).is_none() {
            self.order.push(id);
        }
    }

    /// Убирает запись; `true`, если она была выбрана.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        if self.items.remove(&id).is_some() {
            self.order.retain(|other| *other != id);
            true
        } else {
            false
        }
    }

    /// Выбирает первые `n` записей страницы; возвращает число новых.
    ///
    /// Контракт `1 <= n <= records.len()` обеспечивается на уровне ввода
    /// (заблокированная кнопка); здесь лишний `n` просто обрезается.
    pub fn bulk_add_first_n(&mut self, records: &[Artwork], n: usize) -> usize {
        let before = self.order.len();
        for artwork in records.iter().take(n) {
            self.add(artwork.clone());
        }
        self.order.len() - before
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Все выбранные записи в порядке добавления.
    pub fn all_selected(&self) -> Vec<Artwork> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect()
    }

    /// Набор выбранных id для чекбоксов таблицы.
    pub fn ids(&self) -> HashSet<ArtworkId> {
        self.items.keys().copied().collect()
    }
}

/// Реактивная обёртка над [`SelectionSet`].
///
/// Передаётся через context из `App`; компоненты получают `Copy`-хэндл
/// с определёнными методами мутации вместо глобального состояния.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    state: RwSignal<SelectionSet>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SelectionSet::new()),
        }
    }

    /// Ставит или снимает выбор одной записи.
    pub fn toggle(&self, artwork: Artwork, checked: bool) {
        self.state.update(|s| {
            if checked {
                s.add(artwork);
            } else {
                s.remove(artwork.id);
            }
        });
    }

    pub fn remove(&self, id: ArtworkId) {
        self.state.update(|s| {
            s.remove(id);
        });
    }

    /// Выбирает первые `n` записей страницы; возвращает число новых.
    pub fn bulk_add_first_n(&self, records: &[Artwork], n: usize) -> usize {
        let mut added = 0;
        self.state.update(|s| {
            added = s.bulk_add_first_n(records, n);
        });
        added
    }

    /// Полностью очищает выбор. Вызывается только явным действием пользователя.
    pub fn clear(&self) {
        self.state.update(|s| *s = SelectionSet::new());
    }

    /// Сигнал набора выбранных id (для чекбоксов).
    pub fn ids(&self) -> Signal<HashSet<ArtworkId>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.ids()))
    }

    /// Сигнал всех выбранных записей в порядке добавления.
    pub fn all_selected(&self) -> Signal<Vec<Artwork>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.all_selected()))
    }

    /// Сигнал количества выбранного.
    pub fn count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64, title: &str) -> Artwork {
        Artwork {
            id: ArtworkId(id),
            title: Some(title.to_string()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    fn page(ids: &[u64]) -> Vec<Artwork> {
        ids.iter()
            .map(|id| artwork(*id, &format!("Artwork {id}")))
            .collect()
    }

    #[test]
    fn add_remove_membership() {
        let mut set = SelectionSet::new();
        set.add(artwork(1, "A"));
        assert!(set.is_selected(ArtworkId(1)));
        assert!(!set.is_selected(ArtworkId(2)));

        assert!(set.remove(ArtworkId(1)));
        assert!(!set.is_selected(ArtworkId(1)));
        assert!(set.is_empty());

        // Повторное снятие — no-op
        assert!(!set.remove(ArtworkId(1)));
    }

    #[test]
    fn re_adding_keeps_position_and_count() {
        let mut set = SelectionSet::new();
        set.add(artwork(1, "A"));
        set.add(artwork(2, "B"));
        set.add(artwork(1, "A"));

        assert_eq!(set.len(), 2);
        let titles: Vec<_> = set
            .all_selected()
            .iter()
            .map(|a| a.id.value())
            .collect();
        assert_eq!(titles, vec![1, 2]);
    }

    #[test]
    fn bulk_selects_exactly_first_n() {
        let records = page(&[10, 20, 30, 40, 50]);

        for n in 1..=records.len() {
            let mut set = SelectionSet::new();
            assert_eq!(set.bulk_add_first_n(&records, n), n);
            assert_eq!(set.len(), n);
            for record in &records[..n] {
                assert!(set.is_selected(record.id));
            }
            for record in &records[n..] {
                assert!(!set.is_selected(record.id));
            }
        }
    }

    #[test]
    fn bulk_keeps_selections_from_other_pages() {
        let page_one = page(&[1, 2, 3]);
        let page_two = page(&[4, 5, 6]);

        let mut set = SelectionSet::new();
        set.add(page_one[0].clone());
        set.add(page_one[2].clone());

        assert_eq!(set.bulk_add_first_n(&page_two, 2), 2);
        assert_eq!(set.len(), 4);
        assert!(set.is_selected(ArtworkId(1)));
        assert!(set.is_selected(ArtworkId(3)));
        assert!(set.is_selected(ArtworkId(4)));
        assert!(set.is_selected(ArtworkId(5)));
        assert!(!set.is_selected(ArtworkId(6)));
    }

    #[test]
    fn bulk_counts_only_new_records() {
        let records = page(&[1, 2, 3]);
        let mut set = SelectionSet::new();
        set.add(records[1].clone());

        // Вторая запись уже выбрана, новых только две
        assert_eq!(set.bulk_add_first_n(&records, 3), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn selection_survives_page_swap() {
        let page_one = page(&[1, 2, 3]);
        let page_two = page(&[4, 5, 6]);

        let mut set = SelectionSet::new();
        set.add(page_one[1].clone());

        // Окно страницы заменяется целиком, хранилище не трогается
        let _window = &page_two;
        assert!(set.is_selected(ArtworkId(2)));

        let _window = &page_one;
        assert!(set.is_selected(ArtworkId(2)));
    }

    #[test]
    fn removal_survives_page_swap() {
        let page_one = page(&[1, 2, 3]);

        let mut set = SelectionSet::new();
        set.add(page_one[0].clone());
        set.add(page_one[1].clone());
        set.remove(ArtworkId(1));

        // Уход на другую страницу и возврат ничего не возвращают обратно
        assert!(!set.is_selected(ArtworkId(1)));
        assert!(set.is_selected(ArtworkId(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn all_selected_equals_full_set_regardless_of_window() {
        let page_one = page(&[1, 2]);
        let page_two = page(&[3, 4]);

        let mut set = SelectionSet::new();
        set.add(page_one[0].clone());
        set.add(page_two[1].clone());

        let ids: Vec<_> = set.all_selected().iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn order_is_stable_under_removal() {
        let mut set = SelectionSet::new();
        set.add(artwork(1, "A"));
        set.add(artwork(2, "B"));
        set.add(artwork(3, "C"));
        set.remove(ArtworkId(2));

        let ids: Vec<_> = set.all_selected().iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn twelve_item_page_bulk_five() {
        // Страница из 12 записей, выбраны первые 5; после смены окна
        // счётчик остаётся 5
        let records = page(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let next_page = page(&[13, 14, 15]);

        let mut set = SelectionSet::new();
        assert_eq!(set.bulk_add_first_n(&records, 5), 5);

        let _window = &next_page;
        assert_eq!(set.len(), 5);
        let ids: Vec<_> = set.all_selected().iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
