use std::collections::HashSet;

/// Выбранные строки таблицы (по id заказа).
///
/// Выбор не зависит от поиска, фильтра, сортировки и страницы: id может
/// оставаться выбранным, даже если строка сейчас не видна.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    pub fn toggle_row(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Состояние чекбокса "выбрать все": видимых строк больше нуля и все выбраны
    pub fn all_selected<S: AsRef<str>>(&self, visible_ids: &[S]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.is_selected(id.as_ref()))
    }

    /// Клик по "выбрать все": если вся видимая страница выбрана, снимает с неё
    /// выбор, иначе добавляет её целиком. Выбор на других страницах не трогает.
    pub fn toggle_select_all_visible<S: AsRef<str>>(&mut self, visible_ids: &[S]) {
        if visible_ids.is_empty() {
            return;
        }
        if self.all_selected(visible_ids) {
            for id in visible_ids {
                self.selected.remove(id.as_ref());
            }
        } else {
            self.selected
                .extend(visible_ids.iter().map(|id| id.as_ref().to_string()));
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_row_flips_membership() {
        let mut sel = SelectionTracker::default();
        sel.toggle_row("#CM9801");
        assert!(sel.is_selected("#CM9801"));
        sel.toggle_row("#CM9801");
        assert!(!sel.is_selected("#CM9801"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_adds_then_removes_visible() {
        let mut sel = SelectionTracker::default();
        let page = ["#CM9801", "#CM9802", "#CM9803"];
        sel.toggle_row("#CM9802");

        sel.toggle_select_all_visible(&page);
        assert!(sel.all_selected(&page));
        assert_eq!(sel.len(), 3);

        sel.toggle_select_all_visible(&page);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_keeps_other_pages() {
        let mut sel = SelectionTracker::default();
        let first = ["#CM9801", "#CM9802"];
        let second = ["#CM9811", "#CM9812"];
        sel.toggle_row("#CM9811");
        sel.toggle_row("#CM9812");

        // Выбрано столько же, сколько строк на странице, но не эти строки
        assert!(!sel.all_selected(&first));
        sel.toggle_select_all_visible(&first);
        assert_eq!(sel.len(), 4);

        sel.toggle_select_all_visible(&first);
        assert!(sel.all_selected(&second));
        assert!(!sel.is_selected("#CM9801"));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_empty_visible_set_is_noop() {
        let mut sel = SelectionTracker::default();
        sel.toggle_row("#CM9805");
        let none: [&str; 0] = [];
        sel.toggle_select_all_visible(&none);
        assert!(!sel.all_selected(&none));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut sel = SelectionTracker::default();
        sel.toggle_select_all_visible(&["#CM9801", "#CM9802"]);
        sel.clear();
        assert!(sel.is_empty());
    }
}
