use super::query::{QueryCriteria, SortKey, SortSpec};
use super::selection::SelectionTracker;
use crate::shared::list_utils::{
    get_sort_indicator, page_slice, total_pages, SortDirection, SortIndicator,
};
use contracts::domain::a001_order::Order;
use contracts::enums::StatusFilter;
use leptos::prelude::*;

/// Открытое выпадающее меню панели инструментов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarMenu {
    #[default]
    Closed,
    Filter,
    Sort,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrdersListState {
    // Search fields
    /// Текст в поле поиска (сразу)
    pub search_input: String,
    /// Текст, по которому фильтруем (после debounce)
    pub search_active: String,
    // Filter fields
    pub status_filter: StatusFilter,
    pub sort: SortSpec,
    // Pagination fields (page is 1-based)
    pub page: usize,
    pub page_size: usize,
    pub selection: SelectionTracker,
    pub hovered_row: Option<String>,
    pub open_menu: ToolbarMenu,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Строка для отрисовки: заказ и производные флаги
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow<'a> {
    pub order: &'a Order,
    pub is_selected: bool,
    pub is_hovered: bool,
    pub show_checkbox: bool,
}

/// Видимая страница и агрегаты для отрисовки
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView<'a> {
    pub rows: Vec<OrderRow<'a>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub select_all_checked: bool,
    /// На пустой странице "выбрать все" недоступен
    pub select_all_enabled: bool,
}

impl<'a> OrdersView<'a> {
    pub fn row(&self, id: &str) -> Option<&OrderRow<'a>> {
        self.rows.iter().find(|r| r.order.id == id)
    }

    pub fn orders(&self) -> Vec<&'a Order> {
        self.rows.iter().map(|r| r.order).collect()
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.order.id.clone()).collect()
    }
}

impl OrdersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_input: String::new(),
            search_active: String::new(),
            status_filter: StatusFilter::All,
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
            selection: SelectionTracker::default(),
            hovered_row: None,
            open_menu: ToolbarMenu::Closed,
        }
    }

    // ---- search ----

    pub fn set_search_input(&mut self, raw: &str) {
        self.search_input = raw.to_string();
    }

    /// Срабатывание debounce: новый поисковый запрос, возврат на первую страницу
    pub fn apply_search(&mut self, term: String) {
        log::debug!("orders: search applied {:?}", term);
        self.search_active = term;
        self.page = 1;
        self.hovered_row = None;
    }

    // ---- filter & sort ----

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        log::debug!("orders: status filter {}", filter.label());
        self.status_filter = filter;
        self.page = 1;
        self.hovered_row = None;
        self.open_menu = ToolbarMenu::Closed;
    }

    /// Выбор пункта в меню сортировки
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        log::debug!("orders: sort {} {:?}", key.code(), direction);
        self.sort = SortSpec {
            key: Some(key),
            direction,
        };
        self.page = 1;
        self.hovered_row = None;
        self.open_menu = ToolbarMenu::Closed;
    }

    /// Сортировка по строковому коду колонки. Неизвестный код = без сортировки.
    pub fn set_sort_by_name(&mut self, name: &str, direction: SortDirection) {
        match name.parse::<SortKey>() {
            Ok(key) => self.set_sort(key, direction),
            Err(e) => {
                log::warn!("orders: {}, falling back to store order", e);
                self.sort = SortSpec::default();
                self.page = 1;
                self.hovered_row = None;
                self.open_menu = ToolbarMenu::Closed;
            }
        }
    }

    /// Клик по заголовку колонки: та же колонка по возрастанию → по убыванию,
    /// иначе новая колонка по возрастанию
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = if self.sort.key == Some(key) && self.sort.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.set_sort(key, direction);
    }

    pub fn sort_indicator_for(&self, key: SortKey) -> SortIndicator {
        get_sort_indicator(self.sort.key, self.sort.direction, key)
    }

    pub fn active_status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn search_input_value(&self) -> &str {
        &self.search_input
    }

    pub fn criteria(&self) -> QueryCriteria {
        QueryCriteria {
            search: self.search_active.clone(),
            status_filter: self.status_filter,
            sort: self.sort,
        }
    }

    // ---- pagination ----

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self, total_pages: usize) -> bool {
        self.page < total_pages
    }

    /// Переход на страницу. Вне диапазона [1, total_pages] ничего не делает.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            log::warn!("orders: page {} rejected, total {}", page, total_pages);
            return false;
        }
        self.page = page;
        // строка под курсором могла уйти со страницы без mouseleave
        self.hovered_row = None;
        true
    }

    pub fn prev_page(&mut self, total_pages: usize) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.go_to_page(self.page - 1, total_pages)
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if !self.can_go_next(total_pages) {
            return false;
        }
        self.go_to_page(self.page + 1, total_pages)
    }

    // ---- selection & hover ----

    pub fn toggle_row(&mut self, id: &str) {
        self.selection.toggle_row(id);
    }

    pub fn toggle_select_all<S: AsRef<str>>(&mut self, visible_ids: &[S]) {
        self.selection.toggle_select_all_visible(visible_ids);
    }

    pub fn hover_enter(&mut self, id: &str) {
        self.hovered_row = Some(id.to_string());
    }

    pub fn hover_leave(&mut self) {
        self.hovered_row = None;
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered_row.as_deref() == Some(id)
    }

    /// Чекбокс строки виден при наведении или если строка выбрана
    pub fn show_checkbox(&self, id: &str) -> bool {
        self.is_hovered(id) || self.selection.is_selected(id)
    }

    // ---- toolbar menus ----

    /// Открывает меню (закрывая другое) или закрывает его повторным кликом
    pub fn toggle_menu(&mut self, menu: ToolbarMenu) {
        self.open_menu = if self.open_menu == menu {
            ToolbarMenu::Closed
        } else {
            menu
        };
    }

    pub fn close_menus(&mut self) {
        self.open_menu = ToolbarMenu::Closed;
    }

    // ---- derived view ----

    /// Страница из уже отфильтрованного и отсортированного списка
    pub fn page_of<'a>(&self, sorted: &[&'a Order]) -> OrdersView<'a> {
        let visible = page_slice(sorted, self.page, self.page_size);
        let visible_ids: Vec<&str> = visible.iter().map(|o| o.id.as_str()).collect();
        let rows = visible
            .iter()
            .map(|&order| OrderRow {
                order,
                is_selected: self.selection.is_selected(&order.id),
                is_hovered: self.is_hovered(&order.id),
                show_checkbox: self.show_checkbox(&order.id),
            })
            .collect();
        OrdersView {
            rows,
            current_page: self.page,
            total_pages: total_pages(sorted.len(), self.page_size),
            total_count: sorted.len(),
            select_all_checked: self.selection.all_selected(&visible_ids),
            select_all_enabled: !visible_ids.is_empty(),
        }
    }

    /// Полный пересчёт: filter → sort → paginate
    pub fn view<'a>(&self, records: &'a [Order]) -> OrdersView<'a> {
        let sorted = self.criteria().apply(records);
        self.page_of(&sorted)
    }
}

/// Create state signal
pub fn create_state(page_size: usize) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::new(page_size))
}
