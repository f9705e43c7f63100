/// Универсальные утилиты для работы со списками (поиск, сортировка, пагинация, UI компоненты)
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, содержит ли объект подстроку `needle` (уже в нижнем регистре)
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку по типизированному ключу
pub trait Sortable {
    type Key: Copy;

    /// Сравнивает два объекта по указанному ключу (по возрастанию)
    fn compare_by_key(&self, other: &Self, key: Self::Key) -> Ordering;
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Состояние индикатора сортировки в заголовке колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Asc => " ↑",
            SortIndicator::Desc => " ↓",
        }
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator<K: PartialEq>(
    current: Option<K>,
    direction: SortDirection,
    field: K,
) -> SortIndicator {
    match current {
        Some(key) if key == field => match direction {
            SortDirection::Asc => SortIndicator::Asc,
            SortDirection::Desc => SortIndicator::Desc,
        },
        _ => SortIndicator::None,
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "table__sort-icon",
        _ => "table__sort-icon table__sort-icon--active",
    }
}

/// Сортирует список по ключу. `sort_by` стабилен: равные элементы
/// сохраняют исходный относительный порядок.
pub fn sort_list<T: Sortable>(items: &mut [&T], key: T::Key, direction: SortDirection) {
    items.sort_by(|a, b| direction.apply(a.compare_by_key(b, key)));
}

/// Фильтрует список по поисковому запросу (без учёта регистра).
/// Пустой запрос пропускает всё.
pub fn filter_list<'a, T, I>(items: I, filter: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if filter.is_empty() {
        return items.into_iter().collect();
    }
    let needle = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Регистронезависимый поиск подстроки, `needle` уже в нижнем регистре
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Количество страниц; 0 для пустого списка
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Срез страницы `page` (нумерация с 1). Страница вне диапазона даёт пустой срез.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start + page_size);
    &items[start..end]
}

/// Поле поиска. Значение контролируется снаружи, debounce делает вызывающий код.
#[component]
pub fn SearchInput(
    /// Текущее значение поля (сырое, без debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Callback на каждое изменение текста
    #[prop(into)]
    on_change: Callback<String>,
    /// Путь к иконке поиска (зависит от темы)
    #[prop(into)]
    icon_src: Signal<&'static str>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <img src=move || icon_src.get() alt="Search" class="search-input__icon" />
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
