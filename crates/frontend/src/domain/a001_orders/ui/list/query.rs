//! Фильтрация и сортировка заказов. Чистые функции от (набор заказов, критерии).

use crate::shared::list_utils::{
    contains_ci, filter_list, sort_list, Searchable, SortDirection, Sortable,
};
use contracts::domain::a001_order::Order;
use contracts::enums::StatusFilter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// Колонки, по которым можно сортировать таблицу заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0:?}")]
pub struct ParseSortKeyError(pub String);

impl SortKey {
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::User => "user",
            SortKey::Project => "project",
            SortKey::Address => "address",
            SortKey::Date => "date",
            SortKey::Status => "status",
        }
    }

    /// Подпись в меню сортировки
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::User => "User Name",
            SortKey::Project => "Project",
            SortKey::Address => "Address",
            SortKey::Date => "Date",
            SortKey::Status => "Status",
        }
    }

    /// Заголовок колонки таблицы
    pub fn column_title(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::User => "User",
            SortKey::Project => "Project",
            SortKey::Address => "Address",
            SortKey::Date => "Date",
            SortKey::Status => "Status",
        }
    }

    pub fn all() -> [SortKey; 6] {
        [
            SortKey::Id,
            SortKey::User,
            SortKey::Project,
            SortKey::Address,
            SortKey::Date,
            SortKey::Status,
        ]
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::all()
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Текущая сортировка: `key == None` означает исходный порядок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl Searchable for Order {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.id, needle)
            || contains_ci(&self.user.name, needle)
            || contains_ci(&self.project, needle)
            || contains_ci(&self.address, needle)
    }
}

impl Sortable for Order {
    type Key = SortKey;

    fn compare_by_key(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Id => self.id.cmp(&other.id),
            SortKey::User => self.user.name.cmp(&other.user.name),
            SortKey::Project => self.project.cmp(&other.project),
            SortKey::Address => self.address.cmp(&other.address),
            SortKey::Date => self.sort_date.cmp(&other.sort_date),
            SortKey::Status => self.status.display_name().cmp(other.status.display_name()),
        }
    }
}

/// Параметры, от которых зависит отфильтрованный и отсортированный список.
/// Номер страницы сюда не входит.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCriteria {
    pub search: String,
    pub status_filter: StatusFilter,
    pub sort: SortSpec,
}

impl QueryCriteria {
    /// filter → sort
    pub fn apply<'a>(&self, records: &'a [Order]) -> Vec<&'a Order> {
        let mut rows: Vec<&Order> = filter_list(records, &self.search)
            .into_iter()
            .filter(|order| self.status_filter.matches(order.status))
            .collect();
        if let Some(key) = self.sort.key {
            sort_list(&mut rows, key, self.sort.direction);
        }
        rows
    }
}
