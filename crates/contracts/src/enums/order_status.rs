use serde::{Deserialize, Serialize};

/// Статусы заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Человекочитаемое название. Сортировка по статусу идёт по этой строке.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// CSS-класс бейджа статуса
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "status-in-progress",
            OrderStatus::Complete => "status-complete",
            OrderStatus::Pending => "status-pending",
            OrderStatus::Approved => "status-approved",
            OrderStatus::Rejected => "status-rejected",
        }
    }

    /// Все статусы в порядке отображения в меню фильтра
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::InProgress,
            OrderStatus::Complete,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Rejected,
        ]
    }
}

/// Фильтр по статусу: все заказы или только один статус
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    /// Пункты меню фильтра: "All" и затем каждый статус
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }
}
