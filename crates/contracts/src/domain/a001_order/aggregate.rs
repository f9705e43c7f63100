use crate::enums::OrderStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Ссылка на аватар пользователя (картинка не зависит от темы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvatarRef {
    Avatar1,
    Avatar2,
    Avatar3,
    Avatar4,
    Avatar5,
    Avatar6,
}

impl AvatarRef {
    pub fn asset_path(&self) -> &'static str {
        match self {
            AvatarRef::Avatar1 => "/assets/avatars/avatar1.png",
            AvatarRef::Avatar2 => "/assets/avatars/avatar2.png",
            AvatarRef::Avatar3 => "/assets/avatars/avatar3.png",
            AvatarRef::Avatar4 => "/assets/avatars/avatar4.png",
            AvatarRef::Avatar5 => "/assets/avatars/avatar5.png",
            AvatarRef::Avatar6 => "/assets/avatars/avatar6.png",
        }
    }
}

/// Пользователь, оформивший заказ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub avatar: AvatarRef,
}

/// Заказ (строка таблицы заказов)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Идентификатор вида `#CM9801`, непрозрачный
    pub id: String,
    pub user: OrderUser,
    pub project: String,
    pub address: String,
    /// Дата для отображения ("Just now", "Mar 1, 2023"), не для сортировки
    pub display_date: String,
    /// Точный момент времени, используется при сортировке по дате
    pub sort_date: NaiveDateTime,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderStoreError {
    #[error("duplicate order id {0}")]
    DuplicateId(String),
    #[error("malformed order id {0:?}, expected #CM followed by four digits")]
    MalformedId(String),
}

fn is_well_formed_id(id: &str) -> bool {
    id.strip_prefix("#CM")
        .is_some_and(|digits| digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Проверка целостности набора заказов: уникальные id в формате `#CM####`
pub fn validate_orders(orders: &[Order]) -> Result<(), OrderStoreError> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !is_well_formed_id(&order.id) {
            return Err(OrderStoreError::MalformedId(order.id.clone()));
        }
        if !seen.insert(order.id.as_str()) {
            return Err(OrderStoreError::DuplicateId(order.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            user: OrderUser {
                name: "Test User".to_string(),
                avatar: AvatarRef::Avatar1,
            },
            project: "Project".to_string(),
            address: "Street".to_string(),
            display_date: "Today".to_string(),
            sort_date: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        assert_eq!(validate_orders(&[order("#CM0001"), order("#CM0002")]), Ok(()));
        assert_eq!(validate_orders(&[]), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        assert_eq!(
            validate_orders(&[order("#CM0001"), order("#CM0001")]),
            Err(OrderStoreError::DuplicateId("#CM0001".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_malformed_ids() {
        for bad in ["CM0001", "#CM001", "#CM00012", "#CMabcd", "#XX0001"] {
            assert_eq!(
                validate_orders(&[order(bad)]),
                Err(OrderStoreError::MalformedId(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }
}
