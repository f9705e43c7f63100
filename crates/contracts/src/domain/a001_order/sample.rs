//! Встроенный набор заказов для таблицы. Только чтение, создаётся один раз.

use super::aggregate::{AvatarRef, Order, OrderUser};
use crate::enums::OrderStatus;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("Invalid sample order timestamp")
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    name: &str,
    avatar: AvatarRef,
    project: &str,
    address: &str,
    display_date: &str,
    sort_date: NaiveDateTime,
    status: OrderStatus,
) -> Order {
    Order {
        id: id.to_string(),
        user: OrderUser {
            name: name.to_string(),
            avatar,
        },
        project: project.to_string(),
        address: address.to_string(),
        display_date: display_date.to_string(),
        sort_date,
        status,
    }
}

static SAMPLE_ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        order(
            "#CM9801",
            "Natali Craig",
            AvatarRef::Avatar1,
            "Landing Page",
            "Meadow Lane Oakland",
            "Just now",
            at(2023, 3, 30, 10, 0),
            OrderStatus::InProgress,
        ),
        order(
            "#CM9802",
            "Kate Morrison",
            AvatarRef::Avatar2,
            "CRM Admin pages",
            "Larry San Francisco",
            "A minute ago",
            at(2023, 3, 30, 9, 59),
            OrderStatus::Complete,
        ),
        order(
            "#CM9803",
            "Drew Cano",
            AvatarRef::Avatar3,
            "Client Project",
            "Bagwell Avenue Ocala",
            "1 hour ago",
            at(2023, 3, 30, 9, 0),
            OrderStatus::Pending,
        ),
        order(
            "#CM9804",
            "Orlando Diggs",
            AvatarRef::Avatar4,
            "Admin Dashboard",
            "Washburn Baton Rouge",
            "Yesterday",
            at(2023, 3, 29, 10, 0),
            OrderStatus::Approved,
        ),
        order(
            "#CM9805",
            "Andi Lane",
            AvatarRef::Avatar5,
            "App Landing Page",
            "Nest Lane Olivette",
            "Feb 2, 2023",
            at(2023, 2, 2, 10, 0),
            OrderStatus::Rejected,
        ),
        order(
            "#CM9806",
            "Ryan Howard",
            AvatarRef::Avatar1,
            "E-Commerce Platform",
            "Elm Street Denver",
            "2 days ago",
            at(2023, 3, 28, 10, 0),
            OrderStatus::InProgress,
        ),
        order(
            "#CM9807",
            "Sophia Turner",
            AvatarRef::Avatar2,
            "Portfolio Website",
            "Broadway New York",
            "Mar 1, 2023",
            at(2023, 3, 1, 10, 0),
            OrderStatus::Complete,
        ),
        order(
            "#CM9808",
            "Ethan Hunt",
            AvatarRef::Avatar3,
            "Mobile Banking App",
            "Sunset Blvd Los Angeles",
            "Mar 10, 2023",
            at(2023, 3, 10, 10, 0),
            OrderStatus::Pending,
        ),
        order(
            "#CM9809",
            "Liam Johnson",
            AvatarRef::Avatar4,
            "Inventory System",
            "Lakeview Chicago",
            "Mar 12, 2023",
            at(2023, 3, 12, 10, 0),
            OrderStatus::Approved,
        ),
        order(
            "#CM9810",
            "Emma Wilson",
            AvatarRef::Avatar5,
            "Healthcare Dashboard",
            "Greenwood Ave Seattle",
            "Mar 15, 2023",
            at(2023, 3, 15, 10, 0),
            OrderStatus::Rejected,
        ),
        order(
            "#CM9811",
            "Daniel Carter",
            AvatarRef::Avatar6,
            "Travel Booking System",
            "Ocean Drive Miami",
            "Mar 18, 2023",
            at(2023, 3, 18, 10, 0),
            OrderStatus::InProgress,
        ),
        order(
            "#CM9812",
            "Olivia Brown",
            AvatarRef::Avatar1,
            "Learning Management",
            "King Street Boston",
            "Mar 20, 2023",
            at(2023, 3, 20, 10, 0),
            OrderStatus::Pending,
        ),
        order(
            "#CM9813",
            "James Miller",
            AvatarRef::Avatar2,
            "Restaurant POS",
            "Riverwalk San Antonio",
            "Mar 22, 2023",
            at(2023, 3, 22, 10, 0),
            OrderStatus::Approved,
        ),
        order(
            "#CM9814",
            "Sophia Lee",
            AvatarRef::Avatar3,
            "Fitness App",
            "Maple Street Austin",
            "Mar 25, 2023",
            at(2023, 3, 25, 10, 0),
            OrderStatus::Complete,
        ),
        order(
            "#CM9815",
            "Michael Scott",
            AvatarRef::Avatar4,
            "Chat Application",
            "Scranton Pennsylvania",
            "Mar 28, 2023",
            at(2023, 3, 28, 10, 0),
            OrderStatus::Rejected,
        ),
    ]
});

/// Все заказы в исходном порядке
pub fn sample_orders() -> &'static [Order] {
    &SAMPLE_ORDERS
}
