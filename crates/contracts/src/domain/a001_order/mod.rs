pub mod aggregate;
pub mod sample;

pub use aggregate::{validate_orders, AvatarRef, Order, OrderStoreError, OrderUser};
pub use sample::sample_orders;
