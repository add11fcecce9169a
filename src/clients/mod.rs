//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod customer_client;
pub mod employee_client;
pub mod ingredient_client;
pub mod menu_client;
pub mod order_client;
pub mod pet_client;

pub use actor_client::*;
pub use customer_client::*;
pub use employee_client::*;
pub use ingredient_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use pet_client::*;
