//! Pure data structures (DTOs) managed by the resource actors.

pub mod item;
pub mod menu;
pub mod order;
pub mod product;
pub mod table_order;
pub mod user;

pub use item::*;
pub use menu::*;
pub use order::*;
pub use product::*;
pub use table_order::*;
pub use user::*;
