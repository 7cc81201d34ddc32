pub mod health;
pub mod add;
pub mod define;
pub mod remove;
pub mod list;

pub use health::health_handler;
pub use add::add_handler;
pub use define::define_handler;
pub use remove::{delete_handler, remove_handler};
pub use list::list_handler;
