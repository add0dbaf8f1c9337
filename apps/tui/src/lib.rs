// Library surface for shopping_list_tui; the binary in main.rs drives it

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod list;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use domain::{ItemId, QuantityError, QuantityPolicy, ShoppingItem};
pub use list::{ListEvent, ListSnapshot, ShoppingListState};
