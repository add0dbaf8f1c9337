// App module for shopping_list_tui
// Holds view state and maps key presses onto the shopping list

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, EditItemState, FormField};
