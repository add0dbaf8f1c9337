use crate::app::state::App;
use crossterm::event::KeyCode;

mod add_dialog;
mod edit_item;
mod help;
mod list;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.list.dialog.open {
        add_dialog::handle_add_dialog_input(app, key);
    } else if app.is_editing() {
        edit_item::handle_edit_item_input(app, key);
    } else {
        list::handle_list_input(app, key);
    }
}
