use crate::app::input::helpers::{is_text_char, step_down, step_up};
use crate::app::state::App;
use crossterm::event::KeyCode;

/// Keys while a row is open in the inline editor. Saving is the only way out.
pub fn handle_edit_item_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.save_edit();
        }
        KeyCode::Up | KeyCode::Down => {
            let next = if key == KeyCode::Up {
                step_up(app.selected_index, 1)
            } else {
                step_down(app.selected_index, 1, app.list.len())
            };
            if next != app.selected_index {
                app.selected_index = next;
                app.begin_edit_selected();
            }
        }
        _ => {
            if let Some(edit_state) = &mut app.edit_state {
                match key {
                    KeyCode::Tab | KeyCode::BackTab => {
                        edit_state.field = edit_state.field.toggle();
                    }
                    KeyCode::Char(c) if is_text_char(c) => {
                        edit_state.focused_mut().push(c);
                    }
                    KeyCode::Backspace => {
                        edit_state.focused_mut().pop();
                    }
                    _ => {}
                }
            }
        }
    }
}
