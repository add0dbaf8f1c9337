use crate::app::input::helpers::is_text_char;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_add_dialog_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.cancel_add();
        }
        KeyCode::Enter => {
            app.confirm_add();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dialog_field = app.dialog_field.toggle();
        }
        KeyCode::Char(c) if is_text_char(c) => {
            app.dialog_input_mut().push(c);
        }
        KeyCode::Backspace => {
            app.dialog_input_mut().pop();
        }
        _ => {}
    }
}
