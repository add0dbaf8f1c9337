use crate::app::input::helpers::{step_down, step_up};
use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE_SIZE: usize = 5;

pub fn handle_list_input(app: &mut App, key: KeyCode) {
    let total_rows = app.list.len();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('a' | 'A') => {
            app.open_add_dialog();
        }
        KeyCode::Char('e' | 'E') | KeyCode::Enter => {
            app.begin_edit_selected();
        }
        KeyCode::Char('d' | 'D') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Up => {
            app.selected_index = step_up(app.selected_index, 1);
        }
        KeyCode::Down => {
            app.selected_index = step_down(app.selected_index, 1, total_rows);
        }
        KeyCode::PageUp => {
            app.selected_index = step_up(app.selected_index, PAGE_SIZE);
        }
        KeyCode::PageDown => {
            app.selected_index = step_down(app.selected_index, PAGE_SIZE, total_rows);
        }
        KeyCode::Home => {
            app.selected_index = 0;
        }
        KeyCode::End => {
            app.selected_index = total_rows.saturating_sub(1);
        }
        _ => {}
    }
}
