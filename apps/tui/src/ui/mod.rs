// UI module for shopping_list_tui
// Handles all rendering; reads App, never mutates it

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::list::render_list(app, f);

    if app.list.dialog.open {
        screens::add_dialog::render_add_dialog(app, f);
    }

    if app.show_help {
        screens::help::render_help(f);
    }
}

#[cfg(test)]
mod tests {
    use super::ui;
    use crate::app::App;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        terminal.draw(|f| ui(app, f))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn empty_list_shows_placeholder() -> Result<(), Box<dyn std::error::Error>> {
        let app = App::new(&AppConfig::default());
        let screen = draw(&app)?;

        assert!(screen.contains("Shopping List"));
        assert!(screen.contains("No items yet"));
        Ok(())
    }

    #[test]
    fn items_render_with_quantities() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&AppConfig::default());
        app.list.add_item("Milk", "2")?;
        app.list.add_item("Bread", "1")?;

        let screen = draw(&app)?;

        assert!(screen.contains("Milk"));
        assert!(screen.contains("Bread"));
        assert!(screen.contains("Qty: 2"));
        Ok(())
    }

    #[test]
    fn editing_row_shows_buffers() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&AppConfig::default());
        app.list.add_item("Milk", "2")?;
        app.begin_edit_selected();
        if let Some(edit) = app.edit_state.as_mut() {
            edit.name = "Oat milk".to_string();
        }

        let screen = draw(&app)?;

        assert!(screen.contains("Oat milk"));
        assert!(screen.contains("Enter: Save"));
        Ok(())
    }

    #[test]
    fn dialog_and_help_overlay_render() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&AppConfig::default());
        app.open_add_dialog();
        app.list.set_draft_name("Cheese");

        let screen = draw(&app)?;
        assert!(screen.contains("Add Shopping Item"));
        assert!(screen.contains("Cheese"));
        assert!(screen.contains("quantity: strict"));

        app.show_help = true;
        let screen = draw(&app)?;
        assert!(screen.contains("Help"));
        Ok(())
    }
}
