use crate::app::state::FormField;
use crate::app::App;
use crate::ui::widgets::popup::fixed_centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_add_dialog(app: &App, f: &mut Frame<'_>) {
    let area = fixed_centered_rect(50, 12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("Add Shopping Item")
        .title_bottom(format!(
            " quantity: {} ",
            app.list.add_quantity_policy().as_str()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Quantity
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
        ])
        .split(area);

    let dialog = &app.list.dialog;
    let field = |field: FormField, value: &str| {
        let focused = app.dialog_field == field;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };
        Paragraph::new(format!("{value}{cursor}")).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border),
        )
    };

    f.render_widget(field(FormField::Name, &dialog.draft_name), chunks[0]);
    f.render_widget(
        field(FormField::Quantity, &dialog.draft_quantity),
        chunks[1],
    );

    if !app.status_message.is_empty() {
        let error = Paragraph::new(app.status_message.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(error, chunks[2]);
    }

    let button = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let buttons = TextLine::from(vec![
        Span::styled(" Add (Enter) ", button),
        Span::raw("   "),
        Span::styled(" Cancel (Esc) ", button),
    ]);
    f.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        chunks[3],
    );
}
