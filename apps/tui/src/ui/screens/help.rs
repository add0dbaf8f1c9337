use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("a", "Open the add item dialog"),
    ("e / Enter", "Edit the selected item"),
    ("d / Delete", "Delete the selected item"),
    ("↑ ↓ PgUp PgDn", "Move the selection"),
    ("Tab", "Switch between name and quantity"),
    ("Enter (editing)", "Save the item"),
    ("Esc (dialog)", "Cancel adding"),
    ("q", "Quit"),
    ("F1 / Esc", "Close this help"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<TextLine<'_>> = BINDINGS
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(format!("{key:<16}"), key_style),
                Span::raw(*action),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
