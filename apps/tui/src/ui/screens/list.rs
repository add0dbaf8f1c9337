use crate::app::state::{EditItemState, FormField};
use crate::app::App;
use crate::domain::ShoppingItem;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_list(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Items
            Constraint::Length(1), // Status
            Constraint::Length(2), // Shortcuts
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(f, chunks[0]);
    render_items(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
    render_shortcuts(app, f, chunks[3]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title = TextLine::from(vec![
        Span::styled(
            "Shopping List",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            "[a] Add Item",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_items(app: &App, f: &mut Frame<'_>, area: Rect) {
    let items = app.list.items();

    if items.is_empty() {
        let block = Block::default()
            .title("Items")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let paragraph = Paragraph::new("No items yet. Press 'a' to add one.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![Cell::from("#"), Cell::from("Name"), Cell::from("Qty")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Borders plus header row
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(items.len(), max_visible_rows, app.selected_index);

    let rows = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, item)| {
            let editor = app
                .edit_state
                .as_ref()
                .filter(|edit| edit.id == item.id && item.is_editing);
            match editor {
                Some(edit) => editing_row(item, edit),
                None => viewing_row(item, index == app.selected_index),
            }
        });

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("Items ({})", items.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn viewing_row(item: &ShoppingItem, selected: bool) -> Row<'static> {
    let style = if selected {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(item.id.to_string()),
        Cell::from(item.name.clone()),
        Cell::from(format!("Qty: {}", item.quantity)),
    ])
    .style(style)
}

fn editing_row(item: &ShoppingItem, edit: &EditItemState) -> Row<'static> {
    let field_cell = |field: FormField, value: &str| {
        let focused = edit.field == field;
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let cursor = if focused { "_" } else { "" };
        Cell::from(Span::styled(format!("{value}{cursor}"), style))
    };

    Row::new(vec![
        Cell::from(format!("►{}", item.id)),
        field_cell(FormField::Name, &edit.name),
        field_cell(FormField::Quantity, &edit.quantity),
    ])
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.status_message.is_empty() {
        return;
    }

    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Left);
    f.render_widget(status, area);
}

fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ]
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hints: Vec<[Span<'static>; 2]> = if app.list.dialog.open {
        vec![
            key_hint("Tab", ": Switch field   "),
            key_hint("Enter", ": Add   "),
            key_hint("Esc", ": Cancel"),
        ]
    } else if app.is_editing() {
        vec![
            key_hint("Tab", ": Switch field   "),
            key_hint("Enter", ": Save   "),
            key_hint("↑/↓", ": Edit neighbour"),
        ]
    } else {
        vec![
            key_hint("a", ": Add   "),
            key_hint("e/Enter", ": Edit   "),
            key_hint("d", ": Delete   "),
            key_hint("↑/↓", ": Navigate   "),
            key_hint("F1", ": Help   "),
            key_hint("q", ": Quit"),
        ]
    };

    let spans: Vec<Span<'static>> = hints.into_iter().flatten().collect();
    let help_paragraph = Paragraph::new(TextLine::from(spans))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
