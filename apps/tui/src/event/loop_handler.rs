use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, BufRead, Stdout, Write};
use tracing::{debug, warn};

use crate::app::{handle_input, App};
use crate::event::script::{parse_line, ScriptCommand};
use crate::list::{ListSnapshot, ShoppingListState};
use crate::ui;

/// Run the application in headless mode: commands on stdin, list on stdout
pub fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_script(&mut app.list, stdin.lock(), &mut stdout, json)?.into_result()?;
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub applied: usize,
    pub failed_lines: usize,
}

impl ScriptStats {
    /// Fails when any line was not applied, so scripted callers get a non-zero exit.
    pub fn into_result(self) -> Result<Self> {
        if self.failed_lines > 0 {
            warn!(failed = self.failed_lines, "some script lines were not applied");
            return Err(color_eyre::eyre::eyre!(
                "{} of {} script lines were not applied",
                self.failed_lines,
                self.failed_lines + self.applied
            ));
        }
        Ok(self)
    }
}

/// Feeds every line of `input` into `list`, reporting problems inline, and
/// prints the final list when the input ends.
pub fn run_script(
    list: &mut ShoppingListState,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<ScriptStats> {
    let mut stats = ScriptStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                stats.failed_lines += 1;
                writeln!(out, "line {line_number}: {e}")?;
                continue;
            }
        };

        match command {
            ScriptCommand::Print => write_snapshot(out, &list.snapshot(), json, false)?,
            ScriptCommand::Event(event) => {
                let description = event.to_string();
                match list.dispatch(event) {
                    Ok(_) => {
                        stats.applied += 1;
                        debug!(line = line_number, event = %description, "applied");
                    }
                    Err(e) => {
                        stats.failed_lines += 1;
                        writeln!(out, "line {line_number}: add rejected: {e}")?;
                    }
                }
            }
        }
    }

    write_snapshot(out, &list.snapshot(), json, true)?;
    Ok(stats)
}

fn write_snapshot(
    out: &mut impl Write,
    snapshot: &ListSnapshot,
    json: bool,
    pretty: bool,
) -> Result<()> {
    if json {
        let rendered = if pretty {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string(snapshot)?
        };
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    writeln!(out, "Shopping List ({} items)", snapshot.items.len())?;
    for item in &snapshot.items {
        let marker = if item.is_editing { " (editing)" } else { "" };
        writeln!(
            out,
            "- #{} {} | Qty: {}{marker}",
            item.id, item.name, item.quantity
        )?;
    }
    if snapshot.dialog.open {
        writeln!(
            out,
            "Add dialog open: name={:?} quantity={:?}",
            snapshot.dialog.draft_name, snapshot.dialog.draft_quantity
        )?;
    }
    Ok(())
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    // Windows reports both press and release
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_)) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                }
            }
        }
    }
    Ok(())
}
