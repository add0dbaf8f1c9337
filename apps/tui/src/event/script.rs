use crate::domain::ItemId;
use crate::list::ListEvent;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),
    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{command}: \"{value}\" is not an item id")]
    InvalidId { command: &'static str, value: String },
    #[error("{0}: takes no arguments")]
    UnexpectedArguments(&'static str),
}

/// One line of a headless script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Event(ListEvent),
    Print,
}

/// Quantity token meaning "leave the quantity field empty".
const EMPTY_QUANTITY: &str = "-";

/// Parses one script line. Blank lines and `#` comments yield `Ok(None)`.
///
/// ```text
/// open
/// add <quantity> <name...>
/// cancel
/// edit <id>
/// save <id> <quantity> <name...>
/// delete <id>
/// list
/// ```
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let parsed = match command.to_lowercase().as_str() {
        "open" => {
            no_arguments("open", rest)?;
            ScriptCommand::Event(ListEvent::AddOpen)
        }
        "cancel" => {
            no_arguments("cancel", rest)?;
            ScriptCommand::Event(ListEvent::AddCancel)
        }
        "list" => {
            no_arguments("list", rest)?;
            ScriptCommand::Print
        }
        "add" => {
            let (quantity, name) = split_token(rest);
            let quantity = quantity_token("add", quantity)?;
            ScriptCommand::Event(ListEvent::AddConfirm {
                name: name.to_string(),
                quantity,
            })
        }
        "edit" => ScriptCommand::Event(ListEvent::EditStart(item_id("edit", rest)?)),
        "delete" => ScriptCommand::Event(ListEvent::Delete(item_id("delete", rest)?)),
        "save" => {
            let (id, rest) = split_token(rest);
            let id = item_id("save", id)?;
            let (quantity, name) = split_token(rest);
            let quantity = quantity_token("save", quantity)?;
            ScriptCommand::Event(ListEvent::EditSave {
                id,
                name: name.to_string(),
                quantity,
            })
        }
        _ => return Err(ScriptError::UnknownCommand(command.to_string())),
    };

    Ok(Some(parsed))
}

fn split_token(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(head, tail)| (head, tail.trim()))
}

const fn no_arguments(command: &'static str, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArguments(command))
    }
}

fn item_id(command: &'static str, token: &str) -> Result<ItemId, ScriptError> {
    if token.is_empty() {
        return Err(ScriptError::MissingArgument {
            command,
            what: "item id",
        });
    }
    ItemId::parse(token).ok_or_else(|| ScriptError::InvalidId {
        command,
        value: token.to_string(),
    })
}

fn quantity_token(command: &'static str, token: &str) -> Result<String, ScriptError> {
    match token {
        "" => Err(ScriptError::MissingArgument {
            command,
            what: "quantity",
        }),
        EMPTY_QUANTITY => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}
