use crate::config::{ADD_QUANTITY_VAR, DEBUG_VAR, LOG_FILE_VAR};
use clap::{ArgGroup, Parser};

#[derive(Debug, Parser)]
#[command(name = "shopping_list_tui", version, about = "Shopping list TUI")]
#[command(group(ArgGroup::new("add_quantity").args(["strict_add_quantity", "lenient_add_quantity"])))]
pub struct CliArgs {
    /// Read list commands from stdin and print the resulting list
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Reject unreadable quantities when adding an item (default)
    #[arg(long = "strict-add-quantity")]
    pub strict_add_quantity: bool,

    /// Treat unreadable quantities as 1 when adding an item
    #[arg(long = "lenient-add-quantity")]
    pub lenient_add_quantity: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_VAR, path);
        }
        if self.strict_add_quantity {
            std::env::set_var(ADD_QUANTITY_VAR, "strict");
        }
        if self.lenient_add_quantity {
            std::env::set_var(ADD_QUANTITY_VAR, "lenient");
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_json_flags() {
        let args = CliArgs::try_parse_from(["shopping_list_tui", "--headless", "--json"]);
        let args = args.map_err(|e| e.to_string());
        assert!(matches!(args, Ok(CliArgs { headless: true, json: true, .. })));
    }

    #[test]
    fn quantity_policy_flags_conflict() {
        let args = CliArgs::try_parse_from([
            "shopping_list_tui",
            "--strict-add-quantity",
            "--lenient-add-quantity",
        ]);
        assert!(args.is_err());
    }
}
