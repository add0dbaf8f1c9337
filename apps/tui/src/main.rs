use clap::Parser;
use color_eyre::Result;
use shopping_list_tui::app::App;
use shopping_list_tui::cli::CliArgs;
use shopping_list_tui::config::init_app_config;
use shopping_list_tui::{event, logging, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let interactive = !args.headless && is_terminal();
    logging::init_logging(&config, interactive)?;
    info!(
        add_quantity = config.add_quantity_policy.as_str(),
        interactive, "starting shopping list"
    );

    let mut app = App::new(&config);

    if !interactive {
        return event::run_headless(&mut app, args.json);
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
