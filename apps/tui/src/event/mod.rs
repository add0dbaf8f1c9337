mod loop_handler;
pub mod script;

pub use loop_handler::{run, run_headless, run_script, ScriptStats};
