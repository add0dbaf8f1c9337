pub mod add_dialog;
pub mod help;
pub mod list;
