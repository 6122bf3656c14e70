mod commands;
mod render;
mod setup;

pub use commands::run;
pub use setup::{print_help_if_requested, Cli};
