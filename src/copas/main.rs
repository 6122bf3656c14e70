use clap::Parser;
use env_logger::{Builder, Env};

mod cli;

/// Level comes from RUST_LOG; otherwise `warn`, or `debug` with `--verbose`.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if cli::print_help_if_requested(&args) {
        return;
    }

    let cli = cli::Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
