use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "copas",
    bin_name = "copas",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep text snippets at hand and copy them in one step", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding snippets and config (overrides COPAS_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Snippet,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Snippet => "Per-Snippet Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "search" => Some(CommandGroup::Core),
            "view" | "copy" | "edit" | "delete" => Some(CommandGroup::Snippet),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Snippet, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("copas {version}\n"));
    output.push_str("Keep text snippets at hand and copy them in one step\n");
    output.push('\n');
    output.push_str("Usage: copas [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <PATH>  Directory holding snippets and config\n");
    output.push_str("  -v, --verbose          Verbose output\n");
    output.push_str("  -h, --help             Print help\n");
    output.push_str("  -V, --version          Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List { .. } => "list",
            CoreCommands::Search { .. } => "search",
        },
        Some(Commands::Snippet(c)) => match c {
            SnippetCommands::View { .. } => "view",
            SnippetCommands::Copy { .. } => "copy",
            SnippetCommands::Edit { .. } => "edit",
            SnippetCommands::Delete { .. } => "delete",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

/// Prints help for a command by name or alias
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    // Building propagates bin names so usage lines read `copas <command>`
    cmd.build();

    if let Some(subcmd) = cmd.find_subcommand_mut(name) {
        let help = subcmd.render_help();
        print!("{}", help);
        return;
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Finds a `-h`/`--help` request in raw arguments (program name excluded).
///
/// Returns `None` when no help was asked for, otherwise the first positional argument,
/// which names the command the help is for. Scanning stops at `--`.
pub fn help_target<I: AsRef<str>>(args: &[I]) -> Option<Option<String>> {
    let mut wants_help = false;
    let mut target = None;
    let mut skip_value = false;

    for arg in args {
        let arg = arg.as_ref();
        if skip_value {
            skip_value = false;
            continue;
        }
        match arg {
            "--" => break,
            "-h" | "--help" => wants_help = true,
            "--data-dir" => skip_value = true,
            _ if target.is_none() && !arg.starts_with('-') => target = Some(arg.to_string()),
            _ => {}
        }
    }

    wants_help.then_some(target)
}

/// Answers a help request before clap validates arguments, so `copas copy --help` works
/// without a selector. Returns true when help was printed.
pub fn print_help_if_requested<I: AsRef<str>>(args: &[I]) -> bool {
    match help_target(args) {
        None => false,
        Some(None) => {
            print_grouped_help();
            true
        }
        Some(Some(name)) => {
            print_help_for_command(&name);
            true
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Snippet(SnippetCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a snippet (from words, piped input or the editor)
    #[command(visible_alias = "a", alias = "new", display_order = 1)]
    Add {
        /// Snippet text words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List snippets
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search snippets by title or content
    #[command(alias = "s", display_order = 3)]
    Search { term: String },
}

#[derive(Subcommand, Debug)]
pub enum SnippetCommands {
    /// Print snippets in full
    #[command(alias = "v", display_order = 10)]
    View {
        /// Indexes or ids of the snippets (e.g. 1 3 0190f3a2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Copy a snippet to the clipboard
    #[command(aliases = ["c", "cp"], display_order = 11)]
    Copy {
        /// Index or id of the snippet
        selector: String,
    },

    /// Replace a snippet's content
    #[command(alias = "e", display_order = 12)]
    Edit {
        /// Index or id of the snippet
        selector: String,

        /// New text words (joined with spaces; opens the editor when omitted)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "rm", display_order = 13)]
    Delete {
        /// Indexes or ids of the snippets (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (preview-chars, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for copas or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
