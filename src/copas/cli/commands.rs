//! # CLI Layer
//!
//! This module is **one possible UI client** for copas; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Asks for confirmation
//! - Writes to the system clipboard
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config and the snippet store
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{
    print_messages, render_full_snippets, render_snippet_list, render_stats, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    CoreCommands, MiscCommands, SnippetCommands,
};
use copas::api::{CmdMessage, ConfigAction, CopasApi};
use copas::clipboard::{ClipboardWriter, SystemClipboard};
use copas::commands::CmdResult;
use copas::config::{ColorMode, CopasConfig};
use copas::editor::edit_text;
use copas::error::{CopasError, Result};
use copas::store::fs::FsBlobStore;
use copas::store::BlobStore;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "COPAS_DATA_DIR";

struct AppContext {
    api: CopasApi<FsBlobStore>,
    config: CopasConfig,
    use_color: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { text } => handle_add(&mut ctx, text),
            CoreCommands::List { search } => handle_list(&mut ctx, search),
            CoreCommands::Search { term } => handle_list(&mut ctx, Some(term)),
        },
        Some(Commands::Snippet(cmd)) => match cmd {
            SnippetCommands::View { selectors } => handle_view(&ctx, selectors),
            SnippetCommands::Copy { selector } => handle_copy(&ctx, selector),
            SnippetCommands::Edit { selector, text } => handle_edit(&mut ctx, selector, text),
            SnippetCommands::Delete { selectors, yes } => handle_delete(&mut ctx, selectors, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    log::debug!("data directory: {}", data_dir.display());

    let config = CopasConfig::load(&data_dir)?;
    let use_color = match config.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };
    colored::control::set_override(use_color);

    let api = CopasApi::new(FsBlobStore::new(&data_dir), data_dir);

    Ok(AppContext {
        api,
        config,
        use_color,
    })
}

/// `--data-dir`, then `COPAS_DATA_DIR`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "copas", "copas")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CopasError::Api("Could not determine data directory".to_string()))
}

/// Text from command words, else non-blank piped stdin, else the editor seeded with `initial`.
fn gather_text(words: Vec<String>, initial: &str) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .map_err(|e| CopasError::Api(format!("Could not read piped input: {}", e)))?;
        if !buffer.trim().is_empty() {
            return Ok(buffer);
        }
    }

    edit_text(initial)
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let content = gather_text(text, "")?;
    let result = ctx.api.create_snippet(&content)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_snippets(&term)?,
        None => ctx.api.list_snippets(None)?,
    };
    print!("{}", render_listing(&result, ctx.config.preview_chars, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn render_listing(result: &CmdResult, preview_chars: usize, use_color: bool) -> String {
    let mut output = render_snippet_list(&result.listed_snippets, preview_chars, use_color);
    if let Some(stats) = result.stats.as_ref().filter(|_| !result.listed_snippets.is_empty()) {
        output.push_str(&render_stats(stats, use_color));
    }
    output
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&selectors)?;
    print!("{}", render_full_snippets(&result.listed_snippets, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_copy(ctx: &AppContext, selector: String) -> Result<()> {
    let result = copy_snippet(&ctx.api, &SystemClipboard, &selector)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

/// One clipboard write for the selected snippet. A failure is logged and returned, never
/// retried.
fn copy_snippet<B: BlobStore, W: ClipboardWriter>(
    api: &CopasApi<B>,
    writer: &W,
    selector: &str,
) -> Result<CmdResult> {
    let viewed = api.view_snippets(&[selector])?;
    let ds = viewed
        .listed_snippets
        .into_iter()
        .next()
        .ok_or_else(|| CopasError::SnippetNotFound(selector.to_string()))?;

    if let Err(e) = writer.write(&ds.snippet.content) {
        log::warn!("clipboard write failed for snippet {}: {}", ds.snippet.id, e);
        return Err(e);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Copied ({}): {}",
        ds.index, ds.snippet.title
    )));
    Ok(result.with_affected_snippets(vec![ds]))
}

fn handle_edit(ctx: &mut AppContext, selector: String, text: Vec<String>) -> Result<()> {
    let content = if text.is_empty() {
        let current = ctx.api.view_snippets(&[selector.as_str()])?;
        let initial = current
            .listed_snippets
            .first()
            .map(|ds| ds.snippet.content.clone())
            .unwrap_or_default();
        gather_text(text, &initial)?
    } else {
        text.join(" ")
    };

    let result = ctx.api.update_snippet(&selector, &content)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        let targets = ctx.api.view_snippets(&selectors)?;
        let lines: Vec<String> = targets
            .listed_snippets
            .iter()
            .map(|ds| format!("  {}. {}", ds.index, ds.snippet.title))
            .collect();
        print!("{}", render_text_list(&lines, "Nothing to delete."));

        let count = lines.len();
        let noun = if count == 1 { "snippet" } else { "snippets" };
        if !confirm(&format!("Delete {} {}? [y/N] ", count, noun))? {
            print_messages(&[CmdMessage::info("Aborted.")], ctx.use_color);
            return Ok(());
        }
    }

    let result = ctx.api.delete_snippets(&selectors)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .entries()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
