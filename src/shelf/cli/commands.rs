//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application.
//! It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Sets up logging
//! - Parses arguments
//! - Formats output for people
//!
//! ## Flow
//!
//! 1. Parse arguments with clap (`setup.rs`)
//! 2. Install the tracing subscriber (`-v` raises the default level)
//! 3. Build the [`AppContext`]: open the library, read the color preference
//! 4. Turn the subcommand into an API call
//! 5. Render the [`shelf::commands::CmdResult`] (`render.rs`)
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.
//! Messages at error level (no matches, unknown title) are normal output.
//!
//! ## Testing
//!
//! Argument parsing is tested in `setup.rs`, output in `render.rs`. The
//! end-to-end behavior of the binary is covered by `tests/cli.rs`.

use super::render::{
    print_messages, render_books, render_messages, render_stats, render_text_list,
};
use super::setup::{
    parse, print_grouped_help, print_help_for_command, CatalogCommands, Cli, Commands,
    CompletionShell, DataCommands, MiscCommands, SearchBy,
};
use shelf::api::{CmdMessage, ConfigAction, ShelfApi};
use shelf::error::Result;
use shelf::init::initialize;
use shelf::model::Book;
use shelf::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::prelude::*;

struct AppContext {
    api: ShelfApi<FileStore>,
    /// `None` means detect from the terminal.
    color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = parse();
    init_logging(cli.verbose);

    // Completions and help don't need the library
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Completions { shell })) => {
            return handle_completions(*shell)
        }
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            return handle_help(command.clone())
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::Add {
                title,
                author,
                year,
                genre,
                read,
            } => {
                let book = Book::new(title.join(" "), author, year, genre, read.is_read());
                handle_add(&mut ctx, book)
            }
            CatalogCommands::Remove { title } => handle_remove(&mut ctx, title.join(" ")),
            CatalogCommands::Search { query, by } => handle_search(&mut ctx, query.join(" "), by),
            CatalogCommands::List { compact } => handle_list(&mut ctx, compact),
            CatalogCommands::Stats => handle_stats(&mut ctx),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Import { paths } => handle_import(&mut ctx, paths),
            DataCommands::Export {
                single_file,
                output,
            } => handle_export(&ctx, single_file, output),
            DataCommands::Titles => handle_titles(&mut ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Exit => handle_exit(&mut ctx),
            MiscCommands::CompleteTitles => handle_complete_titles(&ctx),
            MiscCommands::Help { .. } | MiscCommands::Completions { .. } => Ok(()),
        },
        None => handle_list(&mut ctx, false),
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "shelf=debug" } else { "shelf=warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.file.clone())?;
    debug!(color = %ctx.config.color, "context ready");
    let color = ctx.config.color.forced();

    // `shelf config` reports the same problem through its own messages.
    let is_config = matches!(
        cli.command,
        Some(Commands::Misc(MiscCommands::Config { .. }))
    );
    if let Some(warning) = ctx.config_warning.filter(|_| !is_config) {
        eprint!(
            "{}",
            render_messages(&[CmdMessage::warning(warning)], color)
        );
    }

    Ok(AppContext {
        api: ctx.api,
        color,
    })
}

fn handle_add(ctx: &mut AppContext, book: Book) -> Result<()> {
    let result = ctx.api.add_book(book)?;
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_book(title)?;
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String, by: SearchBy) -> Result<()> {
    let result = ctx.api.search_books(by.into(), query)?;
    print!("{}", render_books(&result.listed_books, false, ctx.color));
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, compact: bool) -> Result<()> {
    let result = ctx.api.list_books()?;
    print!("{}", render_books(&result.listed_books, compact, ctx.color));
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats, ctx.color));
    }
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_titles(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.titles()?;
    print!(
        "{}",
        render_text_list(&result.titles, "Library is empty.", ctx.color)
    );
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<String>) -> Result<()> {
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let result = ctx.api.import_books(paths)?;
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    single_file: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let out_dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let result = match single_file {
        Some(name) => ctx.api.export_single_file(&out_dir, &name)?,
        None => ctx.api.export_archive(&out_dir)?,
    };
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .as_ref()
            .map(|config| {
                config
                    .list_all()
                    .into_iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect()
            })
            .unwrap_or_default();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.color)
        );
    }
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_exit(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.exit()?;
    print_messages(&result.messages, ctx.color);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

fn handle_completions(shell: CompletionShell) -> Result<()> {
    match shell {
        CompletionShell::Bash => print!("{}", BASH_COMPLETION_SCRIPT),
        CompletionShell::Zsh => print!("{}", ZSH_COMPLETION_SCRIPT),
    }
    Ok(())
}

/// One title per line, unstyled, for the completion scripts.
fn handle_complete_titles(ctx: &AppContext) -> Result<()> {
    for title in ctx.api.library().titles() {
        println!("{}", title);
    }
    Ok(())
}

const BASH_COMPLETION_SCRIPT: &str = include_str!("bash.completion.sh");
const ZSH_COMPLETION_SCRIPT: &str = include_str!("z-completion.sh");
