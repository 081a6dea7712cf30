mod cli;
mod commands;
mod editor_utils;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, ListArgs};
use render::{RenderOptions, Renderer, use_color};
use std::process::ExitCode;
use tj_core::{Config, Journal};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tj: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, `warn` and up unless `RUST_LOG` says otherwise.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut journal = match cli.store {
        Some(store_path) => Journal::with_config(Config {
            store_path,
            ..Config::load()?
        })?,
        None => Journal::new()?,
    };

    let command = cli.command.unwrap_or_else(|| Command::List(ListArgs::default()));
    let (short_mode, sentence_lines) = match &command {
        Command::List(args) => (args.short, !args.raw),
        _ => (false, true),
    };
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: journal.config.date_format.clone(),
        use_color: use_color(cli.color),
        short_mode,
        sentence_lines,
    }));

    tracing::debug!(?command, store = %journal.config.store_path.display(), "running");
    match command {
        Command::Add(args) => commands::add::run(&mut journal, &renderer, args),
        Command::List(args) => commands::list::run(&journal, &renderer, &args),
        Command::Dates => commands::list::dates(&journal, &renderer),
        Command::Delete { id } => commands::delete::run(&mut journal, &renderer, id),
        Command::Export(args) => commands::export::run(&journal, &renderer, args),
        Command::Path => {
            renderer.print_info(&format!("{}", journal.config.store_path.display()));
            Ok(())
        }
    }
}
