//! Command line interface.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ck_core::history::HistoryItem;

const PREVIEW_CHARS: usize = 60;

/// Keeps a history of copied text.
#[derive(Debug, Parser)]
#[command(name = "clipkeep", version, about = "Clipboard history keeper with pinned entries")]
pub struct Cli {
    /// Read configuration from this file instead of the app data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard until Ctrl-C (default)
    Run,
    /// Print the saved history and exit
    List,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}

/// One line per item: index, `*` for pinned entries, first-line preview.
pub fn render_history(items: &[HistoryItem], out: &mut impl Write) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "(history is empty)");
    }

    let width = items.len().to_string().len();
    for (index, item) in items.iter().enumerate() {
        let marker = if item.is_pinned { '*' } else { ' ' };
        writeln!(
            out,
            "{index:>width$} {marker} {}",
            item.preview(PREVIEW_CHARS)
        )?;
    }
    Ok(())
}
