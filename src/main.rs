//! Colabino - a collaborative workspace in the terminal
//!
//! A TUI prototype of a workspace front-end: drive listing, channel
//! chat with threads and pins, a data browser with simulated audio
//! playback and image review, and an issue board.

mod app;
mod config;
mod ui;
mod util;
mod workspace;

use anyhow::Result;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use ui::{App, Route, WorkspaceApp};
use workspace::chat::ChatRoom;
use workspace::drive::DriveView;
use workspace::issues::IssueBoard;

#[derive(Parser, Debug)]
#[command(
    name = "colabino",
    about = "A terminal prototype of the Colabino collaborative workspace",
    version
)]
struct Args {
    /// Route to open on launch (apps, drive, search, upload, shared, starred, settings)
    #[arg(short, long)]
    route: Option<String>,

    /// Print workspace summary and exit (no TUI)
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.summary {
        print_summary();
        return Ok(());
    }

    let mut config = Config::load();
    if let Some(slug) = &args.route {
        match Route::from_slug(slug) {
            Some(route) => config.default_route = Some(route.slug().to_string()),
            None => {
                eprintln!("Unknown route '{}'. Known routes:", slug);
                for route in Route::ALL {
                    eprintln!("  {}", route.slug());
                }
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app::runtime::run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Plain-text counts for scripts and smoke tests.
fn print_summary() {
    let drive = DriveView::new();
    let summary = drive.summary();
    println!("Drive: {} items", drive.items.len());
    println!("  live sessions   {}", summary.live_files);
    println!("  needs attention {}", summary.needs_attention);
    println!("  access issues   {}", summary.restricted);
    println!("  healthy flow    {}", summary.healthy);

    let chat = ChatRoom::new("You");
    println!(
        "Chat: {} channels, {} messages, {} pinned",
        chat.channels.len(),
        chat.messages.len(),
        chat.pinned_messages().len()
    );

    let board = IssueBoard::new();
    println!("Projects: {} issues", board.issues.len());
    for (section, issues) in board.grouped() {
        println!("  {:<12} {}", section.label(), issues.len());
    }

    println!(
        "Apps: {}",
        WorkspaceApp::ALL
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
