use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::info;

use mortgage_calculator::{
    app::{handle_key, App},
    cli::{run_quote, Cli, Command},
    logging,
    terminal::TerminalGuard,
    ui::ui,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Quote(args)) = &cli.command {
        logging::init_stderr_logging()?;
        println!("{}", run_quote(args, &cli.currency)?);
        return Ok(());
    }

    logging::init_file_logging(cli.log_file.as_deref())?;
    info!(currency = %cli.currency, "starting mortgage calculator");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.currency);
    run_app(&mut terminal, app)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(&mut app, key) {
                info!("exiting");
                return Ok(());
            }
        }
    }
}
