use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use charlearner::app::App;
use charlearner::character::{EnrichedCharacter, ServiceMessage, record::enrich_all};
use charlearner::cli::{Cli, Command};
use charlearner::config::{self, Config, ConfigResult};
use charlearner::lookup::SearchClient;
use charlearner::{CharLearnerError, logging};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(path) = logging::resolve_log_path(cli.log_file.as_deref())
        && let Err(e) = logging::init(&path)
    {
        eprintln!("Warning: could not open log file {}: {}", path.display(), e);
    }

    let ConfigResult {
        mut config,
        warning,
    } = load_config(cli.config.as_deref())?;
    if let Some(server) = &cli.server {
        config.server.url = server.clone();
    }

    let client = SearchClient::from_config(&config.server).map_err(CharLearnerError::from)?;
    log::info!("Using search service at {}", client.base_url());

    match cli.command {
        Some(command) => run_command(command, client, warning),
        None => run_tui(&config, client, warning, cli.character),
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigResult, CharLearnerError> {
    match path {
        Some(path) if !path.exists() => Err(CharLearnerError::Config(format!(
            "config file not found: {}",
            path.display()
        ))),
        Some(path) => Ok(config::load_config_from_path(path)),
        None => Ok(config::load_config()),
    }
}

fn run_command(command: Command, client: SearchClient, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    if let Command::Clear { yes: false } = command {
        return Err(CharLearnerError::Confirmation("clear the database".to_string()).into());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut stdout = io::stdout().lock();
    match command {
        Command::Search { character, json } => {
            let characters = runtime
                .block_on(client.search_enriched(&character))
                .map_err(CharLearnerError::from)?;
            print_characters(&mut stdout, &characters, json)?;
        }
        Command::List { json } => {
            let records = runtime
                .block_on(client.list_all())
                .map_err(CharLearnerError::from)?;
            print_characters(&mut stdout, &enrich_all(records), json)?;
        }
        Command::Seed => {
            let message = runtime
                .block_on(client.fetch_top())
                .map_err(CharLearnerError::from)?;
            print_message(&mut stdout, &message)?;
        }
        Command::Clear { .. } => {
            let message = runtime
                .block_on(client.clear_database())
                .map_err(CharLearnerError::from)?;
            print_message(&mut stdout, &message)?;
        }
    }
    Ok(())
}

fn print_characters(
    out: &mut impl Write,
    characters: &[EnrichedCharacter],
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, characters)?;
        writeln!(out)?;
        return Ok(());
    }

    if characters.is_empty() {
        writeln!(out, "No matching characters.")?;
        return Ok(());
    }

    for character in characters {
        writeln!(out, "#{} {}", character.id(), character.name())?;
        for (label, value) in character.detail_lines() {
            writeln!(out, "  {}: {}", label, value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_message(out: &mut impl Write, message: &ServiceMessage) -> Result<()> {
    match message.total_characters {
        Some(total) => writeln!(out, "{} ({} characters)", message.message, total)?,
        None => writeln!(out, "{}", message.message)?,
    }
    Ok(())
}

fn run_tui(
    config: &Config,
    client: SearchClient,
    warning: Option<String>,
    character: Option<String>,
) -> Result<()> {
    let mut app = App::new(config);
    app.connect(client)?;

    if let Some(warning) = warning {
        app.notification.show_error(&warning);
    }
    if let Some(character) = character.filter(|c| !c.is_empty()) {
        app.select_character(&character);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, app));

    // Restore before any error is reported
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
