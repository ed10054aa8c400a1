//! CineList CLI: terminal show search with a favorites list

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use cinelist::app::{AppCommand, CineList};
use cinelist::data::{FileStore, KeyValueStore, Settings, ShowId};
use cinelist::providers::{ShowProvider, TvMazeProvider};
use cinelist::render::{Card, CardBuffer, Region};

#[derive(Parser)]
#[command(name = "cinelist", about = "Search shows and keep a favorites list", version)]
struct Cli {
    /// Search to run on startup
    query: Option<String>,

    /// Directory for persisted favorites
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the show search API
    #[arg(long)]
    base_url: Option<String>,

    /// Settings file (defaults to settings.json in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One line of user input
#[derive(Debug, PartialEq)]
enum Input {
    Command(AppCommand),
    Show(Region),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

const HELP: &str = "\
Commands:
  search <term>   (s)   search shows
  add <id>        (a)   add a show from the results to favorites
  remove <id>     (rm)  remove a favorite
  results         (r)   show the last results
  favorites       (f)   show favorites
  help                  show this help
  quit            (q)   exit";

/// Split off the command word at the first whitespace character
fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((at, sep)) => (&line[..at], Some(&line[at + sep.len_utf8()..])),
        None => (line, None),
    }
}

/// Parse a line of input; the search term is kept exactly as typed
fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = split_command(line.trim_start());
    let arg = rest.map(str::trim).filter(|arg| !arg.is_empty());

    match (word, arg) {
        ("", _) => Input::Empty,
        ("search" | "s", _) => Input::Command(AppCommand::Search(rest.unwrap_or("").to_string())),
        ("add" | "a", Some(id)) => Input::Command(AppCommand::AddFavorite(ShowId::new(id))),
        ("remove" | "rm", Some(id)) => Input::Command(AppCommand::RemoveFavorite(ShowId::new(id))),
        ("results" | "r", None) => Input::Show(Region::Results),
        ("favorites" | "f", None) => Input::Show(Region::Favorites),
        ("help" | "h" | "?", None) => Input::Help,
        ("quit" | "q" | "exit", None) => Input::Quit,
        _ => Input::Unknown(line.trim().to_string()),
    }
}

fn format_card(card: &Card) -> String {
    let mut text = format!(
        "  {:>8}  {:<40}  [{}]  {}",
        card.action.id(),
        card.title,
        card.action.label(),
        card.image_url
    );

    let extra: Vec<&str> = [Some(card.details.as_str()), card.link.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if !extra.is_empty() {
        text.push_str("\n            ");
        text.push_str(&extra.join("  "));
    }
    text
}

fn print_region(out: &mut impl Write, buffer: &CardBuffer, region: Region) -> io::Result<()> {
    let (heading, empty) = match region {
        Region::Results => ("Results", "  (no results)"),
        Region::Favorites => ("Favorites", "  (no favorites yet)"),
    };
    let cards = buffer.cards(region);
    writeln!(out, "{heading} ({})", cards.len())?;
    if cards.is_empty() {
        writeln!(out, "{empty}")?;
    }
    for card in cards {
        writeln!(out, "{}", format_card(card))?;
    }
    Ok(())
}

fn run<P: ShowProvider, S: KeyValueStore>(
    app: &mut CineList<P, S, CardBuffer>,
    command: AppCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    let region = match command {
        AppCommand::Search(_) => Region::Results,
        AppCommand::AddFavorite(_) | AppCommand::RemoveFavorite(_) => Region::Favorites,
    };

    match app.handle_command(command) {
        Ok(()) => print_region(out, app.surface(), region),
        Err(e) if e.is_duplicate() => writeln!(out, "! {e}"),
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(dir) = cli.data_dir {
        settings.data_dir = Some(dir);
    }
    if let Some(url) = cli.base_url {
        settings.base_url = url;
    }

    let provider = TvMazeProvider::with_options(&settings.base_url, settings.request_timeout())?;
    let store = FileStore::new(settings.resolved_data_dir()?);
    tracing::debug!(dir = ?store.dir(), base_url = %settings.base_url, "opening favorites");
    let mut app = CineList::start(provider, store, CardBuffer::new())?;

    let mut out = io::stdout();
    print_region(&mut out, app.surface(), Region::Favorites)?;

    if let Some(query) = cli.query {
        run(&mut app, AppCommand::Search(query), &mut out)?;
    }

    writeln!(out, "Type 'help' for commands.")?;
    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match parse_line(&line) {
            Input::Command(command) => run(&mut app, command, &mut out)?,
            Input::Show(region) => print_region(&mut out, app.surface(), region)?,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => break,
            Input::Empty => {}
            Input::Unknown(text) => writeln!(out, "Unknown command: {text} (try 'help')")?,
        }
    }

    Ok(())
}
