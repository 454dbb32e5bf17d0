// codescope: token and symbol viewer for C-like and Python source

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codescope::error::CliError;
use codescope::lexer::Language;
use codescope::report::{self, Format, Section};
use codescope::ui::samples::sample_source;
use codescope::ui::{App, SourceOrigin};

/// Lex C-like or Python source and list the functions and variables it declares.
#[derive(Debug, Parser)]
#[command(name = "codescope", version, about)]
struct Cli {
    /// Source file to analyze; the built-in sample is used when omitted
    file: Option<PathBuf>,

    /// Language of the source (c-like or python); guessed from the file extension by default
    #[arg(short, long)]
    language: Option<Language>,

    /// Print tables to stdout instead of starting the viewer
    #[arg(long, value_enum)]
    dump: Option<Section>,

    /// Output format for --dump
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Log to stderr, except in the viewer where stderr would corrupt the
/// screen unless `CODESCOPE_LOG` asks for it.
fn init_logging(interactive: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("codescope=warn"));

    if !interactive || std::env::var_os("CODESCOPE_LOG").is_some() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init();
    }
}

fn run_viewer(mut app: App) -> Result<(), CliError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CliError::from)
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.dump.is_none());

    let language = cli
        .language
        .or_else(|| cli.file.as_deref().map(Language::from_path))
        .unwrap_or_default();

    let (source, origin) = match &cli.file {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|source| CliError::ReadSource {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), %language, bytes = source.len(), "loaded source");
            (source, SourceOrigin::File(path.clone()))
        }
        None => {
            info!(%language, "using built-in sample");
            (sample_source(language).to_string(), SourceOrigin::Sample)
        }
    };

    match cli.dump {
        Some(section) => {
            let analysis = codescope::analyze(&source, language);
            let output = report::render(&analysis, section, cli.format)?;
            io::stdout().write_all(output.as_bytes())?;
            Ok(())
        }
        None => run_viewer(App::new(source, origin, language)),
    }
}
