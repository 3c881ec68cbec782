use clap::{Parser, Subcommand};
use notepalette_core::config::PaletteConfig;
use notepalette_core::highlight::render_marked;
use notepalette_core::notes::{self, Field};
use notepalette_core::search::{FuzzySearcher, NoteMatcher, SearchHit, SearchOptions};
use tracing::{error, info};

const WRAP_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(author, version, about = "Note Palette - fuzzy command palette over demo notes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the palette TUI
    Start,
    /// Run one search and print the highlighted results
    Search {
        /// Search term; supports 'include, =exact, ^prefix, suffix$, !not and | alternatives
        #[arg(index = 1)]
        term: String,
        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every note title
    List,
}

fn main() {
    let args = Args::parse();
    let tui_mode = matches!(args.command, Some(Commands::Start) | None);

    let _guard = init_logging(tui_mode);
    notepalette_core::init();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// TUI mode logs to `<app root>/notepalette.log` so the screen stays clean;
/// everything else logs to stderr.
fn init_logging(tui_mode: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if tui_mode {
        let file = notepalette_core::path_utils::ensure_app_root().and_then(|root| {
            Ok(std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(root.join("notepalette.log"))?)
        });
        if let Ok(file) = file {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();
            return Some(guard);
        }
        // No log file, no logging: stderr would scribble over the TUI.
        return None;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
    None
}

fn load_config() -> anyhow::Result<PaletteConfig> {
    let config = PaletteConfig::load()?;
    info!(?config, "configuration loaded");
    Ok(config)
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::List) => {
            for (i, note) in notes::all().iter().enumerate() {
                println!("{:>3}  {}", i + 1, note.title);
            }
            Ok(())
        }
        Some(Commands::Start) | None => notepalette_tui::run(&load_config()?),
        Some(Commands::Search { term, limit, json }) => {
            let config = load_config()?;
            let mut options = SearchOptions::from(&config);
            if limit.is_some() {
                options.max_results = limit;
            }
            let hits = FuzzySearcher::new(notes::all(), options).search(&term);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print_hits(&hits);
            }
            Ok(())
        }
    }
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("no notes found.");
        return;
    }

    for hit in hits {
        println!("{}", render_marked(&hit.segments(Field::Title)));
        for line in textwrap::wrap(&render_marked(&hit.segments(Field::Content)), WRAP_WIDTH - 2) {
            println!("  {}", line);
        }
        println!();
    }
}
