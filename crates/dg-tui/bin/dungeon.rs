//! Dungeon generator viewer
//!
//! Main entry point: interactive terminal view, or a one-shot dump with
//! --print / --json.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dg_core::dungeon::BreachPolicy;
use dg_core::{DEFAULT_ROOM_COUNT, DungeonGenerator, DungeonRng, GeneratorConfig};
use dg_tui::dump::{json_dump, text_dump};
use dg_tui::{App, GraphicsMode, Theme};

/// Room-and-corridor dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Generate and browse random dungeons", long_about = None)]
struct Args {
    /// Target room count, start room included (clamped to the configured range)
    #[arg(short = 'n', long = "rooms", default_value_t = DEFAULT_ROOM_COUNT)]
    rooms: usize,

    /// Seed for a reproducible sequence of layouts
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON generator config; missing fields keep their defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// What corridors do to room walls they cross (open, doors)
    #[arg(short = 'b', long = "breach")]
    breach: Option<BreachPolicy>,

    /// Map glyphs (classic, fancy, auto)
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,

    /// Use the light background palette
    #[arg(long = "light")]
    light: bool,

    /// Print one dungeon as text and exit
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Print one dungeon as JSON and exit
    #[arg(long = "json", conflicts_with = "print")]
    json: bool,

    /// Write logs to this file while the terminal view is open
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn headless(&self) -> bool {
        self.print || self.json
    }

    /// Defaults, then the config file, then individual flags
    fn generator_config(&self) -> io::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path).map_err(io::Error::other)?,
            None => GeneratorConfig::default(),
        };
        if let Some(policy) = self.breach {
            config.breach_policy = policy;
        }
        Ok(config)
    }
}

/// Install the log subscriber; RUST_LOG overrides the default `info` level
///
/// Headless runs log to stderr. The terminal view owns the screen, so it
/// logs only to `--log-file` when one is given.
fn init_tracing(headless: bool, log_file: Option<&Path>) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if headless {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    } else if let Some(path) = log_file {
        let file = File::create(path)?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.headless(), args.log_file.as_deref())?;

    let config = args.generator_config()?;
    let rng = args.seed.map_or_else(DungeonRng::from_entropy, DungeonRng::new);
    let mut generator = DungeonGenerator::with_rng(config, rng).map_err(io::Error::other)?;

    if args.headless() {
        let target = generator.config().clamp_room_count(args.rooms);
        let report = generator.generate(target).map_err(io::Error::other)?;
        if args.json {
            println!("{}", json_dump(generator.state())?);
        } else {
            print!("{}", text_dump(generator.state(), &report));
        }
        return Ok(());
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let mut app = App::new(generator, args.rooms, theme, args.graphics).map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main loop: draw, then wait briefly for a key
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event).map_err(io::Error::other)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
