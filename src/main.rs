use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use mystery_number::app;
use mystery_number::config::{Config, DEFAULT_FRAME_RATE};
use mystery_number::frontend::Terminal;
use mystery_number::game::{GameController, RngSource};

#[derive(Parser)]
#[command(name = "mystery-number")]
#[command(about = "Guess the secret number before you run out of attempts")]
#[command(version)]
struct Cli {
    /// Frames per second
    #[arg(long = "fps", default_value_t = DEFAULT_FRAME_RATE)]
    fps: u32,

    /// Seed for the secret number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            frame_rate: cli.fps,
            seed: cli.seed,
            log_file: cli.log_file,
            verbosity: cli.verbose,
        }
    }
}

fn init_logging(config: &Config) -> Result<()> {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level());
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });

    // The game owns the screen, so log lines go to a file when one is given.
    if let Some(path) = &config.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    config.validate()?;
    init_logging(&config)?;

    info!(
        "starting mystery-number {} ({} fps, seed {:?})",
        env!("CARGO_PKG_VERSION"),
        config.frame_rate,
        config.seed
    );

    let mut controller = GameController::new(RngSource::from_seed(config.seed))
        .context("building the screen machine")?;
    let mut terminal = Terminal::begin().context("setting up the terminal")?;

    let outcome = app::run(&mut terminal, &mut controller, &config);
    terminal.end().context("restoring the terminal")?;
    outcome?;

    if let Some(best) = controller.best_score() {
        println!("Best score this session: {}", best);
    }
    info!("goodbye");
    Ok(())
}
