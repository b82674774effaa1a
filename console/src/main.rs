mod autopilot;
mod config;
mod input;
mod renderer;
mod session;

use std::io::BufReader;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::{SessionRng, SnakeGame, log, logger};
use tokio::sync::mpsc;

use autopilot::Autopilot;
use config::{AutopilotKind, Config, get_config_manager};
use renderer::{TerminalRenderer, score_message};

#[derive(Parser)]
#[command(name = "snake_console", about = "Play grid snake in the terminal")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the tick interval from the config
    #[arg(long)]
    tick_ms: Option<u64>,

    #[arg(long, value_enum)]
    autopilot: Option<AutopilotKind>,

    #[arg(long)]
    no_board: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the default config to the config path and exits
    #[arg(long)]
    write_default_config: bool,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(tick_ms) = args.tick_ms {
        config.game.tick_interval_ms = tick_ms;
    }
    if args.autopilot.is_some() {
        config.console.autopilot = args.autopilot;
    }
    if args.no_board {
        config.console.show_board = false;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written");
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = SnakeGame::new(&config.game, rng)?;

    let renderer = TerminalRenderer::new(
        std::io::stdout(),
        config.game.grid_width,
        config.game.grid_height,
        config.console.show_board,
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        input::read_commands(BufReader::new(std::io::stdin()), command_tx);
    });

    let autopilot = config.console.autopilot.map(Autopilot::new);
    let summary = session::run(
        game,
        renderer,
        command_rx,
        config.game.tick_interval(),
        autopilot,
    )
    .await?;

    match summary.reason {
        Some(reason) => log!(
            "Game over ({}) after {} ticks -- {}",
            reason,
            summary.ticks,
            score_message(summary.score)
        ),
        None => log!(
            "Stopped after {} ticks -- {}",
            summary.ticks,
            score_message(summary.score)
        ),
    }

    Ok(())
}
