mod config;
mod console_observer;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::serpent::{SerpentSession, SessionCommand, SessionRunner};
use common::version::VERSION;
use common::{log, logger};
use console_observer::ConsoleObserver;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "serpent_headless", version)]
struct Args {
    /// YAML config file; defaults to serpent_headless_config.yaml next to the binary.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    games: Option<u32>,
    /// Write the effective configuration back to the config file.
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Serpent".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = config::get_config_manager(args.config.as_deref());
    let mut config = manager.get_config()?;
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    if args.save_config {
        manager.set_config(&config)?;
        log!("configuration saved");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "serpent_headless {} playing {} game(s) on {}x{}, seed {}",
        VERSION,
        config.games,
        config.game.field_width,
        config.game.field_height,
        rng.seed()
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let observer = ConsoleObserver::new(
        command_tx.clone(),
        config.games,
        config.max_ticks_per_game,
        config.event_log_size,
    );

    let quit_tx = command_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log!("Shutdown signal received, stopping session...");
            let _ = quit_tx.send(SessionCommand::Quit);
        }
    });

    command_tx.send(SessionCommand::Start)?;
    let session = SerpentSession::new(config.game.clone(), rng, 0)?;
    let session = SessionRunner::new(session, observer.clone())
        .run(command_rx)
        .await;

    for event in observer.recent_events().await {
        log!("{}", event);
    }
    for (index, summary) in observer.summaries().await.iter().enumerate() {
        log!(
            "game #{}: {} points, level {}, {} ticks, {}",
            index + 1,
            summary.final_score,
            summary.level,
            summary.ticks,
            summary.reason
        );
    }
    log!("high score: {}", session.high_score());

    Ok(())
}
