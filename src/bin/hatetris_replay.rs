//! Play a replay string against an enemy and print where it ends up.
//!
//! The replay may be hex, base65536 or base2048. The final well goes to
//! stdout with the score and the replay re-encoded in `--encoding`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use tokio::sync::Mutex;

use hatetris::core::{RotationSystem, WellConfig};
use hatetris::enemy::EnemyKind;
use hatetris::replay::Encoding;
use hatetris::session::{Mode, PlaybackConfig, ReplayPlayer, Session};

#[derive(Parser)]
#[command(name = "hatetris-replay")]
#[command(about = "Replay a HATETRIS game against one of the built-in enemies")]
struct Cli {
    /// Replay string (hex, base65536 or base2048)
    replay: String,

    /// hatetris, hatetris-naive, brz, burgiel or lovetris
    #[arg(long, default_value = "hatetris")]
    enemy: EnemyKind,

    /// JSON file with `width`, `depth` and `bar`
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    depth: Option<usize>,

    #[arg(long)]
    bar: Option<usize>,

    /// Encoding of the replay printed at the end
    #[arg(long, default_value = "base65536")]
    encoding: Encoding,

    /// Pause between replayed moves
    #[arg(long, default_value_t = 0)]
    step_delay_ms: u64,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_log(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<WellConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn well_config(cli: &Cli) -> Result<WellConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WellConfig::hatetris(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(bar) = cli.bar {
        config.bar = bar;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level: LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level {:?}", cli.log_level))?;
    init_log(level)?;

    let config = well_config(&cli)?;
    let session = Session::new(RotationSystem::hatetris(), config, cli.enemy.build())?;
    let session = Arc::new(Mutex::new(session));

    let playback = PlaybackConfig {
        step_delay_ms: cli.step_delay_ms,
    };
    if let Some(task) = ReplayPlayer::start(&session, &cli.replay, playback).await? {
        task.await?;
    }

    let session = session.lock().await;
    if let Some(state) = session.current() {
        print!("{}", state.core.well.render(config.width, config.bar));
    }
    println!("enemy: {}", cli.enemy);
    println!("score: {}", session.score());
    if session.mode() == Mode::GameOver {
        println!("game over");
    }
    println!("replay: {}", session.export_replay(cli.encoding));

    if let Some(err) = session.error() {
        return Err(anyhow!("{} ({err})", err.interpretation()));
    }
    Ok(())
}
