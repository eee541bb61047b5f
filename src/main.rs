use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tfquiz::core::config::{self, CliOverrides};
use tfquiz::core::question::{default_bank, load_bank};
use tfquiz::logging;

#[derive(Parser)]
#[command(name = "tfquiz", about = "True/false quiz for the terminal")]
struct Args {
    /// TOML file of [[questions]] (text, answer). Defaults to the built-in bank
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Don't ring the bell when the quiz completes
    #[arg(long)]
    mute: bool,

    /// Log level for tfquiz.log: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger first so config loading is logged; the level is narrowed below
    if let Err(e) = logging::init_file_logger(Path::new(logging::LOG_FILE)) {
        eprintln!("tfquiz: logging disabled: {e}");
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            eprintln!("tfquiz: {e}; using defaults");
            config::QuizConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            questions_file: args.questions,
            mute: args.mute,
            log_level: args.log_level,
        },
    );

    logging::apply_level(resolved.log_level);

    log::info!("tfquiz starting up");
    log::debug!("Resolved config: {:?}", resolved);

    let bank = match &resolved.questions_file {
        Some(path) => load_bank(path).map_err(|e| {
            log::error!("Failed to load questions from {}: {}", path.display(), e);
            std::io::Error::other(format!(
                "failed to load questions from {}: {e}",
                path.display()
            ))
        })?,
        None => default_bank(),
    };

    tfquiz::tui::run(resolved, Arc::new(bank))
}
