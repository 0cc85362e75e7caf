//! Unblur - terminal front end
//!
//! Plays rounds from a JSON catalogue, reading guesses from stdin.
//!
//! Usage:
//!     unblur --catalog rounds.json
//!     unblur --catalog rounds.json --category animals --config unblur.json
//!
//! Commands while playing: `/skip`, `/quit`. After a round is revealed, press
//! enter to continue.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use unblur::hints::HintPolicy;
use unblur::llm::ChatClient;
use unblur::{
    CatalogSource, Config, DisabledJudge, GameSession, HintGenerator, IgnoreReason,
    JsonFileStore, LlmHintGenerator, LlmJudge, MatchEngine, SemanticJudge, StaticHints,
    SubmitOutcome,
};
use unblur_core::{Phase, RoundOutcome, RoundSnapshot};

#[derive(Parser, Debug)]
#[command(name = "unblur")]
#[command(about = "Guess the subject of a progressively unblurred image")]
#[command(version)]
struct Args {
    /// JSON catalogue of rounds
    #[arg(long)]
    catalog: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only play rounds from this category
    #[arg(long)]
    category: Option<String>,

    /// Where the high score is kept
    #[arg(long, default_value = "unblur-scores.json")]
    scores: PathBuf,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> unblur::Result<()> {
    let args = Args::parse();
    unblur::tracing::init_with_filter(&args.log_level);

    let config = Config::load(args.config.as_deref())?;
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    let judge: Arc<dyn SemanticJudge> = if config.judge.is_enabled() {
        Arc::new(LlmJudge::new(ChatClient::new(&config.judge)?))
    } else {
        info!("no judge endpoint configured, semantic matching disabled");
        Arc::new(DisabledJudge)
    };
    let hints: Arc<dyn HintGenerator> = if config.hints.llm.is_enabled() {
        Arc::new(LlmHintGenerator::new(ChatClient::new(&config.hints.llm)?))
    } else {
        Arc::new(StaticHints)
    };

    let store = JsonFileStore::open(&args.scores)?;
    info!(path = %store.path().display(), "score store ready");

    let session = GameSession::builder()
        .game(config.game.clone())
        .engine(MatchEngine::new(
            config.matching.clone(),
            judge,
            config.judge.timeout(),
        ))
        .source(Arc::new(CatalogSource::load(&args.catalog)?))
        .hints(
            hints,
            HintPolicy {
                timeout: config.hints.llm.timeout(),
                min_contextual_len: config.hints.min_contextual_len,
            },
        )
        .store(Box::new(store))
        .category(args.category)
        .build()?;

    session.load_next().await?;
    render(&session.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        match input {
            "/quit" => break,
            "/skip" => session.skip().await?,
            _ if session.phase() == Phase::Revealed => session.next_round().await?,
            _ => match session.submit_guess(input).await {
                SubmitOutcome::Evaluated(verdict) if !verdict.is_valid => println!("Not quite."),
                SubmitOutcome::Evaluated(_) => {}
                SubmitOutcome::Ignored(IgnoreReason::EmptyGuess) => continue,
                SubmitOutcome::Ignored(reason) => println!("(guess ignored: {:?})", reason),
            },
        }
        render(&session.snapshot());
    }

    println!("Best score: {}", session.snapshot().high_score);
    Ok(())
}

fn render(snap: &RoundSnapshot) {
    match snap.phase {
        Phase::Loading => println!("Loading next image..."),
        Phase::Active => {
            println!();
            println!(
                "[blur {:>2}] score {:>3} | attempt {}/{} | best {}",
                snap.blur,
                snap.score,
                snap.attempts + 1,
                snap.max_attempts,
                snap.high_score
            );
            if let Some(hint) = &snap.hint {
                println!("Hint: {}", hint);
            }
            println!("What is in the picture?");
        }
        Phase::Revealed => {
            let answer = snap.answer.as_deref().unwrap_or("?");
            match snap.outcome {
                Some(RoundOutcome::Solved) => {
                    println!("Correct! It was \"{}\". You scored {}.", answer, snap.score)
                }
                _ => println!("Out of attempts. It was \"{}\".", answer),
            }
            println!("Press enter for the next image, /quit to stop.");
        }
    }
}
