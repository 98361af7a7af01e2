use flashcards_app::*;

use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout carries only the dialogue.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = StartupArgs::from_args(std::env::args().skip(1));
    tracing::debug!("startup arguments: {args:?}");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let (cards, _) = App::new(console, rand::rng()).run(&args);

    tracing::info!(
        "session ended with {} cards and {} transcript lines",
        cards.len(),
        cards.transcript().len()
    );
}
