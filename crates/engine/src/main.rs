//! Realmkeeper Engine - Main entry point.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;
mod registry;
mod use_cases;

use app::App;
use infrastructure::clock::{SystemClock, SystemRandom};
use infrastructure::document_store::JsonDocumentStore;
use infrastructure::notifier::TracingNotifier;
use infrastructure::settings::EngineSettings;
use infrastructure::world::HeadlessWorld;
use realmkeeper_shared::{Command, CommandResult, RejectionCode};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (Taskfile runs the engine from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging. Replies own stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "realmkeeper_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Realmkeeper Engine");

    let settings = EngineSettings::from_env();
    tracing::info!(data_dir = %settings.data_dir.display(), "Loaded settings");

    let store = Arc::new(JsonDocumentStore::new(settings.data_dir.clone()));
    let world = Arc::new(HeadlessWorld::new(settings.world_spawn.clone()));
    let mut app = App::new(
        &settings,
        store,
        Arc::new(SystemClock::new()),
        Arc::new(SystemRandom::new()),
        world,
        Arc::new(TracingNotifier::new()),
    );

    run_loop(&mut app, io::stdin().lock(), io::stdout().lock())
}

/// JSON-lines protocol loop: one command per input line, one reply per
/// output line. Malformed lines get a rejection reply and the loop keeps
/// going; only input closing ends it.
fn run_loop(app: &mut App, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => api::dispatch(app, command),
            Err(e) => CommandResult::error(
                RejectionCode::Validation,
                format!("Malformed command: {}", e),
            ),
        };
        serde_json::to_writer(&mut output, &reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
