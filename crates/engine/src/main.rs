//! Wild shape engine - command-line entry point.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wildshape_engine::{run, AppConfig, Command, FormLibrary};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run` works from any crate directory.
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildshape_engine=info,wildshape_domain=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let library = FormLibrary::load(&config).context("Loading form library")?;
    let output = run(&command, &library, config.output)?;
    println!("{output}");

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
