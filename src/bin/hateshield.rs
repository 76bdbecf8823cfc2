//! HateShield CLI - analyze text against a running HateShield backend

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hateshield::analysis::backend::{ClassifierBackend, HttpBackend};
use hateshield::analysis::error::FailureKind;
use hateshield::analysis::session::{AnalysisSession, Phase};
use hateshield::analysis::types::{BulkAnalyzeRequest, Language};
use hateshield::config::BackendConfig;
use hateshield::render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to analyze; opens an interactive prompt when omitted
    text: Option<String>,

    /// Language hint: auto, en, hi or gu (overrides config)
    #[arg(short, long)]
    language: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analyze each line of the given file in one bulk request
    #[arg(long)]
    bulk: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BackendConfig::from_file(path)?,
        None => BackendConfig::load_default(),
    };

    // Apply CLI overrides
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(language) = &args.language {
        config.language = language.parse::<Language>().map_err(anyhow::Error::msg)?;
    }

    let backend = Arc::new(HttpBackend::new(&config));

    if let Some(path) = &args.bulk {
        return run_bulk(backend, &config, path).await;
    }

    let session = AnalysisSession::with_language(backend.clone(), config.language);

    match args.text {
        Some(text) => run_once(&session, text).await,
        None => run_interactive(&session, backend).await,
    }
}

/// Submit a single text, print the outcome, exit non-zero on failure
async fn run_once(session: &AnalysisSession, text: String) -> anyhow::Result<()> {
    session.set_text(text).await;
    session.submit().await;

    let view = session.view().await;
    println!("{}", render::render_view(&view));
    if view.phase == Phase::Failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Prompt loop mirroring the web page: type text, get a verdict
async fn run_interactive(session: &AnalysisSession, backend: Arc<HttpBackend>) -> anyhow::Result<()> {
    match backend.ping().await {
        Ok(message) => println!("{}", message),
        Err(cause) => {
            tracing::warn!(%cause, "backend liveness probe failed");
            println!("Warning: backend is not reachable yet");
        }
    }
    println!("Type text to analyze it. Commands: :lang <code>, :quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if line == ":quit" {
            break;
        }
        if let Some(code) = line.strip_prefix(":lang") {
            match code.trim().parse::<Language>() {
                Ok(language) => {
                    session.set_language(language).await;
                    println!("Language: {}", language.label());
                }
                Err(message) => println!("{}", message),
            }
            continue;
        }

        session.set_text(line).await;
        session.submit().await;
        println!("{}", render::render_view(&session.view().await));
    }

    Ok(())
}

/// One bulk request for every non-blank line of the file
async fn run_bulk(
    backend: Arc<HttpBackend>,
    config: &BackendConfig,
    path: &Path,
) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let texts: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    if texts.is_empty() {
        anyhow::bail!("no text lines in {}", path.display());
    }

    let request = BulkAnalyzeRequest {
        texts,
        language: config.language,
    };
    let items = match backend.analyze_bulk(&request).await {
        Ok(items) => items,
        Err(cause) => {
            tracing::warn!(%cause, "bulk analysis failed");
            anyhow::bail!("{}", FailureKind::BackendUnavailable.message());
        }
    };

    for item in items {
        println!("#{} {}", item.id, item.text);
        println!("{}", render::render_result(&item.result));
    }
    Ok(())
}
