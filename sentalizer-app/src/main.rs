use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use sentalizer_app::report::{render_text, run_report};
use sentalizer_common::observability::{init_logging, LogConfig, LogFormat};
use sentalizer_config::{LogEncoding, OutputFormat, SentalizerConfig, SentalizerConfigLoader};
use sentalizer_http::PageFetcher;
use sentalizer_nlp::Summarizer;

const DEFAULT_CONFIG_FILE: &str = "sentalizer.yaml";

#[derive(Parser)]
#[command(
    name = "sentalizer",
    about = "Fetch a page and report its sentence-level sentiment"
)]
struct Cli {
    /// URL of the page to analyze
    url: String,
    /// Config file path; `./sentalizer.yaml` is picked up automatically
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins)
    let mut loader = SentalizerConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        loader = loader.with_file(DEFAULT_CONFIG_FILE);
    }
    let cfg = loader.load()?;

    init_logging(log_config(&cfg))?;

    let mut fetcher = PageFetcher::new()?
        .with_timeout(Duration::from_secs(cfg.fetch.timeout_secs))
        .with_retries(cfg.fetch.retries);
    if let Some(ua) = cfg.fetch.user_agent.clone() {
        fetcher = fetcher.with_user_agent(ua);
    }

    let summarizer = Summarizer::new();

    match run_report(&fetcher, &summarizer, &cli.url).await {
        Ok(report) => {
            if cli.json || cfg.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_text(&report));
            }
            Ok(())
        }
        Err(err) => {
            tracing::warn!(url = %cli.url, error = %err, "report.failed");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}

fn log_config(cfg: &SentalizerConfig) -> LogConfig {
    LogConfig {
        log_dir: cfg.log.dir.clone().map(PathBuf::from),
        emit_stderr: cfg.log.stderr,
        format: match cfg.log.format {
            LogEncoding::Text => LogFormat::Text,
            LogEncoding::Json => LogFormat::Json,
        },
        default_filter: cfg.log.filter.clone(),
    }
}
