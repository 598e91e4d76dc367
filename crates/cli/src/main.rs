mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use docsplit_core::config::{load_dotenv, Config};
use docsplit_llm::LlmBoundaryOracle;
use docsplit_sectioning::{segment, segment_and_chunk, RecursiveCharacterSplitter};

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    load_dotenv();
    let mut config = Config::from_env();
    args.apply_to(&mut config);
    config.log_summary();

    let document = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let oracle = LlmBoundaryOracle::from_config(&config.llm, &config.ollama)
        .context("failed to create LLM provider")?;

    let output = if args.sections_only {
        let segmented = segment(&document, &oracle, &config.sectioning)
            .await
            .context("sectioning failed")?;
        serde_json::to_value(&segmented.sections)?
    } else {
        let splitter = RecursiveCharacterSplitter::new(
            config.sectioning.fallback_chunk_size,
            config.sectioning.fallback_chunk_overlap,
        );
        let chunks = segment_and_chunk(&document, &oracle, &splitter, &config.sectioning)
            .await
            .with_context(|| format!("failed to split {}", args.file.display()))?;
        serde_json::to_value(&chunks)?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    info!(file = %args.file.display(), bytes = rendered.len(), "writing output");
    println!("{rendered}");

    Ok(())
}
