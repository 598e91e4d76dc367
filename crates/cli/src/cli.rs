use std::path::PathBuf;

use clap::Parser;

use docsplit_core::Config;

/// Split a long text document into titled sections and bounded-size chunks.
///
/// Section and chunk boundaries come from an LLM; settings not given on the
/// command line are read from the environment (and `.env`).
#[derive(Parser, Debug)]
#[command(name = "docsplit", about = "Split a document into titled sections and chunks")]
pub struct CliArgs {
    /// Text file to split
    pub file: PathBuf,

    /// LLM provider: openai, anthropic, or ollama (overrides LLM_PROVIDER)
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name override for the selected provider
    #[arg(long)]
    pub model: Option<String>,

    /// Characters per section-extraction window (overrides SECTION_WINDOW_CHARS)
    #[arg(long)]
    pub window_chars: Option<usize>,

    /// Stop after sectioning and print sections instead of chunks
    #[arg(long)]
    pub sections_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the environment config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref provider) = self.provider {
            config.llm.provider = provider.to_lowercase();
        }
        if let Some(ref model) = self.model {
            match config.llm.provider.as_str() {
                "anthropic" | "claude" => config.llm.anthropic_model = model.clone(),
                "ollama" => config.ollama.model = model.clone(),
                _ => config.llm.openai_model = model.clone(),
            }
        }
        if let Some(window_chars) = self.window_chars {
            config.sectioning.window_chars = window_chars;
        }
    }
}
