use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub llm: LlmConfig,
    pub ollama: OllamaConfig,
    pub sectioning: SectioningConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DOCSPLIT_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DOCSPLIT_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            llm: LlmConfig::from_env_profiled(p),
            ollama: OllamaConfig::from_env_profiled(p),
            sectioning: SectioningConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  llm:         provider={}, model={}", self.llm.provider, self.llm.model_for_provider());
        tracing::info!("  ollama:      url={}", self.ollama.url);
        tracing::info!(
            "  sectioning:  window_chars={}, chunk_target_chars={}, fallback_chunk_size={}",
            self.sectioning.window_chars,
            self.sectioning.chunk_target_chars,
            self.sectioning.fallback_chunk_size
        );
    }

    /// Return a redacted view safe to print (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "llm": {
                "provider": self.llm.provider,
                "model": self.llm.model_for_provider(),
                "temperature": self.llm.temperature,
                "max_tokens": self.llm.max_tokens,
                "configured": self.llm.is_configured(),
            },
            "ollama": { "url": self.ollama.url, "model": self.ollama.model },
            "sectioning": {
                "window_chars": self.sectioning.window_chars,
                "chunk_target_chars": self.sectioning.chunk_target_chars,
                "min_chunking_chars": self.sectioning.min_chunking_chars,
                "fallback_chunk_size": self.sectioning.fallback_chunk_size,
                "fallback_chunk_overlap": self.sectioning.fallback_chunk_overlap,
            },
        })
    }
}

// ── LLM (OpenAI / Anthropic) ─────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "openai", "anthropic", "ollama"
    pub provider: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl LlmConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            provider: profiled_env_or(p, "LLM_PROVIDER", "openai"),
            openai_api_key: profiled_env_opt(p, "OPENAI_API_KEY"),
            openai_model: profiled_env_or(p, "OPENAI_MODEL", "gpt-4o-mini"),
            openai_base_url: profiled_env_opt(p, "OPENAI_BASE_URL"),
            anthropic_api_key: profiled_env_opt(p, "ANTHROPIC_API_KEY"),
            anthropic_model: profiled_env_or(p, "ANTHROPIC_MODEL", "claude-3-5-haiku-20241022"),
            temperature: profiled_env_or(p, "LLM_TEMPERATURE", "0.0")
                .parse()
                .unwrap_or(0.0),
            max_tokens: profiled_env_u32(p, "LLM_MAX_TOKENS", 4000),
            timeout_secs: profiled_env_opt(p, "LLM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.provider.as_str() {
            "openai" => self.openai_api_key.is_some(),
            "anthropic" | "claude" => self.anthropic_api_key.is_some(),
            "ollama" => true,
            _ => false,
        }
    }

    /// Model name for the active provider ("" for ollama, which has its own config).
    pub fn model_for_provider(&self) -> &str {
        match self.provider.as_str() {
            "openai" => &self.openai_model,
            "anthropic" | "claude" => &self.anthropic_model,
            _ => "",
        }
    }
}

// ── Ollama (local models) ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
}

impl OllamaConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            url: profiled_env_or(p, "OLLAMA_URL", "http://localhost:11434"),
            model: profiled_env_or(p, "OLLAMA_MODEL", "llama3.2"),
        }
    }
}

// ── Sectioning / chunking ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectioningConfig {
    /// Character budget of one section-extraction window.
    pub window_chars: usize,
    /// Size-derived chunk length used to estimate the expected chunk count.
    pub chunk_target_chars: usize,
    /// Sections whose line-numbered text is shorter than this stay one chunk.
    pub min_chunking_chars: usize,
    /// Maximum chunk length of the fallback splitter.
    pub fallback_chunk_size: usize,
    /// Characters repeated between adjacent fallback chunks.
    pub fallback_chunk_overlap: usize,
}

impl Default for SectioningConfig {
    fn default() -> Self {
        Self {
            window_chars: 20_000,
            chunk_target_chars: 2_000,
            min_chunking_chars: 2_000,
            fallback_chunk_size: 800,
            fallback_chunk_overlap: 0,
        }
    }
}

impl SectioningConfig {
    fn from_env_profiled(p: &str) -> Self {
        let defaults = Self::default();
        Self {
            window_chars: profiled_env_usize(p, "SECTION_WINDOW_CHARS", defaults.window_chars),
            chunk_target_chars: profiled_env_usize(p, "CHUNK_TARGET_CHARS", defaults.chunk_target_chars),
            min_chunking_chars: profiled_env_usize(p, "MIN_CHUNKING_CHARS", defaults.min_chunking_chars),
            fallback_chunk_size: profiled_env_usize(p, "FALLBACK_CHUNK_SIZE", defaults.fallback_chunk_size),
            fallback_chunk_overlap: profiled_env_usize(
                p,
                "FALLBACK_CHUNK_OVERLAP",
                defaults.fallback_chunk_overlap,
            ),
        }
    }
}
