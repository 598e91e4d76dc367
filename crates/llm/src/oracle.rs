use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use docsplit_core::config::{LlmConfig, OllamaConfig};
use docsplit_core::{BoundaryOracle, ChunkCandidate, OracleError, SectionCandidate};

use crate::json::extract_json;
use crate::prompts::{chunk_prompt, section_prompt};
use crate::provider::{LlmError, LlmProvider, Message};

/// Boundary oracle backed by a chat-completion LLM.
///
/// Each call sends one system prompt plus the line-numbered window as the user
/// message and decodes the JSON object in the reply.
pub struct LlmBoundaryOracle {
    provider: Box<dyn LlmProvider>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct StructuredDocument {
    sections: Vec<SectionCandidate>,
}

#[derive(Deserialize)]
struct StructuredChunks {
    chunks: Vec<ChunkCandidate>,
}

impl LlmBoundaryOracle {
    pub fn new(provider: Box<dyn LlmProvider>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            provider,
            temperature,
            max_tokens,
        }
    }

    /// Build from config, creating the appropriate provider.
    pub fn from_config(
        llm_config: &LlmConfig,
        ollama_config: &OllamaConfig,
    ) -> Result<Self, LlmError> {
        let provider = crate::providers::create_provider(llm_config, ollama_config)?;
        info!(provider = provider.name(), "boundary oracle ready");
        Ok(Self::new(provider, llm_config.temperature, llm_config.max_tokens))
    }

    async fn ask<T: DeserializeOwned>(
        &self,
        system_prompt: String,
        windowed_text: &str,
    ) -> Result<T, OracleError> {
        let messages = vec![Message::system(system_prompt), Message::user(windowed_text)];

        let response = self
            .provider
            .complete(messages, self.temperature, self.max_tokens)
            .await
            .map_err(|e| OracleError::Provider(e.to_string()))?;

        debug!(provider = self.provider.name(), "LLM response: {}", response);

        serde_json::from_str(extract_json(&response)).map_err(|e| OracleError::Decode {
            reason: e.to_string(),
            raw_response: response.clone(),
        })
    }
}

#[async_trait]
impl BoundaryOracle for LlmBoundaryOracle {
    async fn propose_sections(
        &self,
        windowed_text: &str,
        start_line: usize,
        end_line: usize,
    ) -> Result<Vec<SectionCandidate>, OracleError> {
        let doc: StructuredDocument = self
            .ask(section_prompt(start_line, end_line), windowed_text)
            .await?;
        debug!(start_line, end_line, count = doc.sections.len(), "sections proposed");
        Ok(doc.sections)
    }

    async fn propose_chunks(
        &self,
        windowed_text: &str,
        start_line: usize,
        min_chunks: usize,
        max_chunks: usize,
    ) -> Result<Vec<ChunkCandidate>, OracleError> {
        let chunks: StructuredChunks = self
            .ask(chunk_prompt(start_line, min_chunks, max_chunks), windowed_text)
            .await?;
        debug!(start_line, count = chunks.chunks.len(), "chunks proposed");
        Ok(chunks.chunks)
    }
}
