pub mod json;
pub mod oracle;
pub mod prompts;
pub mod provider;
pub mod providers;

pub use oracle::LlmBoundaryOracle;
pub use provider::{LlmError, LlmProvider, Message, Role};
pub use providers::create_provider;
