//! LLM-backed analysis: providers, prompts, wire types, and the client that
//! ties them together with fallback handling.

pub mod client;
pub mod dedup;
pub mod fallback;
pub mod openai;
pub mod prompts;
pub mod provider;
pub mod types;

pub use client::{AnalysisApi, AnalysisClient};
pub use openai::OpenAiProvider;
pub use provider::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider, Role};
