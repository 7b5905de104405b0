//! Adaptive Ikigai personality quiz engine.
//!
//! A 20-question session in four phases: one routing question selects the
//! quiz style, nine fixed questions seed the profile, ten LLM-generated
//! adaptive questions sharpen it, and a comprehensive report closes the
//! session. The [`analysis`] module talks to the LLM provider and owns all
//! fallback behavior; [`quiz`] drives the session state machine; [`server`]
//! exposes the analysis operations over HTTP.

pub mod analysis;
pub mod config;
pub mod error;
pub mod quiz;
pub mod server;

pub use config::{Config, FallbackPolicy};
pub use error::{AnalysisError, ConfigError, Error, QuizError, Result};
