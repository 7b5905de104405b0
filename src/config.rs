//! Configuration for the quiz engine.
//!
//! Everything is read from the environment exactly once at startup and
//! carried in an explicit [`Config`] value; there is no global singleton.
//! A `.env` file is honored if present.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
            llm: LlmConfig::from_env()?,
            analysis: AnalysisConfig::from_env()?,
        })
    }
}

/// HTTP server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional_env("HOST")?.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_optional_env("PORT")?.unwrap_or(8787),
        })
    }

    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration for the external text-generation service.
///
/// Any endpoint that speaks the OpenAI Chat Completions API works. The API
/// key is optional: without it every call is expected to fail and fall back
/// to local defaults, which keeps the quiz usable offline.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: Option<SecretString>,
    /// Model for the turn-by-turn operations (profile init/update, question
    /// generation).
    pub model: String,
    /// Model for the final comprehensive report, which gets the full
    /// 20-answer history and a much larger output budget.
    pub report_model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = optional_env("OPENAI_API_KEY")?.map(SecretString::from);
        if api_key.is_none() {
            tracing::warn!(
                "OPENAI_API_KEY is not set; analysis calls will fail and fall back to static content"
            );
        }

        let timeout_secs: u64 = parse_optional_env("ANALYSIS_TIMEOUT_SECS")?.unwrap_or(120);

        Ok(Self {
            base_url: optional_env("OPENAI_BASE_URL")?
                .unwrap_or_else(|| "https://api.openai.com".to_string()),
            api_key,
            model: optional_env("ANALYSIS_MODEL")?
                .unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            report_model: optional_env("ANALYSIS_REPORT_MODEL")?
                .unwrap_or_else(|| "gpt-4-turbo".to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Analysis client behavior.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub fallback_policy: FallbackPolicy,
}

impl AnalysisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let fallback_policy = match optional_env("ANALYSIS_FALLBACK_POLICY")? {
            Some(raw) => raw
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "ANALYSIS_FALLBACK_POLICY".to_string(),
                    message,
                })?,
            None => FallbackPolicy::default(),
        };
        Ok(Self { fallback_policy })
    }
}

/// What the analysis client does when question generation fails.
///
/// The other three operations (profile init, profile update, comprehensive
/// report) always fall back locally under either policy: halting there would
/// throw away answers the user has already given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Serve a locally held question for the target category.
    FailSoft,
    /// Surface a terminal error; the caller offers a retry.
    #[default]
    FailHard,
}

impl std::str::FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-soft" | "fail_soft" | "soft" => Ok(Self::FailSoft),
            "fail-hard" | "fail_hard" | "hard" => Ok(Self::FailHard),
            _ => Err(format!(
                "invalid fallback policy '{s}', expected 'fail-soft' or 'fail-hard'"
            )),
        }
    }
}

impl std::fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailSoft => write!(f, "fail-soft"),
            Self::FailHard => write!(f, "fail-hard"),
        }
    }
}

/// Read an optional environment variable; empty strings count as unset.
fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "not valid unicode".to_string(),
        }),
    }
}

/// Read and parse an optional environment variable.
fn parse_optional_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match optional_env(key)? {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("failed to parse '{raw}'"),
            }),
        None => Ok(None),
    }
}
