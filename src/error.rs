//! Error types for the quiz engine.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the analysis client and its LLM provider.
///
/// Transport and parsing failures are converted here at the provider
/// boundary; `reqwest` errors never cross into the sequencer.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Analysis service rate limited the request")]
    RateLimited,

    #[error("Authentication with the analysis service failed")]
    AuthFailed,

    #[error("Invalid response from analysis service: {reason}")]
    InvalidResponse { reason: String },

    /// Terminal failure of question generation under the fail-hard policy.
    /// The sequencer surfaces this to the caller with a retry action.
    #[error("Question generation failed: {reason}")]
    GenerationFailed { reason: String },
}

/// Quiz state machine errors.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("No quiz style selected yet; the routing question must be answered first")]
    StyleNotSelected,

    #[error("No question is pending; request the next question first")]
    NoPendingQuestion,

    #[error("Selected option index {index} is out of bounds ({available} options)")]
    InvalidSelection { index: usize, available: usize },

    #[error("Question number {number} does not advance the sequence (last recorded was {last})")]
    NonMonotonic { number: u32, last: u32 },

    #[error("Question number {number} is outside the session range 1..={max}")]
    NumberOutOfRange { number: u32, max: u32 },

    #[error("Session already holds {max} answers")]
    SessionFull { max: usize },

    #[error("Quiz is not finished: {answered} of {expected} answers recorded")]
    NotFinished { answered: usize, expected: usize },

    #[error("Quiz is complete; no further questions")]
    SessionComplete,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result type alias for the quiz engine.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: "must be a number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PORT"), "Should mention the key: {msg}");
        assert!(
            msg.contains("must be a number"),
            "Should include the message: {msg}"
        );
    }

    #[test]
    fn analysis_error_display() {
        let err = AnalysisError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = AnalysisError::GenerationFailed {
            reason: "HTTP 500".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 500"), "Should mention reason: {msg}");
    }

    #[test]
    fn quiz_error_display() {
        let err = QuizError::InvalidSelection {
            index: 7,
            available: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'), "Should mention the index: {msg}");
        assert!(msg.contains('4'), "Should mention the option count: {msg}");

        let err = QuizError::NonMonotonic { number: 5, last: 9 };
        let msg = err.to_string();
        assert!(
            msg.contains('5') && msg.contains('9'),
            "Should mention both numbers: {msg}"
        );
    }

    #[test]
    fn top_level_error_from_conversions() {
        let config_err = ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: "not a number".to_string(),
        };
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));

        let quiz_err = QuizError::SessionComplete;
        let err: Error = quiz_err.into();
        assert!(matches!(err, Error::Quiz(_)));

        let analysis_err = AnalysisError::RateLimited;
        let err: Error = analysis_err.into();
        assert!(matches!(err, Error::Analysis(_)));
    }

    #[test]
    fn analysis_error_nests_transparently_in_quiz_error() {
        let err: QuizError = AnalysisError::AuthFailed.into();
        assert_eq!(
            err.to_string(),
            AnalysisError::AuthFailed.to_string(),
            "transparent nesting should not add a prefix"
        );
    }
}
