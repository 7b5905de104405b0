//! The analysis client: four LLM-backed operations with local fallbacks.
//!
//! Profile initialization, per-answer updates, and the comprehensive report
//! always produce a value; when the provider fails they degrade to the static
//! content in [`fallback`]. Question generation is the one operation whose
//! failure handling is configurable: under [`FallbackPolicy::FailHard`] a
//! provider error surfaces as [`AnalysisError::GenerationFailed`], under
//! [`FallbackPolicy::FailSoft`] it degrades to a locally held question.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::analysis::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::analysis::types::{
    ComprehensiveAnalysis, GeneratedQuestion, ProfileInit, ProfileRequest, ProfileUpdate,
    QuestionRequest, RawInitialProfile, ReportRequest, UpdateRequest,
};
use crate::analysis::{dedup, fallback, prompts};
use crate::config::FallbackPolicy;
use crate::error::AnalysisError;

const PROFILE_MAX_TOKENS: u32 = 1000;
const QUESTION_MAX_TOKENS: u32 = 500;
const UPDATE_MAX_TOKENS: u32 = 800;
const REPORT_MAX_TOKENS: u32 = 4000;

const REPORT_TEMPERATURE: f32 = 0.3;

/// The four analysis operations the quiz engine depends on.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Build the initial profile from the routing choice and fixed-phase
    /// answers. Never fails; degrades to a static profile.
    async fn initialize_profile(&self, req: ProfileRequest) -> Result<ProfileInit, AnalysisError>;

    /// Generate the next adaptive question. May fail under the fail-hard
    /// policy; otherwise degrades to a locally held question.
    async fn generate_question(
        &self,
        req: QuestionRequest,
    ) -> Result<GeneratedQuestion, AnalysisError>;

    /// Fold one adaptive answer into the profile. Never fails; degrades to a
    /// local increment-only update.
    async fn update_profile(&self, req: UpdateRequest) -> Result<ProfileUpdate, AnalysisError>;

    /// Produce the terminal report over all recorded answers. Never fails;
    /// degrades to a canned report.
    async fn comprehensive_analysis(
        &self,
        req: ReportRequest,
    ) -> Result<ComprehensiveAnalysis, AnalysisError>;
}

/// LLM-backed [`AnalysisApi`] implementation.
pub struct AnalysisClient {
    provider: Arc<dyn LlmProvider>,
    policy: FallbackPolicy,
    /// Model used for the comprehensive report; the provider's default model
    /// covers everything else.
    report_model: String,
}

impl AnalysisClient {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        policy: FallbackPolicy,
        report_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            policy,
            report_model: report_model.into(),
        }
    }

    async fn complete_and_parse<T: DeserializeOwned>(
        &self,
        request: CompletionRequest,
    ) -> Result<T, AnalysisError> {
        let response = self.provider.complete(request).await?;
        parse_payload(&response.content)
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn initialize_profile(&self, req: ProfileRequest) -> Result<ProfileInit, AnalysisError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::PROFILE_SYSTEM),
            ChatMessage::user(prompts::initial_profile(req.quiz_style, &req.answers)),
        ])
        .with_max_tokens(PROFILE_MAX_TOKENS);

        match self.complete_and_parse::<RawInitialProfile>(request).await {
            Ok(raw) => {
                debug!(style = %req.quiz_style, answers = req.answers.len(), "profile initialized");
                Ok(ProfileInit {
                    user_profile: raw.profile,
                    insights: raw.insights,
                })
            }
            Err(err) => {
                warn!(error = %err, "profile initialization failed, using static profile");
                Ok(fallback::initial_profile())
            }
        }
    }

    async fn generate_question(
        &self,
        req: QuestionRequest,
    ) -> Result<GeneratedQuestion, AnalysisError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::QUESTION_SYSTEM),
            ChatMessage::user(prompts::adaptive_question(&req)),
        ])
        .with_max_tokens(QUESTION_MAX_TOKENS);

        let attempt = match self.complete_and_parse::<GeneratedQuestion>(request).await {
            Ok(question) => validate_question(question, &req),
            Err(err) => Err(err),
        };

        match attempt {
            Ok(question) => {
                debug!(
                    target = %question.target_category,
                    number = req.question_number,
                    "question generated"
                );
                Ok(question)
            }
            Err(err) => match self.policy {
                FallbackPolicy::FailSoft => {
                    warn!(
                        error = %err,
                        target = %req.target_category,
                        number = req.question_number,
                        "question generation failed, serving local question"
                    );
                    Ok(fallback::question(
                        req.target_category,
                        req.question_number,
                        &req.previous_questions,
                        &req.used_options,
                    ))
                }
                FallbackPolicy::FailHard => {
                    warn!(
                        error = %err,
                        target = %req.target_category,
                        number = req.question_number,
                        "question generation failed"
                    );
                    Err(AnalysisError::GenerationFailed {
                        reason: err.to_string(),
                    })
                }
            },
        }
    }

    async fn update_profile(&self, req: UpdateRequest) -> Result<ProfileUpdate, AnalysisError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::UPDATE_SYSTEM),
            ChatMessage::user(prompts::profile_update(&req)),
        ])
        .with_max_tokens(UPDATE_MAX_TOKENS);

        match self.complete_and_parse::<ProfileUpdate>(request).await {
            Ok(mut update) => {
                // External responses may not respect monotonicity.
                update.updated_profile.floor_confidences(&req.current_profile);
                debug!(target = %req.target_category, "profile updated");
                Ok(update)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    target = %req.target_category,
                    "profile update failed, applying local increment"
                );
                Ok(fallback::profile_update(&req))
            }
        }
    }

    async fn comprehensive_analysis(
        &self,
        req: ReportRequest,
    ) -> Result<ComprehensiveAnalysis, AnalysisError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::REPORT_SYSTEM),
            ChatMessage::user(prompts::comprehensive_report(&req.questions_and_answers)),
        ])
        .with_model(self.report_model.clone())
        .with_max_tokens(REPORT_MAX_TOKENS)
        .with_temperature(REPORT_TEMPERATURE);

        match self.complete_and_parse::<ComprehensiveAnalysis>(request).await {
            Ok(analysis) => {
                debug!(
                    answers = req.questions_and_answers.len(),
                    persona = %analysis.persona_label,
                    "comprehensive analysis produced"
                );
                Ok(analysis)
            }
            Err(err) => {
                warn!(error = %err, "comprehensive analysis failed, serving canned report");
                Ok(fallback::comprehensive_report())
            }
        }
    }
}

/// Pull the JSON object out of a completion body, tolerating code fences and
/// surrounding prose.
fn extract_json(content: &str) -> &str {
    let start = content.find('{');
    let end = content.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content.trim(),
    }
}

fn parse_payload<T: DeserializeOwned>(content: &str) -> Result<T, AnalysisError> {
    serde_json::from_str(extract_json(content)).map_err(|err| AnalysisError::InvalidResponse {
        reason: format!("malformed JSON payload: {err}"),
    })
}

/// Structural checks on a generated question before it is accepted.
fn validate_question(
    question: GeneratedQuestion,
    req: &QuestionRequest,
) -> Result<GeneratedQuestion, AnalysisError> {
    if question.options.len() != 4 {
        return Err(AnalysisError::InvalidResponse {
            reason: format!("expected 4 options, got {}", question.options.len()),
        });
    }
    if question.target_category != req.target_category {
        return Err(AnalysisError::InvalidResponse {
            reason: format!(
                "target category mismatch: asked for {}, got {}",
                req.target_category, question.target_category
            ),
        });
    }
    let repeated = req.previous_questions.iter().any(|prior| {
        prior
            .trim()
            .eq_ignore_ascii_case(question.question.trim())
    });
    if repeated {
        return Err(AnalysisError::InvalidResponse {
            reason: "question repeats an earlier one".to_string(),
        });
    }
    if let Some((option, prior)) = dedup::find_collision(&question.options, &req.used_options) {
        return Err(AnalysisError::InvalidResponse {
            reason: format!("option '{option}' duplicates earlier option '{prior}'"),
        });
    }
    Ok(question)
}
