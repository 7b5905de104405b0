//! Session state machine: routing, fixed, adaptive, results.
//!
//! One question is pending at a time. `next_question` is idempotent while a
//! question is outstanding, and a hard generation failure leaves no pending
//! question, so the caller can retry with identical inputs.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::AnalysisApi;
use crate::analysis::types::{
    AnswerRecord, ComprehensiveAnalysis, ProfileRequest, QaPair, QuestionRequest, ReportRequest,
    UpdateRequest,
};
use crate::error::QuizError;
use crate::quiz::profile::Profile;
use crate::quiz::questions::{self, FIXED_QUESTIONS, ROUTING_QUESTION};
use crate::quiz::store::{AnswerStore, SESSION_ANSWERS};
use crate::quiz::types::{Answer, AnswerTag, Category, QuizStyle};

/// First question number of the adaptive phase. Question 1 is routing,
/// 2 through 10 are the fixed set.
pub const ADAPTIVE_START: u32 = (FIXED_QUESTIONS as u32) + 2;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Routing,
    Fixed,
    Adaptive,
    Results,
}

/// A question issued to the caller and awaiting an answer.
#[derive(Debug, Clone)]
pub struct PendingQuestion {
    pub number: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Category an adaptive question targets. `None` for routing and fixed
    /// questions, whose category mapping is positional.
    pub target: Option<Category>,
    pub reasoning: Option<String>,
}

/// Drives one quiz session from the routing question to the final report.
pub struct Sequencer {
    analysis: Arc<dyn AnalysisApi>,
    store: AnswerStore,
    style: Option<QuizStyle>,
    profile: Option<Profile>,
    pending: Option<PendingQuestion>,
    insights: Vec<String>,
}

impl Sequencer {
    pub fn new(analysis: Arc<dyn AnalysisApi>) -> Self {
        Self {
            analysis,
            store: AnswerStore::new(),
            style: None,
            profile: None,
            pending: None,
            insights: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.store.is_complete() {
            return Phase::Results;
        }
        match self.store.next_number() {
            1 => Phase::Routing,
            n if n < ADAPTIVE_START => Phase::Fixed,
            _ => Phase::Adaptive,
        }
    }

    pub fn style(&self) -> Option<QuizStyle> {
        self.style
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn answers(&self) -> &[Answer] {
        self.store.as_slice()
    }

    /// Insights accumulated from profile initialization and updates.
    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    /// The next question to show. Returns the already-pending question
    /// unchanged if one is outstanding.
    pub async fn next_question(&mut self) -> Result<PendingQuestion, QuizError> {
        if let Some(pending) = &self.pending {
            return Ok(pending.clone());
        }
        if self.store.is_complete() {
            return Err(QuizError::SessionComplete);
        }

        let number = self.store.next_number();
        let pending = if number == 1 {
            PendingQuestion {
                number,
                text: ROUTING_QUESTION.question.to_string(),
                options: ROUTING_QUESTION
                    .options
                    .iter()
                    .map(|o| o.to_string())
                    .collect(),
                target: None,
                reasoning: None,
            }
        } else if number < ADAPTIVE_START {
            let style = self.style.ok_or(QuizError::StyleNotSelected)?;
            let fixed = &questions::fixed_set(style)[(number - 2) as usize];
            PendingQuestion {
                number,
                text: fixed.question.to_string(),
                options: fixed.options.iter().map(|o| o.to_string()).collect(),
                target: None,
                reasoning: None,
            }
        } else {
            self.adaptive_question(number).await?
        };

        debug!(number = pending.number, phase = ?self.phase(), "question issued");
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    async fn adaptive_question(&mut self, number: u32) -> Result<PendingQuestion, QuizError> {
        let style = self.style.ok_or(QuizError::StyleNotSelected)?;
        let profile = match &self.profile {
            Some(profile) => profile.clone(),
            None => self.bootstrap_profile(style).await?,
        };

        let target = profile.lowest_confidence_category();
        let request = QuestionRequest {
            current_profile: profile,
            target_category: target,
            quiz_style: style,
            question_number: number,
            previous_questions: self.store.question_texts(),
            used_options: self.store.offered_options(),
        };

        // A hard failure propagates with no pending question recorded, so an
        // immediate retry rebuilds this exact request.
        let generated = self.analysis.generate_question(request).await?;
        Ok(PendingQuestion {
            number,
            text: generated.question,
            options: generated.options,
            target: Some(generated.target_category),
            reasoning: generated.reasoning,
        })
    }

    /// Initialize the profile from the fixed-phase answers. The routing
    /// answer selects style only and is excluded.
    async fn bootstrap_profile(&mut self, style: QuizStyle) -> Result<Profile, QuizError> {
        let answers: Vec<QaPair> = self
            .store
            .as_slice()
            .iter()
            .filter(|a| a.question_number > 1)
            .map(QaPair::from)
            .collect();
        let init = self
            .analysis
            .initialize_profile(ProfileRequest {
                quiz_style: style,
                answers,
            })
            .await?;
        info!(style = %style, "profile initialized");
        self.insights.extend(init.insights);
        self.profile = Some(init.user_profile.clone());
        Ok(init.user_profile)
    }

    /// Record the answer to the pending question by option index.
    pub async fn submit(&mut self, selected_index: usize) -> Result<(), QuizError> {
        let pending = self
            .pending
            .as_ref()
            .ok_or(QuizError::NoPendingQuestion)?
            .clone();
        if selected_index >= pending.options.len() {
            return Err(QuizError::InvalidSelection {
                index: selected_index,
                available: pending.options.len(),
            });
        }

        let mapped_categories = if pending.number == 1 {
            vec![AnswerTag::QuizStyle]
        } else if let Some(target) = pending.target {
            vec![AnswerTag::from(target)]
        } else {
            questions::category_for_option(selected_index)
                .map(|c| vec![AnswerTag::from(c)])
                .unwrap_or_default()
        };

        let answer = Answer {
            question_text: pending.text.clone(),
            selected_answer: pending.options[selected_index].clone(),
            mapped_categories,
            question_number: pending.number,
            options: pending.options.clone(),
            selected_index,
        };
        self.store.record(answer)?;
        self.pending = None;

        if pending.number == 1 {
            self.style = questions::style_for_option(selected_index);
            info!(style = ?self.style, "quiz style selected");
            return Ok(());
        }

        // Adaptive answers fold into the profile; updates never fail.
        if let (Some(target), Some(current), Some(style)) =
            (pending.target, self.profile.clone(), self.style)
        {
            let update = self
                .analysis
                .update_profile(UpdateRequest {
                    current_profile: current,
                    target_category: target,
                    question: pending.text,
                    selected_answer: pending.options[selected_index].clone(),
                    quiz_style: style,
                })
                .await?;
            self.insights.extend(update.insights);
            self.profile = Some(update.updated_profile);
        }
        Ok(())
    }

    /// Produce the final report. Requires all answers to be recorded.
    pub async fn finish(&self) -> Result<ComprehensiveAnalysis, QuizError> {
        if !self.store.is_complete() {
            return Err(QuizError::NotFinished {
                answered: self.store.len(),
                expected: SESSION_ANSWERS,
            });
        }
        let records: Vec<AnswerRecord> =
            self.store.as_slice().iter().map(AnswerRecord::from).collect();
        let analysis = self
            .analysis
            .comprehensive_analysis(ReportRequest {
                questions_and_answers: records,
            })
            .await?;
        info!(persona = %analysis.persona_label, "session complete");
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fallback;
    use crate::analysis::types::{GeneratedQuestion, ProfileInit, ProfileUpdate};
    use crate::error::AnalysisError;
    use crate::quiz::profile::CategoryInsight;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Analysis stub: static profile, numbered questions, bounded updates.
    /// `fail_generation` makes question generation fail hard.
    #[derive(Default)]
    struct StubAnalysis {
        fail_generation: AtomicBool,
        generation_calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalysisApi for StubAnalysis {
        async fn initialize_profile(
            &self,
            _req: ProfileRequest,
        ) -> Result<ProfileInit, AnalysisError> {
            let mut init = fallback::initial_profile();
            init.user_profile.vocation = CategoryInsight::new("v", 30);
            Ok(init)
        }

        async fn generate_question(
            &self,
            req: QuestionRequest,
        ) -> Result<GeneratedQuestion, AnalysisError> {
            self.generation_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_generation.load(Ordering::SeqCst) {
                return Err(AnalysisError::GenerationFailed {
                    reason: "provider down".to_string(),
                });
            }
            Ok(GeneratedQuestion {
                target_category: req.target_category,
                question: format!("adaptive question {}", req.question_number),
                options: (0..4).map(|i| format!("q{}-opt{i}", req.question_number)).collect(),
                reasoning: None,
            })
        }

        async fn update_profile(
            &self,
            req: UpdateRequest,
        ) -> Result<ProfileUpdate, AnalysisError> {
            Ok(fallback::profile_update(&req))
        }

        async fn comprehensive_analysis(
            &self,
            _req: ReportRequest,
        ) -> Result<ComprehensiveAnalysis, AnalysisError> {
            Ok(fallback::comprehensive_report())
        }
    }

    fn sequencer() -> (Arc<StubAnalysis>, Sequencer) {
        let stub = Arc::new(StubAnalysis::default());
        (stub.clone(), Sequencer::new(stub))
    }

    async fn answer_through_fixed(seq: &mut Sequencer) {
        for _ in 0..=FIXED_QUESTIONS {
            seq.next_question().await.unwrap();
            seq.submit(0).await.unwrap();
        }
    }

    #[tokio::test]
    async fn routing_question_comes_first_and_selects_style() {
        let (_, mut seq) = sequencer();
        assert_eq!(seq.phase(), Phase::Routing);

        let q = seq.next_question().await.unwrap();
        assert_eq!(q.number, 1);
        assert_eq!(q.options.len(), 4);

        seq.submit(2).await.unwrap();
        assert_eq!(seq.style(), Some(QuizStyle::Narrative));
        assert_eq!(seq.phase(), Phase::Fixed);
    }

    #[tokio::test]
    async fn next_question_is_idempotent_while_pending() {
        let (_, mut seq) = sequencer();
        let first = seq.next_question().await.unwrap();
        let second = seq.next_question().await.unwrap();
        assert_eq!(first.number, second.number);
        assert_eq!(first.text, second.text);
    }

    #[tokio::test]
    async fn fixed_phase_serves_nine_style_questions() {
        let (_, mut seq) = sequencer();
        seq.next_question().await.unwrap();
        seq.submit(0).await.unwrap(); // playful

        for expected in 2..=(FIXED_QUESTIONS as u32 + 1) {
            let q = seq.next_question().await.unwrap();
            assert_eq!(q.number, expected);
            assert!(q.target.is_none());
            seq.submit(0).await.unwrap();
        }
        assert_eq!(seq.phase(), Phase::Adaptive);
    }

    #[tokio::test]
    async fn fixed_submit_records_positional_category() {
        for (index, expected) in Category::ALL.into_iter().enumerate() {
            let (_, mut seq) = sequencer();
            seq.next_question().await.unwrap();
            seq.submit(0).await.unwrap(); // routing

            seq.next_question().await.unwrap();
            seq.submit(index).await.unwrap();

            let answer = &seq.answers()[1];
            assert_eq!(
                answer.mapped_categories,
                vec![AnswerTag::from(expected)],
                "option {index}"
            );
        }
    }

    #[tokio::test]
    async fn adaptive_phase_targets_lowest_confidence() {
        let (_, mut seq) = sequencer();
        answer_through_fixed(&mut seq).await;

        // Stub initializes Vocation lowest (30).
        let q = seq.next_question().await.unwrap();
        assert_eq!(q.number, ADAPTIVE_START);
        assert_eq!(q.target, Some(Category::Vocation));
    }

    #[tokio::test]
    async fn submit_updates_profile_monotonically() {
        let (_, mut seq) = sequencer();
        answer_through_fixed(&mut seq).await;

        seq.next_question().await.unwrap();
        let before = seq.profile().unwrap().vocation.confidence;
        seq.submit(1).await.unwrap();
        let after = seq.profile().unwrap().vocation.confidence;
        assert!(after > before, "{after} should exceed {before}");
    }

    #[tokio::test]
    async fn hard_failure_leaves_no_pending_question() {
        let (stub, mut seq) = sequencer();
        answer_through_fixed(&mut seq).await;

        stub.fail_generation.store(true, Ordering::SeqCst);
        let err = seq.next_question().await.unwrap_err();
        assert!(matches!(
            err,
            QuizError::Analysis(AnalysisError::GenerationFailed { .. })
        ));

        // Retry succeeds and regenerates for the same question number.
        stub.fail_generation.store(false, Ordering::SeqCst);
        let q = seq.next_question().await.unwrap();
        assert_eq!(q.number, ADAPTIVE_START);
        assert_eq!(stub.generation_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn submit_without_pending_is_rejected() {
        let (_, mut seq) = sequencer();
        let err = seq.submit(0).await.unwrap_err();
        assert!(matches!(err, QuizError::NoPendingQuestion));
    }

    #[tokio::test]
    async fn invalid_selection_keeps_question_pending() {
        let (_, mut seq) = sequencer();
        let q = seq.next_question().await.unwrap();
        let err = seq.submit(9).await.unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidSelection {
                index: 9,
                available: 4
            }
        ));
        let retry = seq.next_question().await.unwrap();
        assert_eq!(retry.number, q.number);
        seq.submit(0).await.unwrap();
    }

    #[tokio::test]
    async fn finish_requires_all_answers() {
        let (_, mut seq) = sequencer();
        let err = seq.finish().await.unwrap_err();
        assert!(matches!(
            err,
            QuizError::NotFinished {
                answered: 0,
                expected: 20
            }
        ));

        answer_through_fixed(&mut seq).await;
        for _ in ADAPTIVE_START..=(SESSION_ANSWERS as u32) {
            seq.next_question().await.unwrap();
            seq.submit(0).await.unwrap();
        }
        assert_eq!(seq.phase(), Phase::Results);

        let report = seq.finish().await.unwrap();
        assert!(!report.persona_label.is_empty());

        let err = seq.next_question().await.unwrap_err();
        assert!(matches!(err, QuizError::SessionComplete));
    }
}
