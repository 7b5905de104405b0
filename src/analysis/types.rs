//! Wire types for the four analysis operations.
//!
//! Field names are the external API's, verbatim: the HTTP endpoints accept
//! and return these shapes, and the structured parts of LLM responses are
//! coerced into them.

use serde::{Deserialize, Serialize};

use crate::quiz::profile::{CategoryInsight, Profile, clamped_confidence};
use crate::quiz::types::{Answer, Category, QuizStyle};

/// One fixed-phase question/answer pair sent to profile initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub selected: String,
}

impl From<&Answer> for QaPair {
    fn from(answer: &Answer) -> Self {
        Self {
            question: answer.question_text.clone(),
            options: answer.options.clone(),
            selected: answer.selected_answer.clone(),
        }
    }
}

/// Request body for profile initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub quiz_style: QuizStyle,
    pub answers: Vec<QaPair>,
}

/// Response from profile initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInit {
    pub user_profile: Profile,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// Request body for adaptive question generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub current_profile: Profile,
    pub target_category: Category,
    pub quiz_style: QuizStyle,
    pub question_number: u32,
    #[serde(default)]
    pub previous_questions: Vec<String>,
    #[serde(default, rename = "usedAnswerOptions")]
    pub used_options: Vec<String>,
}

/// A generated adaptive question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub target_category: Category,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Request body for a per-answer profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub current_profile: Profile,
    pub target_category: Category,
    pub question: String,
    pub selected_answer: String,
    pub quiz_style: QuizStyle,
}

/// Response from a profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub updated_profile: Profile,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// One answer as sent to the comprehensive analysis, with its full option
/// context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_number: u32,
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub selected_answer: String,
    #[serde(default)]
    pub selected_index: usize,
}

impl From<&Answer> for AnswerRecord {
    fn from(answer: &Answer) -> Self {
        Self {
            question_number: answer.question_number,
            question_text: answer.question_text.clone(),
            options: answer.options.clone(),
            selected_answer: answer.selected_answer.clone(),
            selected_index: answer.selected_index,
        }
    }
}

/// Request body for the comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub questions_and_answers: Vec<AnswerRecord>,
}

/// Per-question entry in the comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    pub question_number: u32,
    pub choice_analysis: String,
    pub value_insights: String,
}

/// The four-category profile in the comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IkigaiProfile {
    #[serde(rename = "Passion")]
    pub passion: CategoryInsight,
    #[serde(rename = "Profession")]
    pub profession: CategoryInsight,
    #[serde(rename = "Mission")]
    pub mission: CategoryInsight,
    #[serde(rename = "Vocation")]
    pub vocation: CategoryInsight,
}

/// One trait reading in the comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTrait {
    pub value: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, deserialize_with = "clamped_confidence")]
    pub confidence: u8,
}

/// The extended trait mapping the comprehensive analysis adds two traits to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTraits {
    #[serde(rename = "Risk Tolerance")]
    pub risk_tolerance: ReportTrait,
    #[serde(rename = "Time Horizon")]
    pub time_horizon: ReportTrait,
    #[serde(rename = "Lifestyle Desires")]
    pub lifestyle_desires: ReportTrait,
    #[serde(rename = "Biggest Fears")]
    pub biggest_fears: ReportTrait,
    #[serde(rename = "Ideal Work Environment")]
    pub ideal_work_environment: ReportTrait,
    #[serde(rename = "Social Orientation")]
    pub social_orientation: ReportTrait,
    #[serde(rename = "Monetization Preference")]
    pub monetization_preference: ReportTrait,
}

/// The terminal, display-only analysis produced once at the end of the
/// session. Never fed back into the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAnalysis {
    #[serde(default)]
    pub question_analysis: Vec<QuestionAnalysis>,
    pub ikigai_profile: IkigaiProfile,
    pub personality_traits: ReportTraits,
    pub ikigai_statement: String,
    pub persona_label: String,
    #[serde(default)]
    pub career_paths: Vec<String>,
    #[serde(default)]
    pub lifestyle_suggestions: Vec<String>,
}

/// Flat shape the profile-initialization prompt asks the model for: the
/// profile fields at the top level plus an `insights` list.
#[derive(Debug, Deserialize)]
pub(crate) struct RawInitialProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_request_uses_legacy_used_options_name() {
        let json = serde_json::json!({
            "currentProfile": {},
            "targetCategory": "Mission",
            "quizStyle": "narrative",
            "questionNumber": 12,
            "previousQuestions": ["q1"],
            "usedAnswerOptions": ["opt a"]
        });
        let req: QuestionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.target_category, Category::Mission);
        assert_eq!(req.used_options, vec!["opt a"]);

        let back = serde_json::to_value(&req).unwrap();
        assert!(back.get("usedAnswerOptions").is_some());
    }

    #[test]
    fn raw_initial_profile_parses_flat_llm_shape() {
        let raw: RawInitialProfile = serde_json::from_str(
            r#"{
                "Passion": {"description": "a", "confidence": 75},
                "Profession": {"description": "b", "confidence": 60},
                "Mission": {"description": "c", "confidence": 45},
                "Vocation": {"description": "d", "confidence": 55},
                "Traits": {
                    "Risk Tolerance": {"value": "Moderate", "confidence": 70}
                },
                "insights": ["one", "two"]
            }"#,
        )
        .unwrap();
        assert_eq!(raw.profile.passion.confidence, 75);
        assert_eq!(raw.profile.traits.risk_tolerance.value, "Moderate");
        assert_eq!(raw.insights.len(), 2);
    }

    #[test]
    fn comprehensive_analysis_round_trips() {
        let trait_reading = ReportTrait {
            value: "Moderate".to_string(),
            explanation: "You balance risk".to_string(),
            confidence: 70,
        };
        let analysis = ComprehensiveAnalysis {
            question_analysis: vec![QuestionAnalysis {
                question_number: 1,
                choice_analysis: "x".to_string(),
                value_insights: "y".to_string(),
            }],
            ikigai_profile: IkigaiProfile {
                passion: CategoryInsight::new("p", 70),
                profession: CategoryInsight::new("pr", 75),
                mission: CategoryInsight::new("m", 80),
                vocation: CategoryInsight::new("v", 65),
            },
            personality_traits: ReportTraits {
                risk_tolerance: trait_reading.clone(),
                time_horizon: trait_reading.clone(),
                lifestyle_desires: trait_reading.clone(),
                biggest_fears: trait_reading.clone(),
                ideal_work_environment: trait_reading.clone(),
                social_orientation: trait_reading.clone(),
                monetization_preference: trait_reading,
            },
            ikigai_statement: "statement".to_string(),
            persona_label: "The Thoughtful Catalyst".to_string(),
            career_paths: vec!["one".to_string()],
            lifestyle_suggestions: vec!["two".to_string()],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["ikigaiProfile"]["Passion"]["confidence"], 70);
        assert_eq!(
            json["personalityTraits"]["Monetization Preference"]["value"],
            "Moderate"
        );
        assert_eq!(json["personaLabel"], "The Thoughtful Catalyst");

        let back: ComprehensiveAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(back.question_analysis.len(), 1);
    }

    #[test]
    fn answer_record_from_answer() {
        use crate::quiz::types::AnswerTag;
        let answer = Answer {
            question_text: "Q".to_string(),
            selected_answer: "B".to_string(),
            mapped_categories: vec![AnswerTag::Profession],
            question_number: 7,
            options: vec!["A".to_string(), "B".to_string()],
            selected_index: 1,
        };
        let record = AnswerRecord::from(&answer);
        assert_eq!(record.question_number, 7);
        assert_eq!(record.selected_index, 1);
        assert_eq!(record.options.len(), 2);
    }
}
