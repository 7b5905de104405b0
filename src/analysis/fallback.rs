//! Static fallback content for every analysis operation.
//!
//! Everything here is deterministic: the same inputs always produce the same
//! values, so a retried or repeated fallback can never diverge.

use crate::analysis::dedup;
use crate::analysis::types::{
    ComprehensiveAnalysis, GeneratedQuestion, IkigaiProfile, ProfileInit, ProfileUpdate,
    ReportTrait, ReportTraits, UpdateRequest,
};
use crate::quiz::profile::{CategoryInsight, Profile, TraitReading, Traits};
use crate::quiz::types::Category;

/// Confidence added to the target category by a fallback update.
const FALLBACK_INCREMENT: u8 = 15;

/// Cap applied by fallback updates; the ceiling is never reached locally.
const FALLBACK_CAP: u8 = 95;

/// The static profile used when initialization fails.
pub fn initial_profile() -> ProfileInit {
    ProfileInit {
        user_profile: Profile {
            passion: CategoryInsight::new("Exploring creative and meaningful pursuits", 60),
            profession: CategoryInsight::new("Developing technical and analytical skills", 65),
            mission: CategoryInsight::new("Contributing to positive change in the world", 70),
            vocation: CategoryInsight::new("Building sustainable career opportunities", 55),
            traits: Traits {
                risk_tolerance: TraitReading::new("Moderate", 60),
                time_horizon: TraitReading::new("Medium-term", 65),
                lifestyle_desires: TraitReading::new("Balanced", 70),
                biggest_fears: TraitReading::new("Unfulfillment", 60),
                ideal_work_environment: TraitReading::new("Collaborative", 65),
            },
        },
        insights: vec![
            "Continue exploring your interests".to_string(),
            "Focus on developing your strengths".to_string(),
        ],
    }
}

/// A locally held question for a category. Selection is keyed on the
/// question number so retries are reproducible, and options that collide
/// with previously used ones are skipped.
pub fn question(
    target: Category,
    question_number: u32,
    previous_questions: &[String],
    used_options: &[String],
) -> GeneratedQuestion {
    let bank = question_bank(target);
    let start = question_number as usize % bank.len();

    for offset in 0..bank.len() {
        let candidate = &bank[(start + offset) % bank.len()];
        if previous_questions
            .iter()
            .any(|q| q.trim().eq_ignore_ascii_case(candidate.question.trim()))
        {
            continue;
        }
        let options: Vec<String> = candidate.options.iter().map(|o| o.to_string()).collect();
        if dedup::find_collision(&options, used_options).is_some() {
            continue;
        }
        return build_question(target, candidate);
    }

    // Every candidate collided; serve the keyed one anyway rather than halt.
    build_question(target, &bank[start])
}

fn build_question(target: Category, entry: &FallbackQuestion) -> GeneratedQuestion {
    GeneratedQuestion {
        target_category: target,
        question: entry.question.to_string(),
        options: entry.options.iter().map(|o| o.to_string()).collect(),
        reasoning: Some(format!("Exploring {target} to increase confidence")),
    }
}

/// Local increment-only update: +15 to the target category, capped at 95,
/// everything else untouched.
pub fn profile_update(req: &UpdateRequest) -> ProfileUpdate {
    let mut profile = req.current_profile.clone();
    profile.bump_category(req.target_category, FALLBACK_INCREMENT, FALLBACK_CAP);
    ProfileUpdate {
        updated_profile: profile,
        insights: vec![format!(
            "Updated {} based on response",
            req.target_category
        )],
    }
}

/// The canned comprehensive report used when the final analysis fails.
pub fn comprehensive_report() -> ComprehensiveAnalysis {
    ComprehensiveAnalysis {
        question_analysis: vec![],
        ikigai_profile: IkigaiProfile {
            passion: CategoryInsight::new(
                "You are driven by creative expression and meaningful pursuits that align with your values.",
                70,
            ),
            profession: CategoryInsight::new(
                "You excel at analytical thinking and problem-solving with attention to detail.",
                75,
            ),
            mission: CategoryInsight::new(
                "You feel called to contribute to positive change and help others grow.",
                80,
            ),
            vocation: CategoryInsight::new(
                "You can create value through expertise-based services and collaborative work.",
                65,
            ),
        },
        personality_traits: ReportTraits {
            risk_tolerance: report_trait("Moderate", "You balance calculated risks with stability", 70),
            time_horizon: report_trait("Long-term", "You think strategically about future outcomes", 75),
            lifestyle_desires: report_trait("Balanced", "You seek harmony between work and personal life", 80),
            biggest_fears: report_trait("Unfulfillment", "You worry about not living up to your potential", 65),
            ideal_work_environment: report_trait("Collaborative", "You thrive in team-oriented settings", 75),
            social_orientation: report_trait("Team-focused", "You prefer working with others toward shared goals", 70),
            monetization_preference: report_trait("Employment", "You value stability and structured career growth", 68),
        },
        ikigai_statement: "Your Ikigai lies at the intersection of creative problem-solving and \
                           meaningful contribution to others' growth and success."
            .to_string(),
        persona_label: "The Thoughtful Catalyst".to_string(),
        career_paths: vec![
            "Product Manager - combining your analytical skills with user-focused innovation"
                .to_string(),
            "Learning & Development Specialist - helping others grow while using your expertise"
                .to_string(),
            "Nonprofit Program Director - creating positive impact through strategic leadership"
                .to_string(),
        ],
        lifestyle_suggestions: vec![
            "Join a professional mentoring program to share your knowledge".to_string(),
            "Take up creative hobbies that combine learning with self-expression".to_string(),
            "Volunteer for causes that align with your values and skills".to_string(),
        ],
    }
}

fn report_trait(value: &str, explanation: &str, confidence: u8) -> ReportTrait {
    ReportTrait {
        value: value.to_string(),
        explanation: explanation.to_string(),
        confidence,
    }
}

struct FallbackQuestion {
    question: &'static str,
    options: [&'static str; 4],
}

fn question_bank(target: Category) -> &'static [FallbackQuestion] {
    match target {
        Category::Passion => &PASSION_QUESTIONS,
        Category::Profession => &PROFESSION_QUESTIONS,
        Category::Mission => &MISSION_QUESTIONS,
        Category::Vocation => &VOCATION_QUESTIONS,
    }
}

static PASSION_QUESTIONS: [FallbackQuestion; 2] = [
    FallbackQuestion {
        question: "What type of work would you do even if you weren't paid for it?",
        options: [
            "Creative projects that express my unique vision",
            "Technical challenges that require deep expertise",
            "Community service that helps people directly",
            "Business ventures that create value for others",
        ],
    },
    FallbackQuestion {
        question: "When you lose yourself in an activity, what are you usually doing?",
        options: [
            "Creating art, music, or writing something meaningful",
            "Learning new skills or solving complex problems",
            "Having deep conversations or helping someone",
            "Planning projects or organizing something important",
        ],
    },
];

static PROFESSION_QUESTIONS: [FallbackQuestion; 2] = [
    FallbackQuestion {
        question: "Which skill development excites you most?",
        options: [
            "Artistic and creative abilities",
            "Technical and analytical skills",
            "Interpersonal and communication skills",
            "Strategic and business skills",
        ],
    },
    FallbackQuestion {
        question: "What type of problem-solving energizes you most?",
        options: [
            "Creative challenges that require original thinking",
            "Technical puzzles with clear, logical solutions",
            "People problems that require empathy and understanding",
            "Strategic challenges that require planning and execution",
        ],
    },
];

static MISSION_QUESTIONS: [FallbackQuestion; 2] = [
    FallbackQuestion {
        question: "What kind of positive impact do you most want to have on others?",
        options: [
            "Inspiring them to express themselves and pursue their dreams",
            "Teaching them valuable skills or helping them solve problems",
            "Supporting them through difficult times and helping them heal",
            "Creating opportunities that help them succeed and prosper",
        ],
    },
    FallbackQuestion {
        question: "When you see someone struggling, what's your first instinct?",
        options: [
            "Help them find creative ways to express their feelings",
            "Teach them skills or knowledge that could help",
            "Listen to them and provide emotional support",
            "Connect them with resources or opportunities",
        ],
    },
];

static VOCATION_QUESTIONS: [FallbackQuestion; 2] = [
    FallbackQuestion {
        question: "What's your relationship with money and financial success?",
        options: [
            "Money should support my creative freedom and authentic expression",
            "Money should reflect the value of my expertise and skills",
            "Money should enable me to help more people and causes I care about",
            "Money is a tool for creating more opportunities and building wealth",
        ],
    },
    FallbackQuestion {
        question: "How do you prefer to create value for others?",
        options: [
            "Through beautiful, meaningful experiences or creative work",
            "Through expertise, knowledge, and high-quality solutions",
            "Through care, support, and helping people improve their lives",
            "Through efficient systems, opportunities, and profitable ventures",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::profile::Profile;
    use crate::quiz::types::QuizStyle;

    #[test]
    fn initial_profile_is_idempotent() {
        let a = initial_profile();
        let b = initial_profile();
        assert_eq!(a.user_profile, b.user_profile);
        assert_eq!(a.insights, b.insights);
    }

    #[test]
    fn initial_profile_confidences_in_range() {
        let profile = initial_profile().user_profile;
        for category in Category::ALL {
            let confidence = profile.category(category).confidence;
            assert!(confidence <= 100);
        }
    }

    #[test]
    fn question_is_deterministic_for_same_inputs() {
        let a = question(Category::Mission, 14, &[], &[]);
        let b = question(Category::Mission, 14, &[], &[]);
        assert_eq!(a.question, b.question);
        assert_eq!(a.options, b.options);
    }

    #[test]
    fn question_skips_already_asked_text() {
        let first = question(Category::Passion, 12, &[], &[]);
        let asked = vec![first.question.clone()];
        let second = question(Category::Passion, 12, &asked, &[]);
        assert_ne!(first.question, second.question);
    }

    #[test]
    fn question_skips_colliding_options() {
        let first = question(Category::Vocation, 11, &[], &[]);
        let used: Vec<String> = first.options.clone();
        let second = question(Category::Vocation, 11, &[], &used);
        assert_ne!(first.question, second.question);
    }

    #[test]
    fn question_targets_requested_category() {
        for category in Category::ALL {
            let q = question(category, 15, &[], &[]);
            assert_eq!(q.target_category, category);
            assert_eq!(q.options.len(), 4);
        }
    }

    #[test]
    fn update_bumps_only_target_and_caps() {
        let mut profile = Profile::default();
        profile.passion = CategoryInsight::new("p", 88);
        profile.profession = CategoryInsight::new("pr", 50);
        let req = UpdateRequest {
            current_profile: profile,
            target_category: Category::Passion,
            question: "q".to_string(),
            selected_answer: "a".to_string(),
            quiz_style: QuizStyle::Playful,
        };
        let update = profile_update(&req);
        assert_eq!(update.updated_profile.passion.confidence, 95);
        assert_eq!(update.updated_profile.profession.confidence, 50);
    }

    #[test]
    fn report_is_complete_and_deterministic() {
        let a = comprehensive_report();
        let b = comprehensive_report();
        assert_eq!(a.persona_label, b.persona_label);
        assert!(!a.ikigai_statement.is_empty());
        assert_eq!(a.career_paths.len(), 3);
        assert_eq!(a.lifestyle_suggestions.len(), 3);
    }
}
