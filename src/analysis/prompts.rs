//! Prompt templates for the four analysis operations.
//!
//! Each operation sends one system prompt and one user prompt. The user
//! prompts end with a JSON skeleton describing the exact shape the client
//! parses; keeping the skeleton inline is what makes the cheap models
//! reliable enough here.

use std::fmt::Write;

use crate::analysis::types::{AnswerRecord, QaPair, QuestionRequest, UpdateRequest};
use crate::quiz::profile::Profile;
use crate::quiz::types::QuizStyle;

pub const PROFILE_SYSTEM: &str = "You are an expert Ikigai counselor. Analyze responses \
objectively and build accurate personality profiles. Follow the user's actual interests and \
values - don't impose your own assumptions about what they should care about.";

pub const QUESTION_SYSTEM: &str = "You are an expert at creating personalized Ikigai questions. \
Generate diverse questions that explore the user's actual interests and values. Don't assume \
what they should care about - follow their lead. Create varied questions about personal growth, \
career development, relationships, creativity, values, and individual fulfillment. Be responsive \
to their unique profile.";

pub const UPDATE_SYSTEM: &str = "You are an expert at interpreting quiz responses and updating \
profiles efficiently. Analyze answers objectively and update profiles with meaningful insights \
based on what the user actually said, not assumptions.";

pub const REPORT_SYSTEM: &str = "You are a purpose and career design coach trained in the \
Japanese framework of Ikigai, which helps people find their unique sweet spot where what they \
love, what they're good at, what the world needs, and what they can be paid for all intersect.\n\
\n\
You have received 20 structured multiple-choice questions from a user. Each question had 4 \
possible answers, and the user chose one. Your task is to deeply analyze their choices vs. what \
they didn't choose, to build a rich, human-centered profile of the user and output their \
personalized Ikigai.\n\
\n\
CRITICAL: Write ALL descriptions and explanations in SECOND PERSON, speaking directly to the \
user. Use \"You are...\", \"You prefer...\", \"You thrive when...\". NEVER use \"The user \
is...\" or any third person language.\n\
\n\
1. Analyze each question individually, comparing the chosen answer to the other three options.\n\
2. From all 20 choices, build the four Ikigai categories (Passion, Profession, Vocation, \
Mission), each with a 2-3 sentence second-person description and a confidence score from 1 to \
100.\n\
3. Rate and summarize these personality traits with short second-person explanations and \
confidence scores: Risk Tolerance, Time Horizon, Lifestyle Desires, Biggest Fears, Ideal Work \
Environment, Social Orientation, Monetization Preference.\n\
4. Finish with a concise second-person Ikigai statement, a persona label (e.g. \"The Soulful \
Builder\"), 2-3 career paths, and 2-3 hobby or lifestyle suggestions.";

/// Render the current profile's category lines for inclusion in a prompt.
fn profile_summary(profile: &Profile) -> String {
    format!(
        "- Passion: {} ({}%)\n- Profession: {} ({}%)\n- Mission: {} ({}%)\n- Vocation: {} ({}%)",
        profile.passion.description,
        profile.passion.confidence,
        profile.profession.description,
        profile.profession.confidence,
        profile.mission.description,
        profile.mission.confidence,
        profile.vocation.description,
        profile.vocation.confidence,
    )
}

/// Prompt for profile initialization from the fixed-phase answers.
pub fn initial_profile(style: QuizStyle, answers: &[QaPair]) -> String {
    let answers_json =
        serde_json::to_string_pretty(answers).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"Analyze these Ikigai quiz responses and create a comprehensive initial profile.

Quiz Style: {style}

User's Answers:
{answers_json}

Create a detailed profile with:

1. Ikigai category analysis: Passion (what they love), Profession (what they're good at), Mission (what the world needs), Vocation (what they can be paid for).
2. Confidence scores (1-100) based on how clearly each category emerges from their actual responses.
3. Personality traits: risk tolerance, time horizon, lifestyle, fears, work environment.

Analyze holistically - look for patterns in their actual answers rather than imposing assumptions.

Format as JSON:
{{
  "Passion": {{ "description": "...", "confidence": 75 }},
  "Profession": {{ "description": "...", "confidence": 60 }},
  "Mission": {{ "description": "...", "confidence": 45 }},
  "Vocation": {{ "description": "...", "confidence": 55 }},
  "Traits": {{
    "Risk Tolerance": {{ "value": "...", "confidence": 70 }},
    "Time Horizon": {{ "value": "...", "confidence": 65 }},
    "Lifestyle Desires": {{ "value": "...", "confidence": 80 }},
    "Biggest Fears": {{ "value": "...", "confidence": 60 }},
    "Ideal Work Environment": {{ "value": "...", "confidence": 75 }}
  }},
  "insights": ["...", "..."]
}}"#
    )
}

/// Prompt for generating the next adaptive question.
pub fn adaptive_question(req: &QuestionRequest) -> String {
    let mut prompt = format!(
        r#"Generate a personalized question to explore "{target}" (lowest confidence area).

Current Profile:
{profile}

Quiz Style: {style}
Question #: {number}/20
Target: {target}"#,
        target = req.target_category,
        profile = profile_summary(&req.current_profile),
        style = req.quiz_style,
        number = req.question_number,
    );

    if !req.previous_questions.is_empty() {
        let _ = write!(prompt, "\n\nPrevious Questions Asked:");
        for (i, q) in req.previous_questions.iter().enumerate() {
            let _ = write!(prompt, "\n{}. {}", i + 1, q);
        }
    }
    if !req.used_options.is_empty() {
        let _ = write!(
            prompt,
            "\n\nPreviously Used Answer Options:\n{}",
            req.used_options.join(", ")
        );
    }

    let _ = write!(
        prompt,
        r#"

IMPORTANT REQUIREMENTS:
1. Create a question that is COMPLETELY DIFFERENT from any previous question.
2. Use answer options that are UNIQUE and haven't been used before.
3. Take a fresh angle on {target}; avoid similar wording or concepts from earlier questions.
4. Match the "{style}" style and explore {target} deeply.
5. Offer 4 distinct options covering different approaches and values.

Format as JSON:
{{
  "targetCategory": "{target}",
  "question": "...",
  "options": ["...", "...", "...", "..."],
  "reasoning": "..."
}}"#,
        target = req.target_category,
        style = req.quiz_style,
    );

    prompt
}

/// Prompt for a per-answer profile update.
pub fn profile_update(req: &UpdateRequest) -> String {
    format!(
        r#"Update profile based on latest answer.

Current Profile:
{profile}

Question: "{question}"
Answer: "{answer}"
Target: {target}

Update the profile by:
1. Increasing the target category confidence (+10 to +20 points).
2. Updating its description with new insights from this specific answer.
3. Updating relevant traits based on what the answer reveals.
4. Cross-category updates where the answer informs other areas.

Base updates on the actual answer, not assumptions.

Return the COMPLETE updated profile as JSON:
{{
  "updatedProfile": {{
    "Passion": {{ "description": "...", "confidence": 85 }},
    "Profession": {{ "description": "...", "confidence": 75 }},
    "Mission": {{ "description": "...", "confidence": 90 }},
    "Vocation": {{ "description": "...", "confidence": 70 }},
    "Traits": {{
      "Risk Tolerance": {{ "value": "...", "confidence": 80 }},
      "Time Horizon": {{ "value": "...", "confidence": 75 }},
      "Lifestyle Desires": {{ "value": "...", "confidence": 85 }},
      "Biggest Fears": {{ "value": "...", "confidence": 70 }},
      "Ideal Work Environment": {{ "value": "...", "confidence": 80 }}
    }}
  }},
  "insights": ["...", "..."]
}}"#,
        profile = profile_summary(&req.current_profile),
        question = req.question,
        answer = req.selected_answer,
        target = req.target_category,
    )
}

/// Prompt for the final comprehensive analysis over all 20 answers.
pub fn comprehensive_report(answers: &[AnswerRecord]) -> String {
    let mut questions_block = String::new();
    for record in answers {
        let _ = write!(
            questions_block,
            "\nQuestion {}: {}\nOptions:\n",
            record.question_number, record.question_text
        );
        // Letters run A..Z; anything past 26 options is dropped rather than
        // wrapping past the alphabet.
        for (i, option) in record.options.iter().take(26).enumerate() {
            let letter = (b'A' + i as u8) as char;
            let _ = writeln!(questions_block, "{letter}) {option}");
        }
        let letter = (b'A' + record.selected_index.min(25) as u8) as char;
        let _ = writeln!(
            questions_block,
            "User chose: {letter}) {}",
            record.selected_answer
        );
    }

    format!(
        r#"Please analyze the following 20 questions and the user's choices to create a comprehensive Ikigai profile:
{questions_block}
IMPORTANT: Write ALL descriptions and explanations in SECOND PERSON, speaking directly to the user.

Provide your analysis in the following JSON format:
{{
  "questionAnalysis": [
    {{ "questionNumber": 1, "choiceAnalysis": "...", "valueInsights": "..." }}
  ],
  "ikigaiProfile": {{
    "Passion": {{ "description": "...", "confidence": 85 }},
    "Profession": {{ "description": "...", "confidence": 78 }},
    "Vocation": {{ "description": "...", "confidence": 82 }},
    "Mission": {{ "description": "...", "confidence": 75 }}
  }},
  "personalityTraits": {{
    "Risk Tolerance": {{ "value": "...", "explanation": "...", "confidence": 80 }},
    "Time Horizon": {{ "value": "...", "explanation": "...", "confidence": 85 }},
    "Lifestyle Desires": {{ "value": "...", "explanation": "...", "confidence": 90 }},
    "Biggest Fears": {{ "value": "...", "explanation": "...", "confidence": 75 }},
    "Ideal Work Environment": {{ "value": "...", "explanation": "...", "confidence": 88 }},
    "Social Orientation": {{ "value": "...", "explanation": "...", "confidence": 82 }},
    "Monetization Preference": {{ "value": "...", "explanation": "...", "confidence": 78 }}
  }},
  "ikigaiStatement": "...",
  "personaLabel": "The [Adjective] [Noun]",
  "careerPaths": ["...", "...", "..."],
  "lifestyleSuggestions": ["...", "...", "..."]
}}"#
    )
}
