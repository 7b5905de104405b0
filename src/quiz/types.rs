//! Core quiz vocabulary: categories, quiz styles, answers.

use serde::{Deserialize, Serialize};

/// The four Ikigai categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Passion,
    Profession,
    Mission,
    Vocation,
}

impl Category {
    /// All categories in fixed priority order. This order doubles as the
    /// tie-break when several categories share the lowest confidence, and as
    /// the positional mapping for fixed-phase options (A through D).
    pub const ALL: [Category; 4] = [
        Category::Passion,
        Category::Profession,
        Category::Mission,
        Category::Vocation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passion => "Passion",
            Self::Profession => "Profession",
            Self::Mission => "Mission",
            Self::Vocation => "Vocation",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passion" => Ok(Self::Passion),
            "profession" => Ok(Self::Profession),
            "mission" => Ok(Self::Mission),
            "vocation" => Ok(Self::Vocation),
            _ => Err(format!(
                "invalid category '{s}', expected one of: Passion, Profession, Mission, Vocation"
            )),
        }
    }
}

/// Quiz style selected by the routing question. Flavors prompt generation
/// for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStyle {
    Playful,
    Introspective,
    Narrative,
    RapidFire,
}

impl QuizStyle {
    /// Styles in routing-option order (option A through D).
    pub const ALL: [QuizStyle; 4] = [
        QuizStyle::Playful,
        QuizStyle::Introspective,
        QuizStyle::Narrative,
        QuizStyle::RapidFire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playful => "playful",
            Self::Introspective => "introspective",
            Self::Narrative => "narrative",
            Self::RapidFire => "rapid_fire",
        }
    }
}

impl std::fmt::Display for QuizStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuizStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "playful" => Ok(Self::Playful),
            "introspective" => Ok(Self::Introspective),
            "narrative" => Ok(Self::Narrative),
            "rapid_fire" | "rapid-fire" => Ok(Self::RapidFire),
            _ => Err(format!(
                "invalid quiz style '{s}', expected one of: playful, introspective, narrative, rapid_fire"
            )),
        }
    }
}

/// Tag recorded on an answer: a proper category, or the meta-tag carried by
/// the routing question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerTag {
    Passion,
    Profession,
    Mission,
    Vocation,
    #[serde(rename = "quiz_style")]
    QuizStyle,
}

impl From<Category> for AnswerTag {
    fn from(category: Category) -> Self {
        match category {
            Category::Passion => Self::Passion,
            Category::Profession => Self::Profession,
            Category::Mission => Self::Mission,
            Category::Vocation => Self::Vocation,
        }
    }
}

/// One recorded answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Exact question text shown to the user.
    pub question_text: String,
    /// Text of the chosen option.
    pub selected_answer: String,
    /// Category tags this answer informs.
    pub mapped_categories: Vec<AnswerTag>,
    /// 1-based position in the session, strictly increasing.
    pub question_number: u32,
    /// Options that were offered. May be empty for legacy callers.
    #[serde(default)]
    pub options: Vec<String>,
    /// Zero-based index of `selected_answer` within `options`.
    #[serde(default)]
    pub selected_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("Hobby".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&Category::Vocation).unwrap(),
            "\"Vocation\""
        );
    }

    #[test]
    fn quiz_style_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuizStyle::RapidFire).unwrap(),
            "\"rapid_fire\""
        );
        let parsed: QuizStyle = serde_json::from_str("\"rapid_fire\"").unwrap();
        assert_eq!(parsed, QuizStyle::RapidFire);
    }

    #[test]
    fn answer_wire_shape_is_camel_case() {
        let answer = Answer {
            question_text: "Q".to_string(),
            selected_answer: "A".to_string(),
            mapped_categories: vec![AnswerTag::QuizStyle],
            question_number: 1,
            options: vec![],
            selected_index: 0,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["questionText"], "Q");
        assert_eq!(json["questionNumber"], 1);
        assert_eq!(json["mappedCategories"][0], "quiz_style");
    }

    #[test]
    fn answer_tolerates_missing_options_fields() {
        // Legacy callers (the routing phase) recorded answers without
        // options or a selected index.
        let answer: Answer = serde_json::from_str(
            r#"{"questionText":"Q","selectedAnswer":"A","mappedCategories":["Passion"],"questionNumber":3}"#,
        )
        .unwrap();
        assert!(answer.options.is_empty());
        assert_eq!(answer.selected_index, 0);
    }
}
