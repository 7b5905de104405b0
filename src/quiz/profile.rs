//! The mutable per-session profile: four category insights plus a fixed set
//! of named traits.
//!
//! Wire field names match the external service's JSON exactly (capitalized
//! category keys, spaced trait keys), so a profile deserializes straight out
//! of an LLM response body. Confidence values are clamped to [0, 100] at the
//! deserialization boundary rather than trusting the provider.

use serde::{Deserialize, Deserializer, Serialize};

use crate::quiz::types::Category;

/// Clamp a raw confidence value into [0, 100] during deserialization.
/// Accepts any JSON number (the provider occasionally returns floats or
/// out-of-range values).
pub(crate) fn clamped_confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// Description and confidence for one Ikigai category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub description: String,
    #[serde(deserialize_with = "clamped_confidence")]
    pub confidence: u8,
}

impl CategoryInsight {
    pub fn new(description: impl Into<String>, confidence: u8) -> Self {
        Self {
            description: description.into(),
            confidence: confidence.min(100),
        }
    }
}

impl Default for CategoryInsight {
    fn default() -> Self {
        Self {
            description: String::new(),
            confidence: 0,
        }
    }
}

/// One named personality trait reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TraitReading {
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "clamped_confidence")]
    pub confidence: u8,
}

impl TraitReading {
    pub fn new(value: impl Into<String>, confidence: u8) -> Self {
        Self {
            value: value.into(),
            confidence: confidence.min(100),
        }
    }
}

/// The fixed trait mapping carried by the session profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Traits {
    #[serde(rename = "Risk Tolerance", default)]
    pub risk_tolerance: TraitReading,
    #[serde(rename = "Time Horizon", default)]
    pub time_horizon: TraitReading,
    #[serde(rename = "Lifestyle Desires", default)]
    pub lifestyle_desires: TraitReading,
    #[serde(rename = "Biggest Fears", default)]
    pub biggest_fears: TraitReading,
    #[serde(rename = "Ideal Work Environment", default)]
    pub ideal_work_environment: TraitReading,
}

/// The per-session profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(rename = "Passion", default)]
    pub passion: CategoryInsight,
    #[serde(rename = "Profession", default)]
    pub profession: CategoryInsight,
    #[serde(rename = "Mission", default)]
    pub mission: CategoryInsight,
    #[serde(rename = "Vocation", default)]
    pub vocation: CategoryInsight,
    #[serde(rename = "Traits", default)]
    pub traits: Traits,
}

impl Profile {
    pub fn category(&self, category: Category) -> &CategoryInsight {
        match category {
            Category::Passion => &self.passion,
            Category::Profession => &self.profession,
            Category::Mission => &self.mission,
            Category::Vocation => &self.vocation,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryInsight {
        match category {
            Category::Passion => &mut self.passion,
            Category::Profession => &mut self.profession,
            Category::Mission => &mut self.mission,
            Category::Vocation => &mut self.vocation,
        }
    }

    /// The category with the strictly lowest confidence. Ties break in the
    /// fixed priority order `Passion, Profession, Mission, Vocation`.
    pub fn lowest_confidence_category(&self) -> Category {
        let mut lowest = Category::ALL[0];
        for category in Category::ALL {
            if self.category(category).confidence < self.category(lowest).confidence {
                lowest = category;
            }
        }
        lowest
    }

    /// Floor each category confidence at its value in `previous`.
    ///
    /// Adaptive updates add bounded increments; an external response that
    /// would lower a category is coerced back up so confidence stays
    /// monotonically non-decreasing across the session.
    pub fn floor_confidences(&mut self, previous: &Profile) {
        for category in Category::ALL {
            let floor = previous.category(category).confidence;
            let insight = self.category_mut(category);
            if insight.confidence < floor {
                insight.confidence = floor;
            }
        }
    }

    /// Raise one category by `delta`, capped at `cap`. Used by the local
    /// fallback update path.
    pub fn bump_category(&mut self, category: Category, delta: u8, cap: u8) {
        let insight = self.category_mut(category);
        insight.confidence = insight.confidence.saturating_add(delta).min(cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(passion: u8, profession: u8, mission: u8, vocation: u8) -> Profile {
        Profile {
            passion: CategoryInsight::new("p", passion),
            profession: CategoryInsight::new("pr", profession),
            mission: CategoryInsight::new("m", mission),
            vocation: CategoryInsight::new("v", vocation),
            traits: Traits::default(),
        }
    }

    #[test]
    fn lowest_confidence_picks_minimum() {
        let profile = profile_with(70, 40, 55, 60);
        assert_eq!(profile.lowest_confidence_category(), Category::Profession);
    }

    #[test]
    fn lowest_confidence_tie_breaks_in_priority_order() {
        let profile = profile_with(50, 50, 50, 50);
        assert_eq!(profile.lowest_confidence_category(), Category::Passion);

        let profile = profile_with(80, 30, 30, 30);
        assert_eq!(profile.lowest_confidence_category(), Category::Profession);
    }

    #[test]
    fn deserialization_clamps_out_of_range_confidence() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "Passion": {"description": "a", "confidence": 150},
                "Profession": {"description": "b", "confidence": -20},
                "Mission": {"description": "c", "confidence": 72.6},
                "Vocation": {"description": "d", "confidence": 100}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.passion.confidence, 100);
        assert_eq!(profile.profession.confidence, 0);
        assert_eq!(profile.mission.confidence, 73);
        assert_eq!(profile.vocation.confidence, 100);
    }

    #[test]
    fn wire_names_match_external_service() {
        let mut profile = profile_with(10, 20, 30, 40);
        profile.traits.risk_tolerance = TraitReading::new("Moderate", 60);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["Passion"]["confidence"], 10);
        assert_eq!(json["Traits"]["Risk Tolerance"]["value"], "Moderate");
    }

    #[test]
    fn floor_confidences_is_monotonic() {
        let previous = profile_with(60, 65, 70, 55);
        // External update tries to drop Mission and Vocation.
        let mut updated = profile_with(75, 65, 40, 50);
        updated.floor_confidences(&previous);
        assert_eq!(updated.passion.confidence, 75);
        assert_eq!(updated.mission.confidence, 70);
        assert_eq!(updated.vocation.confidence, 55);
    }

    #[test]
    fn bump_category_caps_at_limit() {
        let mut profile = profile_with(90, 50, 50, 50);
        profile.bump_category(Category::Passion, 15, 95);
        assert_eq!(profile.passion.confidence, 95);

        profile.bump_category(Category::Profession, 15, 95);
        assert_eq!(profile.profession.confidence, 65);
    }

    #[test]
    fn missing_traits_default_to_empty() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "Passion": {"description": "a", "confidence": 50},
                "Profession": {"description": "b", "confidence": 50},
                "Mission": {"description": "c", "confidence": 50},
                "Vocation": {"description": "d", "confidence": 50}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.traits.time_horizon.confidence, 0);
        assert!(profile.traits.time_horizon.value.is_empty());
    }
}
