use std::str::FromStr;

use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Input collected from the form and sent to `POST /api/generate-recipe`.
///
/// Validation is only applied on the client side before a request is sent.
/// The server accepts any payload with the right shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[garde(length(min = 1))]
    pub ingredients: Vec<String>,

    #[garde(skip)]
    pub equipment: Vec<String>,

    #[garde(length(min = 1))]
    pub cuisine: String,

    #[garde(range(min = 1))]
    pub time_available: u32,

    #[serde(default)]
    #[garde(skip)]
    pub dietary_restrictions: Option<String>,
}

impl GenerationRequest {
    /// Dietary notes, or `None` when absent or blank.
    pub fn dietary_notes(&self) -> Option<&str> {
        self.dietary_restrictions
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }
}

/// Cuisine tags offered by the form.
#[derive(Debug, Clone, Copy, EnumString, AsRefStr, EnumIter, Display, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Cuisine {
    Italian,
    Mexican,
    Asian,
    American,
    Mediterranean,
    Indian,
    French,
    Thai,
    Japanese,
    ComfortFood,
}

impl Cuisine {
    /// Look up a tag, returning `None` for anything outside the fixed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Cuisine::from_str(tag).ok()
    }

    pub fn tag(&self) -> &str {
        self.as_ref()
    }

    /// Human-readable label shown in the cuisine picker.
    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Asian => "Asian",
            Cuisine::American => "American",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Indian => "Indian",
            Cuisine::French => "French",
            Cuisine::Thai => "Thai",
            Cuisine::Japanese => "Japanese",
            Cuisine::ComfortFood => "Comfort Food",
        }
    }
}

/// Time budgets offered by the form, in minutes.
#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq)]
pub enum TimeBudget {
    Quick = 15,
    Fast = 30,
    Moderate = 45,
    Standard = 60,
    Elaborate = 90,
    SlowCook = 120,
}

impl TimeBudget {
    pub fn minutes(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeBudget::Quick => "15 minutes (Quick & Easy)",
            TimeBudget::Fast => "30 minutes (Fast)",
            TimeBudget::Moderate => "45 minutes (Moderate)",
            TimeBudget::Standard => "1 hour (Standard)",
            TimeBudget::Elaborate => "1.5 hours (Elaborate)",
            TimeBudget::SlowCook => "2+ hours (Slow Cook)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported time budget {0}; expected one of 15, 30, 45, 60, 90, 120")]
pub struct TimeBudgetError(pub u32);

impl TryFrom<u32> for TimeBudget {
    type Error = TimeBudgetError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(TimeBudget::Quick),
            30 => Ok(TimeBudget::Fast),
            45 => Ok(TimeBudget::Moderate),
            60 => Ok(TimeBudget::Standard),
            90 => Ok(TimeBudget::Elaborate),
            120 => Ok(TimeBudget::SlowCook),
            other => Err(TimeBudgetError(other)),
        }
    }
}

/// Kitchen equipment options offered by the form.
#[derive(Debug, Clone, Copy, EnumString, AsRefStr, EnumIter, Display, PartialEq, Eq)]
#[strum(serialize_all = "title_case")]
pub enum Equipment {
    Stovetop,
    Oven,
    Microwave,
    AirFryer,
    SlowCooker,
    PressureCooker,
    Grill,
    Blender,
    FoodProcessor,
    StandMixer,
    HandMixer,
    Toaster,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_request_parses_form_payload() {
        let json = r#"{
            "ingredients": ["chicken", "rice"],
            "equipment": ["Oven"],
            "cuisine": "asian",
            "timeAvailable": 30,
            "dietaryRestrictions": "gluten-free"
        }"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.ingredients, vec!["chicken", "rice"]);
        assert_eq!(request.time_available, 30);
        assert_eq!(request.dietary_notes(), Some("gluten-free"));
    }

    #[test]
    fn test_dietary_restrictions_optional() {
        let json = r#"{"ingredients": ["egg"], "equipment": [], "cuisine": "french", "timeAvailable": 15}"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dietary_restrictions, None);
        assert_eq!(request.dietary_notes(), None);
    }

    #[test]
    fn test_blank_dietary_notes_are_none() {
        let request = GenerationRequest {
            ingredients: vec!["egg".to_string()],
            equipment: vec![],
            cuisine: "french".to_string(),
            time_available: 15,
            dietary_restrictions: Some("   ".to_string()),
        };
        assert_eq!(request.dietary_notes(), None);
    }

    #[test]
    fn test_missing_ingredients_is_rejected() {
        let json = r#"{"equipment": [], "cuisine": "french", "timeAvailable": 15}"#;
        assert!(serde_json::from_str::<GenerationRequest>(json).is_err());
    }

    #[test]
    fn test_validation_requires_ingredients_and_cuisine() {
        let mut request = GenerationRequest {
            ingredients: vec![],
            equipment: vec![],
            cuisine: "thai".to_string(),
            time_available: 30,
            dietary_restrictions: None,
        };
        assert!(request.validate().is_err());

        request.ingredients.push("tofu".to_string());
        assert!(request.validate().is_ok());

        request.cuisine.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_cuisine_tags() {
        assert_eq!(Cuisine::from_tag("comfort-food"), Some(Cuisine::ComfortFood));
        assert_eq!(Cuisine::from_tag("asian"), Some(Cuisine::Asian));
        assert_eq!(Cuisine::from_tag("martian"), None);
        assert_eq!(Cuisine::ComfortFood.tag(), "comfort-food");
        assert_eq!(Cuisine::ComfortFood.label(), "Comfort Food");
        assert_eq!(Cuisine::iter().count(), 10);
    }

    #[test]
    fn test_time_budget_conversion() {
        assert_eq!(TimeBudget::try_from(45), Ok(TimeBudget::Moderate));
        assert_eq!(TimeBudget::SlowCook.minutes(), 120);
        assert_eq!(TimeBudget::try_from(20), Err(TimeBudgetError(20)));
        assert_eq!(
            TimeBudgetError(20).to_string(),
            "Unsupported time budget 20; expected one of 15, 30, 45, 60, 90, 120"
        );
    }

    #[test]
    fn test_equipment_labels() {
        assert_eq!(Equipment::AirFryer.as_ref(), "Air Fryer");
        assert_eq!(Equipment::PressureCooker.to_string(), "Pressure Cooker");
        assert_eq!("Food Processor".parse::<Equipment>(), Ok(Equipment::FoodProcessor));
        assert_eq!(Equipment::iter().count(), 12);
    }
}
