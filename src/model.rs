use serde::{Deserialize, Serialize};

/// A recipe as returned by the suggestion service.
///
/// Recipes are immutable once received; the client never mutates or
/// re-submits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub serving_size: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<NutritionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Per-serving nutrition summary. The macro fields are free-form strings
/// (e.g. "12g") because that is what the service emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Difficulty as transmitted on the wire (`EASY`/`MEDIUM`/`HARD`).
///
/// The input form collects the Japanese label set 簡単/普通/難しい;
/// [`Difficulty::from_label`] maps a label to the wire value before
/// transmission and [`Difficulty::label`] maps back for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "簡単" => Some(Difficulty::Easy),
            "普通" => Some(Difficulty::Medium),
            "難しい" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "簡単",
            Difficulty::Medium => "普通",
            Difficulty::Hard => "難しい",
        }
    }
}

/// Body of `POST /api/v1/recipes/suggest`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub ingredients: Vec<String>,
    pub preferences: Preferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<u32>,
}

/// Cooking-time preference sent with every request.
pub const DEFAULT_COOKING_TIME: &str = "UNDER_30_MIN";
/// Serving-size preference sent with every request.
pub const DEFAULT_SERVING_SIZE: u32 = 2;

impl SuggestRequest {
    /// Build a request from an already-sanitized ingredient list. The
    /// cooking-time and serving-size preferences are fixed; only the
    /// difficulty comes from the caller.
    pub fn new(ingredients: Vec<String>, difficulty: Option<Difficulty>) -> Self {
        SuggestRequest {
            ingredients,
            preferences: Preferences {
                cooking_time: Some(DEFAULT_COOKING_TIME.to_string()),
                difficulty,
                serving_size: Some(DEFAULT_SERVING_SIZE),
            },
            excluded_ingredients: None,
        }
    }
}
