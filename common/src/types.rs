//! Wire types for the detection and recipe services
//!
//! Shapes mirror the service contracts exactly:
//! - `DetectionResponse`: POST /api/detect
//! - `RecipeMatchRequest` / `RecipeMatchResponse`: POST /api/recipes/match
//! - `Recipe`: GET /api/recipes/{id}

use serde::{Deserialize, Serialize};

/// A single food item found in the uploaded image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    pub name: String,
    pub name_urdu: String,
    pub confidence: f32,
    /// Pixel coordinates [x1, y1, x2, y2]
    pub bounding_box: Vec<f32>,
    pub class_id: i32,
}

/// Envelope returned by the detection service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResponse {
    pub success: bool,
    pub message: String,
    pub detected_items: Vec<DetectionResult>,
    pub total_count: usize,
}

/// Recipe ingredients grouped by how the user can supply them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeIngredients {
    pub detectable: Vec<String>,
    pub non_detectable: Vec<String>,
    pub pantry: Vec<String>,
    pub optional: Vec<String>,
}

/// Nutrition facts per serving
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub fiber: f32,
}

/// A recipe record, immutable once fetched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub name_urdu: String,
    pub category: String,
    pub ingredients: RecipeIngredients,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
    pub allergens: Vec<String>,
    /// Minutes
    pub cook_time: u32,
    /// Minutes
    pub prep_time: u32,
    pub difficulty: String,
    pub servings: u32,
}

impl Recipe {
    /// Prep plus cook time, in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// One ranked match produced by the recipe service.
///
/// The match percentage and the has/missing split are computed externally;
/// the client only renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub match_percentage: f32,
    pub has_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}

/// Body for POST /api/recipes/match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatchRequest {
    pub ingredients: Vec<String>,
}

/// Envelope returned by the recipe match endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeMatchResponse {
    pub success: bool,
    pub message: String,
    pub recipes: Vec<RecipeMatch>,
    pub total_count: usize,
}
