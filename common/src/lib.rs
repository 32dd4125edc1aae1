//! My Fridge AI Common Library
//!
//! Types and workflow logic shared with the web frontend:
//! - wire types for the detection and recipe services
//! - the ingredient selection state machine
//! - the manual-entry ingredient catalog

pub mod catalog;
pub mod error;
pub mod selection;
pub mod types;

pub use catalog::{display_name, IngredientCatalog};
pub use error::{ApiError, Retrieval};
pub use selection::{split_ingredients_param, IngredientSelection};
pub use types::{
    DetectionResponse, DetectionResult, Nutrition, Recipe, RecipeIngredients, RecipeMatch,
    RecipeMatchRequest, RecipeMatchResponse,
};
