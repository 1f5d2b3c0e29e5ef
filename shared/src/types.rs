//! Domain types returned by the directory aggregation layer
//!
//! All of these are ephemeral: they are reshaped upstream responses,
//! never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a human-readable name (city, establishment type, cuisine)
/// to the restaurant directory's numeric identifier.
pub type LookupTable = BTreeMap<String, i64>;

/// Mapping from recipe title to the recipe directory's identifier.
pub type RecipeIndex = BTreeMap<String, String>;

/// Mapping from food item name to the nutrition directory's identifier
/// (an "ndbno" in the upstream's vocabulary).
pub type FoodIndex = BTreeMap<String, String>;

/// Mapping from nutrient name to a rendered `"value unit"` string.
pub type NutrientProfile = BTreeMap<String, String>;

/// A single restaurant search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub address: String,
    /// The directory's aggregate user rating, passed through verbatim.
    pub aggregate_rating: String,
}

/// Full detail for a single recipe.
///
/// Field order matches the record shape callers consume:
/// title, ingredients, source URL, image URL, id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub title: String,
    pub ingredients: String,
    pub source_url: String,
    pub image_url: String,
    /// The id the detail was requested with, echoed back.
    pub recipe_id: String,
}
