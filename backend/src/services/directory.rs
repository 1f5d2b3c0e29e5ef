//! Directory aggregation facade
//!
//! Owns the three directory providers and collapses every provider
//! fault — transport failure, non-2xx status, unexpected JSON shape,
//! missing API key — to the same empty "no result" value. Callers cannot
//! distinguish a genuine empty match set from a broken upstream; that
//! ambiguity is the documented contract, so the fault detail only goes
//! to the log.

use crate::config::{
    ApiKeys, DirectoriesConfig, NUTRITION_DIRECTORY, RECIPE_DIRECTORY, RESTAURANT_DIRECTORY,
};
use crate::providers::{
    build_client, DirectoryError, Lookup, NutritionDirectory, RecipeDirectory, RestaurantDirectory,
};
use food_finder_shared::types::{
    FoodIndex, LookupTable, NutrientProfile, RecipeDetail, RecipeIndex, RestaurantRecord,
};
use tracing::debug;

/// Aggregates the restaurant, recipe and nutrition directories behind a
/// fail-closed interface
pub struct DirectoryService {
    restaurants: RestaurantDirectory,
    recipes: RecipeDirectory,
    nutrition: NutritionDirectory,
}

impl DirectoryService {
    /// Build the service from directory configuration and loaded keys
    ///
    /// One pooled HTTP client is shared by all three providers. A
    /// missing key leaves its provider constructed but degraded.
    pub fn new(config: &DirectoriesConfig, keys: &ApiKeys) -> Self {
        let client = build_client();

        Self {
            restaurants: RestaurantDirectory::new(
                client.clone(),
                config.restaurant_base_url.clone(),
                keys.get(RESTAURANT_DIRECTORY).cloned(),
            ),
            recipes: RecipeDirectory::new(
                client.clone(),
                config.recipe_base_url.clone(),
                keys.get(RECIPE_DIRECTORY).cloned(),
            ),
            nutrition: NutritionDirectory::new(
                client,
                config.nutrition_base_url.clone(),
                keys.get(NUTRITION_DIRECTORY).cloned(),
            ),
        }
    }

    /// Resolve a free-text city name to candidate city ids
    pub async fn resolve_city_id(&self, city: &str) -> LookupTable {
        self.restaurants
            .resolve(Lookup::Cities(city))
            .await
            .unwrap_or_else(|e| swallow("resolve_city_id", e))
    }

    /// Resolve the establishment types valid within a city
    pub async fn resolve_establishment_id(&self, city_id: i64) -> LookupTable {
        self.restaurants
            .resolve(Lookup::Establishments(city_id))
            .await
            .unwrap_or_else(|e| swallow("resolve_establishment_id", e))
    }

    /// Resolve the cuisines valid within a city
    pub async fn resolve_cuisine_id(&self, city_id: i64) -> LookupTable {
        self.restaurants
            .resolve(Lookup::Cuisines(city_id))
            .await
            .unwrap_or_else(|e| swallow("resolve_cuisine_id", e))
    }

    /// Search restaurants in a city, optionally filtered
    ///
    /// At most ten records; an empty list on any fault.
    pub async fn search_restaurants(
        &self,
        city_id: i64,
        establishment_id: Option<i64>,
        cuisine_id: Option<i64>,
    ) -> Vec<RestaurantRecord> {
        self.restaurants
            .search(city_id, establishment_id, cuisine_id)
            .await
            .unwrap_or_else(|e| swallow("search_restaurants", e))
    }

    /// Search recipes matching an ingredient phrase
    pub async fn search_recipes_by_ingredients(&self, ingredients: &str) -> RecipeIndex {
        self.recipes
            .search_by_ingredients(ingredients)
            .await
            .unwrap_or_else(|e| swallow("search_recipes_by_ingredients", e))
    }

    /// Fetch full detail for one recipe id
    pub async fn recipe_detail(&self, recipe_id: &str) -> Option<RecipeDetail> {
        match self.recipes.detail(recipe_id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                debug!(operation = "recipe_detail", error = %e, "Directory lookup failed; returning no result");
                None
            }
        }
    }

    /// Search food items by name
    ///
    /// At most twenty entries; an empty index on any fault.
    pub async fn search_food_items(&self, ingredient: &str) -> FoodIndex {
        self.nutrition
            .search_foods(ingredient)
            .await
            .unwrap_or_else(|e| swallow("search_food_items", e))
    }

    /// Fetch the nutrient profile for one food item id
    pub async fn nutrient_profile(&self, ndbno: &str) -> NutrientProfile {
        self.nutrition
            .nutrient_profile(ndbno)
            .await
            .unwrap_or_else(|e| swallow("nutrient_profile", e))
    }
}

/// Log a provider fault and produce the empty sentinel
fn swallow<T: Default>(operation: &'static str, error: DirectoryError) -> T {
    debug!(operation, error = %error, "Directory lookup failed; returning no result");
    T::default()
}
