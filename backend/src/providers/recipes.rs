//! Recipe directory client
//!
//! Two calls: an ingredient search returning a title-to-id index, and a
//! per-recipe detail fetch. The API key travels as the `key` query
//! parameter, and ingredient phrases are spliced in pre-encoded.

use crate::config::RECIPE_DIRECTORY;
use crate::providers::{fetch_json, DirectoryError};
use food_finder_shared::query;
use food_finder_shared::types::{RecipeDetail, RecipeIndex};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Client for the recipe directory
pub struct RecipeDirectory {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl RecipeDirectory {
    pub fn new(client: Client, base_url: String, api_key: Option<SecretString>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn key(&self) -> Result<&SecretString, DirectoryError> {
        self.api_key
            .as_ref()
            .ok_or(DirectoryError::MissingApiKey(RECIPE_DIRECTORY))
    }

    /// Search recipes matching an ingredient phrase
    ///
    /// Returns a title-to-id index; the upstream bounds the result set
    /// (about thirty entries).
    pub async fn search_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<RecipeIndex, DirectoryError> {
        let key = self.key()?;
        let url = format!(
            "{}/api/search?key={}&q={}",
            self.base_url,
            key.expose_secret(),
            query::ingredient_query(ingredients)
        );

        let parsed: RecipeSearchResponse = fetch_json(&self.client, &url, None).await?;

        Ok(parsed
            .recipes
            .into_iter()
            .map(|recipe| (recipe.title, recipe.recipe_id))
            .collect())
    }

    /// Fetch full detail for one recipe id
    ///
    /// The requested id is echoed back in the record so callers can feed
    /// the result straight into follow-up lookups.
    pub async fn detail(&self, recipe_id: &str) -> Result<RecipeDetail, DirectoryError> {
        let key = self.key()?;
        let url = format!(
            "{}/api/get?key={}&rId={recipe_id}",
            self.base_url,
            key.expose_secret()
        );

        let parsed: RecipeGetResponse = fetch_json(&self.client, &url, None).await?;

        Ok(RecipeDetail {
            title: parsed.recipe.title,
            ingredients: parsed.recipe.ingredients,
            source_url: parsed.recipe.source_url,
            image_url: parsed.recipe.image_url,
            recipe_id: recipe_id.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RecipeSearchResponse {
    recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct RecipeSummary {
    title: String,
    recipe_id: String,
}

#[derive(Debug, Deserialize)]
struct RecipeGetResponse {
    recipe: RecipeBody,
}

#[derive(Debug, Deserialize)]
struct RecipeBody {
    title: String,
    ingredients: String,
    source_url: String,
    image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_decodes() {
        let body = serde_json::json!({
            "count": 2,
            "recipes": [
                {"title": "Shrimp Scampi", "recipe_id": "47050", "publisher": "x"},
                {"title": "Garlic Butter Pasta", "recipe_id": "12345"}
            ]
        });
        let parsed: RecipeSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.recipes[1].recipe_id, "12345");
    }

    #[test]
    fn detail_response_requires_recipe_object() {
        let body = serde_json::json!({"error": "not found"});
        assert!(serde_json::from_value::<RecipeGetResponse>(body).is_err());
    }
}
