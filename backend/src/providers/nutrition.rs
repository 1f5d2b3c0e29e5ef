//! Nutrition directory client
//!
//! A food-item search (name to ndbno) and a per-item nutrient report.
//! The API key travels as the `api_key` query parameter. The search is
//! pinned to the Standard Reference data set and capped at twenty
//! results.

use crate::config::NUTRITION_DIRECTORY;
use crate::providers::{fetch_json, DirectoryError};
use food_finder_shared::query;
use food_finder_shared::types::{FoodIndex, NutrientProfile};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Maximum entries a food search returns
const SEARCH_LIMIT: usize = 20;

/// Client for the nutrition directory
pub struct NutritionDirectory {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl NutritionDirectory {
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
            .ok_or(DirectoryError::MissingApiKey(NUTRITION_DIRECTORY))
    }

    /// Search food items by name, returning a name-to-ndbno index
    pub async fn search_foods(&self, ingredient: &str) -> Result<FoodIndex, DirectoryError> {
        let key = self.key()?;
        let url = format!(
            "{}/ndb/search/?format=json&sort=r&max={SEARCH_LIMIT}&offset=0&ds=Standard%20Reference&q={}&api_key={}",
            self.base_url,
            query::ingredient_query(ingredient),
            key.expose_secret()
        );

        let parsed: FoodSearchResponse = fetch_json(&self.client, &url, None).await?;

        Ok(parsed
            .list
            .item
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(|item| (item.name, item.ndbno))
            .collect())
    }

    /// Fetch the nutrient report for one ndbno
    ///
    /// Produces a nutrient-name to `"value unit"` mapping from the first
    /// food in the report.
    pub async fn nutrient_profile(&self, ndbno: &str) -> Result<NutrientProfile, DirectoryError> {
        let key = self.key()?;
        let url = format!(
            "{}/ndb/V2/reports?type=b&format=json&ndbno={ndbno}&api_key={}",
            self.base_url,
            key.expose_secret()
        );

        let parsed: ReportsResponse = fetch_json(&self.client, &url, None).await?;

        let food = parsed.foods.into_iter().next().ok_or_else(|| {
            use serde::de::Error;
            DirectoryError::Decode(serde_json::Error::custom("empty foods array"))
        })?;

        Ok(food
            .food
            .nutrients
            .into_iter()
            .map(|nutrient| {
                let rendered = format!("{} {}", nutrient.value, nutrient.unit);
                (nutrient.name, rendered)
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct FoodSearchResponse {
    list: FoodList,
}

#[derive(Debug, Deserialize)]
struct FoodList {
    item: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
struct FoodItem {
    name: String,
    ndbno: String,
}

#[derive(Debug, Deserialize)]
struct ReportsResponse {
    foods: Vec<FoodReport>,
}

#[derive(Debug, Deserialize)]
struct FoodReport {
    food: FoodDetail,
}

#[derive(Debug, Deserialize)]
struct FoodDetail {
    nutrients: Vec<Nutrient>,
}

#[derive(Debug, Deserialize)]
struct Nutrient {
    name: String,
    value: NutrientValue,
    unit: String,
}

/// Nutrient values arrive as strings in most reports but as bare numbers
/// in some; both render the same way.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NutrientValue {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientValue::Text(text) => f.write_str(text),
            NutrientValue::Number(number) => write!(f, "{number}"),
        }
    }
}
