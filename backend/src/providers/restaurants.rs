//! Restaurant directory client
//!
//! The directory exposes three name-to-id lookups (cities,
//! establishments, cuisines) and a filtered restaurant search. The three
//! lookups are one routine dispatching on [`Lookup`]: the variant picks
//! the query string and which response array becomes the mapping.
//!
//! Authentication is a `user-key` header on every request.

use crate::config::RESTAURANT_DIRECTORY;
use crate::providers::{fetch_json, DirectoryError};
use food_finder_shared::query;
use food_finder_shared::types::{LookupTable, RestaurantRecord};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Maximum records a restaurant search returns
const SEARCH_LIMIT: usize = 10;

/// A name-to-id lookup, discriminated by what is being resolved
///
/// City lookups take free text; establishment and cuisine lookups are
/// scoped to a previously resolved city id.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Cities(&'a str),
    Establishments(i64),
    Cuisines(i64),
}

impl Lookup<'_> {
    /// Path and query string for this lookup
    fn query_path(&self) -> String {
        match self {
            Lookup::Cities(name) => format!("/cities?q={}", query::city_query(name)),
            Lookup::Establishments(city_id) => format!("/establishments?city_id={city_id}"),
            Lookup::Cuisines(city_id) => format!("/cuisines?city_id={city_id}"),
        }
    }
}

/// Client for the restaurant directory
pub struct RestaurantDirectory {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl RestaurantDirectory {
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
            .ok_or(DirectoryError::MissingApiKey(RESTAURANT_DIRECTORY))
    }

    /// Resolve names to directory ids for one lookup kind
    pub async fn resolve(&self, lookup: Lookup<'_>) -> Result<LookupTable, DirectoryError> {
        let key = self.key()?;
        let url = format!("{}{}", self.base_url, lookup.query_path());

        let table = match lookup {
            Lookup::Cities(_) => {
                let parsed: CitiesResponse =
                    fetch_json(&self.client, &url, Some(("user-key", key.expose_secret()))).await?;
                parsed
                    .location_suggestions
                    .into_iter()
                    .map(|city| (city.name, city.id))
                    .collect()
            }
            Lookup::Establishments(_) => {
                let parsed: EstablishmentsResponse =
                    fetch_json(&self.client, &url, Some(("user-key", key.expose_secret()))).await?;
                parsed
                    .establishments
                    .into_iter()
                    .map(|entry| (entry.establishment.name, entry.establishment.id))
                    .collect()
            }
            Lookup::Cuisines(_) => {
                let parsed: CuisinesResponse =
                    fetch_json(&self.client, &url, Some(("user-key", key.expose_secret()))).await?;
                parsed
                    .cuisines
                    .into_iter()
                    .map(|entry| (entry.cuisine.cuisine_name, entry.cuisine.cuisine_id))
                    .collect()
            }
        };

        Ok(table)
    }

    /// Search restaurants in a city, optionally filtered by establishment
    /// type and cuisine
    ///
    /// The filters are appended to the query string only when present;
    /// the upstream is asked for at most ten results and the response is
    /// capped at ten regardless.
    pub async fn search(
        &self,
        city_id: i64,
        establishment_id: Option<i64>,
        cuisine_id: Option<i64>,
    ) -> Result<Vec<RestaurantRecord>, DirectoryError> {
        let key = self.key()?;

        let mut url = format!(
            "{}/search?entity_id={city_id}&entity_type=city&count={SEARCH_LIMIT}",
            self.base_url
        );
        if let Some(establishment) = establishment_id {
            url.push_str(&format!("&establishment_type={establishment}"));
        }
        if let Some(cuisine) = cuisine_id {
            url.push_str(&format!("&cuisines={cuisine}"));
        }

        let parsed: SearchResponse =
            fetch_json(&self.client, &url, Some(("user-key", key.expose_secret()))).await?;

        Ok(parsed
            .restaurants
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(|entry| RestaurantRecord {
                name: entry.restaurant.name,
                address: entry.restaurant.location.address,
                aggregate_rating: entry.restaurant.user_rating.aggregate_rating,
            })
            .collect())
    }
}

// Upstream response shapes. Only the fields the mappings need are
// declared; anything else in the body is ignored.

#[derive(Debug, Deserialize)]
struct CitiesResponse {
    location_suggestions: Vec<CitySuggestion>,
}

#[derive(Debug, Deserialize)]
struct CitySuggestion {
    name: String,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct EstablishmentsResponse {
    establishments: Vec<EstablishmentEntry>,
}

#[derive(Debug, Deserialize)]
struct EstablishmentEntry {
    establishment: Establishment,
}

#[derive(Debug, Deserialize)]
struct Establishment {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CuisinesResponse {
    cuisines: Vec<CuisineEntry>,
}

#[derive(Debug, Deserialize)]
struct CuisineEntry {
    cuisine: Cuisine,
}

#[derive(Debug, Deserialize)]
struct Cuisine {
    cuisine_id: i64,
    cuisine_name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    restaurants: Vec<RestaurantEntry>,
}

#[derive(Debug, Deserialize)]
struct RestaurantEntry {
    restaurant: RestaurantInfo,
}

#[derive(Debug, Deserialize)]
struct RestaurantInfo {
    name: String,
    location: RestaurantLocation,
    user_rating: UserRating,
}

#[derive(Debug, Deserialize)]
struct RestaurantLocation {
    address: String,
}

#[derive(Debug, Deserialize)]
struct UserRating {
    aggregate_rating: String,
}
