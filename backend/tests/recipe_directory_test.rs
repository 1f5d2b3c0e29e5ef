//! Integration tests for recipe directory lookups

use food_finder_backend::config::{
    ApiKeys, DirectoriesConfig, NUTRITION_DIRECTORY, RECIPE_DIRECTORY, RESTAURANT_DIRECTORY,
};
use food_finder_backend::services::DirectoryService;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(base: &str) -> DirectoryService {
    let config = DirectoriesConfig {
        restaurant_base_url: base.to_string(),
        recipe_base_url: base.to_string(),
        nutrition_base_url: base.to_string(),
        api_keys_file: String::new(),
    };
    let keys = ApiKeys::from_pairs([
        (RESTAURANT_DIRECTORY, "test-key"),
        (RECIPE_DIRECTORY, "recipe-key"),
        (NUTRITION_DIRECTORY, "nutrition-key"),
    ]);
    DirectoryService::new(&config, &keys)
}

#[tokio::test]
async fn search_maps_titles_to_recipe_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("key", "recipe-key"))
        .and(query_param("q", "butter"))
        .and(header("User-Agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "recipes": [
                {"title": "Shrimp Scampi", "recipe_id": "47050"},
                {"title": "Garlic Butter Pasta", "recipe_id": "12345"}
            ]
        })))
        .mount(&server)
        .await;

    let recipes = service(&server.uri()).search_recipes_by_ingredients("butter").await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes["Shrimp Scampi"], "47050");
    assert_eq!(recipes["Garlic Butter Pasta"], "12345");
}

#[tokio::test]
async fn ingredient_phrases_are_pre_encoded_on_the_wire() {
    let server = MockServer::start().await;

    // The literal %20 decodes back to a space in the query parameter.
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "red pepper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{"title": "Stuffed Peppers", "recipe_id": "99"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = service(&server.uri())
        .search_recipes_by_ingredients(" red pepper ")
        .await;
    assert_eq!(recipes.len(), 1);
}

#[tokio::test]
async fn detail_returns_fields_in_order_with_echoed_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get"))
        .and(query_param("key", "recipe-key"))
        .and(query_param("rId", "47050"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipe": {
                "title": "Shrimp Scampi",
                "ingredients": "shrimp, butter, garlic",
                "source_url": "https://example.com/scampi",
                "image_url": "https://example.com/scampi.jpg",
                "publisher": "ignored"
            }
        })))
        .mount(&server)
        .await;

    let detail = service(&server.uri()).recipe_detail("47050").await.unwrap();

    assert_eq!(detail.title, "Shrimp Scampi");
    assert_eq!(detail.ingredients, "shrimp, butter, garlic");
    assert_eq!(detail.source_url, "https://example.com/scampi");
    assert_eq!(detail.image_url, "https://example.com/scampi.jpg");
    assert_eq!(detail.recipe_id, "47050");
}

#[tokio::test]
async fn malformed_detail_response_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "gone"})))
        .mount(&server)
        .await;

    assert!(service(&server.uri()).recipe_detail("47050").await.is_none());
}

#[tokio::test]
async fn empty_search_results_and_faults_look_identical() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "nothing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
        .mount(&server)
        .await;

    let service = service(&server.uri());

    // Genuinely empty result set.
    let empty = service.search_recipes_by_ingredients("nothing").await;
    // Fault (no mock matches, wiremock answers 404).
    let faulted = service.search_recipes_by_ingredients("unmatched").await;

    assert!(empty.is_empty());
    assert!(faulted.is_empty());
}
