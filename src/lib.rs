pub mod cache;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod response;
pub mod store;

pub use cache::{ResultCache, CACHE_SLOT_KEY, CACHE_TTL};
pub use client::RecipeApiClient;
pub use config::ClientConfig;
pub use controller::{sanitize_ingredients, RecipeSearchController};
pub use error::{SuggestError, GENERIC_FAILURE_MESSAGE};
pub use model::{Difficulty, Ingredient, NutritionInfo, Recipe, SuggestRequest};

/// Ask the service for suggestions in one call, using configuration from
/// file/environment. Blank and duplicate ingredient entries are dropped; an
/// input with nothing left issues no request and yields an empty list.
pub async fn suggest_recipes(
    ingredients: &[String],
    difficulty: Option<Difficulty>,
) -> Result<Vec<Recipe>, SuggestError> {
    let ingredients = sanitize_ingredients(ingredients);
    if ingredients.is_empty() {
        return Ok(Vec::new());
    }

    let config = ClientConfig::load()?;
    let client = RecipeApiClient::new(&config)?;
    client
        .suggest(&SuggestRequest::new(ingredients, difficulty))
        .await
}

/// Fetch a single recipe by id, using configuration from file/environment.
pub async fn fetch_recipe_detail(id: &str) -> Result<Recipe, SuggestError> {
    let config = ClientConfig::load()?;
    let client = RecipeApiClient::new(&config)?;
    client.recipe(id).await
}
