//! Orchestration between the input form, the API call, the cache, and the
//! displayed state.

use log::error;

use crate::cache::ResultCache;
use crate::client::RecipeApiClient;
use crate::error::SuggestError;
use crate::model::{Difficulty, Recipe, SuggestRequest};

/// Drives a recipe search end to end: validate input, issue one request,
/// reconcile the response, update cache and displayed state.
///
/// Submissions are not sequenced or cancelled: each call is independent and
/// the latest completion overwrites displayed state, whatever order the
/// responses arrive in.
pub struct RecipeSearchController {
    client: RecipeApiClient,
    cache: ResultCache,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<String>,
}

impl RecipeSearchController {
    /// Create a controller. The cache slot is read once here; a surviving
    /// result set becomes the initial displayed list.
    pub fn new(client: RecipeApiClient, mut cache: ResultCache) -> Self {
        let recipes = cache.load();
        RecipeSearchController {
            client,
            cache,
            recipes,
            loading: false,
            error: None,
        }
    }

    /// Currently displayed recipe list.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// True while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing error message from the last failed operation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit a search. Entries are trimmed, blanks dropped, and duplicates
    /// removed; if nothing remains, no request is issued and state is left
    /// untouched. On success the canonical list becomes the displayed state
    /// and is persisted. On any failure the displayed list is preserved and
    /// the generic localized message is surfaced; detail goes to the log.
    /// The loading flag is cleared before returning, success or failure.
    pub async fn search(&mut self, ingredients: &[String], difficulty: Option<Difficulty>) {
        let ingredients = sanitize_ingredients(ingredients);
        if ingredients.is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;

        let request = SuggestRequest::new(ingredients, difficulty);
        match self.client.suggest(&request).await {
            Ok(recipes) => {
                self.cache.save(&recipes);
                self.recipes = recipes;
            }
            Err(err) => {
                error!("recipe search failed: {err}");
                self.error = Some(err.user_message().to_string());
            }
        }

        self.loading = false;
    }

    /// Fetch a single recipe for the detail view. Same error policy as
    /// [`search`](Self::search); the detail result is returned rather than
    /// stored, and the displayed list is never touched.
    pub async fn recipe_detail(&mut self, id: &str) -> Result<Recipe, SuggestError> {
        self.loading = true;
        self.error = None;

        let result = self.client.recipe(id).await;
        if let Err(err) = &result {
            error!("recipe detail fetch failed: {err}");
            self.error = Some(err.user_message().to_string());
        }

        self.loading = false;
        result
    }
}

/// Trim entries, drop blanks, and remove duplicates preserving first
/// occurrence order.
pub fn sanitize_ingredients(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() || out.iter().any(|seen| seen == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}
