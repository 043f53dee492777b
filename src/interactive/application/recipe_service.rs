use crate::api::RecipeApi;
use crate::interactive::domain::models::{ApiRequest, ApiResponse, DetailsOutcome, SearchOutcome};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs screen requests against a [`RecipeApi`] and folds every failure into
/// an outcome value, so nothing is thrown past the screen.
pub struct RecipeService {
    api: Arc<dyn RecipeApi>,
}

impl RecipeService {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }

    pub fn handle(&self, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Search { id, query, number } => ApiResponse::Search {
                id,
                outcome: self.search(&query, number),
            },
            ApiRequest::Details { id, recipe_id } => ApiResponse::Details {
                id,
                recipe_id,
                outcome: self.details(recipe_id),
            },
        }
    }

    pub fn search(&self, query: &str, number: u32) -> SearchOutcome {
        debug!("Searching recipes for {:?} (limit {})", query, number);
        match self.api.search_recipes(query, number) {
            Ok(page) => SearchOutcome::Success(page),
            Err(e) => {
                warn!("Search request failed: {}", e);
                SearchOutcome::Failure(e.to_string())
            }
        }
    }

    pub fn details(&self, recipe_id: u64) -> DetailsOutcome {
        debug!("Loading recipe {}", recipe_id);
        match self.api.recipe_information(recipe_id) {
            Ok(details) => DetailsOutcome::Success(Box::new(details)),
            Err(e) => {
                warn!("Details request for recipe {} failed: {}", recipe_id, e);
                DetailsOutcome::Failure(e.to_string())
            }
        }
    }
}
