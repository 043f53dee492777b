//! Test doubles shared by the interactive tests

use crate::api::{ApiError, ApiResult, RecipeApi, RecipeDetails, RecipeSummary, SearchPage};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Scripted [`RecipeApi`]. Each call pops the next queued reply; an empty
/// queue answers with an empty page (or a 404 for details).
#[derive(Default)]
pub struct MockRecipeApi {
    search_replies: Mutex<VecDeque<ApiResult<SearchPage>>>,
    details_replies: Mutex<VecDeque<ApiResult<RecipeDetails>>>,
    delays: Mutex<HashMap<String, Duration>>,
    pub queries: Mutex<Vec<(String, u32)>>,
    pub detail_ids: Mutex<Vec<u64>>,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: Vec<RecipeSummary>) -> Self {
        let api = Self::new();
        api.push_results(results);
        api
    }

    pub fn push_results(&self, results: Vec<RecipeSummary>) {
        let total = results.len() as u64;
        self.search_replies.lock().unwrap().push_back(Ok(SearchPage {
            number: results.len() as u32,
            total_results: total,
            results,
            offset: 0,
        }));
    }

    pub fn push_search_error(&self, status: u16) {
        self.search_replies
            .lock()
            .unwrap()
            .push_back(Err(status_error(status)));
    }

    pub fn push_details(&self, details: RecipeDetails) {
        self.details_replies.lock().unwrap().push_back(Ok(details));
    }

    /// Make every search for `query` sleep for `delay` before answering.
    pub fn delay_query(&self, query: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
    }

    pub fn recorded_queries(&self) -> Vec<(String, u32)> {
        self.queries.lock().unwrap().clone()
    }
}

impl RecipeApi for MockRecipeApi {
    fn search_recipes(&self, query: &str, number: u32) -> ApiResult<SearchPage> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), number));
        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            thread::sleep(delay);
        }
        self.search_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }

    fn recipe_information(&self, id: u64) -> ApiResult<RecipeDetails> {
        self.detail_ids.lock().unwrap().push(id);
        self.details_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(status_error(404)))
    }
}

pub fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        url: "http://mock/recipes".to_string(),
    }
}

pub fn pasta_results() -> Vec<RecipeSummary> {
    vec![
        RecipeSummary::new(1, "Pasta A", "u1"),
        RecipeSummary::new(2, "Pasta B", "u2"),
    ]
}

pub fn create_test_details(id: u64, title: &str) -> RecipeDetails {
    let mut details = RecipeDetails::from_summary(&RecipeSummary::new(id, title, ""));
    details.ready_in_minutes = Some(30);
    details.servings = Some(4);
    details.summary = Some("<b>Tasty</b> dish".to_string());
    details
}
