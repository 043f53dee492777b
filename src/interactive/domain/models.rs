use crate::api::{RecipeDetails, SearchPage};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    RecipeDetails,
    Help,
}

/// Which part of the search screen receives keys.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    Input,
    List,
}

/// Result of one search request as seen by the screen.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Success(SearchPage),
    Failure(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailsOutcome {
    Success(Box<RecipeDetails>),
    Failure(String),
}

// Requests and responses exchanged with the API worker thread.
// `id` is the generation the request was issued under.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    Search { id: u64, query: String, number: u32 },
    Details { id: u64, recipe_id: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    Search { id: u64, outcome: SearchOutcome },
    Details {
        id: u64,
        recipe_id: u64,
        outcome: DetailsOutcome,
    },
}
