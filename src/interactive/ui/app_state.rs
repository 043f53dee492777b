use crate::api::{RecipeDetails, RecipeSummary};
use crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive::domain::models::{DetailsOutcome, SearchOutcome};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use tracing::debug;

pub use crate::interactive::domain::models::{Focus, Mode};

/// State of the search screen. Created with the screen and dropped with it.
pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub details: DetailsState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<RecipeSummary>,
    pub total_results: u64,
    pub selected_index: usize,
    pub focus: Focus,
    pub is_loading: bool,
    /// Generation of the newest search. Responses carrying any other id are stale.
    pub current_search_id: u64,
    pub error: Option<String>,
}

pub struct DetailsState {
    pub selected_recipe_id: Option<u64>,
    pub recipe: Option<RecipeDetails>,
    pub is_loading: bool,
    pub current_request_id: u64,
    pub error: Option<String>,
    /// When set the details view shows what the list already has and never fetches.
    pub offline: bool,
}

pub struct UiState {
    pub message: Option<String>,
}

/// Inputs of the details view, derived from [`DetailsState`].
#[derive(Clone, Debug, PartialEq)]
pub struct DetailsProps {
    pub visible: bool,
    pub recipe_id: Option<u64>,
    pub offline: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                total_results: 0,
                selected_index: 0,
                focus: Focus::Input,
                is_loading: false,
                current_search_id: 0,
                error: None,
            },
            details: DetailsState {
                selected_recipe_id: None,
                recipe: None,
                is_loading: false,
                current_request_id: 0,
                error: None,
                offline: false,
            },
            ui: UiState { message: None },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SearchRequested => {
                if self.search.is_loading {
                    return Command::None;
                }
                self.search.current_search_id += 1;
                self.search.is_loading = true;
                self.search.error = None;
                self.ui.message = None;
                Command::ExecuteSearch
            }
            Message::SearchCompleted { id, outcome } => {
                if id != self.search.current_search_id {
                    debug!(
                        "Dropping stale search response {} (current {})",
                        id, self.search.current_search_id
                    );
                    return Command::None;
                }
                self.search.is_loading = false;
                match outcome {
                    SearchOutcome::Success(page) => {
                        self.search.results = page.results;
                        self.search.total_results = page.total_results;
                        self.search.selected_index = 0;
                        self.search.error = None;
                    }
                    SearchOutcome::Failure(error) => {
                        // Previous results stay on screen
                        self.search.error = Some(error);
                    }
                }
                if self.search.results.is_empty() {
                    self.search.focus = Focus::Input;
                }
                Command::None
            }
            Message::CancelSearch => {
                if !self.search.is_loading {
                    return Command::None;
                }
                self.search.current_search_id += 1;
                self.search.is_loading = false;
                self.ui.message = Some("Search cancelled".to_string());
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::FocusList => {
                if !self.search.results.is_empty() {
                    self.search.focus = Focus::List;
                }
                Command::None
            }
            Message::FocusInput => {
                self.search.focus = Focus::Input;
                Command::None
            }
            Message::RecipeSelected(recipe_id) => self.open_details(recipe_id),
            Message::DetailsLoaded {
                id,
                recipe_id,
                outcome,
            } => {
                if id != self.details.current_request_id
                    || self.details.selected_recipe_id != Some(recipe_id)
                {
                    debug!("Dropping stale details response for recipe {}", recipe_id);
                    return Command::None;
                }
                self.details.is_loading = false;
                match outcome {
                    DetailsOutcome::Success(details) => {
                        self.details.recipe = Some(*details);
                        self.details.error = None;
                    }
                    DetailsOutcome::Failure(error) => {
                        self.details.error = Some(error);
                    }
                }
                Command::None
            }
            Message::CloseDetails => {
                self.details.selected_recipe_id = None;
                self.details.recipe = None;
                self.details.error = None;
                self.details.is_loading = false;
                // A details response still in flight belongs to the closed view
                self.details.current_request_id += 1;
                self.mode = Mode::Search;
                Command::None
            }
            Message::ShowHelp => {
                if self.mode == Mode::Search && !self.search.is_loading {
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    fn open_details(&mut self, recipe_id: u64) -> Command {
        self.details.selected_recipe_id = Some(recipe_id);
        self.details.recipe = None;
        self.details.error = None;
        self.details.current_request_id += 1;
        self.mode = Mode::RecipeDetails;

        if let Some(index) = self.search.results.iter().position(|r| r.id == recipe_id) {
            self.search.selected_index = index;
        }

        if self.details.offline {
            self.details.is_loading = false;
            self.details.recipe = self
                .search
                .results
                .iter()
                .find(|r| r.id == recipe_id)
                .map(RecipeDetails::from_summary);
            Command::None
        } else {
            self.details.is_loading = true;
            Command::LoadRecipeDetails(recipe_id)
        }
    }

    pub fn details_props(&self) -> DetailsProps {
        DetailsProps {
            visible: self.details.selected_recipe_id.is_some(),
            recipe_id: self.details.selected_recipe_id,
            offline: self.details.offline,
        }
    }

    pub fn selected_recipe(&self) -> Option<&RecipeSummary> {
        self.search.results.get(self.search.selected_index)
    }
}
