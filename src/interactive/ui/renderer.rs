use crate::interactive::constants::SEARCH_BAR_HEIGHT;
use crate::interactive::ui::app_state::{AppState, Focus, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, loading_indicator::LoadingIndicator,
    recipe_details::RecipeDetailsModal, result_list::ResultList, search_bar::SearchBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    loading_indicator: LoadingIndicator,
    recipe_details: RecipeDetailsModal,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            loading_indicator: LoadingIndicator::new(),
            recipe_details: RecipeDetailsModal::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        // Visibility tracks the selection in every mode, not only while the modal is drawn
        self.recipe_details.set_visible(state.details_props().visible);

        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::RecipeDetails => self.render_details_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        // While a search is in flight the spinner replaces input and list
        if state.search.is_loading {
            self.loading_indicator.set_query(&state.search.query);
            self.loading_indicator.render(f, f.area());
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Results
            ])
            .split(f.area());

        let list_focused = state.mode == Mode::Search && state.search.focus == Focus::List;

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_focused(state.mode == Mode::Search && !list_focused);
        self.search_bar.set_error(state.search.error.clone());
        self.search_bar.set_message(state.ui.message.clone());

        self.result_list.set_results(state.search.results.clone());
        self.result_list.set_selected_index(state.search.selected_index);
        self.result_list.set_total_results(state.search.total_results);
        self.result_list.set_focused(list_focused);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
    }

    fn render_details_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);

        let props = state.details_props();
        self.recipe_details.set_visible(props.visible);
        self.recipe_details.set_recipe_id(props.recipe_id);
        self.recipe_details.set_offline(props.offline);
        self.recipe_details.set_loading(state.details.is_loading);
        self.recipe_details.set_error(state.details.error.clone());
        self.recipe_details.set_recipe(state.details.recipe.clone());

        self.recipe_details.render(f, f.area());
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // First render the search mode underneath
        self.render_search_mode(f, state);

        // Then render the help dialog on top
        self.help_dialog.render(f, f.area());
    }

    /// Advance animated widgets by one frame.
    pub fn tick(&mut self) {
        self.loading_indicator.tick();
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_recipe_details_mut(&mut self) -> &mut RecipeDetailsModal {
        &mut self.recipe_details
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
