#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::api::{RecipeSummary, SearchPage};
    use crate::interactive::domain::models::{DetailsOutcome, SearchOutcome};
    use crate::interactive::test_support::{create_test_details, pasta_results};

    fn create_test_state() -> AppState {
        AppState::new()
    }

    fn success(results: Vec<RecipeSummary>) -> SearchOutcome {
        SearchOutcome::Success(SearchPage {
            total_results: results.len() as u64,
            number: results.len() as u32,
            results,
            offset: 0,
        })
    }

    /// Run one complete search cycle with the given outcome.
    fn run_search(state: &mut AppState, query: &str, outcome: SearchOutcome) {
        state.update(Message::QueryChanged(query.to_string()));
        let command = state.update(Message::SearchRequested);
        assert_eq!(command, Command::ExecuteSearch);
        let id = state.search.current_search_id;
        state.update(Message::SearchCompleted { id, outcome });
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.search.query, "");
        assert!(state.search.results.is_empty());
        assert_eq!(state.search.focus, Focus::Input);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.error, None);
        assert_eq!(state.details.selected_recipe_id, None);
        assert!(!state.details.offline);
    }

    #[test]
    fn test_query_changed_does_not_search() {
        let mut state = create_test_state();

        let command = state.update(Message::QueryChanged("pasta".to_string()));

        assert_eq!(state.search.query, "pasta");
        assert_eq!(command, Command::None);
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_search_requested_sets_loading() {
        let mut state = create_test_state();
        state.search.error = Some("old failure".to_string());

        let command = state.update(Message::SearchRequested);

        assert_eq!(command, Command::ExecuteSearch);
        assert!(state.search.is_loading);
        assert_eq!(state.search.current_search_id, 1);
        assert_eq!(state.search.error, None);
    }

    #[test]
    fn test_search_requested_while_loading_is_ignored() {
        let mut state = create_test_state();
        state.update(Message::SearchRequested);

        let command = state.update(Message::SearchRequested);

        assert_eq!(command, Command::None);
        assert_eq!(state.search.current_search_id, 1);
    }

    #[test]
    fn test_search_success_replaces_results_in_order() {
        let mut state = create_test_state();
        state.search.results = vec![RecipeSummary::new(99, "Old", "")];
        state.search.selected_index = 0;

        run_search(&mut state, "pasta", success(pasta_results()));

        assert_eq!(state.search.results, pasta_results());
        assert_eq!(state.search.total_results, 2);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.error, None);
    }

    #[test]
    fn test_search_success_with_empty_page() {
        let mut state = create_test_state();
        state.search.results = pasta_results();
        state.search.focus = Focus::List;

        run_search(&mut state, "zzz", success(Vec::new()));

        assert!(state.search.results.is_empty());
        assert_eq!(state.search.focus, Focus::Input);
    }

    #[test]
    fn test_search_failure_keeps_previous_results() {
        let mut state = create_test_state();
        run_search(&mut state, "pasta", success(pasta_results()));
        let before = state.search.results.clone();

        run_search(
            &mut state,
            "soup",
            SearchOutcome::Failure("HTTP 500 from http://mock".to_string()),
        );

        assert_eq!(state.search.results, before);
        assert!(!state.search.is_loading);
        assert_eq!(
            state.search.error.as_deref(),
            Some("HTTP 500 from http://mock")
        );
    }

    #[test]
    fn test_next_success_clears_error() {
        let mut state = create_test_state();
        run_search(&mut state, "a", SearchOutcome::Failure("boom".to_string()));
        assert!(state.search.error.is_some());

        run_search(&mut state, "b", success(pasta_results()));
        assert_eq!(state.search.error, None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = create_test_state();

        state.update(Message::SearchRequested);
        let stale_id = state.search.current_search_id;
        // Second search issued before the first resolved
        state.search.is_loading = false;
        state.update(Message::SearchRequested);
        let current_id = state.search.current_search_id;
        assert_ne!(stale_id, current_id);

        state.update(Message::SearchCompleted {
            id: current_id,
            outcome: success(vec![RecipeSummary::new(2, "New", "")]),
        });
        state.update(Message::SearchCompleted {
            id: stale_id,
            outcome: success(vec![RecipeSummary::new(1, "Old", "")]),
        });

        assert_eq!(state.search.results.len(), 1);
        assert_eq!(state.search.results[0].title, "New");
    }

    #[test]
    fn test_cancel_search_discards_late_response() {
        let mut state = create_test_state();
        state.update(Message::SearchRequested);
        let id = state.search.current_search_id;

        let command = state.update(Message::CancelSearch);
        assert!(matches!(command, Command::ScheduleClearMessage(_)));
        assert!(!state.search.is_loading);
        assert_eq!(state.ui.message.as_deref(), Some("Search cancelled"));

        state.update(Message::SearchCompleted {
            id,
            outcome: success(pasta_results()),
        });
        assert!(state.search.results.is_empty());
    }

    #[test]
    fn test_cancel_without_search_is_noop() {
        let mut state = create_test_state();
        assert_eq!(state.update(Message::CancelSearch), Command::None);
        assert_eq!(state.search.current_search_id, 0);
    }

    #[test]
    fn test_select_result_bounds() {
        let mut state = create_test_state();
        state.search.results = pasta_results();

        state.update(Message::SelectResult(1));
        assert_eq!(state.search.selected_index, 1);

        state.update(Message::SelectResult(5));
        assert_eq!(state.search.selected_index, 1);
        assert_eq!(state.selected_recipe().unwrap().id, 2);
    }

    #[test]
    fn test_focus_list_requires_results() {
        let mut state = create_test_state();

        state.update(Message::FocusList);
        assert_eq!(state.search.focus, Focus::Input);

        state.search.results = pasta_results();
        state.update(Message::FocusList);
        assert_eq!(state.search.focus, Focus::List);

        state.update(Message::FocusInput);
        assert_eq!(state.search.focus, Focus::Input);
    }

    #[test]
    fn test_select_recipe_opens_details() {
        let mut state = create_test_state();

        let command = state.update(Message::RecipeSelected(42));

        assert_eq!(command, Command::LoadRecipeDetails(42));
        assert_eq!(state.details.selected_recipe_id, Some(42));
        assert_eq!(state.mode, Mode::RecipeDetails);
        assert!(state.details.is_loading);
        assert_eq!(
            state.details_props(),
            DetailsProps {
                visible: true,
                recipe_id: Some(42),
                offline: false,
            }
        );
    }

    #[test]
    fn test_close_details_resets_selection() {
        let mut state = create_test_state();
        state.update(Message::RecipeSelected(42));

        state.update(Message::CloseDetails);

        assert_eq!(state.details.selected_recipe_id, None);
        assert!(!state.details_props().visible);
        assert_eq!(state.details_props().recipe_id, None);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_details_loaded() {
        let mut state = create_test_state();
        state.update(Message::RecipeSelected(7));
        let id = state.details.current_request_id;

        state.update(Message::DetailsLoaded {
            id,
            recipe_id: 7,
            outcome: DetailsOutcome::Success(Box::new(create_test_details(7, "Soup"))),
        });

        assert!(!state.details.is_loading);
        assert_eq!(state.details.recipe.as_ref().unwrap().title, "Soup");
    }

    #[test]
    fn test_details_failure_is_visible() {
        let mut state = create_test_state();
        state.update(Message::RecipeSelected(7));
        let id = state.details.current_request_id;

        state.update(Message::DetailsLoaded {
            id,
            recipe_id: 7,
            outcome: DetailsOutcome::Failure("HTTP 404".to_string()),
        });

        assert!(!state.details.is_loading);
        assert_eq!(state.details.error.as_deref(), Some("HTTP 404"));
        assert_eq!(state.details.recipe, None);
    }

    #[test]
    fn test_details_response_after_close_is_dropped() {
        let mut state = create_test_state();
        state.update(Message::RecipeSelected(7));
        let id = state.details.current_request_id;
        state.update(Message::CloseDetails);

        state.update(Message::DetailsLoaded {
            id,
            recipe_id: 7,
            outcome: DetailsOutcome::Success(Box::new(create_test_details(7, "Soup"))),
        });

        assert_eq!(state.details.recipe, None);
        assert_eq!(state.details.selected_recipe_id, None);
    }

    #[test]
    fn test_details_for_previous_recipe_is_dropped() {
        let mut state = create_test_state();
        state.update(Message::RecipeSelected(1));
        let first_id = state.details.current_request_id;
        state.update(Message::CloseDetails);
        state.update(Message::RecipeSelected(2));

        state.update(Message::DetailsLoaded {
            id: first_id,
            recipe_id: 1,
            outcome: DetailsOutcome::Success(Box::new(create_test_details(1, "First"))),
        });

        assert_eq!(state.details.selected_recipe_id, Some(2));
        assert!(state.details.is_loading);
        assert_eq!(state.details.recipe, None);
    }

    #[test]
    fn test_offline_details_use_summary() {
        let mut state = create_test_state();
        state.details.offline = true;
        state.search.results = pasta_results();

        let command = state.update(Message::RecipeSelected(2));

        assert_eq!(command, Command::None);
        assert!(!state.details.is_loading);
        assert_eq!(state.details.recipe.as_ref().unwrap().title, "Pasta B");
        assert_eq!(state.search.selected_index, 1);
    }

    #[test]
    fn test_pasta_scenario() {
        let mut state = create_test_state();
        run_search(&mut state, "pasta", success(pasta_results()));

        let titles: Vec<&str> = state.search.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pasta A", "Pasta B"]);

        let command = state.update(Message::RecipeSelected(2));
        assert_eq!(command, Command::LoadRecipeDetails(2));
        assert_eq!(state.details_props().recipe_id, Some(2));
    }

    #[test]
    fn test_help_transitions() {
        let mut state = create_test_state();

        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);

        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Search);

        // No help while a search is running
        state.update(Message::SearchRequested);
        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_status_messages() {
        let mut state = create_test_state();

        state.update(Message::SetStatus("hello".to_string()));
        assert_eq!(state.ui.message.as_deref(), Some("hello"));

        state.update(Message::ClearStatus);
        assert_eq!(state.ui.message, None);
    }
}
