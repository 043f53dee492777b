use crate::interactive::domain::models::{DetailsOutcome, SearchOutcome};

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted { id: u64, outcome: SearchOutcome },
    CancelSearch,
    SelectResult(usize),
    FocusList,
    FocusInput,

    // Details view
    RecipeSelected(u64),
    DetailsLoaded {
        id: u64,
        recipe_id: u64,
        outcome: DetailsOutcome,
    },
    CloseDetails,

    // Help
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
