#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Send the current query under the current search generation
    ExecuteSearch,
    LoadRecipeDetails(u64),
    ScheduleClearMessage(u64), // delay in milliseconds
}
