pub mod api;
pub mod config;
pub mod format;
pub mod interactive;
pub mod logging;

pub use api::{
    ApiError, ApiResult, RecipeApi, RecipeDetails, RecipeSummary, SearchPage, SpoonacularClient,
};
pub use config::{AppConfig, ConfigManager, ConfigOverrides};
pub use format::{format_recipe_details, format_recipe_summary, strip_html};
