//! Remote recipe API
//!
//! The [`RecipeApi`] trait is the seam between the screens and the network.
//! [`SpoonacularClient`] talks to the real service; tests substitute their own
//! implementation.

pub mod client;
pub mod error;
pub mod models;


pub use client::{RecipeApi, SpoonacularClient};
pub use error::{ApiError, ApiResult};
pub use models::{Ingredient, RecipeDetails, RecipeSummary, SearchPage};
