use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Minimal recipe record returned by a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

impl RecipeSummary {
    pub fn new(id: u64, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            image_type: None,
        }
    }
}

/// Envelope of `GET /recipes/complexSearch`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RecipeSummary>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text line as written in the source recipe ("2 cups flour").
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

impl Ingredient {
    pub fn display_text(&self) -> &str {
        if self.original.is_empty() {
            &self.name
        } else {
            &self.original
        }
    }
}

/// Body of `GET /recipes/{id}/information`.
///
/// Only the fields the details view shows are kept; everything else in the
/// payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// HTML fragment.
    #[serde(default)]
    pub summary: Option<String>,
    /// HTML fragment or plain text, depending on the source.
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
}

impl RecipeDetails {
    /// Details view built from a summary alone, used when no fetch is allowed.
    pub fn from_summary(summary: &RecipeSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title.clone(),
            image: summary.image.clone(),
            ready_in_minutes: None,
            servings: None,
            source_url: None,
            summary: None,
            instructions: None,
            extended_ingredients: Vec::new(),
            vegetarian: false,
            vegan: false,
            gluten_free: false,
            dairy_free: false,
        }
    }

    pub fn diet_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.vegetarian {
            labels.push("vegetarian");
        }
        if self.vegan {
            labels.push("vegan");
        }
        if self.gluten_free {
            labels.push("gluten free");
        }
        if self.dairy_free {
            labels.push("dairy free");
        }
        labels
    }
}
