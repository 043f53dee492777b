use crate::api::{RecipeDetails, RecipeSummary};
use colored::Colorize;
use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

pub fn format_recipe_summary(recipe: &RecipeSummary, use_color: bool) -> String {
    let id = format!("#{}", recipe.id);
    if use_color {
        format!(
            "{} {}\n  {}",
            id.bright_blue(),
            recipe.title.bright_yellow(),
            recipe.image.dimmed()
        )
    } else {
        format!("{} {}\n  {}", id, recipe.title, recipe.image)
    }
}

pub fn format_recipe_details(details: &RecipeDetails, use_color: bool) -> String {
    let mut out = Vec::new();
    let heading = format!("#{} {}", details.id, details.title);
    out.push(if use_color {
        heading.bright_yellow().bold().to_string()
    } else {
        heading
    });

    if let Some(minutes) = details.ready_in_minutes {
        out.push(format!("Ready in: {minutes} min"));
    }
    if let Some(servings) = details.servings {
        out.push(format!("Servings: {servings}"));
    }
    let labels = details.diet_labels();
    if !labels.is_empty() {
        out.push(format!("Diet: {}", labels.join(", ")));
    }
    if let Some(url) = &details.source_url {
        out.push(format!("Source: {url}"));
    }
    if !details.extended_ingredients.is_empty() {
        out.push(String::new());
        out.push("Ingredients:".to_string());
        for ingredient in &details.extended_ingredients {
            out.push(format!("  - {}", ingredient.display_text()));
        }
    }
    if let Some(instructions) = details.instructions.as_deref().map(strip_html) {
        if !instructions.is_empty() {
            out.push(String::new());
            out.push("Instructions:".to_string());
            out.push(instructions);
        }
    }
    out.join("\n")
}

/// Remove HTML tags and decode the handful of entities the API emits.
pub fn strip_html(html: &str) -> String {
    let without_tags = HTML_TAG.replace_all(html, "");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        // Last, so an escaped entity stays literal
        .replace("&amp;", "&");
    BLANK_RUN.replace_all(decoded.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Ingredient;

    #[test]
    fn test_format_summary_plain() {
        let recipe = RecipeSummary::new(1, "Pasta A", "u1");
        assert_eq!(format_recipe_summary(&recipe, false), "#1 Pasta A\n  u1");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<b>Pasta</b> takes <a href=\"x\">about 45 minutes</a>"),
            "Pasta takes about 45 minutes"
        );
        assert_eq!(strip_html("salt &amp; pepper"), "salt & pepper");
        assert_eq!(strip_html("<ol>\n<li>Boil</li></ol>"), "Boil");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_strip_html_keeps_escaped_entities_literal() {
        assert_eq!(strip_html("use &amp;lt;b&amp;gt; tags"), "use &lt;b&gt; tags");
        assert_eq!(strip_html("3 &lt; 4 &amp; 5 &gt; 4"), "3 < 4 & 5 > 4");
    }

    #[test]
    fn test_format_details_plain() {
        let mut details = RecipeDetails::from_summary(&RecipeSummary::new(7, "Soup", ""));
        details.ready_in_minutes = Some(20);
        details.vegan = true;
        details.extended_ingredients = vec![Ingredient {
            id: None,
            name: "water".to_string(),
            original: "1 l water".to_string(),
        }];
        details.instructions = Some("<p>Heat it.</p>".to_string());

        let text = format_recipe_details(&details, false);
        assert!(text.starts_with("#7 Soup"));
        assert!(text.contains("Ready in: 20 min"));
        assert!(text.contains("Diet: vegan"));
        assert!(text.contains("  - 1 l water"));
        assert!(text.ends_with("Heat it."));
        assert!(!text.contains("Servings"));
    }
}
