use crate::api::RecipeSummary;
use crate::interactive::constants::ID_COLUMN_WIDTH;
use crate::interactive::ui::components::styles::Styles;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Identifier forwarded when the row is chosen
    fn item_id(&self) -> u64;

    /// Main text of the row
    fn primary_text(&self) -> &str;

    /// Secondary, dimmed text shown after the primary text
    fn secondary_text(&self) -> &str;

    /// Single display line fitting in `max_width` columns
    fn create_line(&self, max_width: usize) -> Line<'_> {
        let id = format!("#{}", self.item_id());
        let id_column = format!("{id:<width$} ", width = ID_COLUMN_WIDTH);
        let remaining = max_width.saturating_sub(id_column.width());

        let title = truncate_to_width(self.primary_text(), remaining);
        let mut spans = vec![
            Span::styled(id_column, Styles::dimmed()),
            Span::styled(title.clone(), Styles::recipe_title()),
        ];

        let secondary = self.secondary_text();
        let left = remaining.saturating_sub(title.width() + 2);
        if !secondary.is_empty() && left > 3 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(truncate_to_width(secondary, left), Styles::dimmed()));
        }

        Line::from(spans)
    }
}

/// One search result row: thumbnail URL and title, keyed by recipe id.
impl ListItem for RecipeSummary {
    fn item_id(&self) -> u64 {
        self.id
    }

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> &str {
        &self.image
    }
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `...`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    if text.width() <= max_width {
        return text;
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    format!("{truncated}...")
}
