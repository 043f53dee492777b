use crate::api::RecipeDetails;
use crate::format::strip_html;
use crate::interactive::constants::{
    DETAILS_MODAL_HEIGHT_PERCENT, DETAILS_MODAL_WIDTH_PERCENT, PAGE_SIZE,
};
use crate::interactive::ui::components::styles::Styles;
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Overlay showing one recipe. Driven entirely by the props set from
/// [`crate::interactive::ui::app_state::DetailsProps`] and the details state.
#[derive(Default)]
pub struct RecipeDetailsModal {
    visible: bool,
    recipe_id: Option<u64>,
    offline: bool,
    is_loading: bool,
    error: Option<String>,
    recipe: Option<RecipeDetails>,
    scroll_offset: usize,
}

impl RecipeDetailsModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopening starts again from the top.
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.scroll_offset = 0;
        }
        self.visible = visible;
    }

    pub fn set_recipe_id(&mut self, recipe_id: Option<u64>) {
        if self.recipe_id != recipe_id {
            self.recipe_id = recipe_id;
            self.scroll_offset = 0;
        }
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_recipe(&mut self, recipe: Option<RecipeDetails>) {
        self.recipe = recipe;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn section(lines: &mut Vec<Line<'static>>, heading: &'static str) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(heading, Styles::title())));
    }

    fn labeled(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<11}"), Styles::label()),
            Span::styled(value, Styles::normal()),
        ])
    }

    fn recipe_lines(recipe: &RecipeDetails) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(recipe.title.clone(), Styles::recipe_title())),
            Line::from(""),
            Self::labeled("Id:", recipe.id.to_string()),
        ];

        if let Some(minutes) = recipe.ready_in_minutes {
            lines.push(Self::labeled("Ready in:", format!("{minutes} min")));
        }
        if let Some(servings) = recipe.servings {
            lines.push(Self::labeled("Servings:", servings.to_string()));
        }
        let diet = recipe.diet_labels();
        if !diet.is_empty() {
            lines.push(Self::labeled("Diet:", diet.join(", ")));
        }
        if let Some(url) = &recipe.source_url {
            lines.push(Self::labeled("Source:", url.clone()));
        }
        if !recipe.image.is_empty() {
            lines.push(Self::labeled("Image:", recipe.image.clone()));
        }

        if let Some(summary) = recipe.summary.as_deref().map(strip_html) {
            if !summary.is_empty() {
                Self::section(&mut lines, "Summary");
                lines.push(Line::from(summary));
            }
        }

        if !recipe.extended_ingredients.is_empty() {
            Self::section(&mut lines, "Ingredients");
            for ingredient in &recipe.extended_ingredients {
                lines.push(Line::from(format!("  • {}", ingredient.display_text())));
            }
        }

        if let Some(instructions) = recipe.instructions.as_deref().map(strip_html) {
            if !instructions.is_empty() {
                Self::section(&mut lines, "Instructions");
                lines.push(Line::from(instructions));
            }
        }

        lines
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        if self.is_loading {
            return vec![Line::from(Span::styled(
                "Loading recipe details...",
                Styles::label(),
            ))];
        }
        if let Some(error) = &self.error {
            return vec![Line::from(Span::styled(
                format!("Failed to load recipe: {error}"),
                Styles::error(),
            ))];
        }
        match &self.recipe {
            Some(recipe) => Self::recipe_lines(recipe),
            None if self.offline => vec![Line::from(Span::styled(
                "Recipe is not in the current results",
                Styles::dimmed(),
            ))],
            None => Vec::new(),
        }
    }

    fn title(&self) -> String {
        match self.recipe_id {
            Some(id) if self.offline => format!(" Recipe #{id} (offline) "),
            Some(id) => format!(" Recipe #{id} "),
            None => " Recipe ".to_string(),
        }
    }
}

impl Component for RecipeDetailsModal {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let modal_area = centered_rect(
            DETAILS_MODAL_WIDTH_PERCENT,
            DETAILS_MODAL_HEIGHT_PERCENT,
            area,
        );
        f.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(Span::styled(self.title(), Styles::title()))
            .borders(Borders::ALL)
            .border_style(Styles::focused_border());
        let inner = block.inner(modal_area);
        f.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let content = Paragraph::new(self.content_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(content, chunks[0]);

        let hint = Paragraph::new("↑/↓ PgUp/PgDn: Scroll | Esc/Backspace/q: Close")
            .style(Styles::dimmed())
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(hint, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Message::CloseDetails),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset += 1;
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset += PAGE_SIZE;
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }
}
