use crate::api::RecipeSummary;
use crate::interactive::constants::STATUS_BAR_HEIGHT;
use crate::interactive::ui::components::{
    Component, list_item::ListItem, list_viewer::ListViewer, styles::Styles,
};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

const STATUS_TEXT: &str = "↑/↓: Navigate | Enter: Details | Tab: Search input | ?/F1: Help | Ctrl+C x2: Exit";

#[derive(Default)]
pub struct ResultList {
    list_viewer: ListViewer<RecipeSummary>,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Recipes".to_string(), "No recipes found".to_string()),
        }
    }

    /// Replace the rows. The selection is kept when the same results come back.
    pub fn set_results(&mut self, results: Vec<RecipeSummary>) {
        if self.list_viewer.items != results {
            self.list_viewer.set_items(results);
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.list_viewer.focused = focused;
    }

    /// Title mentions the server-side match count when it exceeds the rows shown.
    pub fn set_total_results(&mut self, total: u64) {
        let title = if total > self.list_viewer.items_count() as u64 {
            format!("Recipes, {total} matches")
        } else {
            "Recipes".to_string()
        };
        self.list_viewer.set_title(title);
    }

    pub fn selected_result(&self) -> Option<&RecipeSummary> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    pub fn get_scroll_offset(&self) -> usize {
        self.list_viewer.scroll_offset
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
            .split(area);

        self.list_viewer.render(f, chunks[0]);

        let status_bar = Paragraph::new(STATUS_TEXT)
            .style(Styles::dimmed())
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(status_bar, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up if self.list_viewer.selected_index() == 0 => Some(Message::FocusInput),
            KeyCode::Up => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Down => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::PageUp => {
                let moved = self.list_viewer.page_up();
                self.selection_message(moved)
            }
            KeyCode::PageDown => {
                let moved = self.list_viewer.page_down();
                self.selection_message(moved)
            }
            KeyCode::Home => {
                let moved = self.list_viewer.move_to_start();
                self.selection_message(moved)
            }
            KeyCode::End => {
                let moved = self.list_viewer.move_to_end();
                self.selection_message(moved)
            }
            KeyCode::Enter => self
                .list_viewer
                .get_selected_item()
                .map(|recipe| Message::RecipeSelected(recipe.item_id())),
            KeyCode::Tab | KeyCode::BackTab => Some(Message::FocusInput),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            _ => None,
        }
    }
}
