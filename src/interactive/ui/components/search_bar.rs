use crate::interactive::ui::components::styles::Styles;
use crate::interactive::ui::components::{Component, is_exit_prompt};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Search Recipes";

/// Free-text query input. Enter submits the query as a search trigger.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    /// Cursor position in chars, not bytes
    cursor_position: usize,
    focused: bool,
    error: Option<String>,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.cursor_position = query.chars().count();
            self.query = query;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and leave the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_index(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn input_spans(&self) -> Vec<Span<'_>> {
        if self.query.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", Styles::cursor()));
            }
            spans.push(Span::styled(PLACEHOLDER, Styles::dimmed()));
            return spans;
        }

        if !self.focused {
            return vec![Span::styled(self.query.as_str(), Styles::input())];
        }

        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.query.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().map(String::from).unwrap_or(" ".to_string());

        vec![
            Span::styled(before, Styles::input()),
            Span::styled(under_cursor, Styles::cursor()),
            Span::styled(rest_chars.as_str(), Styles::input()),
        ]
    }

    fn title(&self) -> Line<'_> {
        let mut spans = vec![Span::styled("Search", Styles::title())];
        if let Some(error) = &self.error {
            spans.push(Span::raw(" - "));
            spans.push(Span::styled(format!("Search failed: {error}"), Styles::error()));
        }
        if let Some(msg) = &self.message {
            let style = if is_exit_prompt(&self.message) {
                Styles::error()
            } else {
                Styles::label()
            };
            spans.push(Span::raw(" - "));
            spans.push(Span::styled(msg.as_str(), style));
        }
        Line::from(spans)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut block = Block::default().title(self.title()).borders(Borders::ALL);
        if self.focused {
            block = block.border_style(Styles::focused_border());
        }

        let input = Paragraph::new(Line::from(self.input_spans())).block(block);
        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => {
                    let pos = self.cursor_position;
                    self.delete_range(pos.saturating_sub(1), pos)
                }
                KeyCode::Char('d') => {
                    let pos = self.cursor_position;
                    self.delete_range(pos, pos + 1)
                }
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Message::SearchRequested),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => {
                let pos = self.cursor_position;
                self.delete_range(pos.saturating_sub(1), pos)
            }
            KeyCode::Delete => {
                let pos = self.cursor_position;
                self.delete_range(pos, pos + 1)
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            KeyCode::Down | KeyCode::Tab => Some(Message::FocusList),
            _ => None,
        }
    }
}
