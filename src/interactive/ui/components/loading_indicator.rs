use crate::interactive::ui::components::styles::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

pub const LOADING_TEXT: &str = "Loading recipes";

/// Spinner shown in place of the whole search screen while a search is in flight.
#[derive(Default)]
pub struct LoadingIndicator {
    throbber_state: ThrobberState,
    query: String,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
        }
    }

    /// Advance the spinner by one frame.
    pub fn tick(&mut self) {
        self.throbber_state.calc_next();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled("Search", Styles::title()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let spinner = Throbber::default()
            .style(Styles::label())
            .throbber_style(Styles::label());
        let line = Line::from(vec![
            spinner.to_symbol_span(&self.throbber_state),
            Span::styled(format!("{LOADING_TEXT}..."), Styles::label()),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[1]);

        if !self.query.is_empty() {
            let query_line = Line::from(Span::styled(
                format!("\"{}\"", self.query),
                Styles::dimmed(),
            ));
            f.render_widget(
                Paragraph::new(query_line).alignment(Alignment::Center),
                rows[2],
            );
        }

        let hint = Paragraph::new("Esc: Cancel")
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        f.render_widget(hint, rows[3]);
    }
}
