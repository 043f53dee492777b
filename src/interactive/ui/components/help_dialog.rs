use crate::interactive::constants::HELP_DIALOG_MAX_WIDTH;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::styles::Styles;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled("Recipe Search", Styles::title())]),
            Line::from(""),
            Line::from(vec![Span::styled("Search input:", Styles::label())]),
            Line::from("  Enter        - Search recipes"),
            Line::from("  ↓ / Tab      - Move to the result list"),
            Line::from("  Ctrl+A/E     - Start / end of line"),
            Line::from("  Ctrl+W/U/K   - Delete word / to start / to end"),
            Line::from("  Esc          - Quit"),
            Line::from(""),
            Line::from(vec![Span::styled("Result list:", Styles::label())]),
            Line::from("  ↑/↓ PgUp/PgDn Home/End - Navigate"),
            Line::from("  Enter        - Show recipe details"),
            Line::from("  Tab / ↑ at top - Back to the search input"),
            Line::from(""),
            Line::from(vec![Span::styled("Recipe details:", Styles::label())]),
            Line::from("  ↑/↓ PgUp/PgDn - Scroll"),
            Line::from("  Esc / Backspace / q - Close"),
            Line::from(""),
            Line::from(vec![Span::styled("Anywhere:", Styles::label())]),
            Line::from("  Esc while loading - Cancel the search"),
            Line::from("  F1 / ?       - Show this help"),
            Line::from("  Ctrl+C twice - Exit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close this help...",
                Styles::dimmed(),
            )),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::focused_border()),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();
        for code in [KeyCode::Char('x'), KeyCode::Esc, KeyCode::Enter] {
            let msg = dialog.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
            assert!(matches!(msg, Some(Message::CloseHelp)));
        }
    }

    #[test]
    fn test_render_lists_bindings() {
        let mut dialog = HelpDialog::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(content.contains("Help"));
        assert!(content.contains("Cancel the search"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut dialog = HelpDialog::new();
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    }
}
