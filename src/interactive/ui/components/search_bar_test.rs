#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn render_to_string(search_bar: &mut SearchBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_search_bar_creation() {
        let search_bar = SearchBar::new();
        assert_eq!(search_bar.get_query(), "");
        assert_eq!(search_bar.cursor_position(), 0);
    }

    #[test]
    fn test_character_input() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('h')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "h"));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('i')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "hi"));

        assert_eq!(search_bar.get_query(), "hi");
    }

    #[test]
    fn test_enter_triggers_search() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("pasta".to_string());

        let msg = search_bar.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SearchRequested)));
    }

    #[test]
    fn test_enter_with_empty_query_still_triggers_search() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SearchRequested)));
    }

    #[test]
    fn test_backspace() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hello".to_string());

        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "hell"));

        search_bar.set_query(String::new());
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(msg.is_none());
    }

    #[test]
    fn test_cursor_movement() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hello".to_string());

        assert!(search_bar.handle_key(create_key_event(KeyCode::Home)).is_none());
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('X')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "Xhello"));

        assert!(search_bar.handle_key(create_key_event(KeyCode::End)).is_none());
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('Y')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "XhelloY"));

        search_bar.handle_key(create_key_event(KeyCode::Left));
        search_bar.handle_key(create_key_event(KeyCode::Left));
        assert_eq!(search_bar.cursor_position(), 5);
        search_bar.handle_key(create_key_event(KeyCode::Right));
        assert_eq!(search_bar.cursor_position(), 6);
    }

    #[test]
    fn test_delete_key() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hello".to_string());

        search_bar.handle_key(create_key_event(KeyCode::Home));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Delete));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "ello"));

        search_bar.handle_key(create_key_event(KeyCode::End));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Delete));
        assert!(msg.is_none());
    }

    #[test]
    fn test_unicode_input() {
        let mut search_bar = SearchBar::new();

        search_bar.handle_key(create_key_event(KeyCode::Char('é')));
        search_bar.handle_key(create_key_event(KeyCode::Char('t')));
        search_bar.handle_key(create_key_event(KeyCode::Char('é')));
        assert_eq!(search_bar.get_query(), "été");

        search_bar.handle_key(create_key_event(KeyCode::Left));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "éé"));
        assert_eq!(search_bar.cursor_position(), 1);
    }

    #[test]
    fn test_ctrl_word_deletion() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("chicken curry rice".to_string());

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "chicken curry "));

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn test_ctrl_k_deletes_to_end() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("pasta bake".to_string());
        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
        ));
        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('f'),
            KeyModifiers::ALT,
        ));
        assert_eq!(search_bar.cursor_position(), 6);

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "pasta "));
    }

    #[test]
    fn test_down_moves_focus_to_list() {
        let mut search_bar = SearchBar::new();
        let msg = search_bar.handle_key(create_key_event(KeyCode::Down));
        assert!(matches!(msg, Some(Message::FocusList)));
    }

    #[test]
    fn test_render_placeholder() {
        let mut search_bar = SearchBar::new();
        let content = render_to_string(&mut search_bar);
        assert!(content.contains("Search Recipes"));
    }

    #[test]
    fn test_render_error() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("pasta".to_string());
        search_bar.set_error(Some("HTTP 500".to_string()));

        let content = render_to_string(&mut search_bar);
        assert!(content.contains("pasta"));
        assert!(content.contains("Search failed: HTTP 500"));
    }
}
