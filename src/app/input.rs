//! Input handling for the Colabino TUI.

use crossterm::event::KeyEvent;

use crate::ui::{App, InputMode, Overlay};

mod compose;
mod normal;
mod overlay;

use compose::handle_compose_input;
use normal::handle_normal_mode;
use overlay::handle_overlay_input;

/// Main key event handler - dispatches to mode-specific handlers.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.input_mode == InputMode::Compose {
        handle_compose_input(app, key);
        return;
    }

    if app.overlay != Overlay::None {
        handle_overlay_input(app, key);
        return;
    }

    handle_normal_mode(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::config::Config;
    use crate::ui::{ComposeTarget, Route, WorkspaceApp};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_digit_keys_navigate_routes() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.route, Route::Drive);
        handle_key_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.route, Route::Settings);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_launcher_opens_selected_app() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.active_app, Some(WorkspaceApp::Data));

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.active_app.is_none());
    }

    #[test]
    fn test_compose_flow_sends_a_message() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter)); // open Chat
        assert_eq!(app.active_app, Some(WorkspaceApp::Chat));

        let before = app.chat.messages.len();
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.input_mode, InputMode::Compose);
        for c in "hi there".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.chat.messages.len(), before + 1);
        assert_eq!(app.chat.messages.last().unwrap().body, "hi there");
    }

    #[test]
    fn test_compose_escape_keeps_draft_without_sending() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        handle_key_event(&mut app, key(KeyCode::Esc));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.chat.draft, "x");
        assert_eq!(app.chat.messages.len(), 3);
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
        );
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.chat.draft, "a\nb");
    }

    #[test]
    fn test_pin_toggle_on_selected_message() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter)); // Chat
        handle_key_event(&mut app, key(KeyCode::Esc)); // leave seeded thread view
        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(!app.chat.messages[0].pinned); // m1 was pinned, toggled off
    }

    #[test]
    fn test_quick_create_menu_creates_item(){
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter)); // Data
        let before = app.assets.items.len();

        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.overlay, Overlay::QuickCreate { selected: 0 });
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.assets.items.len(), before + 1);
        assert_eq!(app.assets.items[0].name, "New Project");
    }

    #[test]
    fn test_image_comment_compose_targets_comment_draft() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter)); // Data
        app.assets.open_image("i1");

        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.compose_target, ComposeTarget::ImageComment);
        handle_key_event(&mut app, key(KeyCode::Char('!')));
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.assets.comments_for("i1").last().unwrap().text, "!");
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(matches!(app.overlay, Overlay::Help { .. }));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }
}
