use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{App, ComposeTarget};

/// Handle key events while a compose box is focused. Esc backs out
/// without discarding the draft; Alt+Enter inserts a newline.
pub(super) fn handle_compose_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.end_compose(),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.compose_push('\n');
        }
        KeyCode::Enter => {
            match app.compose_target {
                ComposeTarget::ChannelMessage => app.chat.submit_message(),
                ComposeTarget::ThreadReply => app.chat.submit_thread_reply(),
                ComposeTarget::ImageComment => app.assets.add_comment(),
            }
            app.end_compose();
        }
        KeyCode::Backspace => app.compose_pop(),
        KeyCode::Char(c) => app.compose_push(c),
        _ => {}
    }
}
