use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, Overlay};
use crate::workspace::assets::CreateAction;

/// Handle key events while an overlay is open.
pub(super) fn handle_overlay_input(app: &mut App, key: KeyEvent) {
    match app.overlay {
        Overlay::Help { scroll } => handle_help(app, key, scroll),
        Overlay::QuickCreate { selected } => handle_quick_create(app, key, selected),
        Overlay::None => {}
    }
}

fn handle_help(app: &mut App, key: KeyEvent, scroll: usize) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.overlay = Overlay::Help {
                scroll: scroll.saturating_add(1),
            };
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overlay = Overlay::Help {
                scroll: scroll.saturating_sub(1),
            };
        }
        _ => {}
    }
}

fn handle_quick_create(app: &mut App, key: KeyEvent, selected: usize) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => app.overlay = Overlay::None,
        KeyCode::Char('j') | KeyCode::Down => {
            if selected + 1 < CreateAction::ALL.len() {
                app.overlay = Overlay::QuickCreate {
                    selected: selected + 1,
                };
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overlay = Overlay::QuickCreate {
                selected: selected.saturating_sub(1),
            };
        }
        KeyCode::Enter => {
            let name = app.assets.create_item(CreateAction::ALL[selected]);
            app.overlay = Overlay::None;
            app.show_toast(&format!("+ {} created", name));
        }
        _ => {}
    }
}
