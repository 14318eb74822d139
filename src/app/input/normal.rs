use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, ComposeTarget, Overlay, Route, WorkspaceApp};
use crate::workspace::item::ItemKind;

/// Handle key events in normal mode.
pub(super) fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Global keys first.
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help { scroll: 0 };
            return;
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            app.navigate(Route::ALL[index]);
            return;
        }
        KeyCode::Char('d') if app.route != Route::Apps || app.active_app.is_none() => {
            app.set_default_route();
            return;
        }
        _ => {}
    }

    match app.route {
        Route::Drive => handle_drive_keys(app, key),
        Route::Apps => match app.active_app {
            None => handle_launcher_keys(app, key),
            Some(WorkspaceApp::Chat) => handle_chat_keys(app, key),
            Some(WorkspaceApp::Data) => handle_data_keys(app, key),
            Some(WorkspaceApp::Projects) => handle_projects_keys(app, key),
        },
        _ => {}
    }
}

fn handle_drive_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.drive.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.drive.select_prev(),
        KeyCode::Char('s') => {
            app.drive.toggle_sort();
            let label = app.drive.sort.label();
            app.show_toast(&format!("Sorted by {}", label));
        }
        _ => {}
    }
}

fn handle_launcher_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.launcher_selected + 1 < WorkspaceApp::ALL.len() {
                app.launcher_selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.launcher_selected = app.launcher_selected.saturating_sub(1);
        }
        KeyCode::Enter => app.open_app(WorkspaceApp::ALL[app.launcher_selected]),
        _ => {}
    }
}

fn handle_chat_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.chat.in_thread_view() {
                app.chat.leave_thread();
            } else {
                app.close_app();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.chat.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.chat.select_prev(),
        KeyCode::Char('t') => app.chat.cycle_tab(),
        KeyCode::Char('p') => {
            if let Some(id) = app.chat.selected_message_id() {
                app.chat.toggle_pin(&id);
            }
        }
        KeyCode::Char('o') | KeyCode::Enter => {
            if let Some(id) = app.chat.selected_message_id() {
                app.chat.open_thread(&id);
            }
        }
        KeyCode::Char('m') => app.begin_compose(ComposeTarget::ChannelMessage),
        KeyCode::Char('r') => {
            if app.chat.in_thread_view() {
                app.begin_compose(ComposeTarget::ThreadReply);
            }
        }
        KeyCode::Char(']') => app.chat.select_channel_next(),
        KeyCode::Char('[') => app.chat.select_channel_prev(),
        _ => {}
    }
}

fn handle_data_keys(app: &mut App, key: KeyEvent) {
    if app.assets.in_detail_view() {
        match key.code {
            KeyCode::Esc => app.assets.close_image(),
            KeyCode::Char('c') => app.begin_compose(ComposeTarget::ImageComment),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_app(),
        KeyCode::Char('j') | KeyCode::Down => app.assets.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.assets.select_prev(),
        KeyCode::Char('v') => app.assets.toggle_view(),
        KeyCode::Char('n') => app.overlay = Overlay::QuickCreate { selected: 0 },
        KeyCode::Char(' ') => {
            let audio_id = app
                .assets
                .selected_item()
                .filter(|item| item.kind == ItemKind::Audio)
                .map(|item| item.id.clone());
            if let Some(id) = audio_id {
                app.assets.toggle_playback(&id);
            }
        }
        KeyCode::Enter => {
            let image_id = app
                .assets
                .selected_item()
                .filter(|item| item.kind == ItemKind::Image)
                .map(|item| item.id.clone());
            if let Some(id) = image_id {
                app.assets.open_image(&id);
            }
        }
        _ => {}
    }
}

fn handle_projects_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_app(),
        KeyCode::Char('j') | KeyCode::Down => app.issues.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.issues.select_prev(),
        _ => {}
    }
}
