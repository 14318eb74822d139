mod apps;
mod assets;
mod chat;
mod drive;
mod footer;
mod header;
mod issues;
mod overlays;
mod placeholder;
mod sidebar;
mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, Overlay, Route, WorkspaceApp};

use footer::render_footer;
use header::render_header;
use overlays::{render_help, render_quick_create};
use sidebar::render_sidebar;
use toast::render_toast;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Clear with dark background
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Sidebar + content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(30)])
        .split(layout[1]);

    render_sidebar(frame, body[0], app);
    render_content(frame, body[1], app);
    render_footer(frame, layout[2], app);

    match &app.overlay {
        Overlay::Help { scroll } => render_help(frame, *scroll),
        Overlay::QuickCreate { selected } => render_quick_create(frame, *selected),
        Overlay::None => {}
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}

fn render_content(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    match app.route {
        Route::Apps => match app.active_app {
            None => apps::render_launcher(frame, area, app),
            Some(WorkspaceApp::Chat) => chat::render_chat(frame, area, app),
            Some(WorkspaceApp::Data) => assets::render_assets(frame, area, app),
            Some(WorkspaceApp::Projects) => issues::render_issues(frame, area, app),
        },
        Route::Drive => drive::render_drive(frame, area, app),
        route => placeholder::render_placeholder(frame, area, route),
    }
}
