//! Colabino UI shell.
//!
//! Layout:
//! ╔════════════════════════════════════════════════════════════╗
//! ║  COLABINO                                        route name ║
//! ╠════════════╦═══════════════════════════════════════════════╣
//! ║  SIDEBAR   ║  CONTENT                                      ║
//! ║  ▸ Apps    ║  (drive table / chat / data browser /         ║
//! ║    My Drive║   issue tracker / placeholder panel)          ║
//! ╠════════════╩═══════════════════════════════════════════════╣
//! ║  key hints                                                  ║
//! ╚═════════════════════════════════════════════════════════════╝
//!
//! The `App` struct holds one instance of each view struct plus shell
//! state (route, input mode, overlay, toast). Views never observe each
//! other; navigating away from a view re-seeds it, matching the
//! mount/unmount lifecycle of the source prototype.

pub mod helpers;
mod render;
pub mod theme;

use std::time::Instant;

pub use render::render;

use crate::config::Config;
use crate::workspace::assets::AssetBrowser;
use crate::workspace::chat::ChatRoom;
use crate::workspace::drive::DriveView;
use crate::workspace::issues::IssueBoard;

/// Sidebar destinations, mirroring the source's hash routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Apps,
    Drive,
    Search,
    Upload,
    Shared,
    Starred,
    Settings,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Apps,
        Route::Drive,
        Route::Search,
        Route::Upload,
        Route::Shared,
        Route::Starred,
        Route::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Apps => "Apps",
            Route::Drive => "My Drive",
            Route::Search => "Search",
            Route::Upload => "Upload",
            Route::Shared => "Shared",
            Route::Starred => "Starred",
            Route::Settings => "Settings",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Route::Apps => "apps",
            Route::Drive => "drive",
            Route::Search => "search",
            Route::Upload => "upload",
            Route::Shared => "shared",
            Route::Starred => "starred",
            Route::Settings => "settings",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Route> {
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.slug() == slug.trim().to_lowercase())
    }
}

/// The applications reachable from the Apps launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceApp {
    Chat,
    Data,
    Projects,
}

impl WorkspaceApp {
    pub const ALL: [WorkspaceApp; 3] =
        [WorkspaceApp::Chat, WorkspaceApp::Data, WorkspaceApp::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceApp::Chat => "Chat",
            WorkspaceApp::Data => "Data",
            WorkspaceApp::Projects => "Projects",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            WorkspaceApp::Chat => "Channels, threads and pinned messages",
            WorkspaceApp::Data => "Files, assets and image reviews",
            WorkspaceApp::Projects => "Issues grouped by delivery stage",
        }
    }
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Compose,
}

/// Which draft a compose session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeTarget {
    #[default]
    ChannelMessage,
    ThreadReply,
    ImageComment,
}

/// Overlay state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    /// Quick-create menu in the data browser
    QuickCreate {
        selected: usize,
    },
}

/// Toast notification kind - affects duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Duration in seconds before toast expires
    pub fn duration_secs(&self) -> u64 {
        match self {
            ToastKind::Info => 3,
            ToastKind::Success => 3,
            ToastKind::Error => 10,
        }
    }
}

/// Toast notification
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: &str) -> Self {
        let kind = if message.starts_with('+') {
            ToastKind::Success
        } else if message.contains("not found") || message.contains("failed") {
            ToastKind::Error
        } else {
            ToastKind::Info
        };

        Self {
            message: message.to_string(),
            created_at: Instant::now(),
            kind,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.kind.duration_secs()
    }
}

/// Central application state.
pub struct App {
    pub config: Config,
    pub route: Route,
    /// App opened from the launcher; only meaningful on the Apps route.
    pub active_app: Option<WorkspaceApp>,
    pub launcher_selected: usize,
    pub drive: DriveView,
    pub chat: ChatRoom,
    pub assets: AssetBrowser,
    pub issues: IssueBoard,
    pub input_mode: InputMode,
    pub compose_target: ComposeTarget,
    pub overlay: Overlay,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let route = config
            .default_route
            .as_deref()
            .and_then(Route::from_slug)
            .unwrap_or_default();
        let author = config.display_name.clone();

        Self {
            config,
            route,
            active_app: None,
            launcher_selected: 0,
            drive: DriveView::new(),
            chat: ChatRoom::new(&author),
            assets: AssetBrowser::new(&author),
            issues: IssueBoard::new(),
            input_mode: InputMode::Normal,
            compose_target: ComposeTarget::ChannelMessage,
            overlay: Overlay::None,
            toast: None,
            should_quit: false,
        }
    }

    /// Switch routes. The view being left is re-seeded so the next
    /// visit starts from its literal defaults, like a fresh mount.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        self.reset_route_state();
        self.route = route;
        self.overlay = Overlay::None;
        self.input_mode = InputMode::Normal;
    }

    pub fn compose_push(&mut self, c: char) {
        match self.compose_target {
            ComposeTarget::ChannelMessage => self.chat.draft.push(c),
            ComposeTarget::ThreadReply => self.chat.thread_draft.push(c),
            ComposeTarget::ImageComment => self.assets.comment_draft.push(c),
        }
    }

    pub fn compose_pop(&mut self) {
        match self.compose_target {
            ComposeTarget::ChannelMessage => {
                self.chat.draft.pop();
            }
            ComposeTarget::ThreadReply => {
                self.chat.thread_draft.pop();
            }
            ComposeTarget::ImageComment => {
                self.assets.comment_draft.pop();
            }
        }
    }

    pub fn begin_compose(&mut self, target: ComposeTarget) {
        self.compose_target = target;
        self.input_mode = InputMode::Compose;
    }

    pub fn end_compose(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn open_app(&mut self, app: WorkspaceApp) {
        self.active_app = Some(app);
        self.overlay = Overlay::None;
    }

    /// Back to the launcher; the closed app's view re-seeds.
    pub fn close_app(&mut self) {
        if let Some(app) = self.active_app.take() {
            self.reset_app_state(app);
        }
        self.input_mode = InputMode::Normal;
        self.overlay = Overlay::None;
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast::new(message));
    }

    /// Persist the current route as the one future launches open on.
    pub fn set_default_route(&mut self) {
        self.config.default_route = Some(self.route.slug().to_string());
        match self.config.save() {
            Ok(()) => self.show_toast(&format!("+ {} set as startup route", self.route.label())),
            Err(err) => self.show_toast(&format!("Saving config failed: {}", err)),
        }
    }

    pub fn clear_expired_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// Per-iteration timer work. Only the mounted view ticks, so an
    /// unmounted view's playback can never advance.
    pub fn tick(&mut self) {
        self.clear_expired_toast();
        if self.route == Route::Apps && self.active_app == Some(WorkspaceApp::Data) {
            self.assets.tick();
        }
    }

    fn reset_route_state(&mut self) {
        match self.route {
            Route::Apps => {
                if let Some(app) = self.active_app.take() {
                    self.reset_app_state(app);
                }
                self.launcher_selected = 0;
            }
            Route::Drive => self.drive = DriveView::new(),
            _ => {}
        }
    }

    fn reset_app_state(&mut self, app: WorkspaceApp) {
        let author = self.config.display_name.clone();
        match app {
            WorkspaceApp::Chat => self.chat = ChatRoom::new(&author),
            WorkspaceApp::Data => self.assets = AssetBrowser::new(&author),
            WorkspaceApp::Projects => self.issues = IssueBoard::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::assets::CreateAction;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_route_slug_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_slug(route.slug()), Some(route));
        }
        assert_eq!(Route::from_slug(" DRIVE "), Some(Route::Drive));
        assert_eq!(Route::from_slug("nowhere"), None);
    }

    #[test]
    fn test_default_route_comes_from_config() {
        let config = Config {
            default_route: Some("drive".to_string()),
            ..Config::default()
        };
        let app = App::new(config);
        assert_eq!(app.route, Route::Drive);

        let bad = Config {
            default_route: Some("bogus".to_string()),
            ..Config::default()
        };
        assert_eq!(App::new(bad).route, Route::Apps);
    }

    #[test]
    fn test_navigating_away_reseeds_the_left_view() {
        let mut app = app();
        app.navigate(Route::Drive);
        app.drive.toggle_sort();
        let changed_sort = app.drive.sort;

        app.navigate(Route::Settings);
        app.navigate(Route::Drive);
        assert_ne!(app.drive.sort, changed_sort);
    }

    #[test]
    fn test_closing_an_app_reseeds_it() {
        let mut app = app();
        app.open_app(WorkspaceApp::Data);
        let before = app.assets.items.len();
        app.assets.create_item(CreateAction::Folder);
        assert_eq!(app.assets.items.len(), before + 1);

        app.close_app();
        assert!(app.active_app.is_none());
        assert_eq!(app.assets.items.len(), before);
    }

    #[test]
    fn test_leaving_the_data_view_stops_playback() {
        let mut app = app();
        app.open_app(WorkspaceApp::Data);
        app.assets.toggle_playback("a1");
        assert!(app.assets.playing_item_id().is_some());

        app.navigate(Route::Drive);
        assert!(app.assets.playing_item_id().is_none());
    }

    #[test]
    fn test_compose_edits_route_to_the_right_draft() {
        let mut app = app();
        app.begin_compose(ComposeTarget::ThreadReply);
        app.compose_push('h');
        app.compose_push('i');
        assert_eq!(app.chat.thread_draft, "hi");
        assert!(app.chat.draft.is_empty());

        app.compose_pop();
        assert_eq!(app.chat.thread_draft, "h");

        app.begin_compose(ComposeTarget::ImageComment);
        app.compose_push('x');
        assert_eq!(app.assets.comment_draft, "x");
    }

    #[test]
    fn test_toast_kind_detection() {
        assert_eq!(Toast::new("+ New Folder created").kind, ToastKind::Success);
        assert_eq!(Toast::new("Thread message not found.").kind, ToastKind::Error);
        assert_eq!(Toast::new("Pinned").kind, ToastKind::Info);
        assert!(!Toast::new("Pinned").is_expired());
    }
}
