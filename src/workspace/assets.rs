//! Data/asset browser view state.
//!
//! A mutable item list with quick-create (prepend, transient highlight),
//! a simulated audio playback timer, and an image detail panel with
//! version history and comments. At most one item plays at a time; the
//! playback scalar is the whole enforcement.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::item::{ItemKind, Ribbon};
use crate::util;

/// Playback advances one step per tick interval.
pub const PLAYBACK_TICK: Duration = Duration::from_millis(80);
/// How long a freshly created item stays highlighted.
pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetViewMode {
    Simple,
    Signals,
}

impl AssetViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            AssetViewMode::Simple => "Simple",
            AssetViewMode::Signals => "Signals",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            AssetViewMode::Simple => AssetViewMode::Signals,
            AssetViewMode::Signals => AssetViewMode::Simple,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssetItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub ribbon: Option<Ribbon>,
    pub has_preview: bool,
    pub file_count: Option<u32>,
    pub image_type: Option<String>,
    pub resolution: Option<String>,
    pub audio_type: Option<String>,
    pub duration: Option<String>,
    pub model_type: Option<String>,
    pub tris: Option<String>,
    pub milestone: Option<String>,
    pub open_tasks: Option<u32>,
    pub size: Option<String>,
    pub updated_at: Option<String>,
    pub owner: Option<String>,
}

impl AssetItem {
    /// Kind-specific secondary line under the item name.
    pub fn secondary_label(&self) -> String {
        match self.kind {
            ItemKind::Folder => format!("{} files", self.file_count.unwrap_or(0)),
            ItemKind::Project => format!(
                "{}, {} open tasks",
                self.milestone.as_deref().unwrap_or("Sprint"),
                self.open_tasks.unwrap_or(0)
            ),
            ItemKind::Image => format!(
                "{}, {}",
                self.image_type.as_deref().unwrap_or("PNG"),
                self.resolution.as_deref().unwrap_or("600x200")
            ),
            ItemKind::Audio => format!(
                "{}, {}",
                self.audio_type.as_deref().unwrap_or("WAV"),
                self.duration.as_deref().unwrap_or("3.4s")
            ),
            ItemKind::ThreeD => format!(
                "{}, {}",
                self.model_type.as_deref().unwrap_or("GLTF"),
                self.tris.as_deref().unwrap_or("1.4M tris")
            ),
            _ => match &self.size {
                Some(size) => size.clone(),
                None => self.kind.label().to_string(),
            },
        }
    }
}

/// Quick-create actions, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    Folder,
    Project,
    Board,
    Sheet,
    Upload,
}

impl CreateAction {
    pub const ALL: [CreateAction; 5] = [
        CreateAction::Folder,
        CreateAction::Project,
        CreateAction::Board,
        CreateAction::Sheet,
        CreateAction::Upload,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CreateAction::Folder => "Folder",
            CreateAction::Project => "Project",
            CreateAction::Board => "Board",
            CreateAction::Sheet => "Sheet",
            CreateAction::Upload => "Upload",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageVersion {
    pub label: String,
    pub date: String,
    pub size: String,
    pub resolution: String,
    pub format: String,
    pub author: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImageProfile {
    pub location: String,
    pub created: String,
    pub owner: String,
}

#[derive(Debug, Clone)]
pub struct ImageComment {
    pub id: String,
    pub author: String,
    pub date: String,
    pub text: String,
}

#[derive(Debug)]
struct Playback {
    item_id: String,
    progress: f64,
    step: f64,
    last_tick: Instant,
}

/// Parse a literal duration label into seconds.
///
/// Accepted forms: `"3.4s"`, `"2m"`, `"2:32m"`. Anything else, including
/// a missing label, falls back to 3 seconds.
pub fn duration_seconds(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 3.0;
    };
    if let Some(value) = raw.strip_suffix('s') {
        return value.parse::<f64>().ok().filter(|v| *v > 0.0).unwrap_or(3.0);
    }
    if let Some(value) = raw.strip_suffix('m') {
        if let Some((mins, secs)) = value.split_once(':') {
            let mins = mins.parse::<u32>().unwrap_or(0);
            let secs = secs.parse::<u32>().unwrap_or(0);
            return (mins * 60 + secs) as f64;
        }
        let mins = value.parse::<f64>().ok().filter(|v| *v > 0.0).unwrap_or(1.0);
        return mins * 60.0;
    }
    3.0
}

pub struct AssetBrowser {
    pub items: Vec<AssetItem>,
    pub view: AssetViewMode,
    pub selected: usize,
    pub comment_draft: String,
    playback: Option<Playback>,
    highlight: Option<(String, Instant)>,
    selected_image: Option<String>,
    versions: HashMap<String, Vec<ImageVersion>>,
    profiles: HashMap<String, ImageProfile>,
    comments: HashMap<String, Vec<ImageComment>>,
    author_name: String,
}

impl AssetBrowser {
    pub fn new(author_name: &str) -> Self {
        Self {
            items: seed_items(),
            view: AssetViewMode::Simple,
            selected: 0,
            comment_draft: String::new(),
            playback: None,
            highlight: None,
            selected_image: None,
            versions: seed_versions(),
            profiles: seed_profiles(),
            comments: seed_comments(),
            author_name: author_name.to_string(),
        }
    }

    /// Display order: folders first, everything else in source order.
    /// Recomputed per render so creates slot in without re-sorting state.
    pub fn ordered_items(&self) -> Vec<&AssetItem> {
        let mut ordered: Vec<&AssetItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| !item.kind.is_folder() as u8);
        ordered
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggle();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&AssetItem> {
        self.ordered_items().get(self.selected).copied()
    }

    /// Prepend a default record for the chosen action and start its
    /// highlight pulse. Returns the new item's name for feedback.
    pub fn create_item(&mut self, action: CreateAction) -> String {
        let id = format!("new-{}", util::mint_millis());
        let item = match action {
            CreateAction::Folder => AssetItem {
                id: id.clone(),
                name: "New Folder".to_string(),
                kind: ItemKind::Folder,
                file_count: Some(0),
                ..AssetItem::default()
            },
            CreateAction::Project => AssetItem {
                id: id.clone(),
                name: "New Project".to_string(),
                kind: ItemKind::Project,
                milestone: Some("Sprint 1".to_string()),
                open_tasks: Some(0),
                ..AssetItem::default()
            },
            CreateAction::Board => AssetItem {
                id: id.clone(),
                name: "New Board".to_string(),
                kind: ItemKind::Board,
                ..AssetItem::default()
            },
            CreateAction::Sheet => AssetItem {
                id: id.clone(),
                name: "New Sheet".to_string(),
                kind: ItemKind::Sheet,
                ..AssetItem::default()
            },
            CreateAction::Upload => AssetItem {
                id: id.clone(),
                name: "Uploaded File".to_string(),
                kind: ItemKind::Document,
                ..AssetItem::default()
            },
        };
        let name = item.name.clone();
        self.items.insert(0, item);
        self.highlight = Some((id, Instant::now()));
        name
    }

    pub fn is_highlighted(&self, item_id: &str) -> bool {
        matches!(&self.highlight, Some((id, since)) if id == item_id && since.elapsed() < HIGHLIGHT_TTL)
    }

    /// Start playback on an audio item, or stop it if it is the one
    /// already playing. Starting one item always stops any other.
    pub fn toggle_playback(&mut self, item_id: &str) {
        if matches!(&self.playback, Some(p) if p.item_id == item_id) {
            self.playback = None;
            return;
        }
        let Some(item) = self.items.iter().find(|i| i.id == item_id) else {
            return;
        };
        if item.kind != ItemKind::Audio {
            return;
        }
        let total_seconds = duration_seconds(item.duration.as_deref());
        let step = 100.0 / (total_seconds * 1000.0 / PLAYBACK_TICK.as_millis() as f64);
        self.playback = Some(Playback {
            item_id: item_id.to_string(),
            progress: 0.0,
            step,
            last_tick: Instant::now(),
        });
    }

    pub fn playing_item_id(&self) -> Option<&str> {
        self.playback.as_ref().map(|p| p.item_id.as_str())
    }

    /// Current progress (0–100) if the item is playing.
    pub fn progress_for(&self, item_id: &str) -> Option<f64> {
        self.playback
            .as_ref()
            .filter(|p| p.item_id == item_id)
            .map(|p| p.progress)
    }

    /// Advance timers. Called once per loop iteration while the view is
    /// mounted; elapsed wall time decides how many playback steps apply.
    pub fn tick(&mut self) {
        if let Some((_, since)) = &self.highlight {
            if since.elapsed() >= HIGHLIGHT_TTL {
                self.highlight = None;
            }
        }
        let mut steps = 0;
        if let Some(playback) = &mut self.playback {
            while playback.last_tick.elapsed() >= PLAYBACK_TICK {
                playback.last_tick += PLAYBACK_TICK;
                steps += 1;
            }
        }
        for _ in 0..steps {
            self.advance_playback();
            if self.playback.is_none() {
                break;
            }
        }
    }

    /// One playback step. Reaching 100 clears the timer and resets to idle.
    fn advance_playback(&mut self) {
        if let Some(playback) = &mut self.playback {
            playback.progress += playback.step;
            if playback.progress >= 100.0 {
                self.playback = None;
            }
        }
    }

    /// Open the detail panel for an image item. Non-image ids no-op.
    pub fn open_image(&mut self, item_id: &str) {
        let is_image = self
            .items
            .iter()
            .any(|i| i.id == item_id && i.kind == ItemKind::Image);
        if is_image {
            self.selected_image = Some(item_id.to_string());
            self.comment_draft.clear();
        }
    }

    pub fn close_image(&mut self) {
        self.selected_image = None;
        self.comment_draft.clear();
    }

    pub fn selected_image(&self) -> Option<&AssetItem> {
        let id = self.selected_image.as_deref()?;
        self.items.iter().find(|i| i.id == id)
    }

    pub fn in_detail_view(&self) -> bool {
        self.selected_image().is_some()
    }

    pub fn versions_for(&self, image_id: &str) -> &[ImageVersion] {
        self.versions
            .get(image_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn profile_for(&self, image_id: &str) -> Option<&ImageProfile> {
        self.profiles.get(image_id)
    }

    pub fn comments_for(&self, image_id: &str) -> &[ImageComment] {
        self.comments
            .get(image_id)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// Append the trimmed comment draft to the open image's thread.
    /// No-op without an open image or with an empty draft.
    pub fn add_comment(&mut self) {
        let Some(image_id) = self.selected_image.clone() else {
            return;
        };
        let text = self.comment_draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        let entry = ImageComment {
            id: format!("c-{}", util::mint_millis()),
            author: self.author_name.clone(),
            date: util::date_label(),
            text,
        };
        self.comments.entry(image_id).or_default().push(entry);
        self.comment_draft.clear();
    }

    #[cfg(test)]
    fn force_highlight_age(&mut self, age: Duration) {
        if let Some((_, since)) = &mut self.highlight {
            *since = Instant::now() - age;
        }
    }
}

fn seed_items() -> Vec<AssetItem> {
    fn base(id: &str, name: &str, kind: ItemKind) -> AssetItem {
        AssetItem {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            ..AssetItem::default()
        }
    }

    vec![
        AssetItem {
            file_count: Some(24),
            ..base("d1", "Product Docs", ItemKind::Folder)
        },
        AssetItem {
            milestone: Some("Sprint 14".to_string()),
            open_tasks: Some(8),
            ribbon: Some(Ribbon::Red),
            ..base("p1", "Q2 Product Launch", ItemKind::Project)
        },
        AssetItem {
            file_count: Some(57),
            ..base("d2", "Design Assets", ItemKind::Folder)
        },
        AssetItem {
            has_preview: true,
            image_type: Some("PNG".to_string()),
            resolution: Some("2560x1120".to_string()),
            size: Some("4.2 MB".to_string()),
            ribbon: Some(Ribbon::Blue),
            updated_at: Some("Feb 12, 2026 2:10 PM".to_string()),
            owner: Some("Design".to_string()),
            ..base("i1", "Homepage Hero Render", ItemKind::Image)
        },
        AssetItem {
            image_type: Some("JPG".to_string()),
            resolution: Some("4032x2268".to_string()),
            size: Some("6.8 MB".to_string()),
            updated_at: Some("Jan 28, 2026 11:06 AM".to_string()),
            owner: Some("People Ops".to_string()),
            ..base("i2", "Product Team Photo", ItemKind::Image)
        },
        AssetItem {
            audio_type: Some("WAV".to_string()),
            duration: Some("3.4s".to_string()),
            ribbon: Some(Ribbon::Amber),
            ..base("a1", "Voiceover Draft 02", ItemKind::Audio)
        },
        AssetItem {
            audio_type: Some("FLAC".to_string()),
            duration: Some("2:32m".to_string()),
            ..base("a2", "Narration Take Final", ItemKind::Audio)
        },
        AssetItem {
            model_type: Some("GLTF".to_string()),
            tris: Some("1.4M tris".to_string()),
            ribbon: Some(Ribbon::Green),
            ..base("m1", "Device Mockup v5", ItemKind::ThreeD)
        },
        AssetItem {
            file_count: Some(13),
            ..base("d3", "Finance", ItemKind::Folder)
        },
        base("s1", "Growth Model 2026", ItemKind::Sheet),
        AssetItem {
            file_count: Some(31),
            ..base("d4", "Operations", ItemKind::Folder)
        },
        base("pr1", "Client Estimation v3", ItemKind::Proposal),
        base("b1", "Architecture Discovery Board", ItemKind::Board),
        AssetItem {
            file_count: Some(8),
            ..base("d5", "Legal", ItemKind::Folder)
        },
        base("doc1", "Q2 Planning Notes.docx", ItemKind::Document),
        base("doc2", "Homepage Copy v4.txt", ItemKind::Document),
        base("doc3", "Vendor List.csv", ItemKind::Document),
    ]
}

fn version(
    label: &str,
    date: &str,
    size: &str,
    resolution: &str,
    format: &str,
    author: &str,
    note: &str,
) -> ImageVersion {
    ImageVersion {
        label: label.to_string(),
        date: date.to_string(),
        size: size.to_string(),
        resolution: resolution.to_string(),
        format: format.to_string(),
        author: author.to_string(),
        note: Some(note.to_string()),
    }
}

fn seed_versions() -> HashMap<String, Vec<ImageVersion>> {
    let mut versions = HashMap::new();
    versions.insert(
        "i1".to_string(),
        vec![
            version(
                "v5 (latest)",
                "Feb 12, 2026 2:10 PM",
                "4.2 MB",
                "2560x1120",
                "PNG",
                "J. Rivera",
                "Color balance tuned and exported at 2.5k width",
            ),
            version(
                "v4",
                "Feb 9, 2026 5:42 PM",
                "3.9 MB",
                "2200x960",
                "PNG",
                "J. Rivera",
                "CTA glow pulled back; typography nudged",
            ),
            version(
                "v3",
                "Feb 5, 2026 1:15 PM",
                "3.4 MB",
                "2048x896",
                "PNG",
                "A. Patel",
                "First pass on lighting",
            ),
        ],
    );
    versions.insert(
        "i2".to_string(),
        vec![
            version(
                "v2 (latest)",
                "Jan 28, 2026 11:06 AM",
                "6.8 MB",
                "4032x2268",
                "JPG",
                "M. Chen",
                "Cropped and de-noised",
            ),
            version(
                "v1",
                "Jan 18, 2026 9:44 AM",
                "8.1 MB",
                "4032x3024",
                "JPG",
                "M. Chen",
                "Original upload",
            ),
        ],
    );
    versions
}

fn seed_profiles() -> HashMap<String, ImageProfile> {
    let mut profiles = HashMap::new();
    profiles.insert(
        "i1".to_string(),
        ImageProfile {
            location: "Design Assets / Launch".to_string(),
            created: "Feb 2, 2026 4:18 PM".to_string(),
            owner: "Design".to_string(),
        },
    );
    profiles.insert(
        "i2".to_string(),
        ImageProfile {
            location: "Design Assets / Team".to_string(),
            created: "Jan 18, 2026 9:40 AM".to_string(),
            owner: "People Ops".to_string(),
        },
    );
    profiles
}

fn seed_comments() -> HashMap<String, Vec<ImageComment>> {
    fn comment(id: &str, author: &str, date: &str, text: &str) -> ImageComment {
        ImageComment {
            id: id.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            text: text.to_string(),
        }
    }

    let mut comments = HashMap::new();
    comments.insert(
        "i1".to_string(),
        vec![
            comment(
                "c-101",
                "A. Patel",
                "Feb 12, 2026 3:05 PM",
                "Looks good. Can we brighten the left edge 5%?",
            ),
            comment(
                "c-102",
                "J. Rivera",
                "Feb 12, 2026 3:22 PM",
                "Updated in v5 and exported the final PNG.",
            ),
        ],
    );
    comments.insert(
        "i2".to_string(),
        vec![comment(
            "c-201",
            "M. Chen",
            "Jan 28, 2026 11:20 AM",
            "Cropped for banner-safe area.",
        )],
    );
    comments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> AssetBrowser {
        AssetBrowser::new("You")
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!(duration_seconds(Some("3.4s")), 3.4);
        assert_eq!(duration_seconds(Some("2m")), 120.0);
        assert_eq!(duration_seconds(Some("2:32m")), 152.0);
        assert_eq!(duration_seconds(Some("garbage")), 3.0);
        assert_eq!(duration_seconds(None), 3.0);
    }

    #[test]
    fn test_ordered_items_put_folders_first_stably() {
        let assets = browser();
        let ordered = assets.ordered_items();
        let folder_names: Vec<&str> = ordered
            .iter()
            .take_while(|i| i.kind.is_folder())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            folder_names,
            vec!["Product Docs", "Design Assets", "Finance", "Operations", "Legal"]
        );
        assert!(ordered[folder_names.len()..].iter().all(|i| !i.kind.is_folder()));
        // Non-folders keep seed order.
        assert_eq!(ordered[folder_names.len()].name, "Q2 Product Launch");
    }

    #[test]
    fn test_create_item_prepends_with_unique_id() {
        let mut assets = browser();
        let before = assets.items.len();
        assets.create_item(CreateAction::Folder);
        assets.create_item(CreateAction::Upload);

        assert_eq!(assets.items.len(), before + 2);
        assert_eq!(assets.items[0].name, "Uploaded File");
        assert_eq!(assets.items[1].name, "New Folder");
        assert!(assets.items[0].id.starts_with("new-"));
        assert_ne!(assets.items[0].id, assets.items[1].id);
    }

    #[test]
    fn test_create_item_defaults_per_action() {
        let mut assets = browser();
        assets.create_item(CreateAction::Project);
        let project = &assets.items[0];
        assert_eq!(project.kind, ItemKind::Project);
        assert_eq!(project.secondary_label(), "Sprint 1, 0 open tasks");

        assets.create_item(CreateAction::Folder);
        assert_eq!(assets.items[0].secondary_label(), "0 files");
    }

    #[test]
    fn test_created_item_highlight_expires() {
        let mut assets = browser();
        assets.create_item(CreateAction::Board);
        let id = assets.items[0].id.clone();
        assert!(assets.is_highlighted(&id));

        assets.force_highlight_age(HIGHLIGHT_TTL + Duration::from_millis(1));
        assert!(!assets.is_highlighted(&id));
        assets.tick();
        assert!(!assets.is_highlighted(&id));
    }

    #[test]
    fn test_only_one_item_plays_at_a_time() {
        let mut assets = browser();
        assets.toggle_playback("a1");
        assert_eq!(assets.playing_item_id(), Some("a1"));

        assets.toggle_playback("a2");
        assert_eq!(assets.playing_item_id(), Some("a2"));
        assert!(assets.progress_for("a1").is_none());
    }

    #[test]
    fn test_toggling_the_playing_item_stops_it() {
        let mut assets = browser();
        assets.toggle_playback("a1");
        assets.toggle_playback("a1");
        assert!(assets.playing_item_id().is_none());
        assert!(assets.progress_for("a1").is_none());
    }

    #[test]
    fn test_playback_only_starts_on_audio() {
        let mut assets = browser();
        assets.toggle_playback("d1");
        assets.toggle_playback("missing");
        assert!(assets.playing_item_id().is_none());
    }

    #[test]
    fn test_progress_is_monotonic_and_completion_resets_to_idle() {
        let mut assets = browser();
        assets.toggle_playback("a1");

        let mut last = 0.0;
        let mut steps = 0;
        while assets.playing_item_id().is_some() {
            let progress = assets.progress_for("a1").unwrap();
            assert!(progress >= last);
            last = progress;
            assets.advance_playback();
            steps += 1;
            assert!(steps < 10_000, "playback never completed");
        }

        // 3.4s at 80ms per step is ~43 steps to reach 100.
        assert!((40..=46).contains(&steps), "unexpected step count {steps}");
        assert!(assets.progress_for("a1").is_none());
    }

    #[test]
    fn test_image_detail_lookups_and_fallbacks() {
        let mut assets = browser();
        assets.open_image("i1");
        assert!(assets.in_detail_view());
        assert_eq!(assets.versions_for("i1").len(), 3);
        assert_eq!(assets.comments_for("i1").len(), 2);
        assert_eq!(assets.profile_for("i1").unwrap().owner, "Design");

        // An image with no seeded history renders the fallbacks.
        assets.open_image("i2");
        assert_eq!(assets.versions_for("missing").len(), 0);
        assert!(assets.profile_for("missing").is_none());
    }

    #[test]
    fn test_open_image_ignores_non_images() {
        let mut assets = browser();
        assets.open_image("a1");
        assert!(!assets.in_detail_view());
    }

    #[test]
    fn test_add_comment_appends_and_clears_draft() {
        let mut assets = browser();
        assets.open_image("i2");
        assets.comment_draft = "  Needs a tighter crop.  ".to_string();
        assets.add_comment();

        let comments = assets.comments_for("i2");
        assert_eq!(comments.len(), 2);
        let last = comments.last().unwrap();
        assert_eq!(last.author, "You");
        assert_eq!(last.text, "Needs a tighter crop.");
        assert!(last.id.starts_with("c-"));
        assert!(assets.comment_draft.is_empty());
    }

    #[test]
    fn test_add_comment_no_ops_on_empty_draft_or_closed_panel() {
        let mut assets = browser();
        assets.open_image("i1");
        assets.comment_draft = "   ".to_string();
        assets.add_comment();
        assert_eq!(assets.comments_for("i1").len(), 2);

        assets.close_image();
        assets.comment_draft = "orphan".to_string();
        assets.add_comment();
        assert_eq!(assets.comments_for("i1").len(), 2);
    }

    #[test]
    fn test_changing_image_clears_comment_draft() {
        let mut assets = browser();
        assets.open_image("i1");
        assets.comment_draft = "half-typed".to_string();
        assets.open_image("i2");
        assert!(assets.comment_draft.is_empty());
    }

    #[test]
    fn test_view_toggle_round_trips() {
        let mut assets = browser();
        assert_eq!(assets.view, AssetViewMode::Simple);
        assets.toggle_view();
        assert_eq!(assets.view, AssetViewMode::Signals);
        assets.toggle_view();
        assert_eq!(assets.view, AssetViewMode::Simple);
    }
}
