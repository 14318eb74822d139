//! Drive listing view state.
//!
//! A seeded list of workspace records with collaboration and delivery
//! signals. Ordering puts folders first, then breaks ties either by a
//! health-priority rank (riskiest first) or by case-insensitive name.

use std::cmp::Ordering;

use super::item::ItemKind;

/// Access level shown as a pill on each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Owner,
    Editor,
    Viewer,
    Restricted,
}

impl Permission {
    pub fn label(&self) -> &'static str {
        match self {
            Permission::Owner => "Owner",
            Permission::Editor => "Editor",
            Permission::Viewer => "Viewer",
            Permission::Restricted => "Restricted",
        }
    }
}

/// Delivery health of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Watch,
    AtRisk,
}

impl Health {
    pub fn label(&self) -> &'static str {
        match self {
            Health::Healthy => "Healthy",
            Health::Watch => "Watch",
            Health::AtRisk => "At risk",
        }
    }

    /// Sort rank: at-risk floats to the top of its group.
    pub fn rank(&self) -> u8 {
        match self {
            Health::AtRisk => 0,
            Health::Watch => 1,
            Health::Healthy => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Burndown {
    OnTrack,
    AtRisk,
}

impl Burndown {
    pub fn label(&self) -> &'static str {
        match self {
            Burndown::OnTrack => "Burndown on track",
            Burndown::AtRisk => "Burndown at risk",
        }
    }
}

/// Delivery metrics carried only by project items.
#[derive(Debug, Clone)]
pub struct ProjectMetrics {
    pub completion: u8,
    pub burndown: Burndown,
}

#[derive(Debug, Clone)]
pub struct DriveItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub location: String,
    pub owner_team: String,
    pub permission: Permission,
    pub active_now: u32,
    pub contributors: u32,
    pub last_activity: String,
    pub health: Health,
    pub attention: Option<String>,
    pub next_action: String,
    pub metrics: Option<ProjectMetrics>,
}

impl DriveItem {
    /// Activity cell: live count while a session is open, otherwise the
    /// last-activity label.
    pub fn activity_label(&self) -> String {
        if self.active_now > 0 {
            format!("{} live now", self.active_now)
        } else {
            format!("Last active {}", self.last_activity)
        }
    }

    /// Signals cell for project items; "—" everywhere else.
    pub fn signals_label(&self) -> String {
        match &self.metrics {
            Some(metrics) => format!("{}% done, {}", metrics.completion, metrics.burndown.label()),
            None => "—".to_string(),
        }
    }

    pub fn attention_label(&self) -> &str {
        self.attention.as_deref().unwrap_or("No blockers reported")
    }
}

/// Tie-break applied after the folders-first rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveSort {
    Health,
    Name,
}

impl DriveSort {
    pub fn label(&self) -> &'static str {
        match self {
            DriveSort::Health => "health",
            DriveSort::Name => "name",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            DriveSort::Health => DriveSort::Name,
            DriveSort::Name => DriveSort::Health,
        }
    }
}

/// Compare two items under the given sort mode.
///
/// Folders always come before non-folders. Health mode then ranks
/// at-risk < watch < healthy; both modes end on a case-insensitive
/// name comparison, so the ordering is total and deterministic.
pub fn compare_items(sort: DriveSort, a: &DriveItem, b: &DriveItem) -> Ordering {
    match (a.kind.is_folder(), b.kind.is_folder()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if sort == DriveSort::Health {
        let by_health = a.health.rank().cmp(&b.health.rank());
        if by_health != Ordering::Equal {
            return by_health;
        }
    }

    name_key(&a.name).cmp(&name_key(&b.name))
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Counts backing the stat cards above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveSummary {
    pub live_files: usize,
    pub needs_attention: usize,
    pub restricted: usize,
    pub healthy: usize,
}

pub struct DriveView {
    pub items: Vec<DriveItem>,
    pub sort: DriveSort,
    pub selected: usize,
}

impl DriveView {
    pub fn new() -> Self {
        let mut view = Self {
            items: seed_items(),
            sort: DriveSort::Health,
            selected: 0,
        };
        view.sort_items();
        view
    }

    fn sort_items(&mut self) {
        let sort = self.sort;
        self.items.sort_by(|a, b| compare_items(sort, a, b));
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        self.sort_items();
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

    pub fn summary(&self) -> DriveSummary {
        DriveSummary {
            live_files: self.items.iter().filter(|i| i.active_now > 0).count(),
            needs_attention: self
                .items
                .iter()
                .filter(|i| i.health != Health::Healthy)
                .count(),
            restricted: self
                .items
                .iter()
                .filter(|i| i.permission == Permission::Restricted)
                .count(),
            healthy: self
                .items
                .iter()
                .filter(|i| i.health == Health::Healthy)
                .count(),
        }
    }
}

impl Default for DriveView {
    fn default() -> Self {
        Self::new()
    }
}

fn item(
    id: &str,
    name: &str,
    kind: ItemKind,
    location: &str,
    owner_team: &str,
    permission: Permission,
    active_now: u32,
    contributors: u32,
    last_activity: &str,
    health: Health,
    attention: Option<&str>,
    next_action: &str,
) -> DriveItem {
    DriveItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        location: location.to_string(),
        owner_team: owner_team.to_string(),
        permission,
        active_now,
        contributors,
        last_activity: last_activity.to_string(),
        health,
        attention: attention.map(str::to_string),
        next_action: next_action.to_string(),
        metrics: None,
    }
}

fn seed_items() -> Vec<DriveItem> {
    let mut items = vec![
        item(
            "d-1",
            "Product Workspace",
            ItemKind::Folder,
            "My Drive",
            "Product Ops",
            Permission::Owner,
            4,
            18,
            "2m ago",
            Health::Healthy,
            None,
            "Open folder",
        ),
        item(
            "f-1",
            "Q2 Product Launch",
            ItemKind::Project,
            "My Drive / Product Workspace",
            "Platform Team",
            Permission::Editor,
            3,
            8,
            "5m ago",
            Health::Watch,
            Some("2 tasks blocked by API review"),
            "Resolve blockers",
        ),
        item(
            "f-2",
            "Homepage Hero Render",
            ItemKind::Image,
            "My Drive / Product Workspace",
            "Design",
            Permission::Editor,
            1,
            5,
            "16m ago",
            Health::Healthy,
            None,
            "Review final",
        ),
        item(
            "f-3",
            "Voiceover Draft 02",
            ItemKind::Audio,
            "My Drive / Product Workspace",
            "Brand",
            Permission::Viewer,
            0,
            3,
            "42m ago",
            Health::Watch,
            Some("Approval pending from PM"),
            "Request approval",
        ),
        item(
            "f-4",
            "Device Mockup v5",
            ItemKind::ThreeD,
            "My Drive / Product Workspace",
            "Design",
            Permission::Viewer,
            1,
            4,
            "49m ago",
            Health::Healthy,
            None,
            "Attach to launch docs",
        ),
        item(
            "f-5",
            "Growth Model 2026",
            ItemKind::Sheet,
            "My Drive / Finance",
            "Finance",
            Permission::Owner,
            2,
            6,
            "1h ago",
            Health::Healthy,
            None,
            "Publish scenario v3",
        ),
        item(
            "f-6",
            "Client Estimation v3",
            ItemKind::Proposal,
            "My Drive / Proposals",
            "Solutions",
            Permission::Editor,
            0,
            3,
            "3h ago",
            Health::AtRisk,
            Some("Missing estimate for infra migration"),
            "Complete estimation block",
        ),
        item(
            "f-7",
            "Architecture Discovery Board",
            ItemKind::Board,
            "My Drive / Product Workspace",
            "Architecture",
            Permission::Editor,
            5,
            9,
            "Just now",
            Health::Healthy,
            None,
            "Sync decisions to project file",
        ),
        item(
            "f-8",
            "Vendor Uploads",
            ItemKind::Document,
            "My Drive / Operations",
            "Ops",
            Permission::Restricted,
            0,
            4,
            "Today",
            Health::Watch,
            Some("2 files need access grant"),
            "Adjust permissions",
        ),
    ];

    for entry in &mut items {
        if entry.kind == ItemKind::Project {
            entry.metrics = Some(ProjectMetrics {
                completion: 64,
                burndown: Burndown::OnTrack,
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(view: &DriveView) -> Vec<&str> {
        view.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_folders_sort_first() {
        let view = DriveView::new();
        assert_eq!(view.items[0].name, "Product Workspace");
        assert!(view.items[0].kind.is_folder());
        assert!(view.items[1..].iter().all(|i| !i.kind.is_folder()));
    }

    #[test]
    fn test_health_order_puts_risk_before_watch_before_healthy() {
        let view = DriveView::new();
        let ranks: Vec<u8> = view.items[1..].iter().map(|i| i.health.rank()).collect();
        let mut sorted_ranks = ranks.clone();
        sorted_ranks.sort();
        assert_eq!(ranks, sorted_ranks);
        assert_eq!(view.items[1].name, "Client Estimation v3");
    }

    #[test]
    fn test_name_order_is_case_insensitive_alphabetical() {
        let mut view = DriveView::new();
        view.toggle_sort();
        assert_eq!(view.sort, DriveSort::Name);
        let non_folders: Vec<&str> = view.items[1..].iter().map(|i| i.name.as_str()).collect();
        let mut expected = non_folders.clone();
        expected.sort_by_key(|n| n.to_lowercase());
        assert_eq!(non_folders, expected);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut view = DriveView::new();
        let once = names(&view).into_iter().map(str::to_string).collect::<Vec<_>>();
        view.sort_items();
        let twice = names(&view);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_summary_counts() {
        let view = DriveView::new();
        let summary = view.summary();
        assert_eq!(summary.live_files, 6);
        assert_eq!(summary.needs_attention, 4);
        assert_eq!(summary.restricted, 1);
        assert_eq!(summary.healthy, 5);
    }

    #[test]
    fn test_fallback_labels_for_missing_fields() {
        let view = DriveView::new();
        let board = view
            .items
            .iter()
            .find(|i| i.name == "Architecture Discovery Board")
            .unwrap();
        assert_eq!(board.attention_label(), "No blockers reported");
        assert_eq!(board.signals_label(), "—");

        let project = view.items.iter().find(|i| i.name == "Q2 Product Launch").unwrap();
        assert_eq!(project.signals_label(), "64% done, Burndown on track");
        assert_eq!(project.attention_label(), "2 tasks blocked by API review");
    }

    #[test]
    fn test_activity_label_prefers_live_sessions() {
        let view = DriveView::new();
        let live = view.items.iter().find(|i| i.name == "Product Workspace").unwrap();
        assert_eq!(live.activity_label(), "4 live now");

        let idle = view.items.iter().find(|i| i.name == "Vendor Uploads").unwrap();
        assert_eq!(idle.activity_label(), "Last active Today");
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut view = DriveView::new();
        for _ in 0..100 {
            view.select_next();
        }
        assert_eq!(view.selected, view.items.len() - 1);
        for _ in 0..100 {
            view.select_prev();
        }
        assert_eq!(view.selected, 0);
    }
}
