//! Project/issue tracker view state.
//!
//! A static issue list partitioned by section at render time, source
//! order preserved within each group. Nothing here mutates.

use ratatui::style::Color;

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    InReview,
    InProgress,
    Todo,
    Done,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::InReview,
        Section::InProgress,
        Section::Todo,
        Section::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::InReview => "In Review",
            Section::InProgress => "In Progress",
            Section::Todo => "Todo",
            Section::Done => "Done",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Section::InReview => Theme::BULLET_HALF,
            Section::InProgress => '◌',
            Section::Todo => Theme::BULLET_EMPTY,
            Section::Done => Theme::BULLET_FILLED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Amber,
    Sky,
    Emerald,
    Rose,
    Violet,
}

impl TagTone {
    pub fn color(&self) -> Color {
        match self {
            TagTone::Amber => Theme::AMBER,
            TagTone::Sky => Theme::SKY,
            TagTone::Emerald => Theme::EMERALD,
            TagTone::Rose => Theme::ROSE,
            TagTone::Violet => Theme::VIOLET,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub label: String,
    pub tone: TagTone,
}

#[derive(Debug, Clone)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub section: Section,
    pub priority: Priority,
    pub created_at: String,
    pub project: String,
    pub assignee: String,
    pub tags: Vec<Tag>,
}

pub struct IssueBoard {
    pub issues: Vec<Issue>,
    pub selected: usize,
}

impl IssueBoard {
    pub fn new() -> Self {
        Self {
            issues: seed_issues(),
            selected: 0,
        }
    }

    /// Partition by section, preserving source order within each group.
    /// Empty sections still appear so their headers render a zero count.
    pub fn grouped(&self) -> Vec<(Section, Vec<&Issue>)> {
        Section::ALL
            .iter()
            .map(|section| {
                let group: Vec<&Issue> = self
                    .issues
                    .iter()
                    .filter(|issue| issue.section == *section)
                    .collect();
                (*section, group)
            })
            .collect()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.issues.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for IssueBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn issue(
    id: &str,
    title: &str,
    section: Section,
    priority: Priority,
    created_at: &str,
    assignee: &str,
    tags: &[(&str, TagTone)],
) -> Issue {
    Issue {
        id: id.to_string(),
        title: title.to_string(),
        section,
        priority,
        created_at: created_at.to_string(),
        project: "Olympus".to_string(),
        assignee: assignee.to_string(),
        tags: tags
            .iter()
            .map(|(label, tone)| Tag {
                label: label.to_string(),
                tone: *tone,
            })
            .collect(),
    }
}

fn seed_issues() -> Vec<Issue> {
    vec![
        issue(
            "COL-207",
            "Finalize interaction tokens for command menu",
            Section::InReview,
            Priority::High,
            "Feb 09, 2026",
            "AK",
            &[("Design", TagTone::Violet), ("UI", TagTone::Sky)],
        ),
        issue(
            "COL-203",
            "Optimize row virtualization in issue table",
            Section::InReview,
            Priority::Urgent,
            "Feb 08, 2026",
            "MP",
            &[("Perf", TagTone::Rose), ("Core", TagTone::Emerald)],
        ),
        issue(
            "COL-215",
            "Thread unread state sync for team channels",
            Section::InProgress,
            Priority::High,
            "Feb 11, 2026",
            "RL",
            &[("Chat", TagTone::Sky), ("Sync", TagTone::Amber)],
        ),
        issue(
            "COL-219",
            "Add keyboard shortcut for quick-create",
            Section::InProgress,
            Priority::Medium,
            "Feb 12, 2026",
            "DT",
            &[("DX", TagTone::Emerald)],
        ),
        issue(
            "COL-228",
            "Project milestone filter in activity feed",
            Section::Todo,
            Priority::Medium,
            "Feb 13, 2026",
            "NV",
            &[("Product", TagTone::Violet), ("Metrics", TagTone::Sky)],
        ),
        issue(
            "COL-231",
            "Issue import pipeline from CSV",
            Section::Todo,
            Priority::Low,
            "Feb 13, 2026",
            "YM",
            &[("Data", TagTone::Amber)],
        ),
        issue(
            "COL-198",
            "Ship workspace sidebar icon refresh",
            Section::Done,
            Priority::Low,
            "Feb 07, 2026",
            "TC",
            &[("UI", TagTone::Sky)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_covers_every_issue_once() {
        let board = IssueBoard::new();
        let grouped = board.grouped();
        let total: usize = grouped.iter().map(|(_, issues)| issues.len()).sum();
        assert_eq!(total, board.issues.len());
        assert_eq!(grouped.len(), Section::ALL.len());
    }

    #[test]
    fn test_grouping_preserves_source_order_within_sections() {
        let board = IssueBoard::new();
        let grouped = board.grouped();

        let (section, in_review) = &grouped[0];
        assert_eq!(*section, Section::InReview);
        let ids: Vec<&str> = in_review.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["COL-207", "COL-203"]);
    }

    #[test]
    fn test_section_counts() {
        let board = IssueBoard::new();
        let counts: Vec<usize> = board
            .grouped()
            .iter()
            .map(|(_, issues)| issues.len())
            .collect();
        assert_eq!(counts, vec![2, 2, 2, 1]);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut board = IssueBoard::new();
        for _ in 0..50 {
            board.select_next();
        }
        assert_eq!(board.selected, board.issues.len() - 1);
        board.select_prev();
        assert_eq!(board.selected, board.issues.len() - 2);
    }
}
