//! Shared item vocabulary for the drive and data browser views.

use ratatui::style::Color;

use crate::ui::theme::Theme;

/// File-or-folder category of a workspace item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    Folder,
    Project,
    Image,
    Audio,
    ThreeD,
    #[default]
    Document,
    Sheet,
    Proposal,
    Board,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Folder => "Folder",
            ItemKind::Project => "Project",
            ItemKind::Image => "Image",
            ItemKind::Audio => "Audio",
            ItemKind::ThreeD => "3D",
            ItemKind::Document => "Doc",
            ItemKind::Sheet => "Sheet",
            ItemKind::Proposal => "Proposal",
            ItemKind::Board => "Board",
        }
    }

    /// Single-cell glyph shown in front of item names.
    pub fn glyph(&self) -> char {
        match self {
            ItemKind::Folder => Theme::ARROW_RIGHT,
            ItemKind::Project => Theme::DIAMOND_FILLED,
            ItemKind::Image => '▣',
            ItemKind::Audio => '♪',
            ItemKind::ThreeD => Theme::DIAMOND_EMPTY,
            ItemKind::Document => '▤',
            ItemKind::Sheet => '▦',
            ItemKind::Proposal => Theme::CHECK_MARK,
            ItemKind::Board => '◎',
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ItemKind::Folder)
    }
}

/// Colored accent bar on a data browser card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ribbon {
    Red,
    Blue,
    Green,
    Amber,
}

impl Ribbon {
    pub fn color(&self) -> Color {
        match self {
            Ribbon::Red => Theme::RED,
            Ribbon::Blue => Theme::SKY,
            Ribbon::Green => Theme::EMERALD,
            Ribbon::Amber => Theme::AMBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ItemKind;

    #[test]
    fn test_only_folders_report_as_folders() {
        assert!(ItemKind::Folder.is_folder());
        assert!(!ItemKind::Audio.is_folder());
        assert!(!ItemKind::Board.is_folder());
    }

    #[test]
    fn test_kind_labels_are_short() {
        let kinds = [
            ItemKind::Folder,
            ItemKind::Project,
            ItemKind::Image,
            ItemKind::Audio,
            ItemKind::ThreeD,
            ItemKind::Document,
            ItemKind::Sheet,
            ItemKind::Proposal,
            ItemKind::Board,
        ];
        for kind in kinds {
            assert!(!kind.label().is_empty());
            assert!(kind.label().len() <= 8);
        }
    }
}
