//! View-state modules for the workspace prototype.
//!
//! Each view owns its seed data and mutation methods; nothing here is
//! shared between views except the item vocabulary in [`item`].

pub mod assets;
pub mod chat;
pub mod drive;
pub mod issues;
pub mod item;
