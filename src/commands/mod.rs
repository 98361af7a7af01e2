//! Handlers for the menu actions.
//!
//! Each handler takes the collection and the console explicitly, prompts for
//! what it needs, and reports its outcome. File problems are reported to the
//! user; only console failures are returned as errors.

pub mod edit;
pub mod files;
pub mod quiz;
pub mod stats;

pub use edit::{add, remove};
pub use files::{export, export_to, import, import_from, save_log};
pub use quiz::ask;
pub use stats::{hardest_card, reset_stats};

/// Menu actions, matched against the lowercased input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "exit" => Some(Self::Exit),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            _ => None,
        }
    }
}
