//! Head element load priorities.
//!
//! Every head element lands on a fixed 0–10 ladder where 10 should load
//! first. The ladder rungs are [`Category`] values; the rules that map an
//! element to a rung live in [`catalog`] and are applied by [`Classifier`].

pub mod catalog;
pub mod classify;
pub mod stylesheet;

use std::fmt;

pub use catalog::{rules, Rule};
pub use classify::{classify, Classifier};
pub use stylesheet::StylesheetSource;

/// Position on the priority ladder, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(10);

    /// `None` when `value` is off the ladder.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// 1-based rank shown next to each element in reports.
    pub const fn display_rank(self) -> u8 {
        self.0 + 1
    }

    /// Index into the 11-entry palette: priority 10 → 0, priority 0 → 10.
    pub const fn palette_index(self) -> usize {
        (Self::MAX.0 - self.0) as usize
    }

    /// Every ladder value, highest first.
    pub fn descending() -> impl Iterator<Item = Priority> {
        (0..=Self::MAX.0).rev().map(Priority)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Named rung of the priority ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `<meta>` with charset, http-equiv or viewport
    Meta,
    Title,
    Preconnect,
    AsyncScript,
    /// Inline `<style>` pulling in more CSS through `@import`
    ImportStyles,
    SyncScript,
    SyncStyles,
    Preload,
    DeferScript,
    PrefetchPrerender,
    /// Fallback for anything the catalog does not recognise
    Other,
}

impl Category {
    /// All categories, highest priority first.
    pub const ALL: [Category; 11] = [
        Category::Meta,
        Category::Title,
        Category::Preconnect,
        Category::AsyncScript,
        Category::ImportStyles,
        Category::SyncScript,
        Category::SyncStyles,
        Category::Preload,
        Category::DeferScript,
        Category::PrefetchPrerender,
        Category::Other,
    ];

    pub const fn priority(self) -> Priority {
        Priority(match self {
            Category::Meta => 10,
            Category::Title => 9,
            Category::Preconnect => 8,
            Category::AsyncScript => 7,
            Category::ImportStyles => 6,
            Category::SyncScript => 5,
            Category::SyncStyles => 4,
            Category::Preload => 3,
            Category::DeferScript => 2,
            Category::PrefetchPrerender => 1,
            Category::Other => 0,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Meta => "META",
            Category::Title => "TITLE",
            Category::Preconnect => "PRECONNECT",
            Category::AsyncScript => "ASYNC_SCRIPT",
            Category::ImportStyles => "IMPORT_STYLES",
            Category::SyncScript => "SYNC_SCRIPT",
            Category::SyncStyles => "SYNC_STYLES",
            Category::Preload => "PRELOAD",
            Category::DeferScript => "DEFER_SCRIPT",
            Category::PrefetchPrerender => "PREFETCH_PRERENDER",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
