//! Hook for inspecting external stylesheet text.
//!
//! Nothing in this crate fetches stylesheets. A caller that already has
//! stylesheet bodies at hand (a crawler cache, a test fixture) can hand a
//! source to [`Classifier::with_stylesheets`](super::Classifier::with_stylesheets)
//! and `<link rel=stylesheet>` elements whose body uses `@import` are then
//! ranked with inline `@import` styles.

use std::collections::HashMap;

/// Supplies the text of an external stylesheet by its `href`.
pub trait StylesheetSource {
    /// `None` when the stylesheet is unknown or unavailable.
    fn fetch_text(&self, href: &str) -> Option<String>;
}

impl StylesheetSource for HashMap<String, String> {
    fn fetch_text(&self, href: &str) -> Option<String> {
        self.get(href).cloned()
    }
}
