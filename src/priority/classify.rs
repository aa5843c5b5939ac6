use crate::dom::Element;
use crate::priority::catalog::rules;
use crate::priority::{Category, Priority, StylesheetSource};

/// Applies the catalog to elements, first match wins.
#[derive(Clone, Copy, Default)]
pub struct Classifier<'a> {
    stylesheets: Option<&'a dyn StylesheetSource>,
}

impl Classifier<'static> {
    /// Inline-only classifier; never looks at external stylesheets.
    pub const fn new() -> Self {
        Self { stylesheets: None }
    }
}

impl<'a> Classifier<'a> {
    /// Classifier that also ranks `<link rel=stylesheet>` by its body.
    pub fn with_stylesheets(source: &'a dyn StylesheetSource) -> Self {
        Self {
            stylesheets: Some(source),
        }
    }

    /// Category of the first catalog rule that matches, else `Other`.
    pub fn categorize(&self, element: &dyn Element) -> Category {
        rules()
            .iter()
            .find(|rule| rule.detect(element, self.stylesheets))
            .map_or(Category::Other, |rule| rule.category)
    }

    pub fn classify(&self, element: &dyn Element) -> Priority {
        self.categorize(element).priority()
    }
}

/// Priority of `element` under the inline-only catalog.
pub fn classify(element: &dyn Element) -> Priority {
    Classifier::new().classify(element)
}
