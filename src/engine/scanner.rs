use crate::dom::DocumentModel;
use crate::priority::{Category, Classifier, Priority};

/// An element together with where it sits in the head and how it ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityAssignment<E> {
    pub element: E,
    /// Zero-based position among the head's element children.
    pub position: usize,
    pub category: Category,
    pub priority: Priority,
}

/// Classify the head children of `model`, keeping document order.
///
/// Each call re-reads the model, so results follow the live document.
pub fn scan<M: DocumentModel>(model: &M, classifier: &Classifier<'_>) -> Vec<PriorityAssignment<M::Element>> {
    model
        .head_children()
        .into_iter()
        .enumerate()
        .map(|(position, element)| {
            let category = classifier.categorize(&element);
            log::debug!("#{position} {category} ({}) {element}", category.priority());
            PriorityAssignment {
                element,
                position,
                category,
                priority: category.priority(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parser::parse_html;

    #[test]
    fn scans_in_document_order() {
        let html = r#"<html><head>
            <script defer src="a.js"></script>
            <link rel="prefetch" href="b">
            <base href="/">
        </head></html>"#;
        let doc = parse_html(html, "test");

        let scanned = scan(&doc, &Classifier::new());
        let summary: Vec<(usize, u8)> = scanned.iter().map(|a| (a.position, a.priority.value())).collect();
        assert_eq!(summary, [(0, 2), (1, 1), (2, 0)]);
        assert_eq!(scanned[2].category, Category::Other);
    }

    #[test]
    fn empty_head_scans_empty() {
        let doc = parse_html("<html><head></head><body></body></html>", "test");
        assert!(scan(&doc, &Classifier::new()).is_empty());
    }
}
