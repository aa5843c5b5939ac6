use crate::engine::scanner::PriorityAssignment;

/// Recommended order: highest priority first, ties kept in document order.
///
/// `sort_by` is stable, which is what keeps equal-priority elements in
/// place. The input is left untouched.
pub fn derive_recommended<E: Clone>(actual: &[PriorityAssignment<E>]) -> Vec<PriorityAssignment<E>> {
    let mut sorted = actual.to_vec();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

/// Number of elements whose recommended position differs from their
/// actual one.
pub fn displaced<E>(recommended: &[PriorityAssignment<E>]) -> usize {
    recommended
        .iter()
        .enumerate()
        .filter(|(index, assignment)| assignment.position != *index)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadElement;
    use crate::engine::scanner::scan;
    use crate::dom::parser::parse_html;
    use crate::priority::Classifier;

    fn scanned(html: &str) -> Vec<PriorityAssignment<HeadElement>> {
        scan(&parse_html(html, "test"), &Classifier::new())
    }

    #[test]
    fn reference_example_reorders() {
        let actual = scanned(
            r#"<html><head>
            <meta charset="utf-8">
            <title>T</title>
            <script async src="a.js"></script>
            <link rel="stylesheet" href="a.css">
            <script src="b.js"></script>
            </head></html>"#,
        );
        let recommended = derive_recommended(&actual);

        let positions: Vec<usize> = recommended.iter().map(|a| a.position).collect();
        assert_eq!(positions, [0, 1, 2, 4, 3]);
        let priorities: Vec<u8> = recommended.iter().map(|a| a.priority.value()).collect();
        assert_eq!(priorities, [10, 9, 7, 5, 4]);
        assert_eq!(displaced(&recommended), 2);
    }

    #[test]
    fn already_ordered_head_is_unchanged() {
        let actual = scanned(
            r#"<html><head><script defer src="a.js"></script><link rel="prefetch" href="b"></head></html>"#,
        );
        let recommended = derive_recommended(&actual);
        assert_eq!(recommended, actual);
        assert_eq!(displaced(&recommended), 0);
    }

    #[test]
    fn ties_keep_document_order() {
        let actual = scanned(
            r#"<html><head>
            <base href="/">
            <link rel="stylesheet" href="1.css">
            <link rel="icon" href="i.png">
            <style>a{}</style>
            <title>T</title>
            <link rel="stylesheet" href="2.css">
            </head></html>"#,
        );
        let recommended = derive_recommended(&actual);
        let positions: Vec<usize> = recommended.iter().map(|a| a.position).collect();
        assert_eq!(positions, [4, 1, 3, 5, 0, 2]);
    }

    #[test]
    fn input_is_not_mutated() {
        let actual = scanned(r#"<html><head><base href="/"><title>T</title></head></html>"#);
        let before = actual.clone();
        let _ = derive_recommended(&actual);
        assert_eq!(actual, before);
    }
}
