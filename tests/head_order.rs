use std::fmt;

use head_order::dom::parser::parse_html;
use head_order::dom::{Condition, DocumentModel, Element, ElementView};
use head_order::engine::{analyze, log_priorities};
use head_order::priority::{Category, Classifier};
use head_order::render::{color_for, PRIORITY_COLORS};
use head_order::report::{RecordingSink, SinkEvent, TerminalSink};

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <link rel="stylesheet" href="/app.css">
  <script src="/vendor.js"></script>
  <link rel="preload" href="/font.woff2" as="font" crossorigin>
  <title>Shop</title>
  <meta name="description" content="A shop">
  <script defer src="/app.js"></script>
  <style>@import url("/theme.css");</style>
  <link rel="dns-prefetch" href="//cdn.example.com">
  <script async src="/analytics.js"></script>
  <meta charset="utf-8">
  <link rel="preconnect" href="https://cdn.example.com">
  <script type="application/ld+json">{"@type": "Store"}</script>
  <meta name="viewport" content="width=device-width">
</head>
<body><h1>Shop</h1></body>
</html>"#;

fn categories<E>(assignments: &[head_order::engine::PriorityAssignment<E>]) -> Vec<Category> {
    assignments.iter().map(|a| a.category).collect()
}

#[test]
fn full_page_actual_and_recommended_order() {
    let doc = parse_html(PAGE, "https://shop.example");
    let report = analyze(&doc, &Classifier::new());

    assert_eq!(
        categories(&report.actual),
        [
            Category::SyncStyles,
            Category::SyncScript,
            Category::Preload,
            Category::Title,
            Category::Other,
            Category::DeferScript,
            Category::ImportStyles,
            Category::PrefetchPrerender,
            Category::AsyncScript,
            Category::Meta,
            Category::Preconnect,
            Category::Other,
            Category::Meta,
        ]
    );

    let positions: Vec<usize> = report.recommended.iter().map(|a| a.position).collect();
    assert_eq!(positions, [9, 12, 3, 10, 8, 6, 1, 0, 2, 5, 7, 4, 11]);
    assert_eq!(report.displaced(), 13);
}

#[test]
fn terminal_report_without_color() {
    let doc = parse_html(
        r#"<html><head><script defer src="a.js"></script><title>T</title></head></html>"#,
        "test",
    );
    let mut sink = TerminalSink::new(Vec::new(), false);
    log_priorities(&doc, &Classifier::new(), &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "▸ head-order: Actual <head> order");
    assert_eq!(lines[1], "29");
    assert!(lines[2].starts_with("  ███ 3 <script defer"));
    assert_eq!(lines[3], "  ██████████ 10 <title>T</title>");
    assert!(lines[4].starts_with("  Actual <head> element <head>"));
    assert!(out.contains("▸ head-order: Priority <head> order\n92\n"));
    assert!(out.contains("Prioritized <head> element <head>"));
}

#[test]
fn base_tag_falls_back_to_grey() {
    let doc = parse_html(r#"<html><head><base href="/"></head></html>"#, "test");
    let report = analyze(&doc, &Classifier::new());
    let base = &report.actual[0];
    assert_eq!(base.category, Category::Other);
    assert_eq!(base.priority.value(), 0);
    assert_eq!(color_for(base.priority), PRIORITY_COLORS[10]);
}

/// Minimal synthetic element: only tag and attributes, nothing parsed.
#[derive(Clone)]
struct Synthetic {
    tag: &'static str,
    attrs: Vec<(&'static str, &'static str)>,
}

impl ElementView for Synthetic {
    fn tag_name(&self) -> &str {
        self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl Element for Synthetic {
    fn matches(&self, condition: &Condition) -> bool {
        condition.test(self)
    }

    fn text_content(&self) -> String {
        String::new()
    }
}

impl fmt::Display for Synthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag)
    }
}

struct SyntheticList(Vec<Synthetic>);

impl fmt::Display for SyntheticList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.0 {
            write!(f, "{el}")?;
        }
        Ok(())
    }
}

struct SyntheticDocument {
    head: SyntheticList,
}

impl DocumentModel for SyntheticDocument {
    type Element = Synthetic;
    type Container = SyntheticList;

    fn head_children(&self) -> Vec<Synthetic> {
        self.head.0.clone()
    }

    fn head(&self) -> &SyntheticList {
        &self.head
    }

    fn clone_into_container<'a, I>(&self, elements: I) -> SyntheticList
    where
        I: IntoIterator<Item = &'a Synthetic>,
    {
        SyntheticList(elements.into_iter().cloned().collect())
    }
}

#[test]
fn works_against_any_document_model() {
    let doc = SyntheticDocument {
        head: SyntheticList(vec![
            Synthetic { tag: "link", attrs: vec![("rel", "prefetch")] },
            Synthetic { tag: "script", attrs: vec![("defer", "")] },
            Synthetic { tag: "meta", attrs: vec![("charset", "utf-8")] },
        ]),
    };

    let mut sink = RecordingSink::new();
    let report = log_priorities(&doc, &Classifier::new(), &mut sink).unwrap();
    let priorities: Vec<u8> = report.recommended.iter().map(|a| a.priority.value()).collect();
    assert_eq!(priorities, [10, 2, 1]);

    let inspected: Vec<&str> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            SinkEvent::Inspect { value, .. } => Some(value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(inspected, ["<link><script><meta>", "<meta><script><link>"]);
}
