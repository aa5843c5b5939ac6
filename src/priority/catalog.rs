use crate::dom::{Condition, Element};
use crate::priority::{Category, StylesheetSource};

use crate::dom::condition::Condition::{All, Any, AttrContains, AttrEq, HasAttr, Not, Tag};

/// One detection rule: an element belongs to `category` when it matches
/// `condition` and, if `contains` is set, its text contains that needle.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub condition: Condition,
    pub contains: Option<&'static str>,
}

/// `<link rel=stylesheet href=...>`, checked only when a stylesheet
/// source is available.
const EXTERNAL_STYLESHEET: Condition = All(&[
    Tag("link"),
    AttrEq("rel", "stylesheet"),
    HasAttr("href"),
]);

/// Detection rules in evaluation order. The first rule that matches wins,
/// so an element matching several rules gets the highest-ranked one.
/// `Category::Other` has no rule; it is the fallback.
const CATALOG: [Rule; 10] = [
    Rule {
        category: Category::Meta,
        condition: All(&[
            Tag("meta"),
            Any(&[HasAttr("charset"), HasAttr("http-equiv"), AttrEq("name", "viewport")]),
        ]),
        contains: None,
    },
    Rule {
        category: Category::Title,
        condition: Tag("title"),
        contains: None,
    },
    Rule {
        category: Category::Preconnect,
        condition: All(&[Tag("link"), AttrEq("rel", "preconnect")]),
        contains: None,
    },
    Rule {
        category: Category::AsyncScript,
        condition: All(&[Tag("script"), HasAttr("async")]),
        contains: None,
    },
    Rule {
        category: Category::ImportStyles,
        condition: Tag("style"),
        contains: Some("@import"),
    },
    Rule {
        category: Category::SyncScript,
        condition: All(&[
            Tag("script"),
            Not(&Any(&[HasAttr("defer"), HasAttr("async"), AttrContains("type", "json")])),
        ]),
        contains: None,
    },
    Rule {
        category: Category::SyncStyles,
        condition: Any(&[All(&[Tag("link"), AttrEq("rel", "stylesheet")]), Tag("style")]),
        contains: None,
    },
    Rule {
        category: Category::Preload,
        condition: All(&[Tag("link"), AttrEq("rel", "preload")]),
        contains: None,
    },
    Rule {
        category: Category::DeferScript,
        condition: All(&[Tag("script"), HasAttr("defer")]),
        contains: None,
    },
    Rule {
        category: Category::PrefetchPrerender,
        condition: All(&[
            Tag("link"),
            Any(&[
                AttrEq("rel", "prefetch"),
                AttrEq("rel", "dns-prefetch"),
                AttrEq("rel", "prerender"),
            ]),
        ]),
        contains: None,
    },
];

/// The catalog, highest priority first.
pub fn rules() -> &'static [Rule] {
    &CATALOG
}

impl Rule {
    /// Does `element` belong to this rule's category?
    ///
    /// Text rules also look at external stylesheets when `stylesheets`
    /// is given; without one, only inline text is examined.
    pub fn detect(&self, element: &dyn Element, stylesheets: Option<&dyn StylesheetSource>) -> bool {
        let Some(needle) = self.contains else {
            return element.matches(&self.condition);
        };

        if element.matches(&self.condition) {
            return element.text_content().contains(needle);
        }

        match stylesheets {
            Some(source) if element.matches(&EXTERNAL_STYLESHEET) => element
                .attribute("href")
                .and_then(|href| source.fetch_text(href))
                .is_some_and(|text| text.contains(needle)),
            _ => false,
        }
    }

    /// Selector form of the rule, e.g. `style` + ` (text contains "@import")`.
    pub fn describe(&self) -> String {
        match self.contains {
            Some(needle) => format!("{} (text contains \"{needle}\")", self.condition),
            None => self.condition.to_string(),
        }
    }
}
