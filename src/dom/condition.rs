//! Structural conditions over a single element.
//!
//! A `Condition` covers the small selector subset the priority catalog
//! needs: tag names, attribute presence, whole-value and substring
//! attribute matches, and `:is()` / `:not()` combinations. Conditions are
//! `const`-constructible so the catalog can live in static tables, and they
//! render back to selector syntax for logging.

use std::fmt;

/// Read-only view of an element's tag and attributes.
pub trait ElementView {
    fn tag_name(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Attributes whose values selectors match ASCII case-insensitively in
/// HTML documents.
const CASE_INSENSITIVE_VALUES: &[&str] = &[
    "accept", "accept-charset", "align", "alink", "axis", "bgcolor", "charset", "checked",
    "clear", "codetype", "color", "compact", "declare", "defer", "dir", "direction", "disabled",
    "enctype", "face", "frame", "hreflang", "http-equiv", "lang", "language", "link", "media",
    "method", "multiple", "nohref", "noresize", "noshade", "nowrap", "readonly", "rel", "rev",
    "rules", "scope", "scrolling", "selected", "shape", "target", "text", "type", "valign",
    "valuetype", "vlink",
];

fn value_ignores_case(name: &str) -> bool {
    CASE_INSENSITIVE_VALUES
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(name))
}

/// Selector-like predicate tested against one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `tag`
    Tag(&'static str),
    /// `[name]`
    HasAttr(&'static str),
    /// `[name=value]` (whole value)
    AttrEq(&'static str, &'static str),
    /// `[name*=needle]`
    AttrContains(&'static str, &'static str),
    /// Compound: every condition holds.
    All(&'static [Condition]),
    /// `:is(a, b, ...)`, or a selector list at top level.
    Any(&'static [Condition]),
    /// `:not(...)`
    Not(&'static Condition),
}

impl Condition {
    /// Evaluate against an element view.
    ///
    /// Tag and attribute names compare ASCII case-insensitively. Attribute
    /// values do only for the attributes HTML lists as case-insensitive
    /// (`rel`, `type`, `http-equiv`, ...); `name` and the rest are exact.
    pub fn test<V: ElementView + ?Sized>(&self, view: &V) -> bool {
        match *self {
            Condition::Tag(tag) => view.tag_name().eq_ignore_ascii_case(tag),
            Condition::HasAttr(name) => view.attribute(name).is_some(),
            Condition::AttrEq(name, value) => view.attribute(name).is_some_and(|v| {
                if value_ignores_case(name) {
                    v.eq_ignore_ascii_case(value)
                } else {
                    v == value
                }
            }),
            Condition::AttrContains(name, needle) => view.attribute(name).is_some_and(|v| {
                if value_ignores_case(name) {
                    v.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
                } else {
                    v.contains(needle)
                }
            }),
            Condition::All(items) => items.iter().all(|c| c.test(view)),
            Condition::Any(items) => items.iter().any(|c| c.test(view)),
            Condition::Not(inner) => !inner.test(view),
        }
    }

    fn write_compound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Condition::Tag(tag) => f.write_str(tag),
            Condition::HasAttr(name) => write!(f, "[{name}]"),
            Condition::AttrEq(name, value) => write!(f, "[{name}={value}]"),
            Condition::AttrContains(name, needle) => write!(f, "[{name}*={needle}]"),
            Condition::All(items) => items.iter().try_for_each(|c| c.write_compound(f)),
            Condition::Any(items) => {
                f.write_str(":is(")?;
                write_list(f, items)?;
                f.write_str(")")
            }
            Condition::Not(inner) => {
                f.write_str(":not(")?;
                match *inner {
                    Condition::Any(items) => write_list(f, items)?,
                    other => other.write_compound(f)?,
                }
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Condition]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.write_compound(f)?;
    }
    Ok(())
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Condition::Any(items) => write_list(f, items),
            other => other.write_compound(f),
        }
    }
}
