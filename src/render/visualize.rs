//! Styled-log rendering of priorities.
//!
//! Output follows the browser console's `%c` convention: a template string
//! in which every `%c` switches to the next style in `styles`. Sinks decide
//! what a style means on their medium.

use std::iter;

use crate::priority::Priority;
use crate::render::palette::color_for;

/// Full block used for per-element bars.
pub const BAR_GLYPH: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// One cell of the summary strip, background in the priority color.
    Block(Priority),
    /// Bar glyphs, foreground in the priority color.
    Bar(Priority),
    Monospace,
    /// Back to the surrounding font.
    Inherit,
}

impl Style {
    /// CSS declaration block for console-style sinks.
    pub fn to_css(self) -> String {
        match self {
            Style::Block(p) => format!(
                "background-color: {}; padding: 5px; margin: -1px;",
                color_for(p).to_hex()
            ),
            Style::Bar(p) => format!("color: {}", color_for(p).to_hex()),
            Style::Monospace => "font-family: monospace".to_string(),
            Style::Inherit => "font-family: inherit".to_string(),
        }
    }
}

/// Template plus one style per `%c` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledMessage {
    pub template: String,
    pub styles: Vec<Style>,
}

impl StyledMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            template: text.into(),
            styles: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.template.push_str(text);
        self
    }

    pub fn with_styled(mut self, style: Style, text: &str) -> Self {
        self.template.push_str("%c");
        self.template.push_str(text);
        self.styles.push(style);
        self
    }

    /// Concatenate another message, styles included.
    pub fn with_message(mut self, other: StyledMessage) -> Self {
        self.template.push_str(&other.template);
        self.styles.extend(other.styles);
        self
    }

    /// Template split at each `%c`, paired with the style it selects.
    /// The leading run has no style.
    pub fn segments(&self) -> impl Iterator<Item = (Option<Style>, &str)> + '_ {
        let mut parts = self.template.split("%c");
        let head = parts.next().unwrap_or_default();
        iter::once((None, head)).chain(
            parts
                .enumerate()
                .map(|(i, part)| (self.styles.get(i).copied(), part)),
        )
    }

    /// The template with directives removed.
    pub fn plain_text(&self) -> String {
        self.segments().map(|(_, text)| text).collect()
    }

    /// CSS strings in directive order, as a console sink expects them.
    pub fn css(&self) -> Vec<String> {
        self.styles.iter().map(|s| s.to_css()).collect()
    }
}

/// Summary strip: one colored cell per priority, in the given order.
pub fn visualize_priorities(priorities: &[Priority]) -> StyledMessage {
    priorities
        .iter()
        .fold(StyledMessage::default(), |msg, &p| msg.with_styled(Style::Block(p), " "))
}

/// Per-element bar of `priority + 1` glyphs.
pub fn visualize_priority(priority: Priority) -> StyledMessage {
    let bar: String = iter::repeat(BAR_GLYPH)
        .take(priority.display_rank() as usize)
        .collect();
    StyledMessage::default().with_styled(Style::Bar(priority), &bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(v: u8) -> Priority {
        Priority::new(v).unwrap()
    }

    #[test]
    fn summary_has_one_cell_per_entry() {
        let viz = visualize_priorities(&[p(10), p(4), p(0)]);
        assert_eq!(viz.template, "%c %c %c ");
        assert_eq!(
            viz.css(),
            [
                "background-color: #9e0142; padding: 5px; margin: -1px;",
                "background-color: #abdda4; padding: 5px; margin: -1px;",
                "background-color: #cccccc; padding: 5px; margin: -1px;",
            ]
        );
    }

    #[test]
    fn empty_summary() {
        let viz = visualize_priorities(&[]);
        assert!(viz.template.is_empty());
        assert!(viz.styles.is_empty());
    }

    #[test]
    fn bar_length_is_priority_plus_one() {
        let viz = visualize_priority(p(3));
        assert_eq!(viz.template, "%c████");
        assert_eq!(viz.css(), ["color: #66c2a5"]);

        assert_eq!(visualize_priority(Priority::MIN).plain_text(), "█");
        assert_eq!(visualize_priority(Priority::MAX).plain_text().chars().count(), 11);
    }

    #[test]
    fn segments_pair_text_with_styles() {
        let msg = StyledMessage::new("Actual ")
            .with_styled(Style::Monospace, "<head>")
            .with_styled(Style::Inherit, " order");
        let segments: Vec<_> = msg.segments().collect();
        assert_eq!(
            segments,
            [
                (None, "Actual "),
                (Some(Style::Monospace), "<head>"),
                (Some(Style::Inherit), " order"),
            ]
        );
        assert_eq!(msg.plain_text(), "Actual <head> order");
    }
}
