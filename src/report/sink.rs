use std::fmt;
use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

use crate::render::{color_for, Rgba, Style, StyledMessage};

/// Receiver of structured, styled log output.
///
/// Modeled on a browser console: collapsible groups, `%c`-styled messages
/// with trailing values, and raw values for inspection.
pub trait ReportSink {
    fn group_collapsed(&mut self, label: &StyledMessage) -> io::Result<()>;

    /// A styled message followed by `values`, separated by spaces.
    fn log(&mut self, message: &StyledMessage, values: &[&dyn fmt::Display]) -> io::Result<()>;

    /// A label followed by a value shown in full.
    fn inspect(&mut self, label: &StyledMessage, value: &dyn fmt::Display) -> io::Result<()>;

    fn group_end(&mut self) -> io::Result<()>;
}

const INDENT: &str = "  ";

/// Writes reports to a terminal, using truecolor escapes when enabled.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
    depth: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color, depth: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, message: &StyledMessage) -> String {
        let mut buf = String::new();
        for (style, text) in message.segments() {
            match style {
                Some(s) => self.render_segment(&mut buf, s, text),
                None => buf.push_str(text),
            }
        }
        buf
    }

    fn render_segment(&self, buf: &mut String, s: Style, text: &str) {
        match s {
            Style::Block(p) if self.color => {
                let cell = format!(" {text} ");
                buf.push_str(&style(cell).on(rgb(color_for(p))).to_string());
            }
            // Without color the cell shows the priority as one hex digit.
            Style::Block(p) => buf.push_str(&format!("{:X}", p.value())),
            Style::Bar(p) if self.color => {
                buf.push_str(&style(text).with(rgb(color_for(p))).to_string());
            }
            Style::Bar(_) | Style::Monospace | Style::Inherit => buf.push_str(text),
        }
    }

    fn write_lines(&mut self, text: &str) -> io::Result<()> {
        let indent = INDENT.repeat(self.depth);
        for line in text.lines() {
            writeln!(self.out, "{indent}{line}")?;
        }
        Ok(())
    }
}

fn rgb(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

impl<W: Write> ReportSink for TerminalSink<W> {
    fn group_collapsed(&mut self, label: &StyledMessage) -> io::Result<()> {
        let text = format!("▸ {}", self.render(label));
        self.write_lines(&text)?;
        self.depth += 1;
        Ok(())
    }

    fn log(&mut self, message: &StyledMessage, values: &[&dyn fmt::Display]) -> io::Result<()> {
        let mut text = self.render(message);
        for value in values {
            text.push(' ');
            text.push_str(&value.to_string());
        }
        self.write_lines(&text)
    }

    fn inspect(&mut self, label: &StyledMessage, value: &dyn fmt::Display) -> io::Result<()> {
        let text = format!("{} {value:#}", self.render(label));
        self.write_lines(&text)
    }

    fn group_end(&mut self) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.out.flush()
    }
}

/// One captured sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    GroupStart(StyledMessage),
    Log {
        message: StyledMessage,
        values: Vec<String>,
    },
    Inspect {
        label: StyledMessage,
        value: String,
    },
    GroupEnd,
}

/// Keeps every call in memory, values rendered with `Display`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for RecordingSink {
    fn group_collapsed(&mut self, label: &StyledMessage) -> io::Result<()> {
        self.events.push(SinkEvent::GroupStart(label.clone()));
        Ok(())
    }

    fn log(&mut self, message: &StyledMessage, values: &[&dyn fmt::Display]) -> io::Result<()> {
        self.events.push(SinkEvent::Log {
            message: message.clone(),
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        Ok(())
    }

    fn inspect(&mut self, label: &StyledMessage, value: &dyn fmt::Display) -> io::Result<()> {
        self.events.push(SinkEvent::Inspect {
            label: label.clone(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn group_end(&mut self) -> io::Result<()> {
        self.events.push(SinkEvent::GroupEnd);
        Ok(())
    }
}
