pub mod sink;

pub use sink::{RecordingSink, ReportSink, SinkEvent, TerminalSink};
