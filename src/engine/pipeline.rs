use std::io;

use crate::dom::DocumentModel;
use crate::engine::order::{derive_recommended, displaced};
use crate::engine::scanner::{scan, PriorityAssignment};
use crate::priority::{Classifier, Priority};
use crate::render::{visualize_priorities, visualize_priority, Style, StyledMessage};
use crate::report::ReportSink;

pub const LOGGING_PREFIX: &str = "head-order: ";

/// Both orderings of one head, as produced by [`analyze`].
#[derive(Debug, Clone)]
pub struct HeadReport<E> {
    pub actual: Vec<PriorityAssignment<E>>,
    pub recommended: Vec<PriorityAssignment<E>>,
}

impl<E> HeadReport<E> {
    /// Elements that would move under the recommended order.
    pub fn displaced(&self) -> usize {
        displaced(&self.recommended)
    }

    pub fn is_optimal(&self) -> bool {
        self.displaced() == 0
    }
}

/// Scan → classify → sort, without reporting anything.
pub fn analyze<M: DocumentModel>(model: &M, classifier: &Classifier<'_>) -> HeadReport<M::Element> {
    let actual = scan(model, classifier);
    let recommended = derive_recommended(&actual);
    HeadReport { actual, recommended }
}

/// Run the analysis and write both groups to `sink`:
/// "Actual <head> order" followed by "Priority <head> order".
///
/// Each group header carries the summary strip, each element gets its own
/// bar line, and the group closes with the head (live, or rebuilt from
/// clones in recommended order) for inspection.
pub fn log_priorities<M, S>(
    model: &M,
    classifier: &Classifier<'_>,
    sink: &mut S,
) -> io::Result<HeadReport<M::Element>>
where
    M: DocumentModel,
    S: ReportSink + ?Sized,
{
    let report = analyze(model, classifier);
    log::info!(
        "{} head elements, {} out of place",
        report.actual.len(),
        report.displaced()
    );

    sink.group_collapsed(&group_label("Actual", &report.actual))?;
    log_assignments(sink, &report.actual)?;
    sink.inspect(&head_label("Actual", "element"), model.head())?;
    sink.group_end()?;

    sink.group_collapsed(&group_label("Priority", &report.recommended))?;
    log_assignments(sink, &report.recommended)?;
    let prioritized = model.clone_into_container(report.recommended.iter().map(|a| &a.element));
    sink.inspect(&head_label("Prioritized", "element"), &prioritized)?;
    sink.group_end()?;

    Ok(report)
}

fn head_label(prefix: &str, suffix: &str) -> StyledMessage {
    StyledMessage::new(format!("{prefix} "))
        .with_styled(Style::Monospace, "<head>")
        .with_styled(Style::Inherit, &format!(" {suffix}"))
}

fn group_label<E>(kind: &str, assignments: &[PriorityAssignment<E>]) -> StyledMessage {
    let priorities: Vec<Priority> = assignments.iter().map(|a| a.priority).collect();
    StyledMessage::new(LOGGING_PREFIX)
        .with_message(head_label(kind, "order\n"))
        .with_message(visualize_priorities(&priorities))
}

fn log_assignments<E, S>(sink: &mut S, assignments: &[PriorityAssignment<E>]) -> io::Result<()>
where
    E: std::fmt::Display,
    S: ReportSink + ?Sized,
{
    for assignment in assignments {
        let rank = assignment.priority.display_rank();
        sink.log(&visualize_priority(assignment.priority), &[&rank, &assignment.element])?;
    }
    Ok(())
}
