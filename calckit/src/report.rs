//! Fire-and-forget reporting of calculator usage.
//!
//! A sink is told what was computed and whether it succeeded. It returns nothing and cannot fail, so it can never
//! change the outcome of a computation.

use crate::ErrorKind;
use serde::Serialize;

/// How a calculation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A result was produced.
    Success,
    /// The calculation was refused or failed.
    Failed(ErrorKind),
}

/// One reported calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcEvent {
    /// Which calculator ran, e.g. `"loan"` or `"convert"`.
    pub calculator: String,
    /// How it ended.
    pub outcome: Outcome,
}

impl CalcEvent {
    /// Builds an event.
    pub fn new(calculator: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            calculator: calculator.into(),
            outcome,
        }
    }
}

/// Receiver of calculator events.
pub trait EventSink {
    /// Records an event. Must not block or panic.
    fn record(&self, event: &CalcEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &CalcEvent) {}
}

/// Writes every event to the `log` facade at `info` level, failures at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &CalcEvent) {
        match event.outcome {
            Outcome::Success => log::info!(target: "calckit::report", "{}: ok", event.calculator),
            Outcome::Failed(kind) => {
                log::warn!(target: "calckit::report", "{}: {kind} error", event.calculator)
            }
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: &CalcEvent) {
        (**self).record(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &CalcEvent) {
        (**self).record(event)
    }
}

/// Reports the outcome of `result` to `sink` and hands `result` back unchanged.
///
/// ```rust
/// use calckit::report::{observe, NullSink};
/// use calckit::numtheory::gcd_of;
///
/// let g = observe(&NullSink, "gcd", gcd_of(&[12, 18])).unwrap();
/// assert_eq!(g, 6);
/// ```
pub fn observe<T, E>(sink: &dyn EventSink, calculator: &str, result: Result<T, E>) -> Result<T, E>
where
    for<'a> &'a E: Into<ErrorKind>,
{
    let outcome = match &result {
        Ok(_) => Outcome::Success,
        Err(e) => Outcome::Failed(e.into()),
    };
    sink.record(&CalcEvent::new(calculator, outcome));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalcError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<CalcEvent>>);

    impl EventSink for Recorder {
        fn record(&self, event: &CalcEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn observe_passes_results_through() {
        let sink = Recorder::default();
        let ok: Result<u32, CalcError> = Ok(7);
        assert_eq!(observe(&sink, "demo", ok).unwrap(), 7);

        let err: Result<u32, CalcError> = Err(CalcError::overflow("too big"));
        assert_eq!(observe(&sink, "demo", err.clone()), err);

        let events = sink.0.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].outcome, Outcome::Success);
        assert_eq!(events[1].outcome, Outcome::Failed(ErrorKind::Overflow));
    }

    #[test]
    fn expression_errors_are_classified() {
        let sink = Recorder::default();
        let r = observe(&sink, "expr", crate::expr::evaluate("1/0", Default::default()));
        assert!(r.is_err());
        assert_eq!(sink.0.borrow()[0].outcome, Outcome::Failed(ErrorKind::Domain));
    }

    #[test]
    fn null_and_log_sinks_accept_events() {
        let event = CalcEvent::new("convert", Outcome::Success);
        NullSink.record(&event);
        LogSink.record(&event);
        let boxed: Box<dyn EventSink> = Box::new(NullSink);
        boxed.record(&event);
    }
}
