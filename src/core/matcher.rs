//! Pattern-matching dispatch over the current state.
//!
//! `match_state` maps the current index to a rendering/branching result the
//! way a `match` expression would, without the caller re-reading the index.
//! It is read-only: dispatch never transitions the machine.

use crate::core::machine::StateMachine;

/// One arm of a [`StateMachine::match_state`] dispatch.
///
/// An arm pairs an optional index with a producer. `Case::on(i, ..)` fires
/// when the machine sits at index `i`; `Case::fallback(..)` is the wildcard
/// arm used when nothing matched. Producers are `FnOnce` — at most one of
/// them ever runs per dispatch.
pub struct Case<'a, T> {
    index: Option<usize>,
    produce: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T> Case<'a, T> {
    /// Arm that fires when the current state equals `index`.
    pub fn on<F>(index: usize, produce: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            index: Some(index),
            produce: Box::new(produce),
        }
    }

    /// Wildcard arm, used when no exact arm matched.
    ///
    /// When several wildcards appear, the last one scanned wins.
    pub fn fallback<F>(produce: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            index: None,
            produce: Box::new(produce),
        }
    }
}

impl StateMachine {
    /// Dispatch on the current state over an ordered list of arms.
    ///
    /// Arms are scanned once, in order. The first exact-index arm matching
    /// the current state wins and its producer alone is invoked. Wildcard
    /// arms are remembered during the scan; if the scan finishes with no
    /// exact match, the last remembered wildcard's producer runs. With
    /// neither, the dispatch yields `None` — an explicit empty outcome, not
    /// an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstep::{Case, StateMachine};
    ///
    /// let mut machine = StateMachine::new(["Email", "Code", "Details", "Done"]).unwrap();
    /// machine.set_state(3.0).unwrap();
    ///
    /// let label = machine.match_state([
    ///     Case::on(3, || "done"),
    ///     Case::fallback(|| "pending"),
    /// ]);
    /// assert_eq!(label, Some("done"));
    ///
    /// machine.set_state(1.0).unwrap();
    /// let label = machine.match_state([
    ///     Case::on(3, || "done"),
    ///     Case::fallback(|| "pending"),
    /// ]);
    /// assert_eq!(label, Some("pending"));
    /// ```
    pub fn match_state<'a, T, I>(&self, cases: I) -> Option<T>
    where
        I: IntoIterator<Item = Case<'a, T>>,
    {
        let current = self.state();
        let mut fallback: Option<Box<dyn FnOnce() -> T + 'a>> = None;

        for case in cases {
            match case.index {
                Some(index) if index == current => return Some((case.produce)()),
                Some(_) => {}
                None => fallback = Some(case.produce),
            }
        }

        fallback.map(|produce| produce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn machine_at(index: f64) -> StateMachine {
        let mut machine = StateMachine::new(["Email", "Code", "Details", "Done"]).unwrap();
        machine.set_state(index).unwrap();
        machine
    }

    #[test]
    fn first_exact_match_wins() {
        let machine = machine_at(1.0);
        let result = machine.match_state([
            Case::on(0, || "email"),
            Case::on(1, || "code"),
            Case::on(1, || "shadowed"),
        ]);
        assert_eq!(result, Some("code"));
    }

    #[test]
    fn exact_match_wins_over_earlier_wildcard() {
        let machine = machine_at(2.0);
        let result = machine.match_state([
            Case::fallback(|| "anything"),
            Case::on(2, || "details"),
        ]);
        assert_eq!(result, Some("details"));
    }

    #[test]
    fn exact_match_wins_over_later_wildcard() {
        let machine = machine_at(2.0);
        let result = machine.match_state([
            Case::on(2, || "details"),
            Case::fallback(|| "anything"),
        ]);
        assert_eq!(result, Some("details"));
    }

    #[test]
    fn wildcard_catches_unmatched_states() {
        let machine = machine_at(3.0);
        let result = machine.match_state([
            Case::on(0, || "email"),
            Case::fallback(|| "pending"),
        ]);
        assert_eq!(result, Some("pending"));
    }

    #[test]
    fn last_wildcard_wins() {
        let machine = machine_at(3.0);
        let result = machine.match_state([
            Case::fallback(|| "first"),
            Case::fallback(|| "second"),
        ]);
        assert_eq!(result, Some("second"));
    }

    #[test]
    fn no_match_and_no_wildcard_yields_none() {
        let machine = machine_at(3.0);
        let result: Option<&str> =
            machine.match_state([Case::on(0, || "email"), Case::on(1, || "code")]);
        assert_eq!(result, None);
    }

    #[test]
    fn empty_case_list_yields_none() {
        let machine = machine_at(0.0);
        let result: Option<&str> = machine.match_state([]);
        assert_eq!(result, None);
    }

    #[test]
    fn exactly_one_producer_runs() {
        let machine = machine_at(1.0);
        let invocations = Cell::new(0);

        let result = machine.match_state([
            Case::on(0, || {
                invocations.set(invocations.get() + 1);
                "email"
            }),
            Case::fallback(|| {
                invocations.set(invocations.get() + 1);
                "pending"
            }),
            Case::on(1, || {
                invocations.set(invocations.get() + 1);
                "code"
            }),
        ]);

        assert_eq!(result, Some("code"));
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn dispatch_never_transitions() {
        let machine = machine_at(1.0);
        machine.match_state([Case::on(1, || ())]);
        assert_eq!(machine.state(), 1);
    }
}
