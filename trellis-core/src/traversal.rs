//! Early-terminating visits over graph enumerations.
//!
//! Every enumeration in the crate is an [`Iterator`], so pulling items already
//! supports stopping early. [`TraversalExt::visit`] offers the push-style
//! form: a step function returns [`ControlFlow::Break`] to halt, and the call
//! reports whether it ran to completion.

use std::{collections::HashSet, hash::Hash, iter::FusedIterator, ops::ControlFlow};

/// Outcome of a visit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Traversal {
    /// Every item was passed to the step function.
    Completed,
    /// The step function asked to stop.
    Terminated,
}

impl Traversal {
    /// Returns `true` when the step function halted the visit.
    #[must_use]
    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Visiting and de-duplication for any iterator.
///
/// # Examples
/// ```
/// use std::ops::ControlFlow;
///
/// use trellis_core::{Traversal, TraversalExt};
///
/// let mut seen = Vec::new();
/// let outcome = [1, 2, 3, 4].into_iter().visit(|v| {
///     seen.push(v);
///     if v == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert_eq!(outcome, Traversal::Terminated);
/// assert_eq!(seen, [1, 2]);
/// ```
pub trait TraversalExt: Iterator + Sized {
    /// Feeds items to `step` until it breaks or the iterator is exhausted.
    /// No item is delivered after a break.
    fn visit<F>(self, mut step: F) -> Traversal
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        for item in self {
            if step(item).is_break() {
                return Traversal::Terminated;
            }
        }
        Traversal::Completed
    }

    /// Skips items equal to one already yielded.
    ///
    /// Multigraph neighbourhoods repeat a vertex once per parallel edge; this
    /// turns them into sets.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        Distinct {
            inner: self,
            seen: HashSet::new(),
        }
    }
}

impl<I: Iterator> TraversalExt for I {}

/// Iterator adaptor returned by [`TraversalExt::distinct`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Distinct<I: Iterator> {
    inner: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Clone + Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.inner.find(|item| seen.insert(item.clone()))
    }
}

impl<I> FusedIterator for Distinct<I>
where
    I: FusedIterator,
    I::Item: Clone + Eq + Hash,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::never(usize::MAX, Traversal::Completed, 5)]
    #[case::first(0, Traversal::Terminated, 1)]
    #[case::middle(2, Traversal::Terminated, 3)]
    #[case::last(4, Traversal::Terminated, 5)]
    fn visit_stops_after_break(
        #[case] stop_at: usize,
        #[case] outcome: Traversal,
        #[case] delivered: usize,
    ) {
        let calls = Cell::new(0);
        let result = (0..5).visit(|item| {
            calls.set(calls.get() + 1);
            if item == stop_at {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(result, outcome);
        assert_eq!(calls.get(), delivered);
    }

    #[test]
    fn empty_visit_completes_without_calls() {
        let outcome = std::iter::empty::<u8>().visit(|_| unreachable!("no items to visit"));
        assert_eq!(outcome, Traversal::Completed);
        assert!(!outcome.is_terminated());
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let items: Vec<_> = [3, 1, 3, 2, 1, 3].into_iter().distinct().collect();
        assert_eq!(items, [3, 1, 2]);
    }
}
