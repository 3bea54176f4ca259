//! Read-only sequence protocol and slice arithmetic.
//!
//! [`Sequence`] gives a fixed backing slice the indexing conventions of a
//! dynamic list: negative indices count from the end, and [`Slice`] ranges
//! clamp their bounds instead of failing.

use alloc::vec::Vec;
use core::any::{self, Any};
use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroIsize;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::error::{ContainsError, IndexError};

const UNIT_STEP: NonZeroIsize = NonZeroIsize::new(1).expect("1 is non-zero");

/// A start/stop/step range specification.
///
/// Omitted bounds default to the natural end for the step's direction.
/// Negative bounds count from the end of the sequence. Out-of-range bounds
/// are clamped when the slice is resolved, so resolving never fails.
///
/// # Example
///
/// ```
/// use core::num::NonZeroIsize;
/// use deckseq::Slice;
///
/// let every_other_backwards = Slice::full().with_step(NonZeroIsize::new(-2).unwrap());
/// let picked: Vec<usize> = every_other_backwards.indices(5).collect();
/// assert_eq!(picked, [4, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First index to visit, if given.
    pub start: Option<isize>,
    /// Index to stop before, if given.
    pub stop: Option<isize>,
    /// Distance between visited indices.
    pub step: NonZeroIsize,
}

impl Slice {
    /// A slice covering the whole sequence with step 1.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: UNIT_STEP,
        }
    }

    /// A half-open `start..stop` slice with step 1.
    #[must_use]
    pub const fn new(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: UNIT_STEP,
        }
    }

    /// Sets the start bound.
    #[must_use]
    pub const fn with_start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the stop bound.
    #[must_use]
    pub const fn with_stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the step.
    #[must_use]
    pub const fn with_step(mut self, step: NonZeroIsize) -> Self {
        self.step = step;
        self
    }

    /// Resolves the slice against a sequence of length `len`.
    ///
    /// Every yielded index is below `len`.
    #[must_use]
    pub fn indices(&self, len: usize) -> SliceIndices {
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let step = self.step.get();
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp);

        SliceIndices {
            next: start,
            stop,
            step,
        }
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::full().with_start(range.start)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::full().with_stop(range.end)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(range: RangeInclusive<isize>) -> Self {
        let (start, end) = range.into_inner();
        let slice = Self::full().with_start(start);
        match end.checked_add(1) {
            Some(stop) => slice.with_stop(stop),
            None => slice,
        }
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// Iterator over the indices selected by a resolved [`Slice`].
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    stop: isize,
    step: isize,
}

impl SliceIndices {
    fn remaining(&self) -> usize {
        let span = if self.step > 0 {
            self.stop.saturating_sub(self.next)
        } else {
            self.next.saturating_sub(self.stop)
        };

        if span <= 0 {
            0
        } else {
            (span as usize - 1) / self.step.unsigned_abs() + 1
        }
    }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

impl FusedIterator for SliceIndices {}

/// How a type-erased value reads as an element of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    /// The value names this element.
    Element(T),
    /// The value has an element's shape but names no element that can exist.
    Unrepresentable,
    /// The value is not shaped like an element.
    Foreign,
}

/// Resolves a possibly negative index against `len`.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize).filter(|&i| i < len)
    }
}

/// A fixed, read-only, ordered collection.
///
/// Implementors only provide [`Sequence::as_slice`]; length, membership,
/// indexing, slicing, and iteration are all derived from that backing slice
/// and therefore agree with one another.
pub trait Sequence: fmt::Display {
    /// Element type.
    type Item: Clone + PartialEq + Any;

    /// Returns the backing elements in order.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns the number of elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns whether an equal element is present.
    fn contains(&self, item: &Self::Item) -> bool {
        self.as_slice().contains(item)
    }

    /// Reads a type-erased value as an element.
    ///
    /// The default accepts only [`Self::Item`](Sequence::Item) itself.
    /// Implementors may also accept other record shapes that can name an
    /// element.
    fn probe(value: &dyn Any) -> Probe<Self::Item> {
        value
            .downcast_ref::<Self::Item>()
            .map_or(Probe::Foreign, |item| Probe::Element(item.clone()))
    }

    /// Membership probe for values whose type is only known at runtime.
    ///
    /// A record that names no possible element is reported absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContainsError::WrongType`] if `value` is not shaped like an
    /// element (see [`Sequence::probe`]).
    fn try_contains<V: Any>(&self, value: &V) -> Result<bool, ContainsError> {
        match Self::probe(value) {
            Probe::Element(item) => Ok(self.contains(&item)),
            Probe::Unrepresentable => Ok(false),
            Probe::Foreign => Err(ContainsError::WrongType {
                expected: any::type_name::<Self::Item>(),
                found: any::type_name::<V>(),
            }),
        }
    }

    /// Returns the element at `index`. Negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if the index falls outside the
    /// sequence.
    fn get(&self, index: isize) -> Result<Self::Item, IndexError> {
        let items = self.as_slice();
        resolve_index(index, items.len())
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or(IndexError::OutOfRange {
                index,
                len: items.len(),
            })
    }

    /// Returns the elements selected by `range`, in selection order.
    fn slice(&self, range: impl Into<Slice>) -> Vec<Self::Item> {
        let items = self.as_slice();
        range
            .into()
            .indices(items.len())
            .map(|i| items[i].clone())
            .collect()
    }

    /// Returns a fresh iterator from the first element.
    fn iter(&self) -> core::slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }
}
