// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::cmp::Ordering;

use thiserror::Error;

use crate::Format;

/// A half-open range `[start, end)` of UTF-16 code units carrying one
/// [`Format`].
///
/// A `Span` is a plain value. Nothing stops a caller from building an empty
/// or inverted span with [`Span::new`]; such spans are dropped when they pass
/// through [`normalize`](crate::normalize), which is the only way spans get
/// into a [`Document`](crate::Document).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub format: Format,
    pub start: usize,
    pub end: usize,
}

/// Returned by [`Span::try_new`] for bounds that can never form a valid span.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("span {format} at {at} is empty")]
    Empty { format: Format, at: usize },
    #[error("span {format} is inverted: start {start} is after end {end}")]
    Inverted {
        format: Format,
        start: usize,
        end: usize,
    },
}

impl Span {
    pub fn new(format: Format, start: usize, end: usize) -> Self {
        Self { format, start, end }
    }

    /// Build a span, rejecting empty and inverted bounds.
    pub fn try_new(
        format: Format,
        start: usize,
        end: usize,
    ) -> Result<Self, SpanError> {
        match start.cmp(&end) {
            Ordering::Less => Ok(Self::new(format, start, end)),
            Ordering::Equal => Err(SpanError::Empty { format, at: start }),
            Ordering::Greater => {
                Err(SpanError::Inverted { format, start, end })
            }
        }
    }

    /// Length in UTF-16 code units. Zero for empty or inverted spans.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` is inside `[start, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether this span shares at least one code unit with `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }

    /// Copy of this span with both bounds clamped into `[0, len]`.
    pub(crate) fn clamped(&self, len: usize) -> Self {
        Self::new(self.format, self.start.min(len), self.end.min(len))
    }
}

/// Canonical span order: by start, then end, then format priority.
impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end, self.format).cmp(&(
            other.start,
            other.end,
            other.format,
        ))
    }
}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
