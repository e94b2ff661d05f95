// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::ops::Range;

/// A cursor or selected range, as reported by a native text control.
///
/// `location` and `length` are UTF-16 code units. A zero `length` is a
/// cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub location: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// A collapsed selection at `at`.
    pub fn cursor(at: usize) -> Self {
        Self::new(at, 0)
    }

    /// The selection between two offsets, in either order.
    pub fn range(start: usize, end: usize) -> Self {
        let (start, end) = (start.min(end), start.max(end));
        Self::new(start, end - start)
    }

    pub fn start(&self) -> usize {
        self.location
    }

    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    pub fn is_cursor(&self) -> bool {
        self.length == 0
    }

    /// This selection with both ends moved into `[0, len]`.
    pub fn clamped(&self, len: usize) -> Self {
        let start = self.start().min(len);
        let end = self.end().min(len);
        Self::new(start, end - start)
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::range(range.start, range.end)
    }
}
