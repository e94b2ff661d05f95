// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Flattening of a document's spans into contiguous style runs.
//!
//! A native renderer (e.g. an `NSAttributedString` builder on iOS) consumes
//! the runs directly: one font trait combination plus an optional underline
//! per run. All ranges are UTF-16 code units.

use std::ops::Range;

use strum::IntoEnumIterator;

use crate::format::FORMAT_COUNT;
use crate::{Document, Format, FormatSet};

/// The font variant a run is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontTraits {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// A maximal range of text sharing one set of formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub bits: FormatSet,
}

impl StyleRun {
    pub fn base_style(&self) -> FontTraits {
        match (
            self.bits.contains(Format::Bold),
            self.bits.contains(Format::Italic),
        ) {
            (false, false) => FontTraits::Regular,
            (true, false) => FontTraits::Bold,
            (false, true) => FontTraits::Italic,
            (true, true) => FontTraits::BoldItalic,
        }
    }

    pub fn is_underlined(&self) -> bool {
        self.bits.contains(Format::Underline)
    }
}

/// Compile `document` into style runs covering its whole text.
///
/// Runs are contiguous, in order, and no two neighbours share the same
/// bits. Text without spans is a single unstyled run; empty text has no
/// runs.
pub fn compile_runs(document: &Document) -> Vec<StyleRun> {
    let len = document.text_len();
    if len == 0 {
        return Vec::new();
    }

    // (position, format, +1 for a span start, -1 for a span end)
    let mut events: Vec<(usize, Format, i32)> = document
        .spans()
        .iter()
        .flat_map(|s| [(s.start, s.format, 1), (s.end, s.format, -1)])
        .filter(|&(pos, _, _)| pos < len)
        .collect();
    events.sort_by_key(|&(pos, _, _)| pos);

    let mut depth = [0i32; FORMAT_COUNT];
    let mut runs = Vec::new();
    let mut bits = FormatSet::new();
    let mut run_start = 0;
    let mut events = events.into_iter().peekable();
    while let Some(&(pos, _, _)) = events.peek() {
        while let Some((_, format, delta)) =
            events.next_if(|&(p, _, _)| p == pos)
        {
            depth[format.index()] += delta;
        }
        let next_bits: FormatSet = depth
            .iter()
            .zip(Format::iter())
            .filter(|(d, _)| **d > 0)
            .map(|(_, f)| f)
            .collect();
        if next_bits != bits {
            if pos > run_start {
                runs.push(StyleRun {
                    range: run_start..pos,
                    bits,
                });
            }
            run_start = pos;
            bits = next_bits;
        }
    }
    runs.push(StyleRun {
        range: run_start..len,
        bits,
    });
    runs
}
