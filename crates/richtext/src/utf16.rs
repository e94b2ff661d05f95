// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Helpers for measuring Rust strings in UTF-16 code units, the offset unit
//! used everywhere in this crate.

use widestring::{Utf16Str, Utf16String};

use crate::{Selection, Span};

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Length of the longest common prefix of `a` and `b`, in UTF-16 code units.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.encode_utf16()
        .zip(b.encode_utf16())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Whether `text` contains characters outside the Basic Multilingual Plane,
/// i.e. whether some UTF-16 offsets fall inside a surrogate pair.
fn has_surrogate_pairs(text: &str) -> bool {
    text.chars().any(|c| c.len_utf16() == 2)
}

/// Round `offset` down to a character boundary of `units`.
fn floor_boundary(units: &Utf16Str, offset: usize) -> usize {
    let mut offset = offset.min(units.len());
    while !units.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Round `offset` up to a character boundary of `units`.
fn ceil_boundary(units: &Utf16Str, offset: usize) -> usize {
    let mut offset = offset.min(units.len());
    while !units.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

/// Widen each span so that neither bound splits a surrogate pair of
/// `text`. A span that grows may come to touch or overlap a neighbour, so
/// the result needs normalizing again.
pub(crate) fn widen_spans(text: &str, spans: &[Span]) -> Vec<Span> {
    if !has_surrogate_pairs(text) {
        return spans.to_vec();
    }
    let units = Utf16String::from_str(text);
    spans
        .iter()
        .map(|span| {
            Span::new(
                span.format,
                floor_boundary(&units, span.start),
                ceil_boundary(&units, span.end),
            )
        })
        .collect()
}

/// Snap `selection` to character boundaries of `text`. A range is widened
/// to whole characters; a cursor inside a surrogate pair moves before it.
pub(crate) fn widen_selection(text: &str, selection: Selection) -> Selection {
    if !has_surrogate_pairs(text) {
        return selection;
    }
    let units = Utf16String::from_str(text);
    let start = floor_boundary(&units, selection.start());
    if selection.is_cursor() {
        Selection::cursor(start)
    } else {
        Selection::range(start, ceil_boundary(&units, selection.end()))
    }
}

/// Whether `offset` lies between two characters of `text` (or at its
/// ends).
#[cfg(any(test, feature = "assert-invariants"))]
pub(crate) fn is_char_boundary(text: &str, offset: usize) -> bool {
    Utf16String::from_str(text).is_char_boundary(offset)
}

/// Byte index in `text` of the UTF-16 `offset`.
///
/// Offsets past the end map to `text.len()`. An offset that falls between
/// the two halves of a surrogate pair is rounded down to the start of that
/// character.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    let mut pos = 0;
    for (i, c) in text.char_indices() {
        let next = pos + c.len_utf16();
        if next > offset {
            return i;
        }
        pos = next;
    }
    text.len()
}
