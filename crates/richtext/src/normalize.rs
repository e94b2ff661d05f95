// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Canonicalisation of span lists.

use crate::format::FORMAT_COUNT;
use crate::Span;

/// Bring `spans` into canonical form for a text of `text_len` UTF-16 code
/// units.
///
/// Bounds are clamped into `[0, text_len]` and spans left empty are dropped.
/// Spans of the same format that overlap or touch are merged. The result is
/// sorted by start, then end, then format priority.
///
/// `normalize` is idempotent, and every span list stored in a
/// [`Document`](crate::Document) has been through it.
pub fn normalize(spans: &[Span], text_len: usize) -> Vec<Span> {
    let mut by_format: [Vec<Span>; FORMAT_COUNT] = Default::default();
    for span in spans {
        let clamped = span.clamped(text_len);
        if !clamped.is_empty() {
            by_format[clamped.format.index()].push(clamped);
        }
    }

    let mut out = Vec::with_capacity(spans.len());
    for mut partition in by_format {
        partition.sort_by_key(|s| (s.start, s.end));
        out.extend(merge_sorted(partition));
    }
    out.sort();
    out
}

/// Merge a list of same-format spans sorted by start, joining any that
/// overlap or touch.
pub(crate) fn merge_sorted(
    sorted: impl IntoIterator<Item = Span>,
) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::new();
    for span in sorted {
        match merged.last_mut() {
            Some(acc) if span.start <= acc.end => {
                acc.end = acc.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}
