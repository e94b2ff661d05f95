// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Keeping spans attached to their text across arbitrary text replacements.

use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::utf16::{common_prefix_len, utf16_len};
use crate::Span;

/// Move `spans` from `old_text` onto `new_text`.
///
/// The edit is located by the longest common prefix of the two texts only;
/// everything after that point is treated as shifted by the length
/// difference. Spans ending at or before the change point are untouched,
/// spans starting at or after it move as a whole, and a span straddling it
/// keeps its start and moves its end. Spans left empty are dropped.
///
/// No common suffix is computed, so a replacement that keeps the length the
/// same shifts nothing even if the changed region was elsewhere.
pub fn adjust(old_text: &str, new_text: &str, spans: &[Span]) -> Vec<Span> {
    let new_len = utf16_len(new_text);
    if old_text == new_text {
        return normalize(spans, new_len);
    }

    let change_start = common_prefix_len(old_text, new_text);
    let diff = new_len as isize - utf16_len(old_text) as isize;
    trace!(change_start, diff, "adjusting spans for text change");

    let shift = |offset: usize| offset.saturating_add_signed(diff).min(new_len);

    let mut adjusted = Vec::with_capacity(spans.len());
    for span in spans {
        let moved = if span.end <= change_start {
            *span
        } else if span.start >= change_start {
            Span::new(span.format, shift(span.start), shift(span.end))
        } else {
            Span::new(span.format, span.start, shift(span.end))
        };
        let moved = moved.clamped(new_len);
        if moved.is_empty() {
            debug!(?span, "dropping span emptied by text change");
            continue;
        }
        adjusted.push(moved);
    }
    normalize(&adjusted, new_len)
}
