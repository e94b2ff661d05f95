// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline formatting queries and toggles over a selection.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use tracing::trace;

use crate::normalize::{merge_sorted, normalize};
use crate::{Format, FormatSet, Selection, Span};

/// How a toolbar should present the button for a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionState {
    /// The format is not active; pressing the button applies it.
    Enabled,
    /// The format is active; pressing the button removes it.
    Reversed,
}

/// The formats active at `selection`.
///
/// For a cursor at `p` a format is active if one of its spans contains `p`,
/// so a cursor sitting just after a bold word is not bold. For a range, a
/// format is active if any of its spans overlaps the range at all.
pub fn active_formats(
    spans: &[Span],
    selection: Selection,
    text_len: usize,
) -> FormatSet {
    let selection = selection.clamped(text_len);
    let (start, end) = (selection.start(), selection.end());
    spans
        .iter()
        .filter(|span| {
            if selection.is_cursor() {
                span.contains(start)
            } else {
                span.overlaps(start, end)
            }
        })
        .map(|span| span.format)
        .collect()
}

/// [`ActionState`] for every format at `selection`.
pub fn action_states(
    spans: &[Span],
    selection: Selection,
    text_len: usize,
) -> BTreeMap<Format, ActionState> {
    let active = active_formats(spans, selection, text_len);
    Format::iter()
        .map(|format| {
            let state = if active.contains(format) {
                ActionState::Reversed
            } else {
                ActionState::Enabled
            };
            (format, state)
        })
        .collect()
}

/// Toggle `format` over `selection` and return the new normalized spans.
///
/// If every code unit of the selection already carries `format`, it is
/// removed from the selection, splitting spans that stick out on either
/// side. Otherwise `format` is applied to the whole selection. A cursor
/// leaves the spans unchanged.
pub fn toggle_format(
    format: Format,
    selection: Selection,
    spans: &[Span],
    text_len: usize,
) -> Vec<Span> {
    let selection = selection.clamped(text_len);
    if selection.is_cursor() {
        return normalize(spans, text_len);
    }
    let (start, end) = (selection.start(), selection.end());

    if is_fully_covered(format, start, end, spans) {
        trace!(%format, start, end, "removing format from selection");
        let mut remaining = Vec::with_capacity(spans.len() + 1);
        for span in spans {
            if span.format != format || !span.overlaps(start, end) {
                remaining.push(*span);
                continue;
            }
            if span.start < start {
                remaining.push(Span::new(format, span.start, start));
            }
            if span.end > end {
                remaining.push(Span::new(format, end, span.end));
            }
        }
        normalize(&remaining, text_len)
    } else {
        trace!(%format, start, end, "applying format to selection");
        let mut added = spans.to_vec();
        added.push(Span::new(format, start, end));
        normalize(&added, text_len)
    }
}

/// Whether the spans of `format` cover every code unit of `[start, end)`.
fn is_fully_covered(
    format: Format,
    start: usize,
    end: usize,
    spans: &[Span],
) -> bool {
    let mut clipped: Vec<Span> = spans
        .iter()
        .filter(|s| s.format == format && s.overlaps(start, end))
        .map(|s| Span::new(format, s.start.max(start), s.end.min(end)))
        .collect();
    clipped.sort_by_key(|s| (s.start, s.end));

    match merge_sorted(clipped).as_slice() {
        [only] => only.start == start && only.end == end,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;
    use crate::Format::{Bold, Italic, Underline};

    fn span(format: Format, start: usize, end: usize) -> Span {
        Span::new(format, start, end)
    }

    // ===================================================================
    // Active formats
    // ===================================================================

    #[test]
    fn cursor_inside_a_span_is_formatted() {
        let spans = [span(Bold, 2, 5)];
        let active = active_formats(&spans, Selection::cursor(3), 10);
        assert_eq!(active, FormatSet::from_iter([Bold]));
    }

    #[test]
    fn cursor_at_span_start_is_formatted() {
        let spans = [span(Bold, 2, 5)];
        let active = active_formats(&spans, Selection::cursor(2), 10);
        assert!(active.contains(Bold));
    }

    #[test]
    fn cursor_at_span_end_is_not_formatted() {
        let spans = [span(Bold, 2, 5)];
        assert!(active_formats(&spans, Selection::cursor(5), 10).is_empty());
    }

    #[test]
    fn range_partially_overlapping_a_span_is_formatted() {
        let spans = [span(Italic, 2, 5), span(Underline, 8, 9)];
        let active = active_formats(&spans, Selection::range(4, 7), 10);
        assert_that!(active.contains(Italic)).is_true();
        assert_that!(active.contains(Underline)).is_false();
    }

    #[test]
    fn range_touching_a_span_is_not_formatted() {
        let spans = [span(Italic, 2, 5)];
        assert!(active_formats(&spans, Selection::range(5, 7), 10).is_empty());
    }

    #[test]
    fn selection_past_the_end_is_clamped_before_lookup() {
        let spans = [span(Bold, 0, 4)];
        // Clamps to a cursor at 4, which is the exclusive end
        assert!(active_formats(&spans, Selection::new(9, 3), 4).is_empty());
    }

    #[test]
    fn action_states_reverse_active_formats() {
        let spans = [span(Underline, 0, 3)];
        let states = action_states(&spans, Selection::range(0, 2), 3);
        assert_eq!(states[&Bold], ActionState::Enabled);
        assert_eq!(states[&Italic], ActionState::Enabled);
        assert_eq!(states[&Underline], ActionState::Reversed);
        assert_eq!(states.len(), 3);
    }

    // ===================================================================
    // Toggle
    // ===================================================================

    #[test]
    fn toggling_unformatted_text_adds_a_span() {
        let spans = toggle_format(Bold, Selection::range(0, 3), &[], 3);
        assert_eq!(spans, vec![span(Bold, 0, 3)]);
    }

    #[test]
    fn toggling_inside_a_span_splits_it() {
        let spans = toggle_format(
            Bold,
            Selection::range(1, 2),
            &[span(Bold, 0, 3)],
            3,
        );
        assert_eq!(spans, vec![span(Bold, 0, 1), span(Bold, 2, 3)]);
    }

    #[test]
    fn toggling_exactly_a_span_removes_it() {
        let spans = toggle_format(
            Italic,
            Selection::range(2, 4),
            &[span(Italic, 2, 4), span(Bold, 0, 6)],
            6,
        );
        assert_eq!(spans, vec![span(Bold, 0, 6)]);
    }

    #[test]
    fn toggling_a_cursor_changes_nothing() {
        let existing = [span(Bold, 0, 3)];
        let spans = toggle_format(Bold, Selection::cursor(1), &existing, 3);
        assert_eq!(spans, existing.to_vec());
    }

    #[test]
    fn toggling_partially_covered_text_extends_the_span() {
        let spans = toggle_format(
            Underline,
            Selection::range(2, 6),
            &[span(Underline, 0, 4)],
            8,
        );
        assert_eq!(spans, vec![span(Underline, 0, 6)]);
    }

    #[test]
    fn a_gap_in_coverage_means_not_fully_covered() {
        let existing = [span(Bold, 0, 2), span(Bold, 3, 5)];
        let spans = toggle_format(Bold, Selection::range(0, 5), &existing, 5);
        assert_eq!(spans, vec![span(Bold, 0, 5)]);
    }

    #[test]
    fn unnormalized_pieces_can_add_up_to_full_coverage() {
        // Two touching spans that have not been merged yet
        let existing = [span(Bold, 3, 6), span(Bold, 0, 3)];
        let spans = toggle_format(Bold, Selection::range(1, 5), &existing, 6);
        assert_eq!(spans, vec![span(Bold, 0, 1), span(Bold, 5, 6)]);
    }

    #[test]
    fn removing_across_several_spans_keeps_outer_remainders() {
        let existing = [span(Italic, 0, 3), span(Italic, 3, 8)];
        let spans =
            toggle_format(Italic, Selection::range(2, 6), &existing, 8);
        assert_eq!(spans, vec![span(Italic, 0, 2), span(Italic, 6, 8)]);
    }

    #[test]
    fn toggling_one_format_leaves_others_alone() {
        let existing = [span(Underline, 1, 4)];
        let spans = toggle_format(Bold, Selection::range(0, 2), &existing, 4);
        assert_eq!(spans, vec![span(Bold, 0, 2), span(Underline, 1, 4)]);
    }

    #[test]
    fn toggle_clamps_the_selection() {
        let spans = toggle_format(Bold, Selection::new(2, 100), &[], 4);
        assert_eq!(spans, vec![span(Bold, 2, 4)]);
    }

    #[test]
    fn toggle_on_a_selection_beyond_the_text_is_a_no_op() {
        let spans = toggle_format(Bold, Selection::new(10, 5), &[], 4);
        assert_that!(spans).is_empty();
    }

    #[test]
    fn toggling_twice_clears_the_selection_only() {
        let existing = vec![span(Bold, 0, 2), span(Italic, 1, 5)];
        let sel = Selection::range(1, 4);
        let once = toggle_format(Bold, sel, &existing, 6);
        let twice = toggle_format(Bold, sel, &once, 6);
        assert_eq!(twice, vec![span(Bold, 0, 1), span(Italic, 1, 5)]);
    }
}
