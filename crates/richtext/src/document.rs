// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;

use crate::edit::adjust;
use crate::formatting::{action_states, active_formats, toggle_format};
use crate::normalize::normalize;
use crate::style_runs::{compile_runs, StyleRun};
use crate::utf16::{byte_index, utf16_len, widen_selection, widen_spans};
use crate::{markup, ActionState, Format, FormatSet, Selection, Span};

/// Plain text plus the formatting spans and selection of one editor.
///
/// A `Document` always holds normalized spans: every constructor and
/// mutation passes them through [`normalize`], and the selection is kept
/// inside the text. All offsets are UTF-16 code units, and no span or
/// selection bound falls inside a surrogate pair: such bounds are widened
/// to cover the whole character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    plain_text: String,
    /// `plain_text` length in UTF-16 code units.
    text_len: usize,
    spans: Vec<Span>,
    selection: Selection,
}

impl Document {
    /// An empty document with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from its parts, normalizing `spans` and clamping
    /// `selection` to `text`. Bounds inside a surrogate pair are widened to
    /// the whole character.
    pub fn from_parts(
        text: impl Into<String>,
        spans: impl IntoIterator<Item = Span>,
        selection: Selection,
    ) -> Self {
        let plain_text = text.into();
        let text_len = utf16_len(&plain_text);
        let spans: Vec<Span> = spans.into_iter().collect();
        let doc = Self {
            spans: normalize_spans(&plain_text, text_len, &spans),
            selection: widen_selection(
                &plain_text,
                selection.clamped(text_len),
            ),
            plain_text,
            text_len,
        };
        doc.check_invariants();
        doc
    }

    /// Parse stored markup. See [`markup::parse`].
    pub fn from_markup(markup: &str) -> Self {
        markup::parse(markup)
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Length of the plain text in UTF-16 code units.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The spans of one format, in order.
    pub fn spans_of(&self, format: Format) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.format == format)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace all spans. They are normalized against the current text.
    pub fn set_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        let spans: Vec<Span> = spans.into_iter().collect();
        self.spans = normalize_spans(&self.plain_text, self.text_len, &spans);
        self.check_invariants();
    }

    /// Move the selection, clamping it to the text and to whole characters.
    pub fn select(&mut self, selection: Selection) {
        let selection = selection.clamped(self.text_len);
        self.selection = widen_selection(&self.plain_text, selection);
        self.check_invariants();
    }

    /// Formats active at the current selection.
    pub fn active_formats(&self) -> FormatSet {
        active_formats(&self.spans, self.selection, self.text_len)
    }

    /// Toolbar button state for every format at the current selection.
    pub fn action_states(&self) -> BTreeMap<Format, ActionState> {
        action_states(&self.spans, self.selection, self.text_len)
    }

    /// Toggle `format` over the current selection. Does nothing for a
    /// collapsed cursor.
    pub fn toggle_format(&mut self, format: Format) {
        let spans =
            toggle_format(format, self.selection, &self.spans, self.text_len);
        self.spans = normalize_spans(&self.plain_text, self.text_len, &spans);
        self.check_invariants();
    }

    pub fn bold(&mut self) {
        self.toggle_format(Format::Bold);
    }

    pub fn italic(&mut self) {
        self.toggle_format(Format::Italic);
    }

    pub fn underline(&mut self) {
        self.toggle_format(Format::Underline);
    }

    /// Replace the whole plain text, as reported by a native text control
    /// after an edit, carrying the spans over with [`adjust`].
    ///
    /// The selection is only clamped; the text control reports the new one
    /// separately.
    pub fn set_plain_text(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        let spans = adjust(&self.plain_text, &new_text, &self.spans);
        self.text_len = utf16_len(&new_text);
        self.spans = normalize_spans(&new_text, self.text_len, &spans);
        let selection = self.selection.clamped(self.text_len);
        self.selection = widen_selection(&new_text, selection);
        self.plain_text = new_text;
        self.check_invariants();
    }

    /// Replace the selected text with `new_text` and put the cursor after
    /// it.
    pub fn replace_selection(&mut self, new_text: &str) {
        let start = byte_index(&self.plain_text, self.selection.start());
        let end = byte_index(&self.plain_text, self.selection.end());
        let cursor = utf16_len(&self.plain_text[..start]) + utf16_len(new_text);

        let mut text = String::with_capacity(
            self.plain_text.len() - (end - start) + new_text.len(),
        );
        text.push_str(&self.plain_text[..start]);
        text.push_str(new_text);
        text.push_str(&self.plain_text[end..]);

        self.set_plain_text(text);
        self.select(Selection::cursor(cursor));
    }

    /// Serialize to the stored markup form. See [`markup::serialize`].
    pub fn to_markup(&self) -> String {
        markup::serialize(self)
    }

    /// Style runs for a native renderer. See
    /// [`compile_runs`](crate::compile_runs).
    pub fn style_runs(&self) -> Vec<StyleRun> {
        compile_runs(self)
    }

    /// Human-readable dump of the document, for debugging and test
    /// failure messages.
    pub fn to_tree(&self) -> String {
        let mut tree = format!(
            "text: {:?} (len {}) sel: {}..{}\n",
            self.plain_text,
            self.text_len,
            self.selection.start(),
            self.selection.end()
        );
        for span in &self.spans {
            tree.push_str(&format!(
                "├>{} {}..{}\n",
                span.format, span.start, span.end
            ));
        }
        tree
    }

    fn check_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.assert_invariants();
    }

    /// Panic if any of the document invariants is broken.
    #[cfg(any(test, feature = "assert-invariants"))]
    pub fn assert_invariants(&self) {
        use crate::utf16::is_char_boundary;

        assert_eq!(
            self.text_len,
            utf16_len(&self.plain_text),
            "cached text length is stale:\n{}",
            self.to_tree()
        );
        assert!(
            self.selection.end() <= self.text_len,
            "selection outside the text:\n{}",
            self.to_tree()
        );
        for span in &self.spans {
            assert!(
                span.start < span.end && span.end <= self.text_len,
                "span {span:?} is empty or out of range:\n{}",
                self.to_tree()
            );
        }
        let on_boundary = |offset| is_char_boundary(&self.plain_text, offset);
        assert!(
            on_boundary(self.selection.start())
                && on_boundary(self.selection.end()),
            "selection splits a surrogate pair:\n{}",
            self.to_tree()
        );
        for span in &self.spans {
            assert!(
                on_boundary(span.start) && on_boundary(span.end),
                "span {span:?} splits a surrogate pair:\n{}",
                self.to_tree()
            );
        }
        for pair in self.spans.windows(2) {
            assert!(
                pair[0] < pair[1],
                "spans out of order:\n{}",
                self.to_tree()
            );
        }
        for format in <Format as strum::IntoEnumIterator>::iter() {
            let spans: Vec<&Span> = self.spans_of(format).collect();
            for pair in spans.windows(2) {
                assert!(
                    pair[0].end < pair[1].start,
                    "{format} spans overlap or touch:\n{}",
                    self.to_tree()
                );
            }
        }
    }
}

/// Normalize `spans` against `text`, widening any bound that splits a
/// surrogate pair.
fn normalize_spans(text: &str, text_len: usize, spans: &[Span]) -> Vec<Span> {
    let spans = normalize(spans, text_len);
    normalize(&widen_spans(text, &spans), text_len)
}
