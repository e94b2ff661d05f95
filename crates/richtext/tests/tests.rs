// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use indoc::indoc;
use richtext::Format::{Bold, Italic, Underline};
use richtext::{
    adjust, normalize, parse, serialize, strip_to_plain_preview,
    toggle_format, utf16_len, ActionState, Document, FontTraits, Format,
    Selection, Span,
};
use speculoos::prelude::*;

fn span(format: Format, start: usize, end: usize) -> Span {
    Span::new(format, start, end)
}

/// Deterministic pseudo-random source so generated cases are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }

    fn format(&mut self) -> Format {
        [Bold, Italic, Underline][self.next(3)]
    }

    fn spans(&mut self, count: usize, text_len: usize) -> Vec<Span> {
        (0..count)
            .map(|_| {
                let format = self.format();
                // Deliberately allow empty, inverted and overhanging spans
                span(format, self.next(text_len + 3), self.next(text_len + 3))
            })
            .collect()
    }
}

const TEXTS: &[&str] = &[
    "",
    "a",
    "hello world",
    "He said hello to her",
    "😀 emoji 😀 and accents éàü",
    "line one\nline two\n",
];

#[test]
fn can_build_edit_and_store_a_document() {
    let mut doc = Document::from_markup("He said <b>hello</b> to <i>her</i>");
    doc.select(Selection::range(17, 20));
    doc.underline();
    doc.select(Selection::cursor(8));
    doc.replace_selection("\"");
    doc.select(Selection::cursor(14));
    doc.replace_selection("\"");

    assert_eq!(doc.plain_text(), "He said \"hello\" to her");
    assert_eq!(
        doc.to_markup(),
        "He said \"<b>hello</b>\" to <i><u>her</i></u>"
    );
}

#[test]
fn parse_example() {
    let doc = parse("He said <b>hello</b> to <i>her</i>");
    assert_eq!(doc.plain_text(), "He said hello to her");
    assert_eq!(doc.spans(), &[span(Bold, 8, 13), span(Italic, 17, 20)]);
}

#[test]
fn serialize_closes_before_opening() {
    let doc = Document::from_parts(
        "ab",
        [span(Bold, 0, 1), span(Italic, 1, 2)],
        Selection::default(),
    );
    assert_eq!(serialize(&doc), "<b>a</b><i>b</i>");
}

#[test]
fn adjacent_spans_merge() {
    let spans = [span(Bold, 0, 5), span(Bold, 5, 10)];
    assert_eq!(normalize(&spans, 10), vec![span(Bold, 0, 10)]);
}

#[test]
fn toggle_add_and_remove() {
    let added = toggle_format(Bold, Selection::range(0, 3), &[], 3);
    assert_eq!(added, vec![span(Bold, 0, 3)]);

    let removed = toggle_format(Bold, Selection::range(1, 2), &added, 3);
    assert_eq!(removed, vec![span(Bold, 0, 1), span(Bold, 2, 3)]);
}

#[test]
fn edit_after_a_span_leaves_it_alone() {
    let spans = adjust("hello world", "helloX world", &[span(Bold, 0, 5)]);
    assert_eq!(spans, vec![span(Bold, 0, 5)]);
}

#[test]
fn active_formats_at_cursor() {
    let spans = [span(Bold, 2, 5)];
    let at_3 = richtext::active_formats(&spans, Selection::cursor(3), 10);
    let at_5 = richtext::active_formats(&spans, Selection::cursor(5), 10);
    assert_eq!(at_3.iter().collect::<Vec<_>>(), vec![Bold]);
    assert_that!(at_5.is_empty()).is_true();
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = Lcg(7);
    for text in TEXTS {
        let len = utf16_len(text);
        for count in 0..12 {
            let spans = rng.spans(count, len);
            let once = normalize(&spans, len);
            assert_eq!(normalize(&once, len), once, "input: {spans:?}");
        }
    }
}

#[test]
fn canonical_documents_round_trip_through_markup() {
    let mut rng = Lcg(42);
    for text in TEXTS {
        let len = utf16_len(text);
        for count in 0..12 {
            // Bounds may fall inside an emoji; the document widens them
            let doc = Document::from_parts(
                *text,
                rng.spans(count, len),
                Selection::default(),
            );
            let markup = serialize(&doc);
            let back = parse(&markup);
            assert_eq!(back.plain_text(), doc.plain_text(), "{markup}");
            assert_eq!(
                normalize(back.spans(), len),
                doc.spans(),
                "{markup}\n{}",
                doc.to_tree()
            );
            // Serializing the parsed document gives the same bytes again
            assert_eq!(serialize(&back), markup);
        }
    }
}

#[test]
fn formatting_half_an_emoji_survives_a_reload() {
    let mut doc = Document::from_markup("😀x");
    doc.select(Selection::range(1, 2));
    doc.bold();
    let stored = doc.to_markup();
    assert_eq!(stored, "<b>😀</b>x");
    assert_eq!(Document::from_markup(&stored).spans(), &[span(Bold, 0, 2)]);

    let doc = Document::from_parts(
        "😀x",
        [span(Italic, 1, 3)],
        Selection::default(),
    );
    assert_eq!(doc.to_markup(), "<i>😀x</i>");
}

#[test]
fn non_canonical_markup_is_rewritten_canonically() {
    let stored = indoc! {"
        <B>Shopping</B>
        <i>milk</i><i> and </i><i>eggs</i>
        <u><b>urgent</u></b>
    "};
    let doc = parse(stored);
    assert_eq!(doc.plain_text(), "Shopping\nmilk and eggs\nurgent\n");
    assert_eq!(
        doc.to_markup(),
        indoc! {"
            <b>Shopping</b>
            <i>milk and eggs</i>
            <b><u>urgent</b></u>
        "}
    );
}

#[test]
fn toolbar_reflects_the_selection() {
    let mut doc = Document::from_markup("plain <b>bold</b> <u>under</u>");
    doc.select(Selection::range(6, 10));
    let states = doc.action_states();
    assert_eq!(states[&Bold], ActionState::Reversed);
    assert_eq!(states[&Underline], ActionState::Enabled);

    doc.bold();
    assert_eq!(doc.action_states()[&Bold], ActionState::Enabled);
    assert_eq!(doc.to_markup(), "plain bold <u>under</u>");
}

#[test]
fn typing_at_the_end_of_a_bold_word_is_not_bold() {
    let mut doc = Document::from_markup("<b>bold</b>");
    doc.select(Selection::cursor(4));
    doc.replace_selection("er");
    assert_eq!(doc.to_markup(), "<b>bold</b>er");
}

#[test]
fn typing_inside_a_bold_word_extends_it() {
    let mut doc = Document::from_markup("<b>bold</b>");
    doc.select(Selection::cursor(2));
    doc.replace_selection("XX");
    assert_eq!(doc.to_markup(), "<b>boXXld</b>");
}

#[test]
fn render_runs_for_mixed_formatting() {
    let doc = Document::from_markup("a<b>b<i>c</i></b><u>d</u>");
    let runs = doc.style_runs();
    let summary: Vec<_> = runs
        .iter()
        .map(|r| (r.range.clone(), r.base_style(), r.is_underlined()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0..1, FontTraits::Regular, false),
            (1..2, FontTraits::Bold, false),
            (2..3, FontTraits::BoldItalic, false),
            (3..4, FontTraits::Regular, true),
        ]
    );
}

#[test]
fn preview_strips_markup() {
    let preview = strip_to_plain_preview("  <b>Dune</b>&nbsp;<i>(2021)</i> ");
    assert_eq!(preview, "Dune (2021)");
}
