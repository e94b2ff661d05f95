// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use tracing::{debug, trace};

use crate::format::FORMAT_COUNT;
use crate::{Document, Format, Selection, Span};

/// A recognised format tag at the start of some input.
#[derive(Debug, PartialEq, Eq)]
struct Tag {
    format: Format,
    closing: bool,
    /// Length of the tag in bytes.
    len: usize,
}

/// Match `<x>` or `</x>` at the start of `input`, where `x` is a format tag
/// name in any case.
fn match_tag(input: &str) -> Option<Tag> {
    let rest = input.strip_prefix('<')?;
    let (closing, rest) = match rest.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let name = rest.get(..1)?;
    if !rest[1..].starts_with('>') {
        return None;
    }
    let format = Format::from_tag(name)?;
    Some(Tag {
        format,
        closing,
        len: if closing { 4 } else { 3 },
    })
}

/// Parse tagged markup into a [`Document`].
///
/// `<b>`, `<i>` and `<u>` (and their closing forms, in any case) delimit
/// formatted text. Every other character, including unknown tags and stray
/// angle brackets, is kept as plain text. A closing tag closes the most
/// recent open tag of its format; closing tags with nothing open and open
/// tags never closed produce no span. Parsing never fails.
///
/// The returned document has its cursor at the end of the text.
pub fn parse(markup: &str) -> Document {
    let mut text = String::with_capacity(markup.len());
    let mut text_len = 0;
    let mut open: [Vec<usize>; FORMAT_COUNT] = Default::default();
    let mut spans = Vec::new();

    let mut chars = markup.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '<' {
            if let Some(tag) = match_tag(&markup[i..]) {
                // Tags are ASCII, so skipping bytes is skipping chars
                for _ in 1..tag.len {
                    chars.next();
                }
                let stack = &mut open[tag.format.index()];
                if !tag.closing {
                    stack.push(text_len);
                } else if let Some(start) = stack.pop() {
                    if start < text_len {
                        spans.push(Span::new(tag.format, start, text_len));
                    }
                } else {
                    trace!(
                        format = %tag.format,
                        at = text_len,
                        "unmatched closing tag"
                    );
                }
                continue;
            }
        }
        text.push(c);
        text_len += c.len_utf16();
    }

    let unclosed: usize = open.iter().map(Vec::len).sum();
    if unclosed > 0 {
        debug!(unclosed, "discarding unclosed format tags");
    }

    Document::from_parts(text, spans, Selection::cursor(text_len))
}
