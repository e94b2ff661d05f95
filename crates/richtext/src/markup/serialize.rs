// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::normalize::normalize;
use crate::Document;

/// A tag to splice into the text at a UTF-16 position.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Insertion {
    position: usize,
    /// Closing tags (0) sort before opening tags (1) at the same position.
    priority: u8,
    tag: String,
}

/// Serialize `document` to tagged markup.
///
/// Each span becomes an opening tag at its start and a closing tag at its
/// end. Where several tags land on one position, closing tags come first
/// and ties are broken by tag text, so a given set of spans always produces
/// the same string. Text is copied verbatim; the markup has no escaping.
///
/// A [`Document`] never holds a bound inside a surrogate pair, so every tag
/// lands between two characters and parsing the result gives back the same
/// spans.
pub fn serialize(document: &Document) -> String {
    let text = document.plain_text();
    let spans = normalize(document.spans(), document.text_len());

    let mut insertions: Vec<Insertion> = spans
        .iter()
        .flat_map(|span| {
            let tag = span.format.tag();
            [
                Insertion {
                    position: span.start,
                    priority: 1,
                    tag: format!("<{tag}>"),
                },
                Insertion {
                    position: span.end,
                    priority: 0,
                    tag: format!("</{tag}>"),
                },
            ]
        })
        .collect();
    insertions.sort();

    let tags_len: usize = insertions.iter().map(|i| i.tag.len()).sum();
    let mut markup = String::with_capacity(text.len() + tags_len);
    let mut pending = insertions.iter().peekable();
    let mut pos = 0;
    for c in text.chars() {
        while let Some(ins) = pending.next_if(|ins| ins.position <= pos) {
            markup.push_str(&ins.tag);
        }
        markup.push(c);
        pos += c.len_utf16();
    }
    for ins in pending {
        markup.push_str(&ins.tag);
    }
    markup
}
