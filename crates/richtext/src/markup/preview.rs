// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]+>").unwrap());

/// A plain, single-purpose preview of stored markup for list rows and
/// notifications.
///
/// Removes anything shaped like a tag (not only the format tags), turns
/// `&nbsp;` into a space and trims surrounding whitespace. This is lossy and
/// does not go through the span model.
pub fn strip_to_plain_preview(markup: &str) -> String {
    TAG.replace_all(markup, "")
        .replace("&nbsp;", " ")
        .trim()
        .to_owned()
}
