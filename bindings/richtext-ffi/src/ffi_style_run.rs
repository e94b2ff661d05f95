// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::{to_u32, Format};

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontTraits {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl From<richtext::FontTraits> for FontTraits {
    fn from(inner: richtext::FontTraits) -> Self {
        match inner {
            richtext::FontTraits::Regular => Self::Regular,
            richtext::FontTraits::Bold => Self::Bold,
            richtext::FontTraits::Italic => Self::Italic,
            richtext::FontTraits::BoldItalic => Self::BoldItalic,
        }
    }
}

/// One style run, ready for building an `NSAttributedString` or a Compose
/// `AnnotatedString`.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub start_utf16: u32,
    pub end_utf16: u32,
    pub formats: Vec<Format>,
    pub font_traits: FontTraits,
    pub underline: bool,
}

impl From<&richtext::StyleRun> for StyleRun {
    fn from(run: &richtext::StyleRun) -> Self {
        Self {
            start_utf16: to_u32(run.range.start),
            end_utf16: to_u32(run.range.end),
            formats: run.bits.iter().map(Format::from).collect(),
            font_traits: run.base_style().into(),
            underline: run.is_underlined(),
        }
    }
}
