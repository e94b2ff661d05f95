// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The closed set of inline formats and a compact bitset over them.

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// An inline format that can be applied to a range of text.
///
/// The declaration order is the format priority used to break ties when
/// sorting spans: Bold < Italic < Underline.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Bold,
    Italic,
    Underline,
}

impl Format {
    /// The markup tag name, without angle brackets.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
        }
    }

    /// Look up a format by tag name, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::iter().find(|f| f.tag().eq_ignore_ascii_case(tag))
    }

    /// Index of this format in per-format tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Number of variants in [`Format`].
pub(crate) const FORMAT_COUNT: usize = 3;

/// A set of [`Format`]s stored as a bitset.
///
/// Bit 0 is bold, bit 1 italic, bit 2 underline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatSet(u8);

impl FormatSet {
    const MASK: u8 = 0b111;

    pub fn new() -> Self {
        Self(0)
    }

    /// Build a set from raw bits. Bits outside the three known formats are
    /// ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(self, format: Format) -> bool {
        self.0 & format.bit() != 0
    }

    pub fn insert(&mut self, format: Format) {
        self.0 |= format.bit();
    }

    pub fn remove(&mut self, format: Format) {
        self.0 &= !format.bit();
    }

    /// Formats in this set, in priority order.
    pub fn iter(self) -> impl Iterator<Item = Format> {
        Format::iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Format> for FormatSet {
    fn from_iter<T: IntoIterator<Item = Format>>(iter: T) -> Self {
        let mut set = Self::new();
        for format in iter {
            set.insert(format);
        }
        set
    }
}

impl Extend<Format> for FormatSet {
    fn extend<T: IntoIterator<Item = Format>>(&mut self, iter: T) {
        for format in iter {
            self.insert(format);
        }
    }
}
