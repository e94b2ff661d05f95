// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
}

impl From<richtext::Format> for Format {
    fn from(inner: richtext::Format) -> Self {
        match inner {
            richtext::Format::Bold => Self::Bold,
            richtext::Format::Italic => Self::Italic,
            richtext::Format::Underline => Self::Underline,
        }
    }
}

impl From<Format> for richtext::Format {
    fn from(format: Format) -> Self {
        match format {
            Format::Bold => Self::Bold,
            Format::Italic => Self::Italic,
            Format::Underline => Self::Underline,
        }
    }
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionState {
    Enabled,
    Reversed,
}

impl From<richtext::ActionState> for ActionState {
    fn from(inner: richtext::ActionState) -> Self {
        match inner {
            richtext::ActionState::Enabled => Self::Enabled,
            richtext::ActionState::Reversed => Self::Reversed,
        }
    }
}

/// Toolbar state of one format button.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct FormatState {
    pub format: Format,
    pub state: ActionState,
}
