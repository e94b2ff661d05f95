// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Model code for a small rich text editor: plain text plus bold, italic
//! and underline spans.
//!
//! A [`Document`] is read from and written to a tagged markup string
//! (`<b>`, `<i>`, `<u>`), edited through selection toggles and whole-text
//! replacements, and flattened into [`StyleRun`]s for a native renderer.
//! Every offset is a UTF-16 code unit, matching platform text controls.
//!
//! None of the operations fail. Out-of-range offsets are clamped and
//! malformed markup degrades to plain text.

mod document;
mod edit;
mod format;
mod formatting;
pub mod markup;
mod normalize;
mod selection;
mod span;
mod style_runs;
mod utf16;

pub use crate::document::Document;
pub use crate::edit::adjust;
pub use crate::format::{Format, FormatSet};
pub use crate::formatting::{
    action_states, active_formats, toggle_format, ActionState,
};
pub use crate::markup::{parse, serialize, strip_to_plain_preview};
pub use crate::normalize::normalize;
pub use crate::selection::Selection;
pub use crate::span::{Span, SpanError};
pub use crate::style_runs::{compile_runs, FontTraits, StyleRun};
pub use crate::utf16::utf16_len;
