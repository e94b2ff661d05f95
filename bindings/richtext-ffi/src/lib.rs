// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

uniffi::setup_scaffolding!();

mod ffi_document;
mod ffi_format;
mod ffi_span_error;
mod ffi_style_run;

pub use crate::ffi_document::{FfiSelection, FfiSpan, RichTextDocument};
pub use crate::ffi_format::{ActionState, Format, FormatState};
pub use crate::ffi_span_error::SpanError;
pub use crate::ffi_style_run::{FontTraits, StyleRun};

/// Offsets leave Rust as `u32`, the width the host platforms use.
pub(crate) fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[uniffi::export]
pub fn strip_to_plain_preview(markup: String) -> String {
    richtext::strip_to_plain_preview(&markup)
}
