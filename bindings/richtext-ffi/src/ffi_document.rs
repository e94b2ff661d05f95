// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::sync::{Arc, Mutex};

use crate::ffi_span_error::SpanError;
use crate::{to_u32, Format, FormatState, StyleRun};

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct FfiSpan {
    pub format: Format,
    pub start_utf16: u32,
    pub end_utf16: u32,
}

impl From<&richtext::Span> for FfiSpan {
    fn from(span: &richtext::Span) -> Self {
        Self {
            format: span.format.into(),
            start_utf16: to_u32(span.start),
            end_utf16: to_u32(span.end),
        }
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct FfiSelection {
    pub location: u32,
    pub length: u32,
}

#[derive(uniffi::Object)]
pub struct RichTextDocument {
    inner: Mutex<richtext::Document>,
}

impl Default for RichTextDocument {
    fn default() -> Self {
        Self {
            inner: Mutex::new(richtext::Document::new()),
        }
    }
}

#[uniffi::export]
impl RichTextDocument {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[uniffi::constructor]
    pub fn from_markup(markup: String) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(richtext::Document::from_markup(&markup)),
        })
    }

    pub fn plain_text(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().plain_text().to_owned()
    }

    pub fn to_markup(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().to_markup()
    }

    pub fn spans(self: &Arc<Self>) -> Vec<FfiSpan> {
        self.inner
            .lock()
            .unwrap()
            .spans()
            .iter()
            .map(FfiSpan::from)
            .collect()
    }

    /// Replace all spans. Empty or inverted spans are rejected before
    /// anything changes.
    pub fn set_spans(
        self: &Arc<Self>,
        spans: Vec<FfiSpan>,
    ) -> Result<(), SpanError> {
        let spans = spans
            .into_iter()
            .map(|s| {
                richtext::Span::try_new(
                    s.format.into(),
                    s.start_utf16 as usize,
                    s.end_utf16 as usize,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.inner.lock().unwrap().set_spans(spans);
        Ok(())
    }

    pub fn select(self: &Arc<Self>, location_utf16: u32, length_utf16: u32) {
        let selection = richtext::Selection::new(
            location_utf16 as usize,
            length_utf16 as usize,
        );
        self.inner.lock().unwrap().select(selection);
    }

    pub fn selection(self: &Arc<Self>) -> FfiSelection {
        let selection = self.inner.lock().unwrap().selection();
        FfiSelection {
            location: to_u32(selection.location),
            length: to_u32(selection.length),
        }
    }

    pub fn toggle_format(self: &Arc<Self>, format: Format) {
        self.inner.lock().unwrap().toggle_format(format.into());
    }

    /// Report the text control's new content after an edit.
    pub fn set_plain_text(self: &Arc<Self>, text: String) {
        self.inner.lock().unwrap().set_plain_text(text);
    }

    pub fn replace_selection(self: &Arc<Self>, text: String) {
        self.inner.lock().unwrap().replace_selection(&text);
    }

    pub fn active_formats(self: &Arc<Self>) -> Vec<Format> {
        self.inner
            .lock()
            .unwrap()
            .active_formats()
            .iter()
            .map(Format::from)
            .collect()
    }

    pub fn action_states(self: &Arc<Self>) -> Vec<FormatState> {
        self.inner
            .lock()
            .unwrap()
            .action_states()
            .into_iter()
            .map(|(format, state)| FormatState {
                format: format.into(),
                state: state.into(),
            })
            .collect()
    }

    pub fn style_runs(self: &Arc<Self>) -> Vec<StyleRun> {
        self.inner
            .lock()
            .unwrap()
            .style_runs()
            .iter()
            .map(StyleRun::from)
            .collect()
    }
}
