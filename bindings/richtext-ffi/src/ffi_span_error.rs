// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#[derive(uniffi::Error, thiserror::Error, Debug, PartialEq, Eq)]
pub enum SpanError {
    #[error("span is empty: {reason}")]
    Empty { reason: String },
    #[error("span is inverted: {reason}")]
    Inverted { reason: String },
}

impl From<richtext::SpanError> for SpanError {
    fn from(inner: richtext::SpanError) -> Self {
        let reason = inner.to_string();
        match inner {
            richtext::SpanError::Empty { .. } => Self::Empty { reason },
            richtext::SpanError::Inverted { .. } => Self::Inverted { reason },
        }
    }
}
