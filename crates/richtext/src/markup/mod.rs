// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The stored markup form: plain text with `<b>`, `<i>` and `<u>` tags.

mod parse;
mod preview;
mod serialize;

pub use parse::parse;
pub use preview::strip_to_plain_preview;
pub use serialize::serialize;
