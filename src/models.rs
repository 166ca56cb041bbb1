// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod field;
pub use field::*;

mod ticket_draft;
pub use ticket_draft::*;
