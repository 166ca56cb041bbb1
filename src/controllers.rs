// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod ticket_form_controller;
pub use ticket_form_controller::*;
