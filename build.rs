// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::env;

fn main() {
    // element types and ids are needed by the testing backend's ElementHandle lookups
    let debug_info = env::var("PROFILE").map_or(true, |profile| profile != "release");

    slint_build::compile_with_config(
        "ui/ticket_form.slint",
        slint_build::CompilerConfiguration::new().with_debug_info(debug_info),
    )
    .unwrap();
}
