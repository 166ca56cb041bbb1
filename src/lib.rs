// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#![deny(unsafe_code)]

use slint::ComponentHandle;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

pub mod controllers;
pub mod models;

/// Builds the ticket form window and wires it to its controller.
pub fn init() -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let controller = controllers::TicketFormController::new(
        ticket_form_adapter::controller_callbacks(&view_handle),
    );
    ticket_form_adapter::connect(&view_handle, controller.clone());
    controller.refresh();

    Ok(view_handle)
}

/// Shows the form and blocks until its window is closed.
pub fn run() -> Result<(), slint::PlatformError> {
    let main_window = init()?;

    main_window.run()
}
