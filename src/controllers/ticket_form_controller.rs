// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::models::{CapturedTicket, FieldId, TicketDraft};

pub struct TicketFormControllerCallbacks {
    pub on_refresh: Box<dyn Fn(&TicketDraft)>,
    pub on_show_summary: Box<dyn Fn(&CapturedTicket)>,
}

pub struct TicketFormController {
    draft: RefCell<TicketDraft>,
    callbacks: TicketFormControllerCallbacks,
}

impl TicketFormController {
    pub fn new(callbacks: TicketFormControllerCallbacks) -> Rc<Self> {
        Rc::new(Self { draft: RefCell::new(TicketDraft::new()), callbacks })
    }

    pub fn draft(&self) -> Ref<'_, TicketDraft> {
        self.draft.borrow()
    }

    pub fn refresh(&self) {
        (self.callbacks.on_refresh)(&self.draft.borrow());
    }

    pub fn edit(&self, id: FieldId, text: &str) {
        if self.draft.borrow_mut().set_text(id, text) {
            log::debug!("{id:?} edited");
        } else {
            log::warn!("{id:?} rejected value {text:?}");
        }
    }

    pub fn select(&self, id: FieldId, index: usize) {
        if self.draft.borrow_mut().select(id, index) {
            log::debug!("{id:?} selected option {index}");
        } else {
            log::warn!("{id:?} has no option {index}");
        }
    }

    pub fn submit(&self) -> CapturedTicket {
        let captured = self.draft.borrow().capture();
        log::info!("ticket captured with {} fields", captured.entries().len());
        (self.callbacks.on_show_summary)(&captured);
        captured
    }

    pub fn clear(&self) {
        self.draft.borrow_mut().clear();
        log::info!("ticket form cleared");
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn test_controller() -> (Rc<TicketFormController>, Rc<RefCell<Vec<String>>>, Rc<Cell<usize>>) {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let refreshed = Rc::new(Cell::new(0));

        let controller = TicketFormController::new(TicketFormControllerCallbacks {
            on_refresh: Box::new({
                let refreshed = refreshed.clone();

                move |_: &TicketDraft| {
                    refreshed.set(refreshed.get() + 1);
                }
            }),
            on_show_summary: Box::new({
                let shown = shown.clone();

                move |captured: &CapturedTicket| {
                    shown.borrow_mut().push(captured.dialog_body());
                }
            }),
        });

        (controller, shown, refreshed)
    }

    #[test]
    fn test_submit_shows_summary() {
        let (controller, shown, _) = test_controller();

        controller.edit(FieldId::Description, "Printer offline");
        let captured = controller.submit();

        assert_eq!(captured.value("Description"), Some("Printer offline"));
        assert_eq!(shown.borrow().len(), 1);
        assert!(shown.borrow()[0].contains("\nDescription: Printer offline\n"));
    }

    #[test]
    fn test_submit_is_repeatable() {
        let (controller, shown, _) = test_controller();

        controller.submit();
        controller.submit();

        let shown = shown.borrow();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0], shown[1]);
    }

    #[test]
    fn test_clear_refreshes_view() {
        let (controller, shown, refreshed) = test_controller();

        controller.select(FieldId::Priority, 1);
        controller.clear();
        assert_eq!(refreshed.get(), 1);

        controller.submit();
        let shown = shown.borrow();
        let body = &shown[0];
        assert!(body.contains("Full name: \n"));
        assert!(body.contains("Priority: P1 - Critical\n"));
    }

    #[test]
    fn test_rejected_selection_keeps_draft() {
        let (controller, _, _) = test_controller();

        controller.select(FieldId::Category, 42);
        controller.select(FieldId::Subject, 0);
        controller.edit(FieldId::Priority, "Urgent");

        let draft = controller.draft();
        assert_eq!(draft.field(FieldId::Category).unwrap().value(), "Access & Accounts");
        assert_eq!(draft.field(FieldId::Subject).unwrap().value(), "VPN client fails to connect");
        assert_eq!(draft.field(FieldId::Priority).unwrap().value(), "Choose priority");
    }
}
