// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::*;

use crate::{
    controllers::{TicketFormController, TicketFormControllerCallbacks},
    models::{CAPTURED_DIALOG_TITLE, CapturedTicket, Field, FieldId, TicketDraft},
    ui,
};

// controller -> view
pub fn controller_callbacks(view_handle: &ui::MainWindow) -> TicketFormControllerCallbacks {
    TicketFormControllerCallbacks {
        on_refresh: Box::new({
            let view_handle = view_handle.as_weak();

            move |draft: &TicketDraft| {
                let Some(view) = view_handle.upgrade() else {
                    return;
                };
                let adapter = view.global::<ui::TicketAdapter>();

                for (descriptor, field) in draft.fields() {
                    apply_field(&adapter, descriptor.id, field);
                }
            }
        }),
        on_show_summary: Box::new({
            let view_handle = view_handle.as_weak();

            move |captured: &CapturedTicket| {
                let Some(view) = view_handle.upgrade() else {
                    return;
                };

                view.invoke_show_summary(
                    CAPTURED_DIALOG_TITLE.into(),
                    captured.dialog_body().into(),
                );
            }
        }),
    }
}

// view -> controller
pub fn connect(view_handle: &ui::MainWindow, controller: Rc<TicketFormController>) {
    let adapter = view_handle.global::<ui::TicketAdapter>();

    adapter.on_edited({
        let controller = controller.clone();

        move |field, text| {
            controller.edit(map_ticket_field_to_field_id(field), text.as_str());
        }
    });

    adapter.on_selected({
        let controller = controller.clone();

        move |field, index| {
            let id = map_ticket_field_to_field_id(field);
            match usize::try_from(index) {
                Ok(index) => controller.select(id, index),
                Err(_) => log::warn!("{id:?} reported selection {index}"),
            }
        }
    });

    adapter.on_submit({
        let controller = controller.clone();

        move || {
            controller.submit();
        }
    });

    adapter.on_clear(move || {
        controller.clear();
    });
}

fn apply_field(adapter: &ui::TicketAdapter<'_>, id: FieldId, field: &Field) {
    match id {
        FieldId::FullName => adapter.set_full_name(field.value().into()),
        FieldId::Email => adapter.set_email(field.value().into()),
        FieldId::Subject => adapter.set_subject(field.value().into()),
        FieldId::Description => adapter.set_description(field.value().into()),
        FieldId::Priority => {
            adapter.set_priority_options(map_options_to_model(field.options()));
            adapter.set_priority_index(map_selected_index(field));
        }
        FieldId::Category => {
            adapter.set_category_options(map_options_to_model(field.options()));
            adapter.set_category_index(map_selected_index(field));
        }
    }
}

fn map_ticket_field_to_field_id(field: ui::TicketField) -> FieldId {
    match field {
        ui::TicketField::FullName => FieldId::FullName,
        ui::TicketField::Email => FieldId::Email,
        ui::TicketField::Priority => FieldId::Priority,
        ui::TicketField::Category => FieldId::Category,
        ui::TicketField::Subject => FieldId::Subject,
        ui::TicketField::Description => FieldId::Description,
    }
}

fn map_options_to_model(options: &[&str]) -> ModelRc<SharedString> {
    ModelRc::new(VecModel::from(options.iter().map(|o| SharedString::from(*o)).collect::<Vec<_>>()))
}

fn map_selected_index(field: &Field) -> i32 {
    field.selected_index().and_then(|index| i32::try_from(index).ok()).unwrap_or(-1)
}
