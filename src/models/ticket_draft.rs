// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use itertools::Itertools;

use super::{Field, FieldDescriptor, FieldId, TICKET_FIELDS};

pub const CAPTURED_DIALOG_TITLE: &str = "Ticket captured";
const CAPTURED_HEADING: &str = "Captured values:";
const CAPTURED_TRAILER: &str = "Wire this to your backend.";

/// The ticket being filled in. Lives only as long as the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketDraft {
    fields: Vec<(&'static FieldDescriptor, Field)>,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            fields: TICKET_FIELDS
                .iter()
                .map(|descriptor| (descriptor, Field::from_descriptor(descriptor)))
                .collect(),
        }
    }
}

impl TicketDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Field)> + '_ {
        self.fields.iter().map(|(descriptor, field)| (*descriptor, field))
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|(descriptor, _)| descriptor.id == id).map(|(_, field)| field)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|(descriptor, _)| descriptor.id == id).map(|(_, field)| field)
    }

    pub fn set_text(&mut self, id: FieldId, text: &str) -> bool {
        self.field_mut(id).is_some_and(|field| field.set_text(text))
    }

    pub fn select(&mut self, id: FieldId, index: usize) -> bool {
        self.field_mut(id).is_some_and(|field| field.select(index))
    }

    pub fn clear(&mut self) {
        self.fields.iter_mut().for_each(|(_, field)| field.clear());
    }

    pub fn capture(&self) -> CapturedTicket {
        CapturedTicket {
            entries: self
                .fields
                .iter()
                .map(|(descriptor, field)| (descriptor.label, field.captured_value()))
                .collect(),
        }
    }
}

/// Snapshot of a draft taken on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedTicket {
    entries: Vec<(&'static str, String)>,
}

impl CapturedTicket {
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries.iter().find(|(l, _)| *l == label).map(|(_, value)| value.as_str())
    }

    /// One `label: value` line per field.
    pub fn summary(&self) -> String {
        self.entries.iter().map(|(label, value)| format!("{label}: {value}")).join("\n")
    }

    pub fn dialog_body(&self) -> String {
        format!("{CAPTURED_HEADING}\n\n{}\n\n{CAPTURED_TRAILER}", self.summary())
    }
}
