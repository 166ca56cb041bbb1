// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Priority,
    Category,
    Subject,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
    Multiline,
}

/// Static description of one form input: what it is called, how it behaves
/// and what it holds when the form opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub seed: &'static str,
}

pub const PRIORITY_OPTIONS: &[&str] =
    &["Choose priority", "P1 - Critical", "P2 - High", "P3 - Normal"];

pub const CATEGORY_OPTIONS: &[&str] =
    &["Access & Accounts", "Hardware", "Network", "Software", "Other"];

/// Every input of the form, in display and submission order.
pub static TICKET_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        id: FieldId::FullName,
        label: "Full name",
        kind: FieldKind::Text,
        seed: "Jane Doe",
    },
    FieldDescriptor {
        id: FieldId::Email,
        label: "Email",
        kind: FieldKind::Text,
        seed: "you@company.com",
    },
    FieldDescriptor {
        id: FieldId::Priority,
        label: "Priority",
        kind: FieldKind::Choice(PRIORITY_OPTIONS),
        seed: "",
    },
    FieldDescriptor {
        id: FieldId::Category,
        label: "Category",
        kind: FieldKind::Choice(CATEGORY_OPTIONS),
        seed: "",
    },
    FieldDescriptor {
        id: FieldId::Subject,
        label: "Subject",
        kind: FieldKind::Text,
        seed: "VPN client fails to connect",
    },
    FieldDescriptor {
        id: FieldId::Description,
        label: "Description",
        kind: FieldKind::Multiline,
        seed: "",
    },
];

/// Live state of one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Text(String),
    Choice { options: &'static [&'static str], selected: usize },
    Multiline(String),
}

impl Field {
    /// Choice fields always open on their first option.
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        match descriptor.kind {
            FieldKind::Text => Self::Text(descriptor.seed.to_owned()),
            FieldKind::Choice(options) => Self::Choice { options, selected: 0 },
            FieldKind::Multiline => Self::Multiline(descriptor.seed.to_owned()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Text(text) | Self::Multiline(text) => text.as_str(),
            Self::Choice { options, selected } => options.get(*selected).copied().unwrap_or(""),
        }
    }

    /// The value as it is reported when the ticket is submitted.
    pub fn captured_value(&self) -> String {
        self.value().trim().to_owned()
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Choice { options, .. } => *options,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Choice { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// Returns false if the field refused the value.
    ///
    /// A choice only accepts one of its own options.
    pub fn set_text(&mut self, text: &str) -> bool {
        match self {
            Self::Text(value) => {
                *value = text.replace(['\r', '\n'], " ");
                true
            }
            Self::Multiline(value) => {
                *value = text.to_owned();
                true
            }
            Self::Choice { options, selected } => {
                match options.iter().position(|option| *option == text) {
                    Some(index) => {
                        *selected = index;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        match self {
            Self::Choice { options, selected } if index < options.len() => {
                *selected = index;
                true
            }
            _ => false,
        }
    }

    /// Empties text inputs. Choices keep their current selection.
    pub fn clear(&mut self) {
        match self {
            Self::Text(value) | Self::Multiline(value) => value.clear(),
            Self::Choice { .. } => {}
        }
    }
}
