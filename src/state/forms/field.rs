//! Form field descriptors

use super::schema::FieldName;
use crate::state::{size_display, FormValues, Topping};

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Single choice cycled through a fixed option list
    Select,
    /// Membership of one topping in the toppings list
    Checkbox(Topping),
}

/// Represents a single focusable form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    /// Create a new select field
    pub fn select(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind: FieldKind::Select,
        }
    }

    /// Create a checkbox for one topping
    pub fn checkbox(topping: Topping) -> Self {
        Self {
            name: FieldName::Toppings,
            label: topping.label.to_string(),
            kind: FieldKind::Checkbox(topping),
        }
    }

    /// Whether the field is a topping checkbox
    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox(_))
    }

    /// Whether the checkbox is ticked (always false for other kinds)
    pub fn is_checked(&self, values: &FormValues) -> bool {
        match self.kind {
            FieldKind::Checkbox(topping) => values.has_topping(topping.id),
            _ => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, values: &FormValues) -> String {
        match self.kind {
            FieldKind::Text => values.full_name.clone(),
            FieldKind::Select => size_display(&values.size).to_string(),
            FieldKind::Checkbox(topping) => {
                let mark = if values.has_topping(topping.id) { "x" } else { " " };
                format!("[{mark}] {}", topping.label)
            }
        }
    }
}
