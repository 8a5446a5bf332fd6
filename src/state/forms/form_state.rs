//! Order form state: values, per-field errors, submit gating and results

use super::field::{FieldKind, FormField};
use super::schema::{self, FieldName};
use crate::api::ApiError;
use crate::state::{FormValues, OrderReceipt, SIZE_OPTIONS, TOPPINGS};
use tracing::debug;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<FormField>;
}

/// Last validation message per field. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub full_name: String,
    pub size: String,
}

impl FormErrors {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Size => &self.size,
            FieldName::Toppings => "",
        }
    }

    /// Replace a single field's message; other entries are untouched
    pub fn set(&mut self, field: FieldName, message: String) {
        match field {
            FieldName::FullName => self.full_name = message,
            FieldName::Size => self.size = message,
            FieldName::Toppings => {}
        }
    }
}

/// Fallback failure banner when the server gives no message
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Index of the submit button in the focus ring
const SUBMIT_INDEX: usize = 2 + TOPPINGS.len();

#[derive(Debug, Clone)]
pub struct OrderForm {
    pub values: FormValues,
    pub errors: FormErrors,
    /// Submit gating, always `!schema::is_valid(&values)`
    pub disabled: bool,
    pub server_success: String,
    pub server_failure: String,
    pub active_field_index: usize,
}

impl OrderForm {
    pub fn new() -> Self {
        let mut form = Self {
            values: FormValues::default(),
            errors: FormErrors::default(),
            disabled: true,
            server_success: String::new(),
            server_failure: String::new(),
            active_field_index: 0,
        };
        form.check_validity();
        form
    }

    /// All focusable fields in focus order (the submit button is not a field)
    pub fn fields() -> Vec<FormField> {
        let mut fields = vec![
            FormField::text(FieldName::FullName, "Full Name"),
            FormField::select(FieldName::Size, "Size"),
        ];
        fields.extend(TOPPINGS.iter().copied().map(FormField::checkbox));
        fields
    }

    /// Returns true if the submit button has focus
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// Currently focused field, `None` when the submit button has focus
    pub fn current_field(&self) -> Option<FormField> {
        self.get_field(self.active_field_index)
    }

    /// Set a text or select value, then validate that field
    pub fn set_value(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::FullName => self.values.full_name = value,
            FieldName::Size => self.values.size = value,
            FieldName::Toppings => return,
        }
        self.validate(field);
        self.check_validity();
    }

    /// Check or uncheck a topping. Toppings are never validated.
    pub fn set_topping(&mut self, id: &str, checked: bool) {
        self.values.set_topping(id, checked);
        self.check_validity();
    }

    pub fn toggle_topping(&mut self, id: &str) {
        self.values.toggle_topping(id);
        self.check_validity();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.current_field() else {
            return;
        };
        match field.name {
            FieldName::FullName => {
                let mut name = self.values.full_name.clone();
                name.push(c);
                self.set_value(FieldName::FullName, name);
            }
            FieldName::Size => {
                let code = c.to_ascii_uppercase().to_string();
                if SIZE_OPTIONS.contains(&code.as_str()) {
                    self.set_value(FieldName::Size, code);
                }
            }
            FieldName::Toppings => {
                if c == ' ' {
                    self.toggle_focused_topping();
                }
            }
        }
    }

    /// Delete backwards in the focused field
    pub fn backspace(&mut self) {
        match self.current_field().map(|f| f.name) {
            Some(FieldName::FullName) => {
                let mut name = self.values.full_name.clone();
                if name.pop().is_some() {
                    self.set_value(FieldName::FullName, name);
                }
            }
            Some(FieldName::Size) => {
                if !self.values.size.is_empty() {
                    self.set_value(FieldName::Size, String::new());
                }
            }
            _ => {}
        }
    }

    /// Move the size select to the next or previous option (wraps around)
    pub fn cycle_size(&mut self, forward: bool) {
        let count = SIZE_OPTIONS.len();
        let current = SIZE_OPTIONS
            .iter()
            .position(|o| *o == self.values.size)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else if current == 0 {
            count - 1
        } else {
            current - 1
        };
        self.set_value(FieldName::Size, SIZE_OPTIONS[next].to_string());
    }

    /// Toggle the topping under focus, if any
    pub fn toggle_focused_topping(&mut self) {
        if let Some(FieldKind::Checkbox(topping)) = self.current_field().map(|f| f.kind) {
            self.toggle_topping(topping.id);
        }
    }

    /// Record the outcome of a submission attempt
    pub fn apply_submission(&mut self, result: Result<OrderReceipt, ApiError>) {
        match result {
            Ok(receipt) => {
                self.values = FormValues::default();
                self.check_validity();
                self.server_success = receipt.message;
                self.server_failure.clear();
            }
            Err(err) => {
                self.server_failure = err
                    .server_message()
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string();
                self.server_success.clear();
            }
        }
    }

    /// Validate one field against the schema, touching only its error entry
    fn validate(&mut self, field: FieldName) {
        let value = match field {
            FieldName::FullName => &self.values.full_name,
            FieldName::Size => &self.values.size,
            FieldName::Toppings => return,
        };
        let message = match schema::validate_field(field, value) {
            Ok(()) => String::new(),
            Err(message) => {
                debug!(field = field.key(), error = message, "field invalid");
                message.to_string()
            }
        };
        self.errors.set(field, message);
    }

    fn check_validity(&mut self) {
        self.disabled = !schema::is_valid(&self.values);
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for OrderForm {
    fn field_count(&self) -> usize {
        SUBMIT_INDEX + 1 // full name, size, toppings, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<FormField> {
        Self::fields().into_iter().nth(index)
    }
}
