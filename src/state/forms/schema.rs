//! Validation schema for the order form
//!
//! Each validated field has a small ordered table of rules. A value is
//! trimmed first, then checked against the rules in order; the first rule
//! that fails supplies the message.

use crate::state::{FormValues, Size};

pub const FULL_NAME_REQUIRED: &str = "Name is Required.";
pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_REQUIRED: &str = "Select Size";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

const FULL_NAME_MIN: usize = 3;
const FULL_NAME_MAX: usize = 20;

/// Fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Size,
    Toppings,
}

impl FieldName {
    /// Key used in the JSON payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
            Self::Toppings => "toppings",
        }
    }
}

/// A predicate over a trimmed value and the message reported when it fails
struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule {
        check: |v: &str| !v.is_empty(),
        message: FULL_NAME_REQUIRED,
    },
    Rule {
        check: |v: &str| v.chars().count() >= FULL_NAME_MIN,
        message: FULL_NAME_TOO_SHORT,
    },
    Rule {
        check: |v: &str| v.chars().count() <= FULL_NAME_MAX,
        message: FULL_NAME_TOO_LONG,
    },
];

const SIZE_RULES: &[Rule] = &[
    Rule {
        check: |v: &str| !v.is_empty(),
        message: SIZE_REQUIRED,
    },
    Rule {
        check: |v: &str| Size::from_code(v).is_some(),
        message: SIZE_INCORRECT,
    },
];

fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::FullName => FULL_NAME_RULES,
        FieldName::Size => SIZE_RULES,
        // Toppings are accepted as-is
        FieldName::Toppings => &[],
    }
}

/// Validate a single field value, returning the first failing rule's message
pub fn validate_field(field: FieldName, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    match rules_for(field).iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(rule.message),
        None => Ok(()),
    }
}

/// Check the whole value set against the schema
pub fn is_valid(values: &FormValues) -> bool {
    validate_field(FieldName::FullName, &values.full_name).is_ok()
        && validate_field(FieldName::Size, &values.size).is_ok()
}
