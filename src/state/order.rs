//! Order domain types shared by the form and the API client

use serde::{Deserialize, Serialize};

/// A topping that can be added to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// Fixed topping menu, in display order
pub const TOPPINGS: [Topping; 5] = [
    Topping {
        id: "1",
        label: "Pepperoni",
    },
    Topping {
        id: "2",
        label: "Green Peppers",
    },
    Topping {
        id: "3",
        label: "Pineapple",
    },
    Topping {
        id: "4",
        label: "Mushrooms",
    },
    Topping {
        id: "5",
        label: "Ham",
    },
];

/// Pizza size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Wire code sent to the API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Parse a wire code. Exact match, no trimming.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Select options for the size field. The empty string is the placeholder.
pub const SIZE_OPTIONS: [&str; 4] = ["", "S", "M", "L"];

/// Placeholder shown while no size is chosen
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// Display text for a raw size value
pub fn size_display(value: &str) -> &str {
    match Size::from_code(value) {
        Some(size) => size.label(),
        None if value.is_empty() => SIZE_PLACEHOLDER,
        None => value,
    }
}

/// Current values of the order form. Also the JSON body of an order request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl FormValues {
    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }

    /// Add or remove a topping id. Checking an already-present id is a no-op.
    pub fn set_topping(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.has_topping(id) {
                self.toppings.push(id.to_string());
            }
        } else {
            self.toppings.retain(|t| t != id);
        }
    }

    /// Flip a topping's membership, returning the new checked state
    pub fn toggle_topping(&mut self, id: &str) -> bool {
        let checked = !self.has_topping(id);
        self.set_topping(id, checked);
        checked
    }
}

/// Successful response from the order endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub message: String,
}
