//! Form domain layer
//!
//! Field descriptors, the validation schema and the order form state machine.

mod field;
mod form_state;
pub mod schema;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, OrderForm, GENERIC_FAILURE};
pub use schema::FieldName;
