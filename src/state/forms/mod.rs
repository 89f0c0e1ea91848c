//! Form domain layer
//!
//! Type-safe handling of the add-item form: field values, focus movement
//! and the per-field validation rules.

mod field;
mod form_state;
mod validation;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormButton, ItemForm};
pub use validation::{validate, ItemField, ValidationErrors};
