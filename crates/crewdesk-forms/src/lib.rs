//! Crewdesk Forms
//!
//! Pure validation and error-mapping core for the crewdesk dashboard.
//! Every function in this crate takes explicit state in and returns a
//! description of UI changes out; applying those descriptions to a live
//! view is the caller's job.

pub mod events;
pub mod field;
pub mod filter;
pub mod form;
pub mod messages;
pub mod server_error;
pub mod validate;

pub use events::{dispatch, EventKind, EventOutcome, FieldEvent};
pub use field::{field_label, FieldKind, FieldSpec};
pub use form::{FieldPatch, FieldState, FormState};
pub use server_error::{map_server_error, map_server_error_with, MappedError};
pub use validate::{validate, validate_field, validate_field_live, FieldCheck, ValidationReport};
