//! Tarea create/edit form
//!
//! - model.rs: form values and their coercion into `TareaDto`
//! - view_model.rs: form state and the save command
//! - view.rs: modal component

mod model;
mod view;
mod view_model;

pub use model::{FormError, TareaFormValues};
pub use view::TareaForm;
