//! Presentation primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from props and report user input through callbacks.
//! None of them read shared state; pages wire them to the store.

pub mod buttons;
pub mod feedback;
pub mod form_input;
pub mod layout;
pub mod list_group;
pub mod modal;
