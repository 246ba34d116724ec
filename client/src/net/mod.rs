//! Networking modules for the stage-race REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` re-exports the shared wire schema.

pub mod api;
pub mod types;
