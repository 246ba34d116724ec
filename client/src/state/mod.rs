//! Client-side state for the stage-race screen.
//!
//! DESIGN
//! ======
//! `stage_races` is the list store with its pure reducer, `draft` is the
//! creation form, and `effects` bridges both to the REST API.

pub mod draft;
pub mod effects;
pub mod stage_races;
