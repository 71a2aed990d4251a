//! Domain types and pure business logic for the Atrium platform.
//!
//! Everything in this crate is side-effect free: status enums, the error
//! type shared across layers, lead scoring, property matching, availability
//! math, and upload validation. Database and HTTP concerns live in
//! `atrium-db` and `atrium-api`.

pub mod availability;
pub mod codes;
pub mod error;
pub mod matching;
pub mod roles;
pub mod scoring;
pub mod status;
pub mod types;
pub mod upload;
