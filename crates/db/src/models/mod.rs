//! Row models and request DTOs, one module per table.

pub mod activity;
pub mod customer;
pub mod invoice;
pub mod lead;
pub mod ledger;
pub mod profile;
pub mod property;
pub mod property_unit;
pub mod reservation;
pub mod session;
