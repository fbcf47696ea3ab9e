//! Department/employee domain model.
//!
//! # Responsibility
//! - Define the in-memory records the stores persist and hydrate.
//! - Own write-path validation rules shared by every store.
//!
//! # Invariants
//! - Identifiers are caller-assigned and never `0`.
//! - Absent references are `None`; the zero sentinel never leaves the
//!   store boundary.

pub mod department;
pub mod employee;
pub mod validation;
