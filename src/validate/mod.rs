//! Load-time validation of the card DSL.
//!
//! The trigger runtime assumes well-formed data: positive amounts, combat
//! targets only in combat triggers, sane resistance fractions. This module
//! is where those assumptions are enforced, once, when the catalog is built.

mod validator;

pub use validator::{validate_catalog, ValidationResult, Validator};
