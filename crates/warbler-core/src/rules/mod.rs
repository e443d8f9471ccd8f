//! Validation rules for user input

pub mod validation;
