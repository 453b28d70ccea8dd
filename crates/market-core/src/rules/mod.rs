//! Validation rules for request objects

pub mod validation;
