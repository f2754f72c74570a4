//! bdm: client for a clause-based document generation service.
//!
//! Clause text marks the fields a user fills as `[Name]`. The
//! [`placeholder`] module extracts and fills those markers; the [`form`]
//! module sequences loading clauses, collecting values and submitting them to
//! the service through the [`api::DocumentService`] capability.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod form;
pub mod fs;
pub mod model;
pub mod placeholder;
pub mod text;
pub mod validate;

#[cfg(test)]
mod test_support;
