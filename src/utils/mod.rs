//! Shared utilities: code generation and URL validation.

pub mod code_generator;
pub mod target_url;
