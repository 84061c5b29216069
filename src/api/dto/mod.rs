//! Request and response DTOs.

pub mod links;
