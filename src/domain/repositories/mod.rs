//! Repository traits for data access.

mod link_repository;

pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
