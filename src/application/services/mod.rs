//! Application services.

mod allocation_service;
mod resolution_service;

pub use allocation_service::AllocationService;
pub use resolution_service::ResolutionService;
