//! Service layer for business logic with dependency injection.
//!
//! Services accept trait-based dependencies so the logic can be tested
//! with mock implementations instead of real repositories.

pub mod create;

#[cfg(test)]
pub mod test_mocks;

pub use create::{CreateBranchService, CreateOptions};
