//! # Memory Storage Module
//!
//! In-memory storage for the household: one [`MemoryConnection`] holding all
//! state, and one repository per collection implementing the storage traits.
//! Nothing is persisted; dropping the connection drops the household.

pub mod connection;
pub mod child_repository;
pub mod chore_repository;
pub mod reward_repository;
pub mod actor_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::{HouseholdState, MemoryConnection};
pub use child_repository::ChildRepository;
pub use chore_repository::ChoreRepository;
pub use reward_repository::RewardRepository;
pub use actor_repository::ActorRepository;
