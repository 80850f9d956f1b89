//! # Storage Module
//!
//! Storage abstraction for the household ledger. The traits in [`traits`]
//! are what the domain services depend on; [`memory`] is the in-process
//! implementation that owns the data for the lifetime of the backend.

pub mod traits;
pub mod memory;

pub use traits::*;
pub use memory::{
    ActorRepository, ChildRepository, ChoreRepository, HouseholdState, MemoryConnection,
    RewardRepository,
};
