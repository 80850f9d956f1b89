//! # Domain Module
//!
//! Business logic for the household chore ledger. Each service wraps the
//! shared [`MemoryConnection`](crate::storage::MemoryConnection) and exposes
//! command/result style operations:
//!
//! - [`ChildService`]: children and the cascade delete of their chores
//! - [`ChoreService`]: chores and the XP credited or debited on completion
//! - [`RewardService`]: rewards and claiming them with XP
//! - [`ActorService`]: parent or child mode
//! - [`StatsService`]: derived, read-only figures

pub mod actor_service;
pub mod child_service;
pub mod chore_service;
pub mod commands;
pub mod errors;
pub mod reward_service;
pub mod seed;
pub mod stats_service;
pub mod validation;

pub use actor_service::ActorService;
pub use child_service::ChildService;
pub use chore_service::ChoreService;
pub use errors::{DomainError, DomainResult};
pub use reward_service::RewardService;
pub use stats_service::StatsService;
