//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain
//! services work against. Every method returns owned records; callers never
//! get a handle into the stored collections.
//!
//! Note: All operations are synchronous; the household fits in memory.

use shared::{ActiveActor, ActorMode, Child, Chore, Reward};

use crate::domain::errors::DomainResult;

/// Everything removed by a cascading child delete
#[derive(Debug, Clone, PartialEq)]
pub struct ChildRemoval {
    pub child: Child,
    pub removed_chores: Vec<Chore>,
    /// True when the deleted child was the active actor and the mode fell back to parent
    pub actor_reset: bool,
}

/// Trait defining the interface for child storage operations
pub trait ChildStorage: Send + Sync {
    /// Append a new child
    fn store_child(&self, child: &Child) -> DomainResult<()>;

    /// Retrieve a specific child by ID
    fn get_child(&self, child_id: &str) -> DomainResult<Option<Child>>;

    /// List all children in insertion order
    fn list_children(&self) -> DomainResult<Vec<Child>>;

    /// Apply `apply` to a copy of the child and store it only if `apply`
    /// succeeds. The id cannot be changed. `ChildNotFound` if absent.
    fn update_child(&self, child_id: &str, apply: &mut dyn FnMut(&mut Child) -> DomainResult<()>) -> DomainResult<Child>;

    /// Remove a child together with every chore assigned to it.
    /// Rewards are left alone, including ones the child claimed.
    fn delete_child_cascade(&self, child_id: &str) -> DomainResult<ChildRemoval>;
}

/// Trait defining the interface for chore storage operations
pub trait ChoreStorage: Send + Sync {
    /// Append a new chore; its `child_id` must name an existing child
    fn store_chore(&self, chore: &Chore) -> DomainResult<()>;

    fn get_chore(&self, chore_id: &str) -> DomainResult<Option<Chore>>;

    /// List chores in insertion order, optionally only one child's
    fn list_chores(&self, child_id: Option<&str>) -> DomainResult<Vec<Chore>>;

    /// Same contract as [`ChildStorage::update_child`]; the updated chore
    /// must still reference an existing child.
    fn update_chore(&self, chore_id: &str, apply: &mut dyn FnMut(&mut Chore) -> DomainResult<()>) -> DomainResult<Chore>;

    /// Remove a chore and return it
    fn delete_chore(&self, chore_id: &str) -> DomainResult<Chore>;
}

/// Trait defining the interface for reward storage operations
pub trait RewardStorage: Send + Sync {
    fn store_reward(&self, reward: &Reward) -> DomainResult<()>;

    fn get_reward(&self, reward_id: &str) -> DomainResult<Option<Reward>>;

    fn list_rewards(&self) -> DomainResult<Vec<Reward>>;

    /// Same contract as [`ChildStorage::update_child`]
    fn update_reward(&self, reward_id: &str, apply: &mut dyn FnMut(&mut Reward) -> DomainResult<()>) -> DomainResult<Reward>;

    /// Remove a reward regardless of claim state and return it
    fn delete_reward(&self, reward_id: &str) -> DomainResult<Reward>;
}

/// Trait defining the interface for the actor-mode flag
pub trait ActorStorage: Send + Sync {
    /// The actor mode plus the live record of the active child, read together.
    /// `child` is `None` in parent mode or when the stored id no longer resolves.
    fn get_active_actor(&self) -> DomainResult<ActiveActor>;

    fn set_actor_mode(&self, mode: ActorMode) -> DomainResult<()>;
}
