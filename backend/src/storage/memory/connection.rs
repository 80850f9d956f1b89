//! # In-Memory Household Connection
//!
//! Owns the three household collections (children, chores, rewards) and the
//! actor mode behind a single `RwLock`. Repositories and services never hold
//! references into the state; they run closures against it through
//! [`MemoryConnection::read`] and [`MemoryConnection::transaction`] and get
//! owned clones back.
//!
//! A transaction closure holds the write lock for its whole body, so an
//! operation that touches two records (completing a chore and crediting the
//! child, claiming a reward and debiting the child) is never observed half
//! applied. Closures must check every precondition before mutating anything:
//! returning an error after a partial write would leave that write in place.

use log::{debug, error};
use std::sync::RwLock;

use shared::{ActorMode, Child, Chore, HouseholdSnapshot, Reward};

use crate::domain::errors::{DomainError, DomainResult};

/// The mutable household data guarded by the connection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseholdState {
    pub children: Vec<Child>,
    pub chores: Vec<Chore>,
    pub rewards: Vec<Reward>,
    pub actor: ActorMode,
}

impl HouseholdState {
    pub fn find_child(&self, child_id: &str) -> Option<&Child> {
        self.children.iter().find(|c| c.id == child_id)
    }

    pub fn find_child_mut(&mut self, child_id: &str) -> Option<&mut Child> {
        self.children.iter_mut().find(|c| c.id == child_id)
    }

    pub fn find_chore(&self, chore_id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == chore_id)
    }

    pub fn find_chore_mut(&mut self, chore_id: &str) -> Option<&mut Chore> {
        self.chores.iter_mut().find(|c| c.id == chore_id)
    }

    pub fn find_reward(&self, reward_id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == reward_id)
    }

    pub fn find_reward_mut(&mut self, reward_id: &str) -> Option<&mut Reward> {
        self.rewards.iter_mut().find(|r| r.id == reward_id)
    }

    /// Looks up a child or fails with `ChildNotFound`
    pub fn require_child(&self, child_id: &str) -> DomainResult<&Child> {
        self.find_child(child_id)
            .ok_or_else(|| DomainError::ChildNotFound(child_id.to_string()))
    }

    pub fn require_chore(&self, chore_id: &str) -> DomainResult<&Chore> {
        self.find_chore(chore_id)
            .ok_or_else(|| DomainError::ChoreNotFound(chore_id.to_string()))
    }

    pub fn require_reward(&self, reward_id: &str) -> DomainResult<&Reward> {
        self.find_reward(reward_id)
            .ok_or_else(|| DomainError::RewardNotFound(reward_id.to_string()))
    }

    pub fn to_snapshot(&self) -> HouseholdSnapshot {
        HouseholdSnapshot {
            children: self.children.clone(),
            chores: self.chores.clone(),
            rewards: self.rewards.clone(),
            actor: self.actor.clone(),
        }
    }
}

impl From<HouseholdSnapshot> for HouseholdState {
    fn from(snapshot: HouseholdSnapshot) -> Self {
        Self {
            children: snapshot.children,
            chores: snapshot.chores,
            rewards: snapshot.rewards,
            actor: snapshot.actor,
        }
    }
}

/// Single owner of all household state for the lifetime of the backend
#[derive(Debug, Default)]
pub struct MemoryConnection {
    state: RwLock<HouseholdState>,
}

impl MemoryConnection {
    /// Create an empty household
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connection pre-populated with the given state
    pub fn with_state(state: HouseholdState) -> Self {
        debug!(
            "Initializing household with {} children, {} chores, {} rewards",
            state.children.len(),
            state.chores.len(),
            state.rewards.len()
        );
        Self {
            state: RwLock::new(state),
        }
    }

    /// Run a read-only closure against the current state
    pub fn read<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&HouseholdState) -> T,
    {
        let guard = self.state.read().map_err(|e| {
            error!("Household state lock poisoned on read: {}", e);
            DomainError::StorageUnavailable(e.to_string())
        })?;
        Ok(f(&guard))
    }

    /// Run a closure with exclusive access to the state.
    ///
    /// The closure sees every other caller's completed writes and nothing
    /// else can read or write until it returns.
    pub fn transaction<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut HouseholdState) -> DomainResult<T>,
    {
        let mut guard = self.state.write().map_err(|e| {
            error!("Household state lock poisoned on write: {}", e);
            DomainError::StorageUnavailable(e.to_string())
        })?;
        f(&mut guard)
    }

    /// Clone the whole household in one consistent read
    pub fn snapshot(&self) -> DomainResult<HouseholdSnapshot> {
        self.read(HouseholdState::to_snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn child(id: &str, xp: u32) -> Child {
        Child {
            id: id.to_string(),
            name: format!("Child {}", id),
            xp,
        }
    }

    #[test]
    fn test_read_returns_owned_values() {
        let conn = MemoryConnection::with_state(HouseholdState {
            children: vec![child("child::1", 10)],
            ..Default::default()
        });

        let mut copy = conn.read(|s| s.children.clone()).unwrap();
        copy[0].xp = 999;

        let xp = conn.read(|s| s.find_child("child::1").map(|c| c.xp)).unwrap();
        assert_eq!(xp, Some(10));
    }

    #[test]
    fn test_failed_transaction_leaves_state_untouched() {
        let conn = MemoryConnection::with_state(HouseholdState {
            children: vec![child("child::1", 10)],
            ..Default::default()
        });
        let before = conn.snapshot().unwrap();

        let result: DomainResult<()> = conn.transaction(|s| {
            s.require_child("child::missing")?;
            s.children.clear();
            Ok(())
        });

        assert_eq!(result, Err(DomainError::ChildNotFound("child::missing".to_string())));
        assert_eq!(conn.snapshot().unwrap(), before);
    }

    #[test]
    fn test_concurrent_transactions_are_serialized() {
        let conn = Arc::new(MemoryConnection::with_state(HouseholdState {
            children: vec![child("child::1", 0)],
            ..Default::default()
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let conn = conn.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        conn.transaction(|s| {
                            let current = s.require_child("child::1")?.xp;
                            if let Some(c) = s.find_child_mut("child::1") {
                                c.xp = current + 1;
                            }
                            Ok(())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let xp = conn.read(|s| s.find_child("child::1").map(|c| c.xp)).unwrap();
        assert_eq!(xp, Some(800));
    }

    #[test]
    fn test_snapshot_round_trips_into_state() {
        let state = HouseholdState {
            children: vec![child("child::1", 5)],
            actor: ActorMode::Child { child_id: "child::1".to_string() },
            ..Default::default()
        };
        let conn = MemoryConnection::with_state(state.clone());

        let restored = HouseholdState::from(conn.snapshot().unwrap());
        assert_eq!(restored, state);
    }
}
