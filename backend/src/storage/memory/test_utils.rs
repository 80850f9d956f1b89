/// Test utilities for the in-memory storage layer
///
/// Every test gets its own connection, so tests never share household state.

use std::sync::Arc;

use super::actor_repository::ActorRepository;
use super::child_repository::ChildRepository;
use super::chore_repository::ChoreRepository;
use super::connection::{HouseholdState, MemoryConnection};
use super::reward_repository::RewardRepository;
use crate::domain::seed;

/// A fresh connection plus one repository of each kind
pub struct TestEnvironment {
    pub connection: Arc<MemoryConnection>,
    pub child_repo: ChildRepository,
    pub chore_repo: ChoreRepository,
    pub reward_repo: RewardRepository,
    pub actor_repo: ActorRepository,
}

impl TestEnvironment {
    pub fn with_state(state: HouseholdState) -> Self {
        let connection = Arc::new(MemoryConnection::with_state(state));
        Self {
            child_repo: ChildRepository::new(connection.clone()),
            chore_repo: ChoreRepository::new(connection.clone()),
            reward_repo: RewardRepository::new(connection.clone()),
            actor_repo: ActorRepository::new(connection.clone()),
            connection,
        }
    }

    /// Household with nothing in it
    pub fn empty() -> Self {
        Self::with_state(HouseholdState::default())
    }

    /// Household loaded with the demo seed data
    pub fn seeded() -> Self {
        Self::with_state(seed::demo_household())
    }

    /// Id of the seeded child with the given name
    pub fn child_id(&self, name: &str) -> String {
        self.connection
            .read(|s| s.children.iter().find(|c| c.name == name).map(|c| c.id.clone()))
            .expect("Failed to read household")
            .unwrap_or_else(|| panic!("No child named {}", name))
    }
}
