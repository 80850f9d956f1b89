use log::debug;
use std::sync::Arc;

use shared::Reward;

use super::connection::MemoryConnection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::RewardStorage;

/// Reward repository over the shared household connection
#[derive(Clone)]
pub struct RewardRepository {
    connection: Arc<MemoryConnection>,
}

impl RewardRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl RewardStorage for RewardRepository {
    fn store_reward(&self, reward: &Reward) -> DomainResult<()> {
        self.connection.transaction(|state| {
            if state.find_reward(&reward.id).is_some() {
                return Err(DomainError::Validation(format!("Duplicate reward id: {}", reward.id)));
            }
            state.rewards.push(reward.clone());
            debug!("Stored reward {} ({} XP)", reward.id, reward.cost);
            Ok(())
        })
    }

    fn get_reward(&self, reward_id: &str) -> DomainResult<Option<Reward>> {
        self.connection.read(|state| state.find_reward(reward_id).cloned())
    }

    fn list_rewards(&self) -> DomainResult<Vec<Reward>> {
        self.connection.read(|state| state.rewards.clone())
    }

    fn update_reward(&self, reward_id: &str, apply: &mut dyn FnMut(&mut Reward) -> DomainResult<()>) -> DomainResult<Reward> {
        self.connection.transaction(|state| {
            let existing = state
                .find_reward_mut(reward_id)
                .ok_or_else(|| DomainError::RewardNotFound(reward_id.to_string()))?;
            let mut updated = existing.clone();
            apply(&mut updated)?;
            updated.id = reward_id.to_string();
            *existing = updated.clone();
            Ok(updated)
        })
    }

    fn delete_reward(&self, reward_id: &str) -> DomainResult<Reward> {
        self.connection.transaction(|state| {
            let index = state
                .rewards
                .iter()
                .position(|r| r.id == reward_id)
                .ok_or_else(|| DomainError::RewardNotFound(reward_id.to_string()))?;
            Ok(state.rewards.remove(index))
        })
    }
}
