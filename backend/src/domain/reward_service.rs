//! Reward service domain logic.
//!
//! ## Business Rules
//!
//! - A reward is claimed at most once and stays claimed until it is deleted
//! - Claiming requires the child to hold at least the reward's cost in XP;
//!   the cost is debited in the same transaction that records the claim
//! - Editing a reward never touches its claim fields

use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use shared::Reward;

use crate::domain::commands::reward::{
    ClaimRewardCommand, ClaimRewardResult, CreateRewardCommand, CreateRewardResult, DeleteRewardCommand,
    DeleteRewardResult, ListRewardsQuery, ListRewardsResult, RewardFilter, UpdateRewardCommand,
    UpdateRewardResult,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{normalize_optional, validate_label};
use crate::storage::{MemoryConnection, RewardRepository, RewardStorage};

#[derive(Clone)]
pub struct RewardService {
    connection: Arc<MemoryConnection>,
    reward_repository: RewardRepository,
    max_name_length: usize,
}

impl RewardService {
    pub fn new(connection: Arc<MemoryConnection>, max_name_length: usize) -> Self {
        Self {
            reward_repository: RewardRepository::new(connection.clone()),
            connection,
            max_name_length,
        }
    }

    /// Add an unclaimed reward
    pub fn create_reward(&self, command: CreateRewardCommand) -> DomainResult<CreateRewardResult> {
        info!("Creating reward: name={}, cost={}", command.name, command.cost);

        let name = validate_label("Reward name", &command.name, self.max_name_length)?;
        let reward = Reward {
            id: Reward::generate_id(),
            name,
            icon: normalize_optional(command.icon),
            cost: command.cost,
            claimed_by: None,
            claimed_on: None,
        };

        self.reward_repository.store_reward(&reward)?;

        info!("Created reward: {} with ID: {}", reward.name, reward.id);
        Ok(CreateRewardResult { reward })
    }

    pub fn get_reward(&self, reward_id: &str) -> DomainResult<Option<Reward>> {
        debug!("Getting reward: {}", reward_id);
        self.reward_repository.get_reward(reward_id)
    }

    pub fn list_rewards(&self, query: ListRewardsQuery) -> DomainResult<ListRewardsResult> {
        debug!("Listing rewards: {:?}", query);

        let rewards: Vec<Reward> = self
            .reward_repository
            .list_rewards()?
            .into_iter()
            .filter(|reward| match query.status {
                RewardFilter::All => true,
                RewardFilter::Available => !reward.is_claimed(),
                RewardFilter::Claimed => reward.is_claimed(),
            })
            .filter(|reward| {
                query
                    .claimed_by
                    .as_deref()
                    .map_or(true, |child_id| reward.claimed_by.as_deref() == Some(child_id))
            })
            .collect();

        debug!("Found {} rewards", rewards.len());
        Ok(ListRewardsResult { rewards })
    }

    pub fn update_reward(&self, command: UpdateRewardCommand) -> DomainResult<UpdateRewardResult> {
        info!("Updating reward: {}", command.reward_id);

        let name = command
            .name
            .as_deref()
            .map(|name| validate_label("Reward name", name, self.max_name_length))
            .transpose()?;

        let reward = self
            .reward_repository
            .update_reward(&command.reward_id, &mut |reward| {
                if let Some(name) = &name {
                    reward.name = name.clone();
                }
                if let Some(icon) = &command.icon {
                    reward.icon = normalize_optional(Some(icon.clone()));
                }
                if let Some(cost) = command.cost {
                    reward.cost = cost;
                }
                Ok(())
            })
            .map_err(|e| {
                warn!("Failed to update reward {}: {}", command.reward_id, e);
                e
            })?;

        info!("Updated reward: {} with ID: {}", reward.name, reward.id);
        Ok(UpdateRewardResult { reward })
    }

    /// Delete a reward, claimed or not. Spent XP is not refunded.
    pub fn delete_reward(&self, command: DeleteRewardCommand) -> DomainResult<DeleteRewardResult> {
        info!("Deleting reward: {}", command.reward_id);

        let reward = self.reward_repository.delete_reward(&command.reward_id).map_err(|e| {
            warn!("Failed to delete reward {}: {}", command.reward_id, e);
            e
        })?;

        info!("Deleted reward: {} with ID: {}", reward.name, reward.id);
        Ok(DeleteRewardResult {
            success_message: format!("Reward '{}' deleted successfully", reward.name),
            reward,
        })
    }

    /// Claim a reward for a child, debiting its cost from the child's XP
    pub fn claim_reward(&self, command: ClaimRewardCommand) -> DomainResult<ClaimRewardResult> {
        info!("Claiming reward {} for child {}", command.reward_id, command.child_id);

        let result = self.connection.transaction(|state| {
            let reward = state.require_reward(&command.reward_id)?.clone();
            let child = state.require_child(&command.child_id)?.clone();

            if let Some(claimed_by) = &reward.claimed_by {
                return Err(DomainError::RewardAlreadyClaimed {
                    reward_id: reward.id.clone(),
                    claimed_by: claimed_by.clone(),
                });
            }
            if child.xp < reward.cost {
                return Err(DomainError::InsufficientXp {
                    child_id: child.id.clone(),
                    required: reward.cost,
                    available: child.xp,
                });
            }

            let reward_entry = state
                .find_reward_mut(&reward.id)
                .ok_or_else(|| DomainError::RewardNotFound(reward.id.clone()))?;
            reward_entry.claimed_by = Some(child.id.clone());
            reward_entry.claimed_on = Some(Utc::now());
            let reward = reward_entry.clone();

            let child_entry = state
                .find_child_mut(&child.id)
                .ok_or_else(|| DomainError::ChildNotFound(child.id.clone()))?;
            child_entry.xp -= reward.cost;
            let child = child_entry.clone();

            Ok(ClaimRewardResult { reward, child })
        });

        match &result {
            Ok(r) => info!(
                "Child {} claimed reward {} for {} XP, {} XP left",
                r.child.id, r.reward.id, r.reward.cost, r.child.xp
            ),
            Err(e) => warn!("Failed to claim reward {}: {}", command.reward_id, e),
        }

        result
    }
}
