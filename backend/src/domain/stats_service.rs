//! Read-only figures derived from the household: chore completion counts,
//! the next reward a child is saving towards, and per-reward claimability.

use log::{debug, warn};
use std::sync::Arc;

use shared::{ChildProgress, ChoreStats, Reward, RewardAvailability, RewardStatus};

use crate::domain::errors::DomainResult;
use crate::storage::{HouseholdState, MemoryConnection};

#[derive(Clone)]
pub struct StatsService {
    connection: Arc<MemoryConnection>,
}

impl StatsService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }

    /// Completed and total chores assigned to a child. `{0, 0}` for an unknown id.
    pub fn get_chore_stats(&self, child_id: &str) -> DomainResult<ChoreStats> {
        let stats = self.connection.read(|state| chore_stats(state, child_id))?;
        debug!("Chore stats for {}: {}/{}", child_id, stats.completed, stats.total);
        Ok(stats)
    }

    /// Cheapest unclaimed reward costing more than the child's XP.
    /// `None` when every unclaimed reward is affordable or the child is unknown.
    pub fn get_next_reward_cost(&self, child_id: &str) -> DomainResult<Option<u32>> {
        self.connection.read(|state| {
            let xp = state.find_child(child_id).map(|c| c.xp);
            if xp.is_none() {
                debug!("No next reward for unknown child {}", child_id);
            }
            xp.and_then(|xp| next_reward_cost(&state.rewards, xp))
        })
    }

    pub fn get_child_progress(&self, child_id: &str) -> DomainResult<ChildProgress> {
        self.connection
            .read(|state| -> DomainResult<ChildProgress> {
                let child = state.require_child(child_id)?.clone();
                let chore_stats = chore_stats(state, child_id);
                let next_reward_cost = next_reward_cost(&state.rewards, child.xp);
                let reward_progress = next_reward_cost
                    .map(|cost| (f64::from(child.xp) / f64::from(cost)).min(1.0))
                    .unwrap_or(0.0);

                Ok(ChildProgress {
                    chore_progress: chore_stats.completion_ratio(),
                    child,
                    chore_stats,
                    next_reward_cost,
                    reward_progress,
                })
            })?
            .map_err(|e| {
                warn!("Failed to compute progress for {}: {}", child_id, e);
                e
            })
    }

    /// Every reward with whether this child could claim it right now
    pub fn get_reward_availability(&self, child_id: &str) -> DomainResult<Vec<RewardAvailability>> {
        self.connection.read(|state| -> DomainResult<Vec<RewardAvailability>> {
            let child = state.require_child(child_id)?;
            Ok(state
                .rewards
                .iter()
                .map(|reward| RewardAvailability {
                    status: match &reward.claimed_by {
                        Some(by) => RewardStatus::Claimed { by_child_id: by.clone() },
                        None if child.xp >= reward.cost => RewardStatus::Claimable,
                        None => RewardStatus::NeedsMoreXp { missing: reward.cost - child.xp },
                    },
                    reward: reward.clone(),
                })
                .collect())
        })?
    }
}

fn chore_stats(state: &HouseholdState, child_id: &str) -> ChoreStats {
    let (completed, total) = state
        .chores
        .iter()
        .filter(|chore| chore.child_id == child_id)
        .fold((0, 0), |(done, total), chore| (done + usize::from(chore.is_completed), total + 1));
    ChoreStats { completed, total }
}

fn next_reward_cost(rewards: &[Reward], xp: u32) -> Option<u32> {
    rewards
        .iter()
        .filter(|reward| !reward.is_claimed() && reward.cost > xp)
        .map(|reward| reward.cost)
        .min()
}
