use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A child in the household. Child ID format: "child::<token>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    /// Current XP balance (earned by chores, spent on rewards)
    pub xp: u32,
}

/// How often a chore comes around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreFrequency {
    Daily,
    Weekly,
    Monthly,
    Once,
}

impl ChoreFrequency {
    /// Lowercase label used by the UI and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreFrequency::Daily => "daily",
            ChoreFrequency::Weekly => "weekly",
            ChoreFrequency::Monthly => "monthly",
            ChoreFrequency::Once => "once",
        }
    }

    /// Only weekly chores may carry a days-per-week count
    pub fn allows_frequency_days(&self) -> bool {
        matches!(self, ChoreFrequency::Weekly)
    }
}

impl fmt::Display for ChoreFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task assigned to exactly one child. Chore ID format: "chore::<token>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// XP credited to the owning child on completion
    pub xp: u32,
    pub child_id: String,
    pub is_completed: bool,
    pub frequency: ChoreFrequency,
    /// Days per week, only meaningful when `frequency` is weekly
    pub frequency_days: Option<u32>,
}

/// A redeemable reward. Reward ID format: "reward::<token>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    /// Opaque icon identifier chosen by the UI (icon name or emoji)
    pub icon: Option<String>,
    /// XP price
    pub cost: u32,
    pub claimed_by: Option<String>,
    pub claimed_on: Option<DateTime<Utc>>,
}

impl Child {
    pub fn generate_id() -> String {
        format!("child::{}", Uuid::new_v4().simple())
    }
}

impl Chore {
    pub fn generate_id() -> String {
        format!("chore::{}", Uuid::new_v4().simple())
    }
}

impl Reward {
    pub fn generate_id() -> String {
        format!("reward::{}", Uuid::new_v4().simple())
    }

    /// A reward is claimed once `claimed_by` is set; it is never cleared
    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }
}

/// Completion counts for one child's chores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreStats {
    pub completed: usize,
    pub total: usize,
}

impl ChoreStats {
    /// Fraction of chores completed, 0.0 when the child has none
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Who is driving the UI: the parent, or a specific child.
/// Only the child id is stored; name and XP are always read live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ActorMode {
    #[default]
    Parent,
    Child { child_id: String },
}

impl ActorMode {
    pub fn is_child_mode(&self) -> bool {
        matches!(self, ActorMode::Child { .. })
    }

    pub fn child_id(&self) -> Option<&str> {
        match self {
            ActorMode::Parent => None,
            ActorMode::Child { child_id } => Some(child_id.as_str()),
        }
    }
}

/// The actor mode together with the live record of the active child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveActor {
    pub mode: ActorMode,
    pub child: Option<Child>,
}

/// Progress figures shown on a child's card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProgress {
    pub child: Child,
    pub chore_stats: ChoreStats,
    /// completed / total, 0.0 without chores
    pub chore_progress: f64,
    /// Cheapest unclaimed reward the child cannot afford yet
    pub next_reward_cost: Option<u32>,
    /// min(xp / next_reward_cost, 1.0), 0.0 without a next reward
    pub reward_progress: f64,
}

/// Whether a given child can claim a reward right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RewardStatus {
    Claimable,
    NeedsMoreXp { missing: u32 },
    Claimed { by_child_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardAvailability {
    pub reward: Reward,
    pub status: RewardStatus,
}

/// One consistent read of the whole household
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    pub children: Vec<Child>,
    pub chores: Vec<Chore>,
    pub rewards: Vec<Reward>,
    pub actor: ActorMode,
}
