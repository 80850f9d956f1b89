//! # Chore Tracker Backend
//!
//! In-process backend for a household chore tracker. Parents assign chores
//! to children; completing a chore earns the child XP, and XP is spent to
//! claim rewards. This crate provides:
//! - Synchronous domain services (no async/await, no IO layer)
//! - A single in-memory store shared by every service
//! - YAML configuration for seeding and XP policies
//!
//! Logging goes through the `log` facade; the embedding application picks
//! the logger.

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod storage;

pub use config::{BackendConfig, SeedMode, XpDebitPolicy};
pub use domain::{ActorService, ChildService, ChoreService, DomainError, DomainResult, RewardService, StatsService};
pub use storage::MemoryConnection;

use shared::HouseholdSnapshot;

/// Main backend struct that wires every service to one household store
#[derive(Clone)]
pub struct Backend {
    pub child_service: ChildService,
    pub chore_service: ChoreService,
    pub reward_service: RewardService,
    pub actor_service: ActorService,
    pub stats_service: StatsService,
    connection: Arc<MemoryConnection>,
}

impl Backend {
    /// Create a backend from an already loaded config
    pub fn new(config: &BackendConfig) -> Result<Self> {
        config.validate()?;

        let connection = Arc::new(match config.seed {
            SeedMode::Demo => MemoryConnection::with_state(domain::seed::demo_household()),
            SeedMode::Empty => MemoryConnection::new(),
        });

        info!(
            "Starting backend: seed={:?}, xp_debit_policy={:?}, max_name_length={}",
            config.seed, config.xp_debit_policy, config.max_name_length
        );

        Ok(Backend {
            child_service: ChildService::new(connection.clone(), config.max_name_length),
            chore_service: ChoreService::new(connection.clone(), config.xp_debit_policy, config.max_name_length),
            reward_service: RewardService::new(connection.clone(), config.max_name_length),
            actor_service: ActorService::new(connection.clone()),
            stats_service: StatsService::new(connection.clone()),
            connection,
        })
    }

    /// Create a backend from a YAML config file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = BackendConfig::load(path)?;
        Self::new(&config)
    }

    /// The whole household in one consistent read
    pub fn snapshot(&self) -> DomainResult<HouseholdSnapshot> {
        self.connection.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::actor::SwitchToChildCommand;
    use crate::domain::commands::child::{CreateChildCommand, DeleteChildCommand};
    use crate::domain::commands::chore::{CreateChoreCommand, ListChoresQuery, SetChoreCompletionCommand};
    use crate::domain::commands::reward::{ClaimRewardCommand, CreateRewardCommand};
    use shared::{ActorMode, ChoreFrequency};
    use std::thread;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn empty_backend() -> Backend {
        init_logging();
        let config = BackendConfig { seed: SeedMode::Empty, ..Default::default() };
        Backend::new(&config).unwrap()
    }

    #[test]
    fn test_earn_and_spend_scenario() {
        let backend = empty_backend();

        let emma = backend
            .child_service
            .create_child(CreateChildCommand { name: "Emma".to_string() })
            .unwrap()
            .child;
        assert_eq!(emma.xp, 0);

        let chore = backend
            .chore_service
            .create_chore(CreateChoreCommand {
                title: "Make bed".to_string(),
                description: None,
                xp: 10,
                child_id: emma.id.clone(),
                frequency: ChoreFrequency::Daily,
                frequency_days: None,
            })
            .unwrap()
            .chore;

        let completed = backend
            .chore_service
            .set_chore_completion(SetChoreCompletionCommand { chore_id: chore.id.clone(), completed: true })
            .unwrap();
        assert_eq!(completed.child.xp, 10);

        let treat = backend
            .reward_service
            .create_reward(CreateRewardCommand { name: "Treat".to_string(), icon: None, cost: 5 })
            .unwrap()
            .reward;

        let claimed = backend
            .reward_service
            .claim_reward(ClaimRewardCommand { reward_id: treat.id.clone(), child_id: emma.id.clone() })
            .unwrap();
        assert_eq!(claimed.child.xp, 5);
        assert_eq!(claimed.reward.claimed_by.as_deref(), Some(emma.id.as_str()));

        let again = backend
            .reward_service
            .claim_reward(ClaimRewardCommand { reward_id: treat.id.clone(), child_id: emma.id.clone() });
        assert_eq!(
            again.unwrap_err(),
            DomainError::RewardAlreadyClaimed { reward_id: treat.id, claimed_by: emma.id.clone() }
        );

        let snapshot = backend.snapshot().unwrap();
        assert_eq!(snapshot.children[0].xp, 5);
        assert!(snapshot.chores[0].is_completed);
    }

    #[test]
    fn test_default_config_starts_from_demo_seed() {
        init_logging();
        let backend = Backend::new(&BackendConfig::default()).unwrap();

        let snapshot = backend.snapshot().unwrap();
        assert_eq!(snapshot.children.len(), 3);
        assert_eq!(snapshot.chores.len(), 4);
        assert_eq!(snapshot.rewards.len(), 3);
        assert_eq!(snapshot.actor, ActorMode::Parent);
    }

    #[test]
    fn test_invalid_config_rejected() {
        init_logging();
        let config = BackendConfig { max_name_length: 0, ..Default::default() };
        assert!(Backend::new(&config).is_err());
    }

    #[test]
    fn test_backend_from_config_file() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.yaml");
        std::fs::write(&path, "seed: demo\nxp_debit_policy: reject\n").unwrap();

        let backend = Backend::from_config_file(&path).unwrap();
        assert_eq!(backend.snapshot().unwrap().children.len(), 3);

        assert!(Backend::from_config_file(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_delete_active_child_cascades() {
        let backend = empty_backend();
        let noah = backend
            .child_service
            .create_child(CreateChildCommand { name: "Noah".to_string() })
            .unwrap()
            .child;
        backend
            .chore_service
            .create_chore(CreateChoreCommand {
                title: "Take out trash".to_string(),
                description: None,
                xp: 15,
                child_id: noah.id.clone(),
                frequency: ChoreFrequency::Weekly,
                frequency_days: Some(1),
            })
            .unwrap();
        backend
            .actor_service
            .switch_to_child(SwitchToChildCommand { child_id: noah.id.clone() })
            .unwrap();

        let deleted = backend.child_service.delete_child(DeleteChildCommand { child_id: noah.id.clone() }).unwrap();
        assert!(deleted.actor_reset);

        let chores = backend.chore_service.list_chores(ListChoresQuery::default()).unwrap().chores;
        assert!(chores.is_empty());
        assert_eq!(backend.actor_service.get_active_actor().unwrap().active_actor.mode, ActorMode::Parent);
        assert_eq!(backend.stats_service.get_chore_stats(&noah.id).unwrap().total, 0);
    }

    #[test]
    fn test_concurrent_completions_conserve_xp() {
        let backend = empty_backend();
        let child = backend
            .child_service
            .create_child(CreateChildCommand { name: "Olivia".to_string() })
            .unwrap()
            .child;

        let chore_ids: Vec<String> = (0..20)
            .map(|i| {
                backend
                    .chore_service
                    .create_chore(CreateChoreCommand {
                        title: format!("Chore {}", i),
                        description: None,
                        xp: 3,
                        child_id: child.id.clone(),
                        frequency: ChoreFrequency::Once,
                        frequency_days: None,
                    })
                    .unwrap()
                    .chore
                    .id
            })
            .collect();

        let handles: Vec<_> = chore_ids
            .into_iter()
            .map(|chore_id| {
                let backend = backend.clone();
                thread::spawn(move || {
                    // Two racing completions of the same chore credit it once
                    for _ in 0..2 {
                        backend
                            .chore_service
                            .set_chore_completion(SetChoreCompletionCommand { chore_id: chore_id.clone(), completed: true })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let xp = backend.snapshot().unwrap().children[0].xp;
        assert_eq!(xp, 60);
        assert_eq!(backend.stats_service.get_chore_stats(&child.id).unwrap().completed, 20);
    }
}
