//! Tracks whether the parent or one of the children is using the app.
//!
//! Only the active child's id is stored. The child's name and XP are looked
//! up when the actor is read, so they never go stale after a chore toggle or
//! a reward claim.

use log::{debug, info, warn};
use std::sync::Arc;

use shared::{ActiveActor, ActorMode};

use crate::domain::commands::actor::{GetActiveActorResult, SwitchActorResult, SwitchToChildCommand};
use crate::domain::errors::DomainResult;
use crate::storage::{ActorRepository, ActorStorage, MemoryConnection};

#[derive(Clone)]
pub struct ActorService {
    connection: Arc<MemoryConnection>,
    actor_repository: ActorRepository,
}

impl ActorService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            actor_repository: ActorRepository::new(connection.clone()),
            connection,
        }
    }

    /// Make an existing child the active actor
    pub fn switch_to_child(&self, command: SwitchToChildCommand) -> DomainResult<SwitchActorResult> {
        info!("Switching to child mode: {}", command.child_id);

        let active_actor = self
            .connection
            .transaction(|state| {
                let child = state.require_child(&command.child_id)?.clone();
                state.actor = ActorMode::Child { child_id: child.id.clone() };
                Ok(ActiveActor { mode: state.actor.clone(), child: Some(child) })
            })
            .map_err(|e| {
                warn!("Failed to switch to child {}: {}", command.child_id, e);
                e
            })?;

        Ok(SwitchActorResult { active_actor })
    }

    pub fn switch_to_parent(&self) -> DomainResult<SwitchActorResult> {
        info!("Switching to parent mode");
        self.actor_repository.set_actor_mode(ActorMode::Parent)?;
        Ok(SwitchActorResult {
            active_actor: ActiveActor { mode: ActorMode::Parent, child: None },
        })
    }

    /// Current actor with the active child's live record
    pub fn get_active_actor(&self) -> DomainResult<GetActiveActorResult> {
        let active_actor = self.actor_repository.get_active_actor()?;

        debug!("Active actor: {:?}", active_actor.mode);
        Ok(GetActiveActorResult { active_actor })
    }
}
