use log::warn;
use std::sync::Arc;

use shared::{ActiveActor, ActorMode};

use super::connection::MemoryConnection;
use crate::domain::errors::DomainResult;
use crate::storage::traits::ActorStorage;

/// Stores which actor (parent or a child id) is driving the UI
#[derive(Clone)]
pub struct ActorRepository {
    connection: Arc<MemoryConnection>,
}

impl ActorRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ActorStorage for ActorRepository {
    fn get_active_actor(&self) -> DomainResult<ActiveActor> {
        self.connection.read(|state| {
            let child = state.actor.child_id().and_then(|id| state.find_child(id).cloned());
            if state.actor.is_child_mode() && child.is_none() {
                warn!("Active child {:?} no longer exists", state.actor.child_id());
            }
            ActiveActor { mode: state.actor.clone(), child }
        })
    }

    fn set_actor_mode(&self, mode: ActorMode) -> DomainResult<()> {
        self.connection.transaction(|state| {
            state.actor = mode;
            Ok(())
        })
    }
}
