use log::{debug, info, warn};
use std::sync::Arc;

use shared::{ActorMode, Child, Chore};

use super::connection::MemoryConnection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::{ChildRemoval, ChildStorage};

/// Child repository over the shared household connection
#[derive(Clone)]
pub struct ChildRepository {
    connection: Arc<MemoryConnection>,
}

impl ChildRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn store_child(&self, child: &Child) -> DomainResult<()> {
        self.connection.transaction(|state| {
            if state.find_child(&child.id).is_some() {
                return Err(DomainError::Validation(format!("Duplicate child id: {}", child.id)));
            }
            state.children.push(child.clone());
            debug!("Stored child {} ({})", child.name, child.id);
            Ok(())
        })
    }

    fn get_child(&self, child_id: &str) -> DomainResult<Option<Child>> {
        self.connection.read(|state| state.find_child(child_id).cloned())
    }

    fn list_children(&self) -> DomainResult<Vec<Child>> {
        self.connection.read(|state| state.children.clone())
    }

    fn update_child(&self, child_id: &str, apply: &mut dyn FnMut(&mut Child) -> DomainResult<()>) -> DomainResult<Child> {
        self.connection.transaction(|state| {
            let existing = state
                .find_child_mut(child_id)
                .ok_or_else(|| DomainError::ChildNotFound(child_id.to_string()))?;
            let mut updated = existing.clone();
            apply(&mut updated)?;
            updated.id = child_id.to_string();
            *existing = updated.clone();
            Ok(updated)
        })
    }

    fn delete_child_cascade(&self, child_id: &str) -> DomainResult<ChildRemoval> {
        self.connection.transaction(|state| {
            let index = state
                .children
                .iter()
                .position(|c| c.id == child_id)
                .ok_or_else(|| DomainError::ChildNotFound(child_id.to_string()))?;
            let child = state.children.remove(index);

            let (removed_chores, kept_chores): (Vec<Chore>, Vec<Chore>) = std::mem::take(&mut state.chores)
                .into_iter()
                .partition(|chore| chore.child_id == child_id);
            state.chores = kept_chores;

            let actor_reset = state.actor.child_id() == Some(child_id);
            if actor_reset {
                warn!("Active child {} deleted, falling back to parent mode", child_id);
                state.actor = ActorMode::Parent;
            }

            info!(
                "Removed child {} with {} assigned chores",
                child_id,
                removed_chores.len()
            );

            Ok(ChildRemoval {
                child,
                removed_chores,
                actor_reset,
            })
        })
    }
}
