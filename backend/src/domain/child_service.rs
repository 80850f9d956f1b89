use log::{debug, info, warn};
use std::sync::Arc;

use shared::Child;

use crate::domain::commands::child::{
    CreateChildCommand, CreateChildResult, DeleteChildCommand, DeleteChildResult, GetChildCommand,
    GetChildResult, ListChildrenResult, UpdateChildCommand, UpdateChildResult,
};
use crate::domain::errors::DomainResult;
use crate::domain::validation::validate_label;
use crate::storage::{ChildRepository, ChildStorage, MemoryConnection};

/// Service for managing the children in the household
#[derive(Clone)]
pub struct ChildService {
    child_repository: ChildRepository,
    max_name_length: usize,
}

impl ChildService {
    pub fn new(connection: Arc<MemoryConnection>, max_name_length: usize) -> Self {
        Self {
            child_repository: ChildRepository::new(connection),
            max_name_length,
        }
    }

    /// Add a child with a fresh id and 0 XP
    pub fn create_child(&self, command: CreateChildCommand) -> DomainResult<CreateChildResult> {
        info!("Creating child: name={}", command.name);

        let name = validate_label("Child name", &command.name, self.max_name_length)?;
        let child = Child {
            id: Child::generate_id(),
            name,
            xp: 0,
        };

        self.child_repository.store_child(&child)?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(CreateChildResult { child })
    }

    pub fn get_child(&self, command: GetChildCommand) -> DomainResult<GetChildResult> {
        debug!("Getting child: {}", command.child_id);

        let child = self.child_repository.get_child(&command.child_id)?;
        if child.is_none() {
            warn!("Child not found: {}", command.child_id);
        }

        Ok(GetChildResult { child })
    }

    pub fn list_children(&self) -> DomainResult<ListChildrenResult> {
        let children = self.child_repository.list_children()?;
        debug!("Found {} children", children.len());
        Ok(ListChildrenResult { children })
    }

    /// Rename a child. XP is never edited through this path.
    pub fn update_child(&self, command: UpdateChildCommand) -> DomainResult<UpdateChildResult> {
        info!("Updating child: {}", command.child_id);

        let name = command
            .name
            .as_deref()
            .map(|name| validate_label("Child name", name, self.max_name_length))
            .transpose()?;

        let child = self
            .child_repository
            .update_child(&command.child_id, &mut |child| {
                if let Some(name) = &name {
                    child.name = name.clone();
                }
                Ok(())
            })
            .map_err(|e| {
                warn!("Failed to update child {}: {}", command.child_id, e);
                e
            })?;

        info!("Updated child: {} with ID: {}", child.name, child.id);
        Ok(UpdateChildResult { child })
    }

    /// Delete a child and every chore assigned to it
    pub fn delete_child(&self, command: DeleteChildCommand) -> DomainResult<DeleteChildResult> {
        info!("Deleting child: {}", command.child_id);

        let removal = self
            .child_repository
            .delete_child_cascade(&command.child_id)
            .map_err(|e| {
                warn!("Failed to delete child {}: {}", command.child_id, e);
                e
            })?;

        info!(
            "Deleted child: {} with ID: {} ({} chores removed)",
            removal.child.name,
            removal.child.id,
            removal.removed_chores.len()
        );

        Ok(DeleteChildResult {
            success_message: format!("Child '{}' deleted successfully", removal.child.name),
            child: removal.child,
            removed_chores: removal.removed_chores,
            actor_reset: removal.actor_reset,
        })
    }
}
