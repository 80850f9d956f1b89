//! Chore service domain logic.
//!
//! Besides chore CRUD this service owns the XP credit/debit that goes with
//! completing and un-completing a chore.
//!
//! ## Business Rules
//!
//! - New chores start incomplete and must be assigned to an existing child
//! - Completing a chore credits its XP to the owning child; un-completing
//!   debits it again, either floored at zero or refused depending on
//!   [`XpDebitPolicy`]
//! - Requesting the state a chore is already in changes nothing
//! - The chore flag and the child's balance change in one transaction
//! - A completed chore cannot have its XP or owner edited, so the amount
//!   debited on un-completion is always the amount that was credited

use log::{debug, info, warn};
use std::sync::Arc;

use shared::Chore;

use crate::config::XpDebitPolicy;
use crate::domain::commands::chore::{
    CreateChoreCommand, CreateChoreResult, DeleteChoreCommand, DeleteChoreResult, ListChoresQuery,
    ListChoresResult, SetChoreCompletionCommand, SetChoreCompletionResult, UpdateChoreCommand,
    UpdateChoreResult,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{normalize_optional, validate_frequency_days, validate_label};
use crate::storage::{ChoreRepository, ChoreStorage, MemoryConnection};

/// Service for managing chores and the XP they award
#[derive(Clone)]
pub struct ChoreService {
    connection: Arc<MemoryConnection>,
    chore_repository: ChoreRepository,
    debit_policy: XpDebitPolicy,
    max_name_length: usize,
}

impl ChoreService {
    pub fn new(connection: Arc<MemoryConnection>, debit_policy: XpDebitPolicy, max_name_length: usize) -> Self {
        Self {
            chore_repository: ChoreRepository::new(connection.clone()),
            connection,
            debit_policy,
            max_name_length,
        }
    }

    /// Add an incomplete chore for an existing child
    pub fn create_chore(&self, command: CreateChoreCommand) -> DomainResult<CreateChoreResult> {
        info!("Creating chore: title={}, child={}", command.title, command.child_id);

        let title = validate_label("Chore title", &command.title, self.max_name_length)?;
        validate_frequency_days(command.frequency, command.frequency_days)?;

        let chore = Chore {
            id: Chore::generate_id(),
            title,
            description: normalize_optional(command.description),
            xp: command.xp,
            child_id: command.child_id,
            is_completed: false,
            frequency: command.frequency,
            frequency_days: command.frequency_days,
        };

        self.chore_repository.store_chore(&chore).map_err(|e| {
            warn!("Failed to store chore {}: {}", chore.title, e);
            e
        })?;

        info!("Created chore: {} with ID: {}", chore.title, chore.id);
        Ok(CreateChoreResult { chore })
    }

    pub fn get_chore(&self, chore_id: &str) -> DomainResult<Option<Chore>> {
        debug!("Getting chore: {}", chore_id);
        self.chore_repository.get_chore(chore_id)
    }

    pub fn list_chores(&self, query: ListChoresQuery) -> DomainResult<ListChoresResult> {
        debug!("Listing chores: {:?}", query);

        let chores: Vec<Chore> = self
            .chore_repository
            .list_chores(query.child_id.as_deref())?
            .into_iter()
            .filter(|chore| query.completed.map_or(true, |done| chore.is_completed == done))
            .collect();

        debug!("Found {} chores", chores.len());
        Ok(ListChoresResult { chores })
    }

    /// Merge the supplied fields into an existing chore
    pub fn update_chore(&self, command: UpdateChoreCommand) -> DomainResult<UpdateChoreResult> {
        info!("Updating chore: {}", command.chore_id);

        let title = command
            .title
            .as_deref()
            .map(|title| validate_label("Chore title", title, self.max_name_length))
            .transpose()?;

        let chore = self
            .chore_repository
            .update_chore(&command.chore_id, &mut |chore| {
                if chore.is_completed {
                    if command.xp.is_some_and(|xp| xp != chore.xp) {
                        return Err(DomainError::Validation(
                            "Cannot change the XP of a completed chore".to_string(),
                        ));
                    }
                    if command.child_id.as_ref().is_some_and(|id| *id != chore.child_id) {
                        return Err(DomainError::Validation(
                            "Cannot reassign a completed chore".to_string(),
                        ));
                    }
                }

                if let Some(title) = &title {
                    chore.title = title.clone();
                }
                if let Some(description) = &command.description {
                    chore.description = normalize_optional(Some(description.clone()));
                }
                if let Some(xp) = command.xp {
                    chore.xp = xp;
                }
                if let Some(child_id) = &command.child_id {
                    chore.child_id = child_id.clone();
                }
                if let Some(frequency) = command.frequency {
                    chore.frequency = frequency;
                    if !frequency.allows_frequency_days() {
                        chore.frequency_days = None;
                    }
                }
                if let Some(frequency_days) = command.frequency_days {
                    chore.frequency_days = frequency_days;
                }

                validate_frequency_days(chore.frequency, chore.frequency_days)
            })
            .map_err(|e| {
                warn!("Failed to update chore {}: {}", command.chore_id, e);
                e
            })?;

        info!("Updated chore: {} with ID: {}", chore.title, chore.id);
        Ok(UpdateChoreResult { chore })
    }

    /// Delete a chore. XP already credited for it stays with the child.
    pub fn delete_chore(&self, command: DeleteChoreCommand) -> DomainResult<DeleteChoreResult> {
        info!("Deleting chore: {}", command.chore_id);

        let chore = self.chore_repository.delete_chore(&command.chore_id).map_err(|e| {
            warn!("Failed to delete chore {}: {}", command.chore_id, e);
            e
        })?;

        info!("Deleted chore: {} with ID: {}", chore.title, chore.id);
        Ok(DeleteChoreResult {
            success_message: format!("Chore '{}' deleted successfully", chore.title),
            chore,
        })
    }

    /// Mark a chore complete or incomplete and move its XP to or from the owning child
    pub fn set_chore_completion(&self, command: SetChoreCompletionCommand) -> DomainResult<SetChoreCompletionResult> {
        info!("Setting chore {} completed={}", command.chore_id, command.completed);

        let debit_policy = self.debit_policy;
        let result = self.connection.transaction(|state| {
            let chore = state.require_chore(&command.chore_id)?.clone();
            let child = state.require_child(&chore.child_id)?.clone();

            if chore.is_completed == command.completed {
                debug!("Chore {} already completed={}, nothing to do", chore.id, chore.is_completed);
                return Ok(SetChoreCompletionResult {
                    chore,
                    child,
                    xp_delta: 0,
                    changed: false,
                });
            }

            let new_xp = if command.completed {
                child.xp.checked_add(chore.xp).ok_or_else(|| {
                    DomainError::Validation(format!("XP balance overflow for child {}", child.id))
                })?
            } else {
                match debit_policy {
                    XpDebitPolicy::Floor => child.xp.saturating_sub(chore.xp),
                    XpDebitPolicy::Reject => child.xp.checked_sub(chore.xp).ok_or_else(|| {
                        DomainError::InsufficientXp {
                            child_id: child.id.clone(),
                            required: chore.xp,
                            available: child.xp,
                        }
                    })?,
                }
            };

            let chore_entry = state
                .find_chore_mut(&chore.id)
                .ok_or_else(|| DomainError::ChoreNotFound(chore.id.clone()))?;
            chore_entry.is_completed = command.completed;
            let chore = chore_entry.clone();

            let child_entry = state
                .find_child_mut(&child.id)
                .ok_or_else(|| DomainError::ChildNotFound(child.id.clone()))?;
            child_entry.xp = new_xp;
            let updated_child = child_entry.clone();

            Ok(SetChoreCompletionResult {
                xp_delta: i64::from(new_xp) - i64::from(child.xp),
                chore,
                child: updated_child,
                changed: true,
            })
        });

        match &result {
            Ok(r) if r.changed => info!(
                "Chore {} completed={}, child {} XP {:+} -> {}",
                r.chore.id, r.chore.is_completed, r.child.id, r.xp_delta, r.child.xp
            ),
            Ok(_) => {}
            Err(e) => warn!("Failed to set completion on chore {}: {}", command.chore_id, e),
        }

        result
    }
}
