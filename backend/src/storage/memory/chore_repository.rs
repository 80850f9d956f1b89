use log::debug;
use std::sync::Arc;

use shared::Chore;

use super::connection::MemoryConnection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::ChoreStorage;

/// Chore repository over the shared household connection
#[derive(Clone)]
pub struct ChoreRepository {
    connection: Arc<MemoryConnection>,
}

impl ChoreRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ChoreStorage for ChoreRepository {
    fn store_chore(&self, chore: &Chore) -> DomainResult<()> {
        self.connection.transaction(|state| {
            if state.find_chore(&chore.id).is_some() {
                return Err(DomainError::Validation(format!("Duplicate chore id: {}", chore.id)));
            }
            state.require_child(&chore.child_id)?;
            state.chores.push(chore.clone());
            debug!("Stored chore {} for child {}", chore.id, chore.child_id);
            Ok(())
        })
    }

    fn get_chore(&self, chore_id: &str) -> DomainResult<Option<Chore>> {
        self.connection.read(|state| state.find_chore(chore_id).cloned())
    }

    fn list_chores(&self, child_id: Option<&str>) -> DomainResult<Vec<Chore>> {
        self.connection.read(|state| {
            state
                .chores
                .iter()
                .filter(|chore| child_id.map_or(true, |id| chore.child_id == id))
                .cloned()
                .collect()
        })
    }

    fn update_chore(&self, chore_id: &str, apply: &mut dyn FnMut(&mut Chore) -> DomainResult<()>) -> DomainResult<Chore> {
        self.connection.transaction(|state| {
            let mut updated = state.require_chore(chore_id)?.clone();
            apply(&mut updated)?;
            updated.id = chore_id.to_string();
            state.require_child(&updated.child_id)?;

            if let Some(existing) = state.find_chore_mut(chore_id) {
                *existing = updated.clone();
            }
            Ok(updated)
        })
    }

    fn delete_chore(&self, chore_id: &str) -> DomainResult<Chore> {
        self.connection.transaction(|state| {
            let index = state
                .chores
                .iter()
                .position(|c| c.id == chore_id)
                .ok_or_else(|| DomainError::ChoreNotFound(chore_id.to_string()))?;
            Ok(state.chores.remove(index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestEnvironment;
    use crate::storage::traits::ChildStorage;
    use shared::{Child, ChoreFrequency};

    fn chore(id: &str, child_id: &str) -> Chore {
        Chore {
            id: id.to_string(),
            title: "Feed pet".to_string(),
            description: None,
            xp: 5,
            child_id: child_id.to_string(),
            is_completed: false,
            frequency: ChoreFrequency::Daily,
            frequency_days: None,
        }
    }

    fn env_with_children(ids: &[&str]) -> TestEnvironment {
        let env = TestEnvironment::empty();
        for id in ids {
            env.child_repo
                .store_child(&Child { id: id.to_string(), name: id.to_string(), xp: 0 })
                .unwrap();
        }
        env
    }

    #[test]
    fn test_list_chores_filters_by_child() {
        let env = env_with_children(&["child::a", "child::b"]);
        env.chore_repo.store_chore(&chore("chore::1", "child::a")).unwrap();
        env.chore_repo.store_chore(&chore("chore::2", "child::b")).unwrap();
        env.chore_repo.store_chore(&chore("chore::3", "child::a")).unwrap();

        assert_eq!(env.chore_repo.list_chores(None).unwrap().len(), 3);

        let ids: Vec<String> = env
            .chore_repo
            .list_chores(Some("child::a"))
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["chore::1", "chore::3"]);
    }

    #[test]
    fn test_store_chore_requires_child() {
        let env = env_with_children(&["child::a"]);
        assert_eq!(
            env.chore_repo.store_chore(&chore("chore::1", "child::ghost")),
            Err(DomainError::ChildNotFound("child::ghost".to_string()))
        );
        assert!(env.chore_repo.list_chores(None).unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete_chore() {
        let env = env_with_children(&["child::a", "child::b"]);
        env.chore_repo.store_chore(&chore("chore::1", "child::a")).unwrap();

        let updated = env
            .chore_repo
            .update_chore("chore::1", &mut |c| {
                c.title = "Walk dog".to_string();
                c.child_id = "child::b".to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.title, "Walk dog");
        assert_eq!(env.chore_repo.get_chore("chore::1").unwrap(), Some(updated.clone()));

        let removed = env.chore_repo.delete_chore("chore::1").unwrap();
        assert_eq!(removed, updated);
        assert_eq!(env.chore_repo.get_chore("chore::1").unwrap(), None);
    }

    #[test]
    fn test_reassign_to_missing_child_rejected() {
        let env = env_with_children(&["child::a"]);
        env.chore_repo.store_chore(&chore("chore::1", "child::a")).unwrap();

        let result = env.chore_repo.update_chore("chore::1", &mut |c| {
            c.child_id = "child::ghost".to_string();
            Ok(())
        });

        assert_eq!(result, Err(DomainError::ChildNotFound("child::ghost".to_string())));
        assert_eq!(env.chore_repo.get_chore("chore::1").unwrap().unwrap().child_id, "child::a");
    }

    #[test]
    fn test_missing_chore_errors() {
        let env = TestEnvironment::seeded();
        let before = env.chore_repo.list_chores(None).unwrap();

        assert_eq!(
            env.chore_repo.delete_chore("chore::missing"),
            Err(DomainError::ChoreNotFound("chore::missing".to_string()))
        );
        assert_eq!(
            env.chore_repo.update_chore("chore::missing", &mut |_| Ok(())),
            Err(DomainError::ChoreNotFound("chore::missing".to_string()))
        );
        assert_eq!(env.chore_repo.list_chores(None).unwrap(), before);
        assert_eq!(env.child_repo.list_children().unwrap().len(), 3);
    }
}
