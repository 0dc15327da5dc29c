use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::IteratorRandom;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NotificationSink, RelationMutation, RelationSet, SetOp, StoreError, UserStore};
use crate::domain::{Notification, User};

/// In-memory store backing the test suites and single-process embedders.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored notification, oldest first.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::Backend(format!(
                "user {} already exists",
                user.id
            )));
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(StoreError::Backend(format!("unknown user {}", user.id))),
        }
    }

    async fn mutate_relations(&self, mutations: Vec<RelationMutation>) -> Result<(), StoreError> {
        // One write guard for the whole batch; validate every target before
        // touching anything so a bad batch leaves the graph untouched.
        let mut users = self.users.write().await;
        for mutation in &mutations {
            if !users.contains_key(&mutation.user_id) {
                return Err(StoreError::Backend(format!(
                    "unknown user {}",
                    mutation.user_id
                )));
            }
        }

        for mutation in mutations {
            if let Some(user) = users.get_mut(&mutation.user_id) {
                let set = match mutation.set {
                    RelationSet::Followers => &mut user.followers,
                    RelationSet::Following => &mut user.following,
                };
                match mutation.op {
                    SetOp::Add => {
                        set.insert(mutation.member);
                    }
                    SetOp::Remove => {
                        set.remove(&mutation.member);
                    }
                }
            }
        }
        Ok(())
    }

    async fn sample_users(&self, exclude_id: Uuid, size: usize) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        let mut rng = rand::thread_rng();
        Ok(users
            .values()
            .filter(|u| u.id != exclude_id)
            .cloned()
            .choose_multiple(&mut rng, size))
    }
}

#[async_trait::async_trait]
impl NotificationSink for InMemoryStore {
    async fn emit(&self, notification: Notification) -> Result<(), StoreError> {
        self.notifications.write().await.push(notification);
        Ok(())
    }
}
