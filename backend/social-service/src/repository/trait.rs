use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Notification, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Which mirrored relation set a mutation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSet {
    Followers,
    Following,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Add,
    Remove,
}

/// One element-level change to a user's relation set.
#[derive(Debug, Clone)]
pub struct RelationMutation {
    pub user_id: Uuid,
    pub set: RelationSet,
    pub op: SetOp,
    pub member: Uuid,
}

impl RelationMutation {
    pub fn new(user_id: Uuid, set: RelationSet, op: SetOp, member: Uuid) -> Self {
        Self {
            user_id,
            set,
            op,
            member,
        }
    }
}

/// Trait defining the persistence gateway for user records.
///
/// Implementations back the services; the in-memory store in this crate is
/// the reference implementation used by the test suites.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user record.
    async fn create_user(&self, user: User) -> Result<(), StoreError>;

    /// Persist the full record, replacing the stored copy.
    async fn save(&self, user: &User) -> Result<(), StoreError>;

    /// Apply a batch of relation-set mutations.
    ///
    /// The batch is atomic: either every mutation becomes visible or none
    /// does. Callers rely on this to keep the mirrored follower/following
    /// sets consistent.
    async fn mutate_relations(&self, mutations: Vec<RelationMutation>) -> Result<(), StoreError>;

    /// Uniform random sample of up to `size` users, drawn without
    /// replacement from the whole population excluding `exclude_id`.
    async fn sample_users(&self, exclude_id: Uuid, size: usize) -> Result<Vec<User>, StoreError>;
}

/// Fire-and-forget persistence of notification records.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn emit(&self, notification: Notification) -> Result<(), StoreError>;
}
