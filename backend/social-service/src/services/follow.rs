use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::Notification;
use crate::error::{Result, ServiceError};
use crate::repository::{NotificationSink, RelationMutation, RelationSet, SetOp, UserStore};

/// Outcome of a follow toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    Unfollowed,
}

/// Mutates the mirrored follower/following relation between two users.
#[derive(Clone)]
pub struct FollowService {
    store: Arc<dyn UserStore>,
    notifications: Arc<dyn NotificationSink>,
}

impl FollowService {
    pub fn new(store: Arc<dyn UserStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            notifications,
        }
    }

    /// Follow `target_id` if the actor does not already follow them,
    /// otherwise unfollow.
    ///
    /// Both sides of the relation change in one atomic store batch. A follow
    /// notification is emitted only on the follow path, strictly after the
    /// relation change commits; emission failure is logged, not propagated.
    pub async fn toggle_follow(&self, actor_id: Uuid, target_id: Uuid) -> Result<FollowOutcome> {
        if actor_id == target_id {
            return Err(ServiceError::InvalidOperation(
                "users cannot follow or unfollow themselves".to_string(),
            ));
        }

        let actor = self
            .store
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {actor_id}")))?;
        if self.store.find_by_id(target_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("user {target_id}")));
        }

        if actor.is_following(target_id) {
            self.store
                .mutate_relations(vec![
                    RelationMutation::new(target_id, RelationSet::Followers, SetOp::Remove, actor_id),
                    RelationMutation::new(actor_id, RelationSet::Following, SetOp::Remove, target_id),
                ])
                .await?;

            debug!(actor = %actor_id, target = %target_id, "unfollowed");
            Ok(FollowOutcome::Unfollowed)
        } else {
            self.store
                .mutate_relations(vec![
                    RelationMutation::new(target_id, RelationSet::Followers, SetOp::Add, actor_id),
                    RelationMutation::new(actor_id, RelationSet::Following, SetOp::Add, target_id),
                ])
                .await?;

            if let Err(e) = self
                .notifications
                .emit(Notification::follow(actor_id, target_id))
                .await
            {
                warn!(actor = %actor_id, target = %target_id, error = %e, "failed to emit follow notification");
            }

            debug!(actor = %actor_id, target = %target_id, "followed");
            Ok(FollowOutcome::Followed)
        }
    }
}
