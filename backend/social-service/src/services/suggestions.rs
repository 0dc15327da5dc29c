use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::UserProfile;
use crate::error::{Result, ServiceError};
use crate::repository::UserStore;

/// Suggested-user sampling tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Number of candidates drawn from the store per request.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Maximum number of suggestions returned to the caller.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_sample_size() -> usize {
    10
}

fn default_max_results() -> usize {
    4
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            max_results: default_max_results(),
        }
    }
}

/// Samples follow candidates for a user.
#[derive(Clone)]
pub struct SuggestionService {
    store: Arc<dyn UserStore>,
    config: SuggestionConfig,
}

impl SuggestionService {
    pub fn new(store: Arc<dyn UserStore>, config: SuggestionConfig) -> Self {
        Self { store, config }
    }

    /// Draw a bounded random sample of users the actor does not follow yet.
    ///
    /// The draw is uniform over the whole population minus the actor;
    /// already-followed users are filtered out after the fixed-size draw, so
    /// the result may hold fewer than `max_results` entries.
    pub async fn suggest(&self, actor_id: Uuid) -> Result<Vec<UserProfile>> {
        let actor = self
            .store
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {actor_id}")))?;

        let sampled = self
            .store
            .sample_users(actor_id, self.config.sample_size)
            .await?;
        let sampled_count = sampled.len();

        let suggestions: Vec<UserProfile> = sampled
            .into_iter()
            .filter(|candidate| !actor.is_following(candidate.id))
            .take(self.config.max_results)
            .map(UserProfile::from)
            .collect();

        debug!(
            actor = %actor_id,
            sampled = sampled_count,
            returned = suggestions.len(),
            "computed user suggestions"
        );
        Ok(suggestions)
    }
}
