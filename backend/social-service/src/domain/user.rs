use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - the long-lived root record of the social graph.
///
/// `followers` and `following` are mirrored sets: whenever A appears in B's
/// `followers`, B appears in A's `following`. Both sides change together in
/// one atomic store batch. A user id never appears in its own sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub link: Option<String>,
    pub avatar_url: Option<String>,
    pub cover_url: Option<String>,
    pub followers: HashSet<Uuid>,
    pub following: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            display_name: None,
            bio: None,
            link: None,
            avatar_url: None,
            cover_url: None,
            followers: HashSet::new(),
            following: HashSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_following(&self, other: Uuid) -> bool {
        self.following.contains(&other)
    }
}

/// Public projection of a user record.
///
/// Carries no secret material; every user handed out of the core crosses
/// through this view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub link: Option<String>,
    pub avatar_url: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            link: user.link,
            avatar_url: user.avatar_url,
            cover_url: user.cover_url,
            created_at: user.created_at,
        }
    }
}

/// Partial profile mutation.
///
/// `None` leaves the stored value untouched. A supplied value is applied
/// verbatim: empty strings clear the free-text fields (`bio`, `link`) and are
/// rejected for identity fields. `avatar` and `cover` hold the raw asset
/// payload to upload, not a URL. A password change requires both
/// `current_password` and `new_password`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub link: Option<String>,
    pub avatar: Option<String>,
    pub cover: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}
