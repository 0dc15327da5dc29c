use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// User started following
    Follow,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Follow => "follow",
        }
    }
}

/// Notification record - an append-only child of two users.
///
/// Created only as a side effect of a new follow, never on unfollow. Both
/// user references are weak: no cascade delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub kind: NotificationType,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn follow(from_user_id: Uuid, to_user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_user_id,
            to_user_id,
            kind: NotificationType::Follow,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_as_str() {
        assert_eq!(NotificationType::Follow.as_str(), "follow");
    }

    #[test]
    fn test_follow_notification_references_both_users() {
        let from = Uuid::new_v4();
        let to = Uuid::new_v4();

        let notification = Notification::follow(from, to);

        assert_eq!(notification.from_user_id, from);
        assert_eq!(notification.to_user_id, to);
        assert_eq!(notification.kind, NotificationType::Follow);
    }

    #[test]
    fn test_notification_type_wire_name() {
        let json = serde_json::to_string(&NotificationType::Follow).unwrap();
        assert_eq!(json, "\"follow\"");
    }
}
