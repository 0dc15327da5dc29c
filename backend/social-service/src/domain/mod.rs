mod notification;
mod user;

pub use notification::{Notification, NotificationType};
pub use user::{ProfilePatch, User, UserProfile};
