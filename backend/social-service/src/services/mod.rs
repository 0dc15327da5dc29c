mod follow;
mod profile;
mod suggestions;

pub use follow::{FollowOutcome, FollowService};
pub use profile::ProfileService;
pub use suggestions::{SuggestionConfig, SuggestionService};
