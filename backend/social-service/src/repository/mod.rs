mod memory;
mod r#trait;

pub use memory::InMemoryStore;
pub use r#trait::{
    NotificationSink, RelationMutation, RelationSet, SetOp, StoreError, UserStore,
};
