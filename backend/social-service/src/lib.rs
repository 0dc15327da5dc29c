pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod security;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use services::{
    FollowOutcome, FollowService, ProfileService, SuggestionConfig, SuggestionService,
};
