//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_core::{BlogPostService, BlogPostValidator};
use blog_infra::InMemoryBlogPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: BlogPostService,
}

impl AppState {
    /// Composition root: pick the repository and validator implementations.
    pub fn new(config: &AppConfig) -> Self {
        let repository = if config.seed_sample_posts {
            tracing::info!("Seeding in-memory store with sample posts");
            InMemoryBlogPostRepository::with_sample_data()
        } else {
            InMemoryBlogPostRepository::new()
        };

        let state = Self::with_repository(Arc::new(repository));
        tracing::info!("Application state initialized");
        state
    }

    /// State over an explicit repository, with the standard validator.
    pub fn with_repository(repository: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts: BlogPostService::new(repository, Arc::new(BlogPostValidator::new())),
        }
    }
}
