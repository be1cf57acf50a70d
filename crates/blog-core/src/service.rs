//! Post service - validation in front of the repository.

use std::sync::Arc;

use crate::domain::{BlogPost, BlogPostDraft, PostId};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};
use crate::ports::BlogPostRepository;
use crate::validation::PostValidator;

/// Result of a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// The draft passed validation and was stored.
    Saved(BlogPost),
    /// The draft broke one or more rules; nothing was stored.
    Invalid(Vec<String>),
    /// The draft was valid but no post has the requested ID.
    NotFound,
}

/// Stateless orchestrator over a repository and a validator.
#[derive(Clone)]
pub struct BlogPostService {
    repository: Arc<dyn BlogPostRepository>,
    validator: Arc<dyn PostValidator>,
}

impl BlogPostService {
    pub fn new(repository: Arc<dyn BlogPostRepository>, validator: Arc<dyn PostValidator>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        tracing::info!("Getting all blog posts");
        self.repository.get_all().await
    }

    pub async fn get_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError> {
        tracing::info!(
            page_number = request.page_number(),
            page_size = request.page_size(),
            "Getting paged blog posts"
        );
        self.repository.get_page(request).await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<BlogPost>, RepoError> {
        tracing::info!(search_term = %term, "Searching blog posts");
        self.repository.search(term).await
    }

    pub async fn search_page(
        &self,
        term: &str,
        request: PageRequest,
    ) -> Result<Page<BlogPost>, RepoError> {
        tracing::info!(
            search_term = %term,
            page_number = request.page_number(),
            page_size = request.page_size(),
            "Searching paged blog posts"
        );
        self.repository.search_page(term, request).await
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Option<BlogPost>, RepoError> {
        tracing::info!(post_id = id, "Getting blog post");
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, draft: BlogPostDraft) -> Result<PostOutcome, RepoError> {
        tracing::info!(title = %draft.title, "Creating blog post");

        let errors = self.validator.validate(&draft);
        if !errors.is_empty() {
            tracing::warn!(error_count = errors.len(), "Blog post validation failed");
            return Ok(PostOutcome::Invalid(errors));
        }

        let created = self.repository.create(draft).await?;
        Ok(PostOutcome::Saved(created))
    }

    pub async fn update(&self, id: PostId, draft: BlogPostDraft) -> Result<PostOutcome, RepoError> {
        tracing::info!(post_id = id, "Updating blog post");

        let errors = self.validator.validate(&draft);
        if !errors.is_empty() {
            tracing::warn!(
                post_id = id,
                error_count = errors.len(),
                "Blog post validation failed for update"
            );
            return Ok(PostOutcome::Invalid(errors));
        }

        Ok(match self.repository.update(id, draft).await? {
            Some(updated) => PostOutcome::Saved(updated),
            None => PostOutcome::NotFound,
        })
    }

    pub async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        tracing::info!(post_id = id, "Deleting blog post");
        self.repository.delete(id).await
    }
}
