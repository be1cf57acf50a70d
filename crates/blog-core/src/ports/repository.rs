use async_trait::async_trait;

use crate::domain::{BlogPost, BlogPostDraft, PostId};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Blog post repository - the sole owner of the post collection.
///
/// Absence is a value: lookups return `None` and deletes return `false`
/// when no post matches.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// All posts, in insertion order.
    async fn get_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// One page of all posts, newest first.
    async fn get_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError>;

    /// Posts matching `term`, in insertion order. A blank term returns everything.
    async fn search(&self, term: &str) -> Result<Vec<BlogPost>, RepoError>;

    /// One page of matching posts, newest first. A blank term pages everything.
    async fn search_page(
        &self,
        term: &str,
        request: PageRequest,
    ) -> Result<Page<BlogPost>, RepoError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: PostId) -> Result<Option<BlogPost>, RepoError>;

    /// Store a new post under the next ID, stamped with the current time.
    async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, RepoError>;

    /// Replace the post with `id`, keeping its ID and creation time.
    async fn update(&self, id: PostId, draft: BlogPostDraft)
        -> Result<Option<BlogPost>, RepoError>;

    /// Remove the post with `id`. Returns whether anything was removed.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;
}
