//! In-memory blog post repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;
use blog_core::search::{self, SearchTerm};
use blog_core::{BlogPost, BlogPostDraft, Page, PageRequest, PostId};

use super::seed::sample_posts;

struct PostStore {
    posts: Vec<BlogPost>,
    next_id: PostId,
}

impl PostStore {
    fn newest_first(&self, term: Option<&SearchTerm>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = match term {
            Some(term) => self
                .posts
                .iter()
                .filter(|post| term.matches(post))
                .cloned()
                .collect(),
            None => self.posts.clone(),
        };
        search::newest_first(&mut posts);
        posts
    }
}

/// In-memory post store behind a single async RwLock.
///
/// The post list and the ID counter share the lock, so IDs are never
/// handed out twice. IDs are not reused after a delete.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<PostStore>,
}

impl InMemoryBlogPostRepository {
    /// An empty store whose first post gets ID 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store pre-populated with the demo posts.
    pub fn with_sample_data() -> Self {
        Self::with_posts(sample_posts(Utc::now()))
    }

    /// A store holding `posts`; new IDs continue after the largest existing one.
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        Self {
            store: RwLock::new(PostStore { posts, next_id }),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn get_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        tracing::info!(count = store.posts.len(), "Getting all blog posts from repository");
        Ok(store.posts.clone())
    }

    async fn get_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError> {
        tracing::info!(
            page_number = request.page_number(),
            page_size = request.page_size(),
            "Getting paged blog posts from repository"
        );

        let store = self.store.read().await;
        Ok(Page::paginate(store.newest_first(None), request))
    }

    async fn search(&self, term: &str) -> Result<Vec<BlogPost>, RepoError> {
        tracing::info!(search_term = %term, "Searching blog posts in repository");

        let store = self.store.read().await;
        Ok(search::filter_posts(&store.posts, term))
    }

    async fn search_page(
        &self,
        term: &str,
        request: PageRequest,
    ) -> Result<Page<BlogPost>, RepoError> {
        tracing::info!(
            search_term = %term,
            page_number = request.page_number(),
            page_size = request.page_size(),
            "Searching paged blog posts in repository"
        );

        let term = SearchTerm::parse(term);
        let store = self.store.read().await;
        Ok(Page::paginate(store.newest_first(term.as_ref()), request))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(post_id = id, "Finding blog post by id");

        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let post = BlogPost::create(id, draft, Utc::now());
        store.posts.push(post.clone());

        tracing::info!(post_id = id, "Created new blog post");
        Ok(post)
    }

    async fn update(
        &self,
        id: PostId,
        draft: BlogPostDraft,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;

        let Some(existing) = store.posts.iter_mut().find(|p| p.id == id) else {
            tracing::warn!(post_id = id, "Blog post not found for update");
            return Ok(None);
        };

        *existing = existing.revise(draft, Utc::now());

        tracing::info!(post_id = id, "Updated blog post");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;

        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);
        let removed = store.posts.len() < before;

        if removed {
            tracing::info!(post_id = id, "Deleted blog post");
        } else {
            tracing::warn!(post_id = id, "Blog post not found for deletion");
        }
        Ok(removed)
    }
}
