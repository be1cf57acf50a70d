//! Repository implementations.

mod memory;
mod seed;

pub use memory::InMemoryBlogPostRepository;
pub use seed::sample_posts;
