//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Currently a single in-memory post store; data does not survive a restart.

pub mod repository;

pub use repository::InMemoryBlogPostRepository;
