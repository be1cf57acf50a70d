//! # Blog Core
//!
//! The domain layer of the blog API.
//! Entities, pagination, search, validation and the post service live here;
//! storage is reached only through the ports in [`ports`].

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod search;
pub mod service;
pub mod validation;

pub use domain::{BlogPost, BlogPostDraft, PostId};
pub use error::RepoError;
pub use pagination::{Page, PageRequest};
pub use service::{BlogPostService, PostOutcome};
pub use validation::{BlogPostValidator, PostValidator};
