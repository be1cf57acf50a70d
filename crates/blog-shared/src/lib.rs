//! # Blog Shared
//!
//! Wire types shared by the server and its clients: the response envelope
//! and request query shapes.

pub mod dto;
pub mod response;

pub use response::ApiResponse;
