//! Case-insensitive free-text search over posts.

use crate::domain::BlogPost;

/// A normalized, non-blank search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for blank input, which callers treat as "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    /// True when the term occurs in the title, content, author or any tag.
    pub fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.0.as_str();

        contains(&post.title, needle)
            || contains(&post.content, needle)
            || contains(&post.author, needle)
            || post.tags.iter().any(|tag| contains(tag, needle))
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keep matching posts in their original order.
///
/// A blank term leaves the collection untouched.
pub fn filter_posts<'a, I>(posts: I, raw_term: &str) -> Vec<BlogPost>
where
    I: IntoIterator<Item = &'a BlogPost>,
{
    match SearchTerm::parse(raw_term) {
        Some(term) => posts
            .into_iter()
            .filter(|post| term.matches(post))
            .cloned()
            .collect(),
        None => posts.into_iter().cloned().collect(),
    }
}

/// Order posts newest first. Posts created at the same instant keep their relative order.
pub fn newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
