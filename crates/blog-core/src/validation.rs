//! Field rules for blog posts.

use crate::domain::BlogPostDraft;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_AUTHOR_CHARS: usize = 50;
pub const MAX_TAGS: usize = 10;

/// Checks a draft against the post rules.
///
/// Implementations must be pure; the service calls them before touching storage.
pub trait PostValidator: Send + Sync {
    /// Every rule violation, in rule order. Empty means valid.
    fn validate(&self, draft: &BlogPostDraft) -> Vec<String>;
}

/// The standard rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogPostValidator;

impl BlogPostValidator {
    pub fn new() -> Self {
        Self
    }
}

impl PostValidator for BlogPostValidator {
    fn validate(&self, draft: &BlogPostDraft) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(&draft.title) {
            errors.push("Title is required.".to_string());
        }
        if char_len(&draft.title) > MAX_TITLE_CHARS {
            errors.push(format!(
                "Title must not exceed {MAX_TITLE_CHARS} characters."
            ));
        }

        if is_blank(&draft.content) {
            errors.push("Content is required.".to_string());
        }

        if is_blank(&draft.author) {
            errors.push("Author is required.".to_string());
        }
        if char_len(&draft.author) > MAX_AUTHOR_CHARS {
            errors.push(format!(
                "Author name must not exceed {MAX_AUTHOR_CHARS} characters."
            ));
        }

        if draft.tags.len() > MAX_TAGS {
            errors.push(format!("A blog post can have at most {MAX_TAGS} tags."));
        }

        errors
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BlogPostDraft {
        BlogPostDraft::new("Title", "Content", "Author").with_tags(["rust"])
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(BlogPostValidator::new().validate(&valid()).is_empty());
    }

    #[test]
    fn test_collects_every_violation() {
        let draft = BlogPostDraft::new("", "", "x".repeat(51));

        let errors = BlogPostValidator.validate(&draft);

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&"Title is required.".to_string()));
        assert!(errors.contains(&"Content is required.".to_string()));
        assert!(errors.contains(&"Author name must not exceed 50 characters.".to_string()));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let draft = BlogPostDraft::new("  ", "\n", "Author");

        let errors = BlogPostValidator.validate(&draft);

        assert_eq!(errors, vec!["Title is required.", "Content is required."]);
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let at_limit = BlogPostDraft::new("t".repeat(100), "c", "a".repeat(50));
        assert!(BlogPostValidator.validate(&at_limit).is_empty());

        let over = BlogPostDraft::new("t".repeat(101), "c", "a");
        assert_eq!(
            BlogPostValidator.validate(&over),
            vec!["Title must not exceed 100 characters."]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let draft = BlogPostDraft::new("é".repeat(100), "c", "ü".repeat(50));
        assert!(BlogPostValidator.validate(&draft).is_empty());
    }

    #[test]
    fn test_tag_limit() {
        let ten = valid().with_tags((0..10).map(|i| format!("tag{i}")));
        assert!(BlogPostValidator.validate(&ten).is_empty());

        let eleven = valid().with_tags((0..11).map(|i| format!("tag{i}")));
        assert_eq!(
            BlogPostValidator.validate(&eleven),
            vec!["A blog post can have at most 10 tags."]
        );
    }
}
