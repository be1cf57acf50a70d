use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned to a post by the repository.
///
/// 32-bit, so path segments outside `i32` range are rejected as malformed.
pub type PostId = i32;

/// Blog post entity as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The client-controlled fields of a post.
///
/// Request bodies decode into a draft, so any `id`, `createdAt` or
/// `updatedAt` sent by a client never reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

impl BlogPostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl BlogPost {
    /// Build a freshly created post from a draft.
    pub fn create(id: PostId, draft: BlogPostDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at,
            updated_at: None,
            tags: draft.tags,
        }
    }

    /// Replace every client field with the draft's, keeping `id` and `created_at`.
    pub fn revise(&self, draft: BlogPostDraft, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: self.created_at,
            updated_at: Some(updated_at),
            tags: draft.tags,
        }
    }
}

/// Explicit `null` decodes like a missing field, leaving the rules to the validator.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_draft_ignores_server_fields() {
        let body = r#"{
            "id": 999,
            "title": "Hello",
            "content": "World",
            "author": "Ann",
            "createdAt": "2001-01-01T00:00:00Z",
            "updatedAt": "2001-01-02T00:00:00Z",
            "tags": ["a", "b"]
        }"#;

        let draft: BlogPostDraft = serde_json::from_str(body).unwrap();

        assert_eq!(
            draft,
            BlogPostDraft::new("Hello", "World", "Ann").with_tags(["a", "b"])
        );
    }

    #[test]
    fn test_draft_defaults_missing_fields() {
        let draft: BlogPostDraft = serde_json::from_str(r#"{"title": "Only", "tags": null}"#).unwrap();

        assert_eq!(draft.title, "Only");
        assert!(draft.content.is_empty());
        assert!(draft.author.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_treats_null_strings_as_empty() {
        let draft: BlogPostDraft =
            serde_json::from_str(r#"{"title": null, "content": "c", "author": null}"#).unwrap();

        assert!(draft.title.is_empty());
        assert_eq!(draft.content, "c");
        assert!(draft.author.is_empty());
    }

    #[test]
    fn test_revise_keeps_identity_and_creation_time() {
        let created = Utc::now() - Duration::days(3);
        let original = BlogPost::create(7, BlogPostDraft::new("a", "b", "c").with_tags(["x"]), created);
        let now = Utc::now();

        let revised = original.revise(BlogPostDraft::new("new", "body", "me"), now);

        assert_eq!(revised.id, 7);
        assert_eq!(revised.created_at, created);
        assert_eq!(revised.updated_at, Some(now));
        assert_eq!(revised.title, "new");
        assert!(revised.tags.is_empty());
    }

    #[test]
    fn test_post_serializes_camel_case_and_omits_missing_update() {
        let post = BlogPost::create(1, BlogPostDraft::new("t", "c", "a"), Utc::now());

        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
