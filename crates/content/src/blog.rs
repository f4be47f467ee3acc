use serde::{Deserialize, Serialize};

use wayfarer_core::{BlogId, Collection, Document, DomainResult, NewDocument, UserId};

/// Stored blog post. `author` is a loose reference to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: BlogId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserId>,
}

impl Document for Blog {
    type Id = BlogId;

    const COLLECTION: Collection = Collection::Blogs;

    fn id(&self) -> BlogId {
        self.id
    }
}

impl Blog {
    /// Attach the resolved author. `None` means the reference was absent or dangling.
    pub fn populate(self, author: Option<AuthorSummary>) -> BlogView {
        BlogView {
            id: self.id,
            title: self.title,
            content: self.content,
            author,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserId>,
}

impl NewDocument for BlogDraft {
    type Document = Blog;

    /// Blogs have no required fields.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// The part of a user exposed on a listed blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
}

/// A blog as returned by the listing, with `author` resolved to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogView {
    #[serde(rename = "_id")]
    pub id: BlogId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub author: Option<AuthorSummary>,
}
