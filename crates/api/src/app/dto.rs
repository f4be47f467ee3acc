use serde::Deserialize;

use wayfarer_accounts::UserDraft;
use wayfarer_content::{BlogDraft, DestinationDraft};
use wayfarer_core::{DomainResult, cast::optional_text, parse_reference};

// -------------------------
// Request DTOs
// -------------------------

/// `author` arrives as a raw string and is cast to an ID when mapped.
///
/// Text fields here accept any JSON scalar and read it as a string.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateDestinationRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub password: Option<String>,
}

// -------------------------
// Draft mapping
// -------------------------

impl CreateBlogRequest {
    pub fn into_draft(self) -> DomainResult<BlogDraft> {
        Ok(BlogDraft {
            title: self.title,
            content: self.content,
            author: parse_reference(self.author.as_deref())?,
        })
    }
}

impl From<CreateDestinationRequest> for DestinationDraft {
    fn from(req: CreateDestinationRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            location: req.location,
            image: req.image,
        }
    }
}

impl From<RegisterRequest> for UserDraft {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}
