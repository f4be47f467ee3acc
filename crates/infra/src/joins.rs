//! Read-time resolution of reference fields.
//!
//! References are never assumed to be valid: a dangling ID resolves to
//! `None` rather than an error.

use std::collections::HashMap;

use wayfarer_accounts::User;
use wayfarer_content::{AuthorSummary, Blog, BlogView};
use wayfarer_core::UserId;

use crate::repository::{Repository, RepositoryResult};

/// List every blog with its `author` resolved to the author's name only.
///
/// Each distinct author is looked up once.
pub async fn blogs_with_authors(
    blogs: &Repository<Blog>,
    users: &Repository<User>,
) -> RepositoryResult<Vec<BlogView>> {
    let listed = blogs.list().await?;

    let mut authors: HashMap<UserId, Option<AuthorSummary>> = HashMap::new();
    for author_id in listed.iter().filter_map(|b| b.author) {
        if authors.contains_key(&author_id) {
            continue;
        }
        let summary = users
            .get(author_id)
            .await?
            .map(|user| AuthorSummary { name: user.name });
        authors.insert(author_id, summary);
    }

    Ok(listed
        .into_iter()
        .map(|blog| {
            let author = blog.author.and_then(|id| authors.get(&id).cloned().flatten());
            blog.populate(author)
        })
        .collect())
}
