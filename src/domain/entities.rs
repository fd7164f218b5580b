//! Entity records held by the catalog store.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;
use url::Url;

use crate::domain::types::{AuthorId, CommentId, PostFlag, PostId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRecord {
    pub id: AuthorId,
    pub name: String,
    pub avatar_url: Url,
    pub bio: String,
    /// Social profile links keyed by free-form platform name.
    pub social_links: BTreeMap<String, Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    /// Markdown body; fenced code blocks pass through untouched.
    pub body_markdown: String,
    pub cover_image_url: Url,
    pub published_on: Date,
    /// Owning author. Not enforced against the author set: a dangling
    /// reference makes the author lookup return nothing.
    pub author_id: AuthorId,
    /// Ordered, free-form tag strings. No normalization or uniqueness.
    pub tags: Vec<String>,
    pub featured: bool,
    pub trending: bool,
}

impl PostRecord {
    pub fn has_flag(&self, flag: PostFlag) -> bool {
        match flag {
            PostFlag::Featured => self.featured,
            PostFlag::Trending => self.trending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRecord {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub body: String,
    pub posted_on: Date,
    pub likes: u32,
    /// One observed level of nesting; thread reconstruction is the caller's job.
    pub parent_id: Option<CommentId>,
}
