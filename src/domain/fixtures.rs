//! Fixture catalog standing in for a real persistence layer.
//!
//! The same records are produced on every call, so each process start sees
//! an identical catalog: three authors, six posts, and one comment thread.
//! Stores seed themselves from [`seed`] and own the copies from then on.

mod data;

use crate::domain::entities::{AuthorRecord, CommentRecord, PostRecord};

/// The complete seed set for a catalog store.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub authors: Vec<AuthorRecord>,
    pub posts: Vec<PostRecord>,
    pub comments: Vec<CommentRecord>,
}

/// Build the fixture catalog. Order is significant: list queries answer in
/// this order.
pub fn seed() -> FixtureSet {
    FixtureSet {
        authors: data::authors(),
        posts: data::posts(),
        comments: data::comments(),
    }
}
