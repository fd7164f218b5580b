//! In-memory repository implementations backing the catalog.
//!
//! One [`MemoryCatalog`] owns the post, author, and comment collections
//! behind `tokio` read-write locks, seeded from the fixture set. Reads take
//! shared guards, writes exclusive guards, and no guard is held across an
//! await point, so queries never contend beyond a single store operation.

mod authors;
mod comments;
mod posts;

use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::entities::{AuthorRecord, CommentRecord, PostRecord};
use crate::domain::fixtures::{self, FixtureSet};

pub struct MemoryCatalog {
    posts: RwLock<Vec<PostRecord>>,
    authors: RwLock<Vec<AuthorRecord>>,
    comments: RwLock<Vec<CommentRecord>>,
    id_sequence: AtomicU64,
}

impl MemoryCatalog {
    /// A catalog seeded with the bundled fixture set, identical on every
    /// process start.
    pub fn seeded() -> Self {
        Self::from_fixture_set(fixtures::seed())
    }

    /// A catalog seeded from an arbitrary set; tests use this for small
    /// hand-built catalogs.
    pub fn from_fixture_set(set: FixtureSet) -> Self {
        Self {
            posts: RwLock::new(set.posts),
            authors: RwLock::new(set.authors),
            comments: RwLock::new(set.comments),
            id_sequence: AtomicU64::new(0),
        }
    }

    /// Mint a time-based identifier: `<prefix>-<unix millis>-<sequence>`.
    ///
    /// The monotonic sequence keeps two mints within the same millisecond
    /// distinct.
    fn mint_id(&self, prefix: &str) -> String {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let sequence = self.id_sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{millis}-{sequence}")
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
