//! Typed identifiers shared across the catalog.
//!
//! Identifiers are fixture-style strings (`post-1`, `author-2`,
//! `comment-1690000000000-0`). Newtypes keep a post id from being handed to
//! an author lookup; the inner string is the wire/fixture representation.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a blog post.
    PostId
);
string_id!(
    /// Identifier of an author.
    AuthorId
);
string_id!(
    /// Identifier of a comment.
    CommentId
);

/// Manually-flagged promotional subsets of the post catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostFlag {
    Featured,
    Trending,
}

impl PostFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            PostFlag::Featured => "featured",
            PostFlag::Trending => "trending",
        }
    }
}
