//! Foglio: an embedded content catalog for blog front-ends.
//!
//! The catalog holds blog posts, authors, and comment threads in an
//! in-memory store seeded from a fixture set, and answers queries through
//! [`application::catalog::CatalogService`]. Persistence adapters plug in
//! behind the repository traits in [`application::repos`]; the bundled
//! adapter is [`infra::memory::MemoryCatalog`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
