//! # Tutoriq - an in-memory tutorial catalog queried through GraphQL
//!
//! Tutoriq is a worked example of putting a GraphQL schema over a small,
//! fixed dataset with [async-graphql]. The catalog of tutorials (each with
//! an author and reader comments) is built once at startup and never
//! mutated; the schema exposes a by-id lookup and a full listing.
//!
//! The binary runs three canned queries against the schema and prints each
//! result as pretty JSON:
//!
//! ```bash
//! tutoriq
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and wire types
//! - [`logging`]: tracing setup
//! - [`model`]: Data models (Tutorial, Author, Comment, Catalog)
//!
//! [async-graphql]: https://docs.rs/async-graphql

/// Error types and result aliases.
///
/// Defines the `Error` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying the catalog.
pub mod graphql;

/// Data models for the tutorial catalog.
///
/// Includes `Tutorial`, `Author`, `Comment`, and the `Catalog` they live in.
pub mod model;

pub mod logging;
