//! GraphQL schema and resolvers for the tutorial catalog.
//!
//! The schema exposes two root fields over an immutable [`Catalog`]:
//!
//! - `tutorial(id)`: look a tutorial up by id; unknown, missing, or badly
//!   typed ids resolve to null rather than an error
//! - `list`: every tutorial, in catalog order
//!
//! [`Catalog`]: crate::model::Catalog

mod schema;
mod types;

pub use schema::{CatalogSchema, QueryRoot, build_schema, execute, render};
pub use types::*;
