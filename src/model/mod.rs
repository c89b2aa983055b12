//! Data model for the tutorial catalog.
//!
//! This module defines the core data structures:
//!
//! - [`Tutorial`]: a published tutorial with embedded author and comments
//! - [`Author`]: the writer of a tutorial, with a back-reference id list
//! - [`Comment`]: a single reader comment
//! - [`Catalog`]: the immutable, ordered collection of all tutorials

mod catalog;
mod tutorial;

pub use catalog::Catalog;
pub use tutorial::{Author, Comment, Tutorial};
