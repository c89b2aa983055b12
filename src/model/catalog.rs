use tracing::debug;

use super::{Author, Comment, Tutorial};

/// The fixed, read-only collection of tutorials served by the schema.
///
/// Built once at startup and never mutated afterwards, so it is safe to
/// share behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tutorials: Vec<Tutorial>,
}

impl Catalog {
    /// Build the demo dataset: two tutorials with their authors and comments.
    pub fn populate() -> Self {
        let tutorials = vec![
            Tutorial::new(1, "Magic Covers", Author::new("PSJohn", vec![1]))
                .with_comments(vec![Comment::new("First review comment")]),
            Tutorial::new(2, "Harry Potter Covers", Author::new("JK. Rowling", vec![2]))
                .with_comments(vec![
                    Comment::new("Second review comment"),
                    Comment::new("Third review comment"),
                ]),
        ];

        debug!(count = tutorials.len(), "populated tutorial catalog");
        Self { tutorials }
    }

    /// Wrap an arbitrary set of tutorials, preserving the given order.
    pub fn from_tutorials(tutorials: Vec<Tutorial>) -> Self {
        Self { tutorials }
    }

    /// Every tutorial, in insertion order.
    pub fn all(&self) -> &[Tutorial] {
        &self.tutorials
    }

    /// First tutorial with a matching id, in stored order.
    pub fn find(&self, id: i32) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }
}
