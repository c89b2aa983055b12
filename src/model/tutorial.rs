use serde::{Deserialize, Serialize};

/// A published tutorial with its author and reader comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: i32,
    pub title: String,
    pub author: Author,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl Tutorial {
    pub fn new(id: i32, title: impl Into<String>, author: Author) -> Self {
        Self {
            id,
            title: title.into(),
            author,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

/// The writer of a tutorial.
///
/// `tutorials` is a denormalized list of the ids this author has written,
/// kept only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tutorials: Vec<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>, tutorials: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            tutorials,
        }
    }
}

/// A single reader comment, owned by exactly one tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
