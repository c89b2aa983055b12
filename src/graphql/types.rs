use async_graphql::{InputValueResult, Scalar, ScalarType, SimpleObject, Value};

use crate::model;

/// Lenient tutorial id argument.
///
/// Decodes any non-integer input (strings, floats, null) to "no id" instead
/// of rejecting the query, so a badly typed lookup resolves to a null
/// tutorial rather than an execution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialId(Option<i32>);

impl TutorialId {
    pub fn get(self) -> Option<i32> {
        self.0
    }
}

impl From<i32> for TutorialId {
    fn from(id: i32) -> Self {
        Self(Some(id))
    }
}

#[Scalar]
impl ScalarType for TutorialId {
    fn parse(value: Value) -> InputValueResult<Self> {
        let id = match value {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            _ => None,
        };
        Ok(TutorialId(id))
    }

    fn to_value(&self) -> Value {
        match self.0 {
            Some(id) => Value::Number(id.into()),
            None => Value::Null,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Tutorial {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub comments: Vec<Comment>,
}

impl From<&model::Tutorial> for Tutorial {
    fn from(t: &model::Tutorial) -> Self {
        Self {
            id: t.id,
            title: t.title.clone(),
            author: Author::from(&t.author),
            comments: t.comments.iter().map(Comment::from).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Author {
    pub name: String,
    pub tutorials: Vec<i32>,
}

impl From<&model::Author> for Author {
    fn from(a: &model::Author) -> Self {
        Self {
            name: a.name.clone(),
            tutorials: a.tutorials.clone(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Comment {
    pub body: String,
}

impl From<&model::Comment> for Comment {
    fn from(c: &model::Comment) -> Self {
        Self {
            body: c.body.clone(),
        }
    }
}
