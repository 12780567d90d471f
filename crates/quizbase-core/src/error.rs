//! Core error types.
//!
//! The question model fails in two places: resolving free text into a
//! [`Tag`](crate::tag::Tag), and pooling a question whose id is already taken
//! by a different question (ids drawn from two separate allocators). Duplicate
//! inserts of the same question, removing an absent question and querying an
//! empty category are no-ops rather than errors. Loader and configuration
//! failures are reported through `anyhow`.

use thiserror::Error;

use crate::id::QuestionId;

/// Errors raised by the question model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The name does not match any enumerated tag.
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// A different question already holds this id.
    #[error("question id {id} is already taken by a different question (refused: {statement:?})")]
    IdCollision { id: QuestionId, statement: String },
}

impl QuizError {
    /// The rejected tag name, for `InvalidTag`.
    pub fn invalid_tag_name(&self) -> Option<&str> {
        match self {
            QuizError::InvalidTag(name) => Some(name),
            QuizError::IdCollision { .. } => None,
        }
    }
}
