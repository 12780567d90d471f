//! quizbase-core — Question model, tag index, and question-set loading.
//!
//! This crate defines the question entity and its variants, the tag-indexed
//! [`Base`] repository, and the loaders that the rest of quizbase builds on.

pub mod base;
pub mod config;
pub mod error;
pub mod id;
pub mod parser;
pub mod question;
pub mod render;
pub mod shared;
pub mod tag;

pub use base::Base;
pub use error::QuizError;
pub use id::{IdAllocator, QuestionId};
pub use question::{ChoiceQuestion, FreeQuestion, Question, QuestionKind};
pub use shared::SharedBase;
pub use tag::Tag;
