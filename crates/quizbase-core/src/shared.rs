//! Thread-safe handle to a [`Base`].
//!
//! One lock guards the pool and the index together, so readers never see a
//! question in a bucket without it being in the pool.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::base::Base;
use crate::error::QuizError;
use crate::id::QuestionId;
use crate::question::Question;
use crate::tag::Tag;

/// Cloneable, lock-guarded [`Base`].
#[derive(Debug, Clone, Default)]
pub struct SharedBase {
    inner: Arc<RwLock<Base>>,
}

impl SharedBase {
    pub fn new(base: Base) -> Self {
        Self {
            inner: Arc::new(RwLock::new(base)),
        }
    }

    // Every Base mutation restores its invariants before returning, so a
    // writer that panicked cannot leave a half-applied change behind.
    fn write(&self) -> RwLockWriteGuard<'_, Base> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Base> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, question: Question) -> Result<QuestionId, QuizError> {
        self.write().insert(question)
    }

    pub fn add_element(&self, tag: Tag, question: Question) -> Result<QuestionId, QuizError> {
        self.write().add_element(tag, question)
    }

    pub fn add_tag(&self, id: QuestionId, tag: Tag) -> bool {
        self.write().add_tag(id, tag)
    }

    pub fn add_tag_name(&self, id: QuestionId, name: &str) -> Result<bool, QuizError> {
        self.write().add_tag_name(id, name)
    }

    pub fn remove_element(&self, id: QuestionId) -> Option<Question> {
        self.write().remove_element(id)
    }

    /// Run `f` against a consistent snapshot of the base.
    pub fn read<T>(&self, f: impl FnOnce(&Base) -> T) -> T {
        f(&self.read_guard())
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Unwrap the base if this is the last handle, otherwise hand `self` back.
    pub fn try_into_inner(self) -> Result<Base, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl From<Base> for SharedBase {
    fn from(base: Base) -> Self {
        Self::new(base)
    }
}
