//! The question entity and its variants.
//!
//! A [`Question`] carries the identity, statement and tag set shared by every
//! kind of question; the kind-specific answer and sizing behavior lives in
//! [`QuestionKind`].

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::QuizError;
use crate::id::{IdAllocator, QuestionId};
use crate::tag::Tag;

/// A quiz question.
///
/// Questions are not `Clone`: a question exists once and is referenced by id.
/// Equality and hashing go through the id alone.
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    statement: String,
    tags: BTreeSet<Tag>,
    #[serde(flatten)]
    kind: QuestionKind,
}

/// Kind-specific answer data.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuestionKind {
    Choice(ChoiceQuestion),
    Free(FreeQuestion),
}

/// A multiple-choice question. The correct proposition is always stored first.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceQuestion {
    propositions: Vec<String>,
}

/// An open question with a single expected answer.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FreeQuestion {
    correct_answer: String,
}

impl ChoiceQuestion {
    /// Moves `propositions[correct_index]` to the front.
    ///
    /// An out-of-range index leaves the list untouched, making the first
    /// proposition (if any) the answer.
    fn new(propositions: Vec<String>, correct_index: i64) -> Self {
        let mut propositions = propositions;
        match usize::try_from(correct_index) {
            Ok(index) if index < propositions.len() => propositions.swap(0, index),
            _ => {
                tracing::warn!(
                    correct_index,
                    propositions = propositions.len(),
                    "correct answer index out of range, keeping propositions as given"
                );
            }
        }
        Self { propositions }
    }

    pub fn propositions(&self) -> &[String] {
        &self.propositions
    }

    pub fn answer(&self) -> &str {
        self.propositions.first().map(String::as_str).unwrap_or("")
    }

    /// Propositions as `1)a 2)b ...`, in the given order.
    pub(crate) fn enumerate<'a>(propositions: impl IntoIterator<Item = &'a String>) -> String {
        propositions
            .into_iter()
            .enumerate()
            .map(|(i, p)| format!("{}){p}", i + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FreeQuestion {
    pub fn answer(&self) -> &str {
        &self.correct_answer
    }
}

impl QuestionKind {
    pub fn answer(&self) -> &str {
        match self {
            QuestionKind::Choice(choice) => choice.answer(),
            QuestionKind::Free(free) => free.answer(),
        }
    }

    /// Character count of the rendered subject for a given statement.
    pub fn subject_size(&self, statement: &str) -> usize {
        match self {
            QuestionKind::Choice(choice) => {
                let rendered = ChoiceQuestion::enumerate(&choice.propositions);
                statement.chars().count() + 1 + rendered.chars().count()
            }
            QuestionKind::Free(_) => statement.chars().count(),
        }
    }

    /// Short lowercase label: `choice` or `free`.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Choice(_) => "choice",
            QuestionKind::Free(_) => "free",
        }
    }
}

impl Question {
    /// Build a multiple-choice question.
    ///
    /// `correct_index` points into `propositions` as given; that proposition
    /// is swapped to position 0. Negative or too-large indices are tolerated
    /// and leave the order unchanged.
    pub fn choice(
        ids: &IdAllocator,
        statement: impl Into<String>,
        propositions: Vec<String>,
        correct_index: i64,
    ) -> Self {
        Self::new(
            ids,
            statement.into(),
            QuestionKind::Choice(ChoiceQuestion::new(propositions, correct_index)),
        )
    }

    /// Build a free-answer question. The answer may be empty.
    pub fn free(
        ids: &IdAllocator,
        statement: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self::new(
            ids,
            statement.into(),
            QuestionKind::Free(FreeQuestion {
                correct_answer: correct_answer.into(),
            }),
        )
    }

    fn new(ids: &IdAllocator, statement: String, kind: QuestionKind) -> Self {
        Self {
            id: ids.next_id(),
            statement,
            tags: BTreeSet::new(),
            kind,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::Choice(_))
    }

    /// Add a tag. Returns `false` if the question already had it.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Add a tag by name, matched case-insensitively.
    pub fn add_tag_name(&mut self, name: &str) -> Result<bool, QuizError> {
        let tag = name.parse()?;
        Ok(self.add_tag(tag))
    }

    /// Whether `other` has the same statement and answer data, ignoring id and tags.
    pub fn same_content(&self, other: &Question) -> bool {
        self.statement == other.statement && self.kind == other.kind
    }

    /// The canonical correct answer.
    pub fn answer(&self) -> &str {
        self.kind.answer()
    }

    /// Character length of the fully rendered subject: the statement and, for
    /// choice questions, every proposition in stored order. Used to estimate
    /// display cost; independent of the shuffled presentation order.
    pub fn subject_size(&self) -> usize {
        self.kind.subject_size(&self.statement)
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Diagnostic form: `[id] [TAG, TAG] statement`.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}] [{}] {}", self.id, tags, self.statement)
    }
}
