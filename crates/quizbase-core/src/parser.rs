//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories, validates them, and
//! registers their questions into a [`Base`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::base::Base;
use crate::error::QuizError;
use crate::id::{IdAllocator, QuestionId};
use crate::question::Question;
use crate::tag::Tag;

/// Intermediate TOML structure for parsing question-set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TomlQuestion {
    Choice {
        statement: String,
        #[serde(default)]
        propositions: Vec<String>,
        #[serde(default)]
        correct: i64,
        #[serde(default)]
        tags: Vec<String>,
    },
    Free {
        statement: String,
        #[serde(default)]
        answer: String,
        #[serde(default)]
        tags: Vec<String>,
    },
}

/// A question definition as written in a question set, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionDef {
    Choice {
        statement: String,
        propositions: Vec<String>,
        correct: i64,
        tags: Vec<Tag>,
    },
    Free {
        statement: String,
        answer: String,
        tags: Vec<Tag>,
    },
}

impl QuestionDef {
    pub fn statement(&self) -> &str {
        match self {
            QuestionDef::Choice { statement, .. } | QuestionDef::Free { statement, .. } => {
                statement
            }
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            QuestionDef::Choice { tags, .. } | QuestionDef::Free { tags, .. } => tags,
        }
    }

    /// Build a tagged [`Question`] with a fresh id.
    pub fn build(&self, ids: &IdAllocator) -> Question {
        let mut question = match self {
            QuestionDef::Choice {
                statement,
                propositions,
                correct,
                ..
            } => Question::choice(ids, statement.clone(), propositions.clone(), *correct),
            QuestionDef::Free {
                statement, answer, ..
            } => Question::free(ids, statement.clone(), answer.clone()),
        };
        for tag in self.tags() {
            question.add_tag(*tag);
        }
        question
    }
}

/// A named collection of question definitions.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    /// Unique identifier for this question set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionDef>,
}

impl QuestionSet {
    /// Build every question and register it in `base`.
    ///
    /// Questions without tags are filed under `default_tag` when one is
    /// given, otherwise they are pooled without an index entry. Stops at the
    /// first id collision; questions registered before it stay pooled.
    pub fn register(
        &self,
        base: &mut Base,
        ids: &IdAllocator,
        default_tag: Option<Tag>,
    ) -> Result<Vec<QuestionId>, QuizError> {
        let registered: Vec<QuestionId> = self
            .questions
            .iter()
            .map(|def| {
                let question = def.build(ids);
                match default_tag {
                    Some(tag) if question.tags().is_empty() => base.add_element(tag, question),
                    _ => base.insert(question),
                }
            })
            .collect::<Result<_, _>>()?;

        tracing::info!(
            set = %self.id,
            questions = registered.len(),
            "registered question set"
        );
        Ok(registered)
    }
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| {
            into_def(q)
                .with_context(|| format!("question #{} in {}", index + 1, source_path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSet {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions,
    })
}

fn into_def(question: TomlQuestion) -> Result<QuestionDef> {
    let def = match question {
        TomlQuestion::Choice {
            statement,
            propositions,
            correct,
            tags,
        } => QuestionDef::Choice {
            statement,
            propositions,
            correct,
            tags: parse_tags(&tags)?,
        },
        TomlQuestion::Free {
            statement,
            answer,
            tags,
        } => QuestionDef::Free {
            statement,
            answer,
            tags: parse_tags(&tags)?,
        },
    };
    Ok(def)
}

fn parse_tags(names: &[String]) -> Result<Vec<Tag>> {
    let mut tags = Vec::with_capacity(names.len());
    for name in names {
        let tag: Tag = name.parse()?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Recursively load all `.toml` question-set files from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a single file, or every set under a directory.
pub fn load_question_sets(path: &Path) -> Result<Vec<QuestionSet>> {
    if path.is_dir() {
        load_question_directory(path)
    } else {
        Ok(vec![parse_question_set(path)?])
    }
}

/// A warning from question-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in its set (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |index: usize, message: String| {
        warnings.push(ValidationWarning {
            question: Some(index + 1),
            message,
        })
    };

    // Check for duplicate statements
    let mut seen = std::collections::HashSet::new();
    for (i, def) in set.questions.iter().enumerate() {
        if !seen.insert(def.statement().trim()) {
            warn(i, format!("duplicate statement: {}", def.statement().trim()));
        }
    }

    for (i, def) in set.questions.iter().enumerate() {
        if def.statement().trim().is_empty() {
            warn(i, "statement is empty".into());
        }
        if def.tags().is_empty() {
            warn(i, "question has no tags".into());
        }
        if let QuestionDef::Choice {
            propositions,
            correct,
            ..
        } = def
        {
            if propositions.is_empty() {
                warn(i, "choice question has no propositions".into());
            } else if usize::try_from(*correct).map_or(true, |c| c >= propositions.len()) {
                warn(
                    i,
                    format!(
                        "correct index {correct} is out of range for {} propositions; \
                         the first proposition will be treated as the answer",
                        propositions.len()
                    ),
                );
            }
        }
    }

    warnings
}
