//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizbase_core::config::{load_config_from, QuizbaseConfig};
use quizbase_core::parser::{load_question_sets, QuestionSet};
use quizbase_core::{Base, IdAllocator, Tag};

pub mod init;
pub mod list;
pub mod show;
pub mod tags;
pub mod validate;

/// Question sets loaded into a fresh base.
pub struct Loaded {
    pub sets: Vec<QuestionSet>,
    pub base: Base,
}

pub fn load_config(config_path: Option<&Path>) -> Result<QuizbaseConfig> {
    load_config_from(config_path)
}

/// The explicit path if given, otherwise the configured question directory.
pub fn resolve_sets(path: Option<PathBuf>, config: &QuizbaseConfig) -> Result<Vec<QuestionSet>> {
    let path = path.unwrap_or_else(|| config.question_dir.clone());
    load_question_sets(&path)
        .with_context(|| format!("failed to load question sets from {}", path.display()))
}

/// Load every set under `path` into one base, sharing a single id allocator.
pub fn load_base(path: Option<PathBuf>, config: &QuizbaseConfig) -> Result<Loaded> {
    let sets = resolve_sets(path, config)?;
    let ids = IdAllocator::new();
    let mut base = Base::new();
    for set in &sets {
        set.register(&mut base, &ids, config.default_tag)
            .with_context(|| format!("failed to register question set {}", set.id))?;
    }
    Ok(Loaded { sets, base })
}

/// Resolve an optional `--tag` argument, listing the valid names on failure.
pub fn parse_tag(name: Option<&str>) -> Result<Option<Tag>> {
    let Some(name) = name else {
        return Ok(None);
    };
    name.parse::<Tag>().map(Some).map_err(|e| {
        let valid = Tag::ALL.iter().map(|tag| tag.name()).collect::<Vec<_>>().join(", ");
        anyhow::anyhow!(
            "invalid tag: {} (expected one of: {valid})",
            e.invalid_tag_name().unwrap_or(name)
        )
    })
}
