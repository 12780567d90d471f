//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Top-level quizbase configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizbaseConfig {
    /// Where question sets are loaded from when no path is given.
    #[serde(default = "default_question_dir")]
    pub question_dir: PathBuf,
    /// Fixed seed for proposition shuffling (random when unset).
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
    /// Tag given to questions that a question set leaves untagged.
    #[serde(default)]
    pub default_tag: Option<Tag>,
}

fn default_question_dir() -> PathBuf {
    PathBuf::from("./question-sets")
}

impl Default for QuizbaseConfig {
    fn default() -> Self {
        Self {
            question_dir: default_question_dir(),
            shuffle_seed: None,
            default_tag: None,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizbase.toml` in the current directory
/// 2. `~/.config/quizbase/config.toml`
///
/// Environment variable overrides: `QUIZBASE_QUESTION_DIR`, `QUIZBASE_SEED`.
pub fn load_config() -> Result<QuizbaseConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbaseConfig> {
    load_config_with(path, |key| std::env::var(key).ok())
}

fn load_config_with(
    path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<QuizbaseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbase.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbaseConfig::default(),
    };

    apply_env_overrides(&mut config, var)?;
    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizbaseConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    config: &mut QuizbaseConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(dir) = var("QUIZBASE_QUESTION_DIR") {
        config.question_dir = PathBuf::from(dir);
    }

    if let Some(seed) = var("QUIZBASE_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("QUIZBASE_SEED is not an unsigned integer: {seed}"))?;
        config.shuffle_seed = Some(seed);
    }

    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbase"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = QuizbaseConfig::default();
        assert_eq!(config.question_dir, PathBuf::from("./question-sets"));
        assert!(config.shuffle_seed.is_none());
        assert!(config.default_tag.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
question_dir = "quizzes"
shuffle_seed = 42
default_tag = "GENERAL"
"#,
        )
        .unwrap();
        assert_eq!(config.question_dir, PathBuf::from("quizzes"));
        assert_eq!(config.shuffle_seed, Some(42));
        assert_eq!(config.default_tag, Some(Tag::General));
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), QuizbaseConfig::default());
    }

    #[test]
    fn parse_default_tag_case_insensitively() {
        let config = parse_config("default_tag = \"general\"").unwrap();
        assert_eq!(config.default_tag, Some(Tag::General));
        let config = parse_config("default_tag = \"Geo\"").unwrap();
        assert_eq!(config.default_tag, Some(Tag::Geo));
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        assert!(parse_config("default_tag = \"CHESS\"").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("QUIZBASE_QUESTION_DIR", "/srv/quiz"), ("QUIZBASE_SEED", " 9 ")]);
        let mut config = QuizbaseConfig::default();
        apply_env_overrides(&mut config, |k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.question_dir, PathBuf::from("/srv/quiz"));
        assert_eq!(config.shuffle_seed, Some(9));
    }

    #[test]
    fn bad_seed_override_is_an_error() {
        let mut config = QuizbaseConfig::default();
        let err = apply_env_overrides(&mut config, |k| {
            (k == "QUIZBASE_SEED").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("QUIZBASE_SEED"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_with(Some(&missing), |_| None).is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizbase.toml");
        std::fs::write(&path, "shuffle_seed = 3\n").unwrap();
        let config = load_config_with(Some(&path), |k| {
            (k == "QUIZBASE_SEED").then(|| "8".to_string())
        })
        .unwrap();
        assert_eq!(config.shuffle_seed, Some(8));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizbase.toml");
        std::fs::write(&path, "default_tag = \"math\"\nshuffle_seed = 3\n").unwrap();
        let config = load_config_with(Some(&path), |_| None).unwrap();
        assert_eq!(config.default_tag, Some(Tag::Math));
        assert_eq!(config.shuffle_seed, Some(3));
    }
}
