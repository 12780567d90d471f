//! The `quizbase show` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizbase_core::render::render;
use quizbase_core::Question;

pub fn execute(
    question_set: Option<PathBuf>,
    tag: Option<String>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let tag = super::parse_tag(tag.as_deref())?;
    let config = super::load_config(config_path.as_deref())?;
    let loaded = super::load_base(question_set, &config)?;

    let mut rng = match seed.or(config.shuffle_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let questions: Vec<&Question> = match tag {
        Some(tag) => loaded.base.questions_for(tag).collect(),
        None => loaded.base.pool().collect(),
    };

    for question in &questions {
        println!("{}", render(question, &mut rng));
    }

    tracing::debug!(
        sets = loaded.sets.len(),
        shown = questions.len(),
        "rendered questions"
    );

    Ok(())
}
