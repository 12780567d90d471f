//! The `quizbase list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbase_core::Question;

pub fn execute(
    question_set: Option<PathBuf>,
    tag: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let tag = super::parse_tag(tag.as_deref())?;
    let config = super::load_config(config_path.as_deref())?;
    let loaded = super::load_base(question_set, &config)?;

    let questions: Vec<&Question> = match tag {
        Some(tag) => loaded.base.questions_for(tag).collect(),
        None => loaded.base.pool().collect(),
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        _ => {
            if questions.is_empty() {
                match tag {
                    Some(tag) => println!("No questions tagged {tag}."),
                    None => println!("No questions found."),
                }
                return Ok(());
            }
            println!("{}", table(&questions));
            println!("{} question(s)", questions.len());
        }
    }

    Ok(())
}

fn table(questions: &[&Question]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Kind", "Tags", "Statement", "Answer", "Size"]);

    for question in questions {
        let tags = question
            .tags()
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(question.id()),
            Cell::new(question.kind().label()),
            Cell::new(tags),
            Cell::new(question.statement()),
            Cell::new(question.answer()),
            Cell::new(question.subject_size()),
        ]);
    }

    table
}
