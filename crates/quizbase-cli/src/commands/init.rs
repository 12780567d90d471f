//! The `quizbase init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizbase.toml
    if std::path::Path::new("quizbase.toml").exists() {
        println!("quizbase.toml already exists, skipping.");
    } else {
        std::fs::write("quizbase.toml", SAMPLE_CONFIG)?;
        println!("Created quizbase.toml");
    }

    // Create example question set
    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.toml");
    if example_path.exists() {
        println!("question-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add questions to question-sets/example.toml");
    println!("  2. Run: quizbase validate");
    println!("  3. Run: quizbase list --tag math");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbase configuration

question_dir = "./question-sets"

# Questions with no tags are filed under this one.
default_tag = "GENERAL"

# Uncomment for a repeatable proposition order in `quizbase show`.
# shuffle_seed = 42
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
id = "example"
name = "Example Question Set"
description = "A simple example question set to get started"

[[questions]]
kind = "choice"
statement = "Capital of France?"
propositions = ["Berlin", "Paris", "Rome"]
correct = 1
tags = ["geo"]

[[questions]]
kind = "free"
statement = "2+2?"
answer = "4"
tags = ["math"]

[[questions]]
kind = "free"
statement = "Which planet is known as the red planet?"
answer = "Mars"
"#;
