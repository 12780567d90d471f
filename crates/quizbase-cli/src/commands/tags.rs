//! The `quizbase tags` command.

use anyhow::Result;

use quizbase_core::Tag;

pub fn execute() -> Result<()> {
    for tag in Tag::ALL {
        println!("{tag}");
    }
    Ok(())
}
