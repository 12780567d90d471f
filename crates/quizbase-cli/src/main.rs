//! quizbase CLI — browse and check tagged question sets.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizbase", version, about = "Tag-indexed quiz question repository")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions, optionally restricted to one tag
    List {
        /// Path to .toml question set or directory (default: question_dir from config)
        #[arg(long)]
        question_set: Option<PathBuf>,

        /// Only list questions filed under this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Print questions the way a quiz would show them
    Show {
        /// Path to .toml question set or directory (default: question_dir from config)
        #[arg(long)]
        question_set: Option<PathBuf>,

        /// Only show questions filed under this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Seed for proposition shuffling (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate question set TOML files
    Validate {
        /// Path to question set file or directory (default: question_dir from config)
        #[arg(long)]
        question_set: Option<PathBuf>,
    },

    /// List the known tags
    Tags,

    /// Create starter config and example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbase=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            question_set,
            tag,
            format,
        } => commands::list::execute(question_set, tag, format, cli.config),
        Commands::Show {
            question_set,
            tag,
            seed,
        } => commands::show::execute(question_set, tag, seed, cli.config),
        Commands::Validate { question_set } => {
            commands::validate::execute(question_set, cli.config)
        }
        Commands::Tags => commands::tags::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
