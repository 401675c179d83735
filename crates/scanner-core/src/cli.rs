use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "urlguard", author, version, about = "Heuristic phishing URL scanner", long_about = None)]
pub struct Cli {
    /// Path to the model artifact (overrides URLGUARD_MODEL).
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Print the score and top contributing features with each verdict.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one URL and print the verdict.
    Scan { url: String },
    /// Print the extracted feature vector without classifying.
    Features { url: String },
    /// Read URLs from stdin, one per line (the default).
    Interactive,
    /// Print metadata for the loaded model.
    ModelInfo,
}
