use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "critique",
    version,
    about = "Junior, senior and manager code review chain"
)]
pub struct Cli {
    /// What the reviewers should focus on (e.g., "Please review this code")
    pub instruction: String,

    /// Source file to review
    pub file: PathBuf,

    /// Model used for every role (e.g., "gpt-5-mini")
    #[arg(short, long)]
    pub model: Option<String>,

    /// Root directory for review output
    #[arg(short = 'o', long)]
    pub reviews_dir: Option<PathBuf>,

    /// Path to config file (overrides ./critique.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write planner_review.md with any reasoning the model returned
    #[arg(long)]
    pub planner_notes: bool,
}
