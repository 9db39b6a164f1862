use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ant farm
#[derive(Parser, Debug)]
#[command(name = "ant_farm", about = "🐜 Spawn, feed and fight ant colonies")]
pub struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short = 's', long = "script")]
    pub script: Option<PathBuf>,

    /// Random seed for rolls omitted from `spawn`
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never print the `Enter command:` prompt
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Args {
    /// The prompt only makes sense for interactive stdin
    pub fn show_prompt(&self) -> bool {
        !self.no_prompt && self.script.is_none()
    }
}
