//! `graphnode completions <shell> [--out-dir DIR]`

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};

use crate::Cli;

const BIN_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();

    match &args.out_dir {
        None => generate(args.shell, &mut cmd, BIN_NAME, &mut io::stdout()),
        Some(dir) => {
            let path = generate_to(args.shell, &mut cmd, BIN_NAME, dir)
                .with_context(|| format!("Failed to write completions to {}", dir.display()))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
