use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

/// Workspace task runner.
#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Run everything CI runs: formatting, lints, feature builds, and tests.
    Ci,
    /// Check the crate without the standard library.
    NoStd,
    /// Run the benchmarks.
    Bench,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let sh = Shell::new()?;
    match args.task {
        Task::Ci => ci(&sh),
        Task::NoStd => no_std(&sh),
        Task::Bench => bench(&sh),
    }
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all --check").run()?;
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    no_std(sh)?;
    cmd!(sh, "cargo test --all-features").run()?;
    Ok(())
}

fn no_std(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo check -p keccak-spec --no-default-features").run()?;
    cmd!(sh, "cargo check -p keccak-spec --no-default-features --features serde").run()?;
    Ok(())
}

fn bench(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo bench").run()?;
    Ok(())
}
