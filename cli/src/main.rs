use clap::Parser;
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use wordseek_external::PuzzleFile;

mod render;

/// Solve word-search puzzles produced by grid generators.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle files in the generator's text layout
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Emit the solution as JSON (word -> "DIR @ (row, col)") instead of
    /// rendering the answer grid
    #[arg(long)]
    json: bool,

    /// Skip validation against the file's answer key
    #[arg(long)]
    no_check: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    for path in &cli.files {
        run(path, &cli)?;
    }
    Ok(())
}

fn run(path: &Path, cli: &Cli) -> Result<()> {
    log::info!("loading {}", path.display());
    let file = PuzzleFile::load(path)?;
    let puzzle = &file.puzzle;
    log::debug!(
        "{} cells per side, {} words, answer key: {}",
        puzzle.grid().size(),
        puzzle.words().len(),
        file.answer_key.is_some()
    );

    if !cli.json {
        println!("{}", render::unsolved(puzzle));
    }

    let solution = match &file.answer_key {
        Some(key) if !cli.no_check => puzzle.solve_checked(key)?,
        _ => puzzle.solve()?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", render::solved(puzzle, &solution));
    }
    Ok(())
}
