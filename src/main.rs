use std::{fs, path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use gol::{Grid, SimulationState};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "game-of-life")]
#[command(about = "Conway's Game of Life on a bounded grid", long_about = None)]
struct Cli {
    /// Initial grid: one row per line, '1' alive, '0' dead
    #[arg(default_value = "./cells_grid.txt")]
    path: PathBuf,

    /// Start from a random grid with this many rows instead of reading a file
    #[arg(long, requires = "columns")]
    rows: Option<usize>,

    /// Column count of the random grid
    #[arg(long, requires = "rows")]
    columns: Option<usize>,

    /// Seed for the random grid
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Delay between generations in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Stop after this many generations even if cells are still alive
    #[arg(long)]
    max_generations: Option<u64>,

    /// Only print the final grid
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn initial_grid(&self) -> Result<Grid> {
        if let (Some(rows), Some(columns)) = (self.rows, self.columns) {
            return Grid::seeded(rows, columns, self.seed)
                .with_context(|| format!("cannot build a {rows}x{columns} grid"));
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        text.parse()
            .with_context(|| format!("malformed grid in {}", self.path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut state = SimulationState::new(cli.initial_grid()?);
    let delay = Duration::from_millis(cli.delay_ms);
    loop {
        if !cli.quiet {
            print!("{}", state.display());
        }
        state = state.advance();
        if state.is_extinct() {
            info!("extinct at generation {}", state.generation());
            println!("All cells are dead at generation: {}", state.generation());
            break;
        }
        if cli.max_generations.is_some_and(|max| state.generation() >= max) {
            info!("stopping at generation {}", state.generation());
            print!("{}", state.display());
            break;
        }
        thread::sleep(delay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["game-of-life"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("./cells_grid.txt"));
        assert_eq!(cli.delay_ms, 500);
        assert_eq!(cli.seed, 0);
        assert!(cli.max_generations.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_random_needs_both_dimensions() {
        assert!(Cli::try_parse_from(["game-of-life", "--rows", "4"]).is_err());
        let cli =
            Cli::try_parse_from(["game-of-life", "--rows", "4", "--columns", "6", "--seed", "9"])
                .unwrap();
        let grid = cli.initial_grid().unwrap();
        assert_eq!((grid.row_count(), grid.column_count()), (4, 6));
        assert_eq!(grid, Grid::seeded(4, 6, 9).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let cli = Cli::try_parse_from(["game-of-life", "/nonexistent/cells_grid.txt"]).unwrap();
        let err = cli.initial_grid().unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
