use anyhow::{Result, ensure};

pub const DEFAULT_GRID_COLUMNS: usize = 4;
pub const DEFAULT_GRID_ROWS: usize = 3;
pub const DEFAULT_MAX_RESULTS: usize = 12;

/// Grid geometry for the picker. Every field is at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    grid_columns: usize,
    grid_rows: usize,
    max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
            grid_rows: DEFAULT_GRID_ROWS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Config {
    pub fn new(grid_columns: usize, grid_rows: usize, max_results: usize) -> Result<Self> {
        ensure!(grid_columns > 0, "grid columns must be at least 1");
        ensure!(grid_rows > 0, "grid rows must be at least 1");
        ensure!(max_results > 0, "max results must be at least 1");

        Ok(Self {
            grid_columns,
            grid_rows,
            max_results,
        })
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    pub fn grid_rows(&self) -> usize {
        self.grid_rows
    }

    /// Number of emoji shown per page.
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}
