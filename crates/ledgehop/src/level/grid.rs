//! Validated character grid describing a level.
//!
//! Cells are stored row-major (`index = row * cols + col`), top row first.

use crate::level::error::{LevelError, Malformed};

/// One cell of the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Ground,
    Floating,
    Breakable,
    Goal,
    EnemySpawn,
    CoinSpawn,
}

impl Tile {
    pub fn from_symbol(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Ground),
            'P' => Some(Tile::Floating),
            'B' => Some(Tile::Breakable),
            'G' => Some(Tile::Goal),
            'E' => Some(Tile::EnemySpawn),
            'C' => Some(Tile::CoinSpawn),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Ground => '#',
            Tile::Floating => 'P',
            Tile::Breakable => 'B',
            Tile::Goal => 'G',
            Tile::EnemySpawn => 'E',
            Tile::CoinSpawn => 'C',
        }
    }
}

/// A non-empty, rectangular grid of known tiles with at most one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    goal: Option<(usize, usize)>,
}

impl TileGrid {
    /// Validate rows of symbols (top row first).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        let first = rows.first().ok_or(Malformed::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(Malformed::Empty.into());
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        let mut goal: Option<(usize, usize)> = None;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(Malformed::Ragged { row, expected: cols, found }.into());
            }
            for (col, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol)
                    .ok_or(Malformed::UnknownSymbol { row, col, symbol })?;
                if tile == Tile::Goal {
                    if let Some(first) = goal {
                        return Err(Malformed::MultipleGoals { first, second: (row, col) }.into());
                    }
                    goal = Some((row, col));
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
            goal,
        })
    }

    /// Split level text into lines and validate them.
    /// Windows line endings and trailing blank lines are tolerated.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self::from_rows(&lines)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.tiles[row * self.cols + col])
    }

    /// Position of the goal tile, if the grid has one.
    pub fn goal(&self) -> Option<(usize, usize)> {
        self.goal
    }

    /// Every cell as `(row, col, tile)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (i / cols, i % cols, t))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rectangular_grid() {
        let grid = TileGrid::from_rows(&["....G", "..#..", "#####"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.get(0, 4), Some(Tile::Goal));
        assert_eq!(grid.get(1, 2), Some(Tile::Ground));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.goal(), Some((0, 4)));
        assert_eq!(grid.count(Tile::Ground), 6);
    }

    #[test]
    fn empty_grid_is_malformed() {
        let rows: [&str; 0] = [];
        assert_eq!(
            TileGrid::from_rows(&rows),
            Err(LevelError::MalformedLevel(Malformed::Empty))
        );
        assert_eq!(
            TileGrid::from_rows(&[""]),
            Err(LevelError::MalformedLevel(Malformed::Empty))
        );
    }

    #[test]
    fn ragged_grid_is_malformed() {
        let err = TileGrid::from_rows(&["..G", "....", "###"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::MalformedLevel(Malformed::Ragged { row: 1, expected: 3, found: 4 })
        );
    }

    #[test]
    fn unknown_symbol_is_malformed() {
        let err = TileGrid::from_rows(&["..G", ".x.", "###"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::MalformedLevel(Malformed::UnknownSymbol { row: 1, col: 1, symbol: 'x' })
        );
    }

    #[test]
    fn second_goal_is_rejected() {
        let err = TileGrid::from_rows(&["G..", "..G", "###"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::MalformedLevel(Malformed::MultipleGoals { first: (0, 0), second: (1, 2) })
        );
    }

    #[test]
    fn parse_handles_crlf_and_trailing_blank_lines() {
        let grid = TileGrid::parse("..G\r\n###\r\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = TileGrid::from_rows(&["CG", "E#"]).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Tile::CoinSpawn),
                (0, 1, Tile::Goal),
                (1, 0, Tile::EnemySpawn),
                (1, 1, Tile::Ground),
            ]
        );
    }

    #[test]
    fn symbols_round_trip() {
        for c in ['.', '#', 'P', 'B', 'G', 'E', 'C'] {
            assert_eq!(Tile::from_symbol(c).map(Tile::symbol), Some(c));
        }
    }
}
