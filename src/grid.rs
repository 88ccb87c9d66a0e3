use std::fmt::{self, Display, Formatter};

use crate::{
    compress::{AxisMap, PointsOfInterest},
    instruction::{Position, Segment},
};

/// Coordinates in compressed space. Orders by column first, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row) == 1
    }

    /// Left, right, down, up. Only guards against underflow, not against leaving a grid.
    fn neighbors(self) -> impl Iterator<Item = Cell> {
        let Cell { column, row } = self;
        [
            column.checked_sub(1).map(|column| Cell { column, row }),
            Some(Cell::new(column + 1, row)),
            row.checked_sub(1).map(|row| Cell { column, row }),
            Some(Cell::new(column, row + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Every combination of a compressed column and a compressed row, each either open or wall.
#[derive(Debug, Clone)]
pub struct CompressedGrid {
    columns: AxisMap,
    rows: AxisMap,
    walls: Vec<bool>,
}

impl CompressedGrid {
    /// All cells start out open.
    pub fn new(columns: AxisMap, rows: AxisMap) -> Self {
        let walls = vec![false; columns.len() * rows.len()];
        Self {
            columns,
            rows,
            walls,
        }
    }

    pub fn from_points(points: &PointsOfInterest) -> Self {
        Self::new(AxisMap::new(&points.columns), AxisMap::new(&points.rows))
    }

    pub fn columns(&self) -> &AxisMap {
        &self.columns
    }

    pub fn rows(&self) -> &AxisMap {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        (cell.column < self.width() && cell.row < self.height())
            .then(|| cell.row * self.width() + cell.column)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// `None` for cells outside the grid, otherwise whether the cell is a wall.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.index(cell).map(|i| self.walls[i])
    }

    /// Missing cells are never open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell) == Some(false)
    }

    pub fn position(&self, cell: Cell) -> Option<Position> {
        Some(Position::new(
            self.columns.real(cell.column)?,
            self.rows.real(cell.row)?,
        ))
    }

    pub fn locate(&self, position: Position) -> Option<Cell> {
        Some(Cell::new(
            self.columns.compressed(position.x)?,
            self.rows.compressed(position.y)?,
        ))
    }

    /// Neighbours of `cell` that exist in the grid, walls included.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors().filter(|&n| self.contains(n))
    }

    /// Marks every cell whose real position lies on `segment` as a wall. Cells never become open
    /// again.
    pub fn rasterize(&mut self, segment: &Segment) {
        let (columns, rows) = if segment.is_vertical() {
            (
                self.columns.indices_where(|x| x == segment.from.x),
                self.rows.indices_where(|y| segment.spans_y(y)),
            )
        } else {
            (
                self.columns.indices_where(|x| segment.spans_x(x)),
                self.rows.indices_where(|y| y == segment.from.y),
            )
        };

        let width = self.width();
        for row in rows {
            for &column in &columns {
                self.walls[row * width + column] = true;
            }
        }
    }

    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width();
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| wall)
            .map(move |(i, _)| Cell::new(i % width, i / width))
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }
}

/// Highest row first, `#` for walls.
impl Display for CompressedGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in (0..self.height()).rev() {
            for column in 0..self.width() {
                let wall = self.walls[row * self.width() + column];
                f.write_str(if wall { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
