use rayon::prelude::*;

use crate::{
    compress::PointsOfInterest,
    grid::CompressedGrid,
    instruction::{trace, Instruction, Position},
    search::shortest_path,
};

/// Walls traced by a list of instructions, compressed and rasterized once, then only read.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: CompressedGrid,
    end: Position,
}

impl Maze {
    pub fn new(instructions: &[Instruction]) -> Self {
        let mut grid = CompressedGrid::from_points(&PointsOfInterest::extract(instructions));
        let mut end = Position::zeros();
        for segment in trace(instructions) {
            grid.rasterize(&segment);
            end = segment.to;
        }
        Self { grid, end }
    }

    pub fn grid(&self) -> &CompressedGrid {
        &self.grid
    }

    /// Where the traced path stops.
    pub fn end(&self) -> Position {
        self.end
    }

    pub fn shortest_path(&self, start: Position, goal: Position) -> Option<u64> {
        shortest_path(&self.grid, start, goal)
    }

    /// From the origin to the end of the traced path.
    pub fn shortest_path_to_end(&self) -> Option<u64> {
        self.shortest_path(Position::zeros(), self.end)
    }

    /// Answers independent `(start, goal)` queries in parallel, in order.
    pub fn shortest_paths(&self, queries: &[(Position, Position)]) -> Vec<Option<u64>> {
        queries
            .par_iter()
            .map(|&(start, goal)| self.shortest_path(start, goal))
            .collect()
    }
}
