use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    grid::{Cell, CompressedGrid},
    instruction::{manhattan, Position},
};

/// A* over the open cells of `grid`, with every step costing the real distance it covers.
///
/// The search leaves from the open cells around `start` and stops at the first cell around `goal`
/// it settles, counting one more step onto the goal itself. `None` means the goal can't be
/// reached, which includes a start or goal that has no cell in the grid.
///
/// A start equal to the goal costs nothing on an open cell. On a wall the search still has to step
/// off the wall and back on.
pub fn shortest_path(grid: &CompressedGrid, start: Position, goal: Position) -> Option<u64> {
    let origin = grid.locate(start)?;
    let target = grid.locate(goal)?;
    if start == goal && grid.is_open(origin) {
        return Some(0);
    }

    // Only cells that passed `CompressedGrid::contains` reach this.
    let position = |cell: Cell| Position::new(grid.columns()[cell.column], grid.rows()[cell.row]);
    let heuristic = |cell: Cell| manhattan(position(cell), goal);

    // (estimate, cost, cell), smallest first
    let mut frontier = BinaryHeap::new();
    for cell in grid.neighbors(origin).filter(|&n| grid.is_open(n)) {
        let cost = manhattan(start, position(cell));
        frontier.push(Reverse((cost + heuristic(cell), cost, cell)));
    }

    let mut settled = vec![false; grid.len()];
    while let Some(Reverse((_, cost, cell))) = frontier.pop() {
        if cell.is_adjacent(target) {
            return Some(cost + 1);
        }

        let Some(index) = grid.index(cell) else {
            continue;
        };
        if std::mem::replace(&mut settled[index], true) {
            continue;
        }

        let here = position(cell);
        for next in grid.neighbors(cell).filter(|&n| grid.is_open(n)) {
            let cost = cost + manhattan(here, position(next));
            frontier.push(Reverse((cost + heuristic(next), cost, next)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compress::{AxisMap, PointsOfInterest},
        instruction::{end_position, parse_instructions, tests::arb_instructions, trace, Instruction},
    };

    use anyhow::Result;
    use proptest::prelude::*;

    fn rasterized(instructions: &[Instruction]) -> CompressedGrid {
        let mut grid = CompressedGrid::from_points(&PointsOfInterest::extract(instructions));
        for segment in trace(instructions) {
            grid.rasterize(&segment);
        }
        grid
    }

    fn solve(input: &str) -> Result<Option<u64>> {
        let instructions = parse_instructions(input)?;
        let grid = rasterized(&instructions);
        Ok(shortest_path(
            &grid,
            Position::zeros(),
            end_position(&instructions),
        ))
    }

    #[test]
    fn test_examples() -> Result<()> {
        assert_eq!(solve("R3,R4,L3,L4,R3,R6,R9")?, Some(6));
        assert_eq!(solve("R2,R1")?, Some(3));
        assert_eq!(solve("L1,L1")?, Some(2));
        assert_eq!(solve("R10,L10,L10")?, Some(10));
        assert_eq!(solve("R4,R4,R4,L1,L1,R2")?, Some(18));
        assert_eq!(solve("L2,R4,R6,L3,L2,R8,R1,L5")?, Some(31));
        Ok(())
    }

    #[test]
    fn test_straight_wall() -> Result<()> {
        // Around the wall: one step off it, along its length, one step back on.
        assert_eq!(solve("R5")?, Some(5 + 2));
        Ok(())
    }

    #[test]
    fn test_long_range() -> Result<()> {
        let input = "R1000,L5000,L20000,L30000,L40000,R7,R3000";
        assert_eq!(solve(input)?, Some(49011));
        Ok(())
    }

    #[test]
    fn test_unreachable() -> Result<()> {
        // The last step ends in a pocket whose only cell is surrounded by walls.
        assert_eq!(solve("R1,R1,R1")?, None);

        // A closed 6x6 square with the goal on its inside.
        let instructions = parse_instructions("R6,R6,R6,R6,L3,L3,S10,L6")?;
        let grid = rasterized(&instructions);
        let origin = Position::zeros();
        assert_eq!(shortest_path(&grid, origin, Position::new(3, -3)), None);
        assert_eq!(shortest_path(&grid, origin, Position::new(3, -13)), Some(26));
        Ok(())
    }

    #[test]
    fn test_other_queries() -> Result<()> {
        let instructions = parse_instructions("R3,R4,L3,L4,R3,R6,R9")?;
        let grid = rasterized(&instructions);
        assert_eq!(
            shortest_path(&grid, Position::new(3, 0), Position::new(0, -6)),
            Some(13)
        );
        // The origin is a corner of the first wall.
        assert_eq!(shortest_path(&grid, Position::zeros(), Position::zeros()), Some(2));
        assert_eq!(shortest_path(&grid, Position::new(1, 1), Position::new(1, 1)), Some(0));
        assert_eq!(shortest_path(&grid, Position::zeros(), Position::new(7, 7)), None);
        assert_eq!(shortest_path(&grid, Position::new(1, 1), Position::zeros()), Some(2));
        Ok(())
    }

    #[test]
    fn test_closed_loops() -> Result<()> {
        // Paths ending where they started: the end sits on a wall, so step off and back on.
        for input in [
            "L1,R1,R1,R1",
            "L2,L1,L2,L1",
            "R2,L2,L2,L2",
            "L2,R17,R3,R17,R1",
            "R2,R1,R3,L2,L3,L3,L2",
        ] {
            assert_eq!(solve(input)?, Some(2), "{}", input);
        }
        Ok(())
    }

    #[test]
    fn test_open_grid() {
        let grid = CompressedGrid::new(AxisMap::new(&[0, 100]), AxisMap::new(&[0, 50]));
        let cost = shortest_path(&grid, Position::new(0, 0), Position::new(100, 50));
        assert_eq!(cost, Some(150));
    }

    proptest! {
        #[test]
        fn never_beats_manhattan(instructions in arb_instructions(30)) {
            let grid = rasterized(&instructions);
            let end = end_position(&instructions);
            let first = shortest_path(&grid, Position::zeros(), end);
            prop_assert_eq!(first, shortest_path(&grid, Position::zeros(), end));
            if let Some(cost) = first {
                prop_assert!(cost >= manhattan(Position::zeros(), end));
            }
        }
    }
}
