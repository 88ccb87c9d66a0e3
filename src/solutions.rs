use anyhow::{Context, Result};

use crate::{instruction::parse_instructions, maze::Maze};

/// Every part asks the same question, only the inputs grow.
pub const PARTS: usize = 3;

/// Builds the maze from the first line of `input`.
pub fn build(input: &str) -> Result<Maze> {
    let line = input.lines().next().context("input is empty")?;
    let instructions = parse_instructions(line).context("malformed instructions")?;
    Ok(Maze::new(&instructions))
}

pub fn solve(input: &str) -> Result<Option<u64>> {
    Ok(build(input)?.shortest_path_to_end())
}

pub fn format_answer(answer: Option<u64>) -> String {
    match answer {
        Some(cost) => cost.to_string(),
        None => "unreachable".to_string(),
    }
}
