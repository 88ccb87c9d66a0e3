mod compress;
mod grid;
mod instruction;
mod maze;
mod search;
pub mod solutions;

use anyhow::{Context, Result};

pub use compress::{AxisMap, PointsOfInterest};
pub use grid::{Cell, CompressedGrid};
pub use instruction::{
    end_position, manhattan, parse_instructions, trace, Heading, Instruction, InstructionError,
    Position, Segment, Trace, Turn,
};
pub use maze::Maze;
pub use search::shortest_path;

/// Returns `None` if bytes is empty, contains anything but ASCII digits or overflows a `u32`.
pub fn parse_u32_from_bytes(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    let mut ret: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        ret = ret.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(ret)
}

pub fn load_input(name: &str) -> Result<String> {
    let path = format!("inputs/{}", name);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read input {}", path))
}

pub fn default_input(part: usize, variant: &str) -> Result<String> {
    load_input(&format!("p{}-{}.txt", part, variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u32_from_bytes() {
        assert_eq!(parse_u32_from_bytes(b"0"), Some(0));
        assert_eq!(parse_u32_from_bytes(b"40000"), Some(40000));
        assert_eq!(parse_u32_from_bytes(b"4294967295"), Some(u32::MAX));
        assert_eq!(parse_u32_from_bytes(b"4294967296"), None);
        assert_eq!(parse_u32_from_bytes(b""), None);
        assert_eq!(parse_u32_from_bytes(b"12a"), None);
        assert_eq!(parse_u32_from_bytes(b"-3"), None);
    }
}
