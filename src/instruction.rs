use memchr::memchr_iter;
use nalgebra::Vector2;
use thiserror::Error;

use crate::parse_u32_from_bytes;

/// A point in real (uncompressed) coordinate space.
pub type Position = Vector2<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Straight,
}

impl TryFrom<char> for Turn {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            'S' => Ok(Turn::Straight),
            invalid => Err(invalid),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub distance: u32,
}

impl Instruction {
    pub fn new(turn: Turn, distance: u32) -> Self {
        Self { turn, distance }
    }
}

/// Unit vector along one of the four axis directions. Starts out facing up (increasing y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading(Vector2<i64>);

impl Default for Heading {
    fn default() -> Self {
        Self::up()
    }
}

impl Heading {
    pub fn up() -> Self {
        Self(Vector2::new(0, 1))
    }

    pub fn turn(self, turn: Turn) -> Self {
        let v = self.0;
        match turn {
            Turn::Left => Self(Vector2::new(-v.y, v.x)),
            Turn::Right => Self(Vector2::new(v.y, -v.x)),
            Turn::Straight => self,
        }
    }

    pub fn vector(self) -> Vector2<i64> {
        self.0
    }
}

pub fn manhattan(a: Position, b: Position) -> u64 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Straight piece of the traced path. Always axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
}

impl Segment {
    /// Zero-length segments count as vertical.
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    pub fn len(&self) -> u64 {
        manhattan(self.from, self.to)
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn contains(&self, point: Position) -> bool {
        if self.is_vertical() {
            point.x == self.from.x && self.spans_y(point.y)
        } else {
            point.y == self.from.y && self.spans_x(point.x)
        }
    }

    pub fn spans_x(&self, x: i64) -> bool {
        self.from.x.min(self.to.x) <= x && x <= self.from.x.max(self.to.x)
    }

    pub fn spans_y(&self, y: i64) -> bool {
        self.from.y.min(self.to.y) <= y && y <= self.from.y.max(self.to.y)
    }
}

/// Replays instructions from the origin, yielding the segment each one traces.
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    instructions: std::slice::Iter<'a, Instruction>,
    position: Position,
    heading: Heading,
}

impl Iterator for Trace<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let instruction = self.instructions.next()?;
        self.heading = self.heading.turn(instruction.turn);
        let from = self.position;
        self.position += self.heading.vector() * i64::from(instruction.distance);
        Some(Segment {
            from,
            to: self.position,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.instructions.size_hint()
    }
}

pub fn trace(instructions: &[Instruction]) -> Trace<'_> {
    Trace {
        instructions: instructions.iter(),
        position: Position::zeros(),
        heading: Heading::up(),
    }
}

pub fn end_position(instructions: &[Instruction]) -> Position {
    trace(instructions)
        .last()
        .map_or_else(Position::zeros, |segment| segment.to)
}

/// Columns are 1-based and count bytes of the line as given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstructionError {
    #[error("empty instruction at column {column}")]
    Empty { column: usize },
    #[error("invalid turn {turn:?} at column {column}")]
    Turn { turn: char, column: usize },
    #[error("invalid distance {distance:?} at column {column}")]
    Distance { distance: String, column: usize },
}

/// Parses a line of comma-separated `<L|R|S><distance>` tokens, e.g. `R3,L4,S10`.
pub fn parse_instructions(line: &str) -> Result<Vec<Instruction>, InstructionError> {
    let offset = line.len() - line.trim_start().len();
    let line = line.trim();
    let bytes = line.as_bytes();

    let mut instructions = Vec::with_capacity(memchr_iter(b',', bytes).count() + 1);
    let mut start = 0;
    for end in memchr_iter(b',', bytes).chain(std::iter::once(bytes.len())) {
        instructions.push(parse_token(&line[start..end], offset + start + 1)?);
        start = end + 1;
    }
    Ok(instructions)
}

fn parse_token(token: &str, column: usize) -> Result<Instruction, InstructionError> {
    let column = column + token.len() - token.trim_start().len();
    let token = token.trim();

    let mut chars = token.chars();
    let turn = chars.next().ok_or(InstructionError::Empty { column })?;
    let turn = Turn::try_from(turn).map_err(|turn| InstructionError::Turn { turn, column })?;
    let rest = chars.as_str();
    let distance =
        parse_u32_from_bytes(rest.as_bytes()).ok_or_else(|| InstructionError::Distance {
            distance: rest.to_string(),
            column,
        })?;
    Ok(Instruction::new(turn, distance))
}
