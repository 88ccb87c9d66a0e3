use rustc_hash::FxHashMap;

use crate::instruction::{trace, Instruction};

/// Rows and columns where the traced path starts or turns, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsOfInterest {
    pub rows: Vec<i64>,
    pub columns: Vec<i64>,
}

impl PointsOfInterest {
    pub fn extract(instructions: &[Instruction]) -> Self {
        let mut rows = Vec::with_capacity(instructions.len() + 1);
        let mut columns = Vec::with_capacity(instructions.len() + 1);
        rows.push(0);
        columns.push(0);
        for segment in trace(instructions) {
            rows.push(segment.to.y);
            columns.push(segment.to.x);
        }

        rows.sort_unstable();
        rows.dedup();
        columns.sort_unstable();
        columns.dedup();
        Self { rows, columns }
    }
}

/// Compression of one axis.
///
/// The point of interest at sorted rank `i` owns the compressed indices `3 * i..3 * i + 3`,
/// mapped to the real values `poi - 1`, `poi` and `poi + 1`. Wall lines always sit on a point of
/// interest, so the open space right next to a wall gets an index of its own, while arbitrarily
/// long open runs between two points of interest collapse into a single step.
///
/// Neighbourhoods of points of interest less than three apart overlap in real space. The
/// compressed → real direction stays total, the real → compressed direction keeps the highest
/// index claiming a value.
#[derive(Debug, Clone, Default)]
pub struct AxisMap {
    to_real: Vec<i64>,
    to_compressed: FxHashMap<i64, usize>,
}

impl AxisMap {
    /// `points` must be sorted and deduplicated.
    pub fn new(points: &[i64]) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0] < w[1]));

        let mut to_real = Vec::with_capacity(points.len() * 3);
        let mut to_compressed = FxHashMap::default();
        to_compressed.reserve(points.len() * 3);
        for &poi in points {
            for value in [poi - 1, poi, poi + 1] {
                to_compressed.insert(value, to_real.len());
                to_real.push(value);
            }
        }
        Self {
            to_real,
            to_compressed,
        }
    }

    pub fn len(&self) -> usize {
        self.to_real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_real.is_empty()
    }

    pub fn real(&self, index: usize) -> Option<i64> {
        self.to_real.get(index).copied()
    }

    pub fn compressed(&self, value: i64) -> Option<usize> {
        self.to_compressed.get(&value).copied()
    }

    /// Compressed indices whose real value satisfies `pred`, in ascending order.
    pub fn indices_where(&self, mut pred: impl FnMut(i64) -> bool) -> Vec<usize> {
        self.to_real
            .iter()
            .enumerate()
            .filter_map(|(index, &value)| pred(value).then_some(index))
            .collect()
    }
}

impl std::ops::Index<usize> for AxisMap {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.to_real[index]
    }
}
