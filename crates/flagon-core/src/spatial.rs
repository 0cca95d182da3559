//! Coordinate-keyed lookups shared by the shape and connect passes.

use rustc_hash::FxBuildHasher;

use crate::graph::{EdgeId, NodeId};
use crate::token::Token;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// `line -> column -> value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid<T> {
    rows: HashMap<usize, HashMap<usize, T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::default(),
        }
    }
}

impl<T: Copy> Grid<T> {
    pub(crate) fn insert(&mut self, line: usize, column: usize, value: T) {
        self.rows.entry(line).or_default().insert(column, value);
    }

    pub(crate) fn get(&self, line: usize, column: usize) -> Option<T> {
        self.rows.get(&line)?.get(&column).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }
}

/// Token positions by row and by column, for "next token right/down" queries.
///
/// Built from a token stream in reading order, so every row is sorted by column and every column
/// by line without an explicit sort.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenIndex {
    rows: HashMap<usize, Vec<(usize, usize)>>,
    columns: HashMap<usize, Vec<(usize, usize)>>,
}

impl TokenIndex {
    pub(crate) fn new(tokens: &[Token]) -> Self {
        let mut index = Self::default();
        for (ix, token) in tokens.iter().enumerate() {
            index
                .rows
                .entry(token.line())
                .or_default()
                .push((token.column(), ix));
            index
                .columns
                .entry(token.column())
                .or_default()
                .push((token.line(), ix));
        }
        index
    }

    /// Nearest token on `line` whose column is strictly greater than `column`.
    pub(crate) fn next_right(&self, line: usize, column: usize) -> Option<usize> {
        nearest_after(self.rows.get(&line)?, column)
    }

    /// Nearest token in `column` whose line is strictly greater than `line`.
    pub(crate) fn next_down(&self, line: usize, column: usize) -> Option<usize> {
        nearest_after(self.columns.get(&column)?, line)
    }
}

fn nearest_after(sorted: &[(usize, usize)], key: usize) -> Option<usize> {
    let pos = sorted.partition_point(|&(k, _)| k <= key);
    sorted.get(pos).map(|&(_, ix)| ix)
}

/// Node and edge positions recorded while recognizing shapes. Kept by the [`Graph`] for
/// coordinate lookups.
///
/// Horizontal edges are keyed at both their left and right column; vertical edges at both their
/// top and bottom line. Single-character edges therefore occupy one key.
///
/// [`Graph`]: crate::Graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SpatialIndex {
    pub(crate) nodes: Grid<NodeId>,
    pub(crate) horizontal_edges: Grid<EdgeId>,
    pub(crate) vertical_edges: Grid<EdgeId>,
}
