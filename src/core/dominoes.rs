//! Domino chains
//!
//! A set of tiles can be laid in one row exactly when the multigraph with pip
//! values as vertices and tiles as edges has an Eulerian trail: every tile
//! lies in one connected component and zero or two pip values have odd degree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DominoError;

/// A domino tile; `[a, b]` may be placed as `[b, a]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Domino(pub u8, pub u8);

impl Domino {
    /// The same tile turned around
    pub fn flipped(self) -> Self {
        Self(self.1, self.0)
    }

    /// Whether both ends show the same value
    pub fn is_double(self) -> bool {
        self.0 == self.1
    }

    /// Whether this tile is `other`, in either orientation
    pub fn same_tile(self, other: Self) -> bool {
        self == other || self == other.flipped()
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.0, self.1)
    }
}

impl FromStr for Domino {
    type Err = DominoError;

    /// Parse `"a:b"` or `"a-b"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DominoError::InvalidTile {
            tile: s.to_string(),
        };
        let (left, right) = s.split_once([':', '-']).ok_or_else(invalid)?;
        let left = left.trim().parse().map_err(|_| invalid())?;
        let right = right.trim().parse().map_err(|_| invalid())?;
        Ok(Self(left, right))
    }
}

/// Check whether all tiles can be placed in one row
///
/// # Examples
///
/// ```
/// use katas::core::dominoes::{can_dominoes_make_row, Domino};
///
/// assert!(can_dominoes_make_row(&[Domino(0, 1), Domino(1, 1)]));
/// assert!(!can_dominoes_make_row(&[Domino(1, 1), Domino(0, 3), Domino(1, 4)]));
/// ```
pub fn can_dominoes_make_row(dominoes: &[Domino]) -> bool {
    if dominoes.is_empty() {
        return true;
    }

    let mut degree: BTreeMap<u8, usize> = BTreeMap::new();
    for tile in dominoes {
        *degree.entry(tile.0).or_default() += 1;
        *degree.entry(tile.1).or_default() += 1;
    }
    let odd = degree.values().filter(|&&d| d % 2 == 1).count();

    tracing::debug!(
        "{} tiles over {} pip values, {odd} with odd degree",
        dominoes.len(),
        degree.len()
    );

    (odd == 0 || odd == 2) && is_connected(dominoes)
}

/// Arrange the tiles into a row, if possible
///
/// Each returned tile is oriented so that its right value equals the left
/// value of the next one. Every input tile appears exactly once.
pub fn arrange_dominoes(dominoes: &[Domino]) -> Option<Vec<Domino>> {
    if !can_dominoes_make_row(dominoes) {
        return None;
    }
    if dominoes.is_empty() {
        return Some(Vec::new());
    }

    let mut adjacency: BTreeMap<u8, Vec<(u8, usize)>> = BTreeMap::new();
    for (id, tile) in dominoes.iter().enumerate() {
        adjacency.entry(tile.0).or_default().push((tile.1, id));
        if !tile.is_double() {
            adjacency.entry(tile.1).or_default().push((tile.0, id));
        }
    }

    // A trail must start at an odd vertex when one exists
    let start = adjacency
        .iter()
        .find(|(vertex, edges)| degree_of(**vertex, edges) % 2 == 1)
        .map_or(dominoes[0].0, |(vertex, _)| *vertex);

    // Hierholzer's algorithm
    let mut used = vec![false; dominoes.len()];
    let mut next_edge: BTreeMap<u8, usize> = BTreeMap::new();
    let mut stack = vec![start];
    let mut trail = Vec::with_capacity(dominoes.len() + 1);

    while let Some(&vertex) = stack.last() {
        let edges = adjacency.get(&vertex).map_or(&[][..], Vec::as_slice);
        let cursor = next_edge.entry(vertex).or_default();
        while *cursor < edges.len() && used[edges[*cursor].1] {
            *cursor += 1;
        }
        if let Some(&(to, id)) = edges.get(*cursor) {
            used[id] = true;
            stack.push(to);
        } else {
            trail.push(vertex);
            stack.pop();
        }
    }
    trail.reverse();

    let chain: Vec<Domino> = trail.windows(2).map(|w| Domino(w[0], w[1])).collect();
    (chain.len() == dominoes.len()).then_some(chain)
}

/// Degree of a vertex, counting a double twice
fn degree_of(vertex: u8, edges: &[(u8, usize)]) -> usize {
    edges
        .iter()
        .map(|&(to, _)| if to == vertex { 2 } else { 1 })
        .sum()
}

/// Whether every tile is reachable from the first one
fn is_connected(dominoes: &[Domino]) -> bool {
    let mut reached = BTreeSet::from([dominoes[0].0]);
    loop {
        let before = reached.len();
        for tile in dominoes {
            if reached.contains(&tile.0) || reached.contains(&tile.1) {
                reached.insert(tile.0);
                reached.insert(tile.1);
            }
        }
        if reached.len() == before {
            break;
        }
    }
    dominoes.iter().all(|tile| reached.contains(&tile.0))
}
