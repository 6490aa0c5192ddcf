//! Zig-zag matrix construction
//!
//! Numbers the cells of an n×n grid in the order they are visited by the
//! JPEG coefficient scan: anti-diagonal by anti-diagonal, alternating
//! direction on every diagonal.
//!
//! ```text
//!   0  1  5  6
//!   2  4  7 12
//!   3  8 11 13
//!   9 10 14 15
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ZigZagError;

/// Square matrix holding the zig-zag rank of every cell
///
/// Cells are stored row-major in a flat buffer indexed by `row * n + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigZagMatrix {
    n: usize,
    cells: Vec<usize>,
}

impl ZigZagMatrix {
    /// Side length of the matrix
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Rank stored at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.n && col < self.n {
            Some(self.cells[row * self.n + col])
        } else {
            None
        }
    }

    /// Flat row-major view of all cells
    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.n)
    }

    /// Copy the matrix into nested rows
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }

    /// Cell visited at each rank of the walk
    ///
    /// This is the inverse of the matrix: `order[rank] == (row, col)` exactly
    /// when `get(row, col) == Some(rank)`. For `n == 8` it is the JPEG
    /// zig-zag-to-natural table.
    pub fn traversal_order(&self) -> Vec<(usize, usize)> {
        let mut order = vec![(0, 0); self.cells.len()];
        for (index, &rank) in self.cells.iter().enumerate() {
            order[rank] = (index / self.n, index % self.n);
        }
        order
    }
}

impl Serialize for ZigZagMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl fmt::Display for ZigZagMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
        }
        Ok(())
    }
}

/// Build the n×n zig-zag matrix
///
/// Anti-diagonal `k` holds the cells with `row + col == k`. Odd diagonals are
/// walked with the row ascending (top-right to bottom-left), even diagonals
/// with the row descending, so the walk starts `(0,0) -> (0,1) -> (1,0)`.
///
/// # Errors
///
/// Returns [`ZigZagError::InvalidDimension`] when `n` is zero or `n * n`
/// overflows `usize`.
///
/// # Examples
///
/// ```
/// use katas::core::zigzag::build_zigzag_matrix;
///
/// let matrix = build_zigzag_matrix(3).unwrap();
/// assert_eq!(matrix.to_rows(), vec![vec![0, 1, 5], vec![2, 4, 6], vec![3, 7, 8]]);
/// ```
pub fn build_zigzag_matrix(n: usize) -> Result<ZigZagMatrix, ZigZagError> {
    if n == 0 {
        return Err(ZigZagError::InvalidDimension { n });
    }
    let len = n
        .checked_mul(n)
        .ok_or(ZigZagError::InvalidDimension { n })?;

    tracing::debug!("Building {n}x{n} zig-zag matrix");

    let mut cells = vec![0; len];
    let mut rank = 0;
    for k in 0..(2 * n - 1) {
        let first = k.saturating_sub(n - 1);
        let last = k.min(n - 1);
        let mut visit = |row: usize| {
            cells[row * n + (k - row)] = rank;
            rank += 1;
        };
        if k % 2 == 1 {
            (first..=last).for_each(&mut visit);
        } else {
            (first..=last).rev().for_each(&mut visit);
        }
    }

    Ok(ZigZagMatrix { n, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::generators::dimension;
    use proptest::prelude::*;

    /// JPEG zig-zag-to-natural table for 8x8 blocks
    const JPEG_ZIGZAG: [usize; 64] = [
        0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27,
        20, 13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51,
        58, 59, 52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
    ];

    #[test]
    fn test_dimension_one() {
        let matrix = build_zigzag_matrix(1).unwrap();
        assert_eq!(matrix.to_rows(), vec![vec![0]]);
    }

    #[test]
    fn test_dimension_two() {
        let matrix = build_zigzag_matrix(2).unwrap();
        assert_eq!(matrix.to_rows(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_dimension_three() {
        let matrix = build_zigzag_matrix(3).unwrap();
        assert_eq!(
            matrix.to_rows(),
            vec![vec![0, 1, 5], vec![2, 4, 6], vec![3, 7, 8]]
        );
    }

    #[test]
    fn test_dimension_four() {
        let matrix = build_zigzag_matrix(4).unwrap();
        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![0, 1, 5, 6],
                vec![2, 4, 7, 12],
                vec![3, 8, 11, 13],
                vec![9, 10, 14, 15],
            ]
        );
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            build_zigzag_matrix(0),
            Err(ZigZagError::InvalidDimension { n: 0 })
        );
    }

    #[test]
    fn test_overflowing_dimension_is_rejected() {
        assert!(matches!(
            build_zigzag_matrix(usize::MAX),
            Err(ZigZagError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_traversal_order_matches_jpeg_table() {
        let matrix = build_zigzag_matrix(8).unwrap();
        let natural: Vec<usize> = matrix
            .traversal_order()
            .into_iter()
            .map(|(row, col)| row * 8 + col)
            .collect();
        assert_eq!(natural, JPEG_ZIGZAG.to_vec());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let matrix = build_zigzag_matrix(3).unwrap();
        assert_eq!(matrix.get(2, 1), Some(7));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn test_display_aligns_columns() {
        let matrix = build_zigzag_matrix(4).unwrap();
        assert_eq!(
            matrix.to_string(),
            " 0  1  5  6\n 2  4  7 12\n 3  8 11 13\n 9 10 14 15"
        );
    }

    #[test]
    fn test_serializes_as_rows() {
        let matrix = build_zigzag_matrix(2).unwrap();
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[0,1],[2,3]]");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_every_rank_appears_once(n in dimension()) {
            let matrix = build_zigzag_matrix(n).unwrap();
            let mut seen = vec![false; n * n];
            for &rank in matrix.as_slice() {
                prop_assert!(rank < n * n);
                prop_assert!(!seen[rank], "duplicate rank {}", rank);
                seen[rank] = true;
            }
            prop_assert!(seen.iter().all(|&s| s));
        }

        #[test]
        fn prop_build_is_deterministic(n in dimension()) {
            prop_assert_eq!(build_zigzag_matrix(n).unwrap(), build_zigzag_matrix(n).unwrap());
        }

        #[test]
        fn prop_diagonals_are_visited_in_order(n in dimension()) {
            let matrix = build_zigzag_matrix(n).unwrap();
            let order = matrix.traversal_order();
            let diagonals: Vec<usize> = order.iter().map(|(row, col)| row + col).collect();
            prop_assert!(diagonals.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_direction_alternates(n in dimension()) {
            let matrix = build_zigzag_matrix(n).unwrap();
            let order = matrix.traversal_order();
            for k in 1..(2 * n - 1) {
                let rows: Vec<usize> = order
                    .iter()
                    .filter(|(row, col)| row + col == k)
                    .map(|&(row, _)| row)
                    .collect();
                if k % 2 == 1 {
                    prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
                } else {
                    prop_assert!(rows.windows(2).all(|w| w[0] > w[1]));
                }
            }
        }

        #[test]
        fn prop_traversal_order_inverts_matrix(n in dimension()) {
            let matrix = build_zigzag_matrix(n).unwrap();
            for (rank, (row, col)) in matrix.traversal_order().into_iter().enumerate() {
                prop_assert_eq!(matrix.get(row, col), Some(rank));
            }
        }
    }
}
