// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::error::{ConstructionError, Result};

/// Adjacency matrix of an n*n grid graph: n^2 vertices, each connected to its
/// orthogonal neighbours, so n(2n-2) undirected edges. Vertex ids map to cells
/// as `row = id / n`, `column = id % n`.
pub struct GridGraph {
    vertex_count: usize,
    matrix: Vec<Vec<u8>>,
}

impl GridGraph {
    pub fn new(side: usize) -> Result<Self> {
        if side < 2 {
            return Err(ConstructionError::SideTooSmall(side));
        }

        let vertex_count = side * side;
        let mut matrix = vec![vec![0u8; vertex_count]; vertex_count];

        for vertex in 0..vertex_count {
            // Cell to the left, only if it stays on the same row
            if vertex >= 1 && (vertex - 1) / side == vertex / side {
                matrix[vertex][vertex - 1] = 1;
            }

            // Cell to the right, only if it stays on the same row
            if (vertex + 1) / side == vertex / side {
                matrix[vertex][vertex + 1] = 1;
            }

            // Cell above
            if vertex >= side {
                matrix[vertex][vertex - side] = 1;
            }

            // Cell below
            if vertex + side < vertex_count {
                matrix[vertex][vertex + side] = 1;
            }
        }

        Ok(Self { vertex_count, matrix })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_adjacent(&self, row: usize, column: usize) -> bool {
        self.matrix[row][column] == 1
    }

    /// Removes `row` as a destination for future tree edges.
    pub(crate) fn clear_row(&mut self, row: usize) {
        for entry in &mut self.matrix[row] {
            *entry = 0;
        }
    }

    /// Rows whose entry in `column` is still live. Once generation has zeroed
    /// the rows of absorbed vertices, these are exactly the unvisited
    /// neighbours of `column`.
    pub(crate) fn live_rows_into(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count).filter(move |&row| self.matrix[row][column] == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(graph: &GridGraph, vertex: usize) -> usize {
        (0..graph.vertex_count())
            .filter(|&column| graph.is_adjacent(vertex, column))
            .count()
    }

    #[test]
    fn rejects_degenerate_sides() {
        assert!(matches!(
            GridGraph::new(0),
            Err(ConstructionError::SideTooSmall(0))
        ));
        assert!(matches!(
            GridGraph::new(1),
            Err(ConstructionError::SideTooSmall(1))
        ));
        assert!(GridGraph::new(2).is_ok());
    }

    #[test]
    fn directed_entry_count_matches_grid_formula() {
        for side in 2..=15 {
            let graph = GridGraph::new(side).unwrap();
            let entries: usize = (0..graph.vertex_count())
                .map(|vertex| degree(&graph, vertex))
                .sum();
            // n(2n-2) undirected edges, each stored in both directions
            assert_eq!(entries, 2 * 2 * side * (side - 1), "side {}", side);
        }
    }

    #[test]
    fn degrees_follow_corner_edge_interior_split() {
        let side = 5;
        let graph = GridGraph::new(side).unwrap();
        for vertex in 0..graph.vertex_count() {
            let row = vertex / side;
            let column = vertex % side;
            let clipped_rows = (row == 0) as usize + (row == side - 1) as usize;
            let clipped_columns = (column == 0) as usize + (column == side - 1) as usize;
            assert_eq!(degree(&graph, vertex), 4 - clipped_rows - clipped_columns);
        }
    }

    #[test]
    fn adjacency_is_symmetric_and_orthogonal() {
        let side = 4;
        let graph = GridGraph::new(side).unwrap();
        for u in 0..graph.vertex_count() {
            for v in 0..graph.vertex_count() {
                assert_eq!(graph.is_adjacent(u, v), graph.is_adjacent(v, u));
                if graph.is_adjacent(u, v) {
                    let row_gap = (u / side).abs_diff(v / side);
                    let column_gap = (u % side).abs_diff(v % side);
                    assert_eq!(row_gap + column_gap, 1, "{} - {} not orthogonal", u, v);
                }
            }
        }
    }
}
