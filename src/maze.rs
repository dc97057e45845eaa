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

use rand::Rng;

use crate::error::{ConstructionError, Result};
use crate::graph::GridGraph;

/// A tree edge recorded during generation. `from` is the vertex that was newly
/// connected; `to` was already part of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Grows a random spanning tree from vertex 0, Prim's-style, except the next
/// edge is drawn uniformly from every edge incident to the tree instead of by
/// weight. Vertices with several live connections into the tree appear in the
/// frontier once per connection, which is what biases mazes toward long
/// corridors.
///
/// The frontier holds (row, column) pairs where `column` is already in the
/// tree and `matrix[row][column]` is still live. Absorbing a vertex zeroes its
/// matrix row, so it can never reappear as a destination.
pub fn generate<R: Rng>(mut graph: GridGraph, rng: &mut R) -> Result<Vec<Edge>> {
    let total = graph.vertex_count();

    let mut visited = vec![false; total];
    visited[0] = true;
    graph.clear_row(0);

    let mut frontier: Vec<(usize, usize)> =
        graph.live_rows_into(0).map(|row| (row, 0)).collect();
    let mut edges = Vec::with_capacity(total - 1);

    for _ in 0..total - 1 {
        if frontier.is_empty() {
            let remaining = visited.iter().filter(|&&seen| !seen).count();
            return Err(ConstructionError::FrontierExhausted { remaining });
        }

        let pick = rng.gen_range(0..frontier.len());
        let (from, to) = frontier[pick];
        debug_assert!(graph.is_adjacent(from, to), "stale frontier pair");
        edges.push(Edge { from, to });

        graph.clear_row(from);
        visited[from] = true;

        frontier.retain(|&(row, _)| row != from);
        for row in graph.live_rows_into(from) {
            frontier.push((row, from));
        }
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use pathfinding::prelude::bfs_reach;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_spanning_tree(side: usize, edges: &[Edge]) {
        let total = side * side;
        assert_eq!(edges.len(), total - 1);

        // Each non-root vertex gets connected exactly once
        let mut connected = HashSet::new();
        for edge in edges {
            assert_ne!(edge.from, 0, "root reconnected");
            assert!(connected.insert(edge.from), "vertex {} connected twice", edge.from);
        }

        let mut adjacency = vec![Vec::new(); total];
        for edge in edges {
            adjacency[edge.from].push(edge.to);
            adjacency[edge.to].push(edge.from);
        }
        let reached: HashSet<usize> =
            bfs_reach(0usize, |&vertex| adjacency[vertex].clone()).collect();
        assert_eq!(reached.len(), total, "tree does not span the grid");
    }

    #[test]
    fn always_produces_a_perfect_maze() {
        let mut rng = StdRng::seed_from_u64(0x6d617a65);
        for _ in 0..1000 {
            let graph = GridGraph::new(5).unwrap();
            let edges = generate(graph, &mut rng).unwrap();
            assert_spanning_tree(5, &edges);
        }
    }

    #[test]
    fn edges_connect_grid_neighbours() {
        let side = 6;
        let mut rng = StdRng::seed_from_u64(7);
        let edges = generate(GridGraph::new(side).unwrap(), &mut rng).unwrap();
        for edge in &edges {
            let row_gap = (edge.from / side).abs_diff(edge.to / side);
            let column_gap = (edge.from % side).abs_diff(edge.to % side);
            assert_eq!(row_gap + column_gap, 1, "edge {:?} not orthogonal", edge);
        }
    }

    #[test]
    fn spans_the_smallest_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let edges = generate(GridGraph::new(2).unwrap(), &mut rng).unwrap();
            assert_spanning_tree(2, &edges);
        }
    }

    #[test]
    fn recorded_direction_is_unvisited_into_visited() {
        // `to` must already be in the tree when its edge is recorded
        let mut rng = StdRng::seed_from_u64(99);
        let edges = generate(GridGraph::new(5).unwrap(), &mut rng).unwrap();
        let mut in_tree = HashSet::from([0usize]);
        for edge in &edges {
            assert!(in_tree.contains(&edge.to), "edge {:?} points outside the tree", edge);
            in_tree.insert(edge.from);
        }
    }
}
