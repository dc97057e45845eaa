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

use macroquad::prelude::*;

use crate::config::WIN_WIDTH;
use crate::maze::Edge;
use crate::quad_f::QuadF;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    Path,
    Goal,
}

#[derive(Copy, Clone, Debug)]
pub struct PathTile {
    pub rect: QuadF,
    pub kind: TileKind,
}

/// Continuous-space rendition of a spanning tree: one base tile per vertex
/// plus one connector tile per tree edge, 2n^2 - 1 tiles in total. Immutable
/// for the lifetime of one maze.
pub struct TileLayout {
    side: usize,
    pub tiles: Vec<PathTile>,
    pub base_spacing: f32,
    pub tile_width: f32,
    /// Shared shift that centres the whole maze in the window, applied at
    /// draw time rather than baked into the tile rects.
    pub draw_offset: f32,
}

impl TileLayout {
    pub fn new(side: usize, edges: &[Edge]) -> Self {
        let base_spacing = WIN_WIDTH as f32 / side as f32;
        let tile_width = base_spacing / 2.0;
        let total = side * side;

        let mut tiles = Vec::with_capacity(2 * total - 1);
        for vertex in 0..total {
            let row = vertex / side;
            let column = vertex % side;
            let kind = if vertex == total - 1 { TileKind::Goal } else { TileKind::Path };
            tiles.push(PathTile {
                rect: QuadF::new(
                    column as f32 * base_spacing + tile_width,
                    row as f32 * base_spacing + tile_width,
                    tile_width,
                    tile_width,
                ),
                kind,
            });
        }

        // One connector per tree edge, halfway between its base tiles
        for edge in edges {
            let a = tiles[edge.from].rect;
            let b = tiles[edge.to].rect;
            tiles.push(PathTile {
                rect: QuadF::new(
                    0.5 * (a.x + b.x),
                    0.5 * (a.y + b.y),
                    tile_width,
                    tile_width,
                ),
                kind: TileKind::Path,
            });
        }

        Self {
            side,
            tiles,
            base_spacing,
            tile_width,
            draw_offset: -tile_width / 2.0,
        }
    }

    pub fn start(&self) -> &PathTile {
        &self.tiles[0]
    }

    pub fn goal(&self) -> &PathTile {
        &self.tiles[self.side * self.side - 1]
    }

    pub fn draw(&self) {
        for tile in &self.tiles {
            let colour = match tile.kind {
                TileKind::Path => BLACK,
                TileKind::Goal => GREEN,
            };
            let rect = tile.rect.moved(self.draw_offset, self.draw_offset);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use pathfinding::prelude::bfs_reach;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    use crate::graph::GridGraph;
    use crate::maze;

    const TOUCH_EPSILON: f32 = 1e-3;

    fn tiles_touch(a: &QuadF, b: &QuadF) -> bool {
        a.x <= b.x + b.w + TOUCH_EPSILON
            && b.x <= a.x + a.w + TOUCH_EPSILON
            && a.y <= b.y + b.h + TOUCH_EPSILON
            && b.y <= a.y + a.h + TOUCH_EPSILON
    }

    fn generated_layout(side: usize, seed: u64) -> TileLayout {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges = maze::generate(GridGraph::new(side).unwrap(), &mut rng).unwrap();
        TileLayout::new(side, &edges)
    }

    #[test]
    fn tile_count_and_goal_tag() {
        let side = 5;
        let layout = generated_layout(side, 42);
        assert_eq!(layout.tiles.len(), 2 * side * side - 1);

        for (index, tile) in layout.tiles.iter().enumerate() {
            if index == side * side - 1 {
                assert_eq!(tile.kind, TileKind::Goal);
            } else {
                assert_eq!(tile.kind, TileKind::Path, "tile {} mistagged", index);
            }
        }
        assert_eq!(layout.goal().kind, TileKind::Goal);
    }

    #[test]
    fn base_tiles_sit_on_the_grid() {
        let side = 10;
        let layout = generated_layout(side, 3);
        for vertex in 0..side * side {
            let rect = layout.tiles[vertex].rect;
            let row = vertex / side;
            let column = vertex % side;
            assert_eq!(rect.x, column as f32 * layout.base_spacing + layout.tile_width);
            assert_eq!(rect.y, row as f32 * layout.base_spacing + layout.tile_width);
            assert_eq!(rect.w, layout.tile_width);
        }
    }

    #[test]
    fn connectors_bridge_their_base_tiles() {
        let side = 5;
        let mut rng = StdRng::seed_from_u64(11);
        let edges = maze::generate(GridGraph::new(side).unwrap(), &mut rng).unwrap();
        let layout = TileLayout::new(side, &edges);

        for (slot, edge) in edges.iter().enumerate() {
            let connector = &layout.tiles[side * side + slot].rect;
            let a = &layout.tiles[edge.from].rect;
            let b = &layout.tiles[edge.to].rect;
            assert_eq!(connector.x, 0.5 * (a.x + b.x));
            assert_eq!(connector.y, 0.5 * (a.y + b.y));
            assert!(tiles_touch(connector, a));
            assert!(tiles_touch(connector, b));
        }
    }

    #[test]
    fn every_tile_reachable_from_the_start_tile() {
        let side = 5;
        let layout = generated_layout(side, 1234);
        assert_eq!(layout.tiles.len(), 49);

        let rects: Vec<QuadF> = layout.tiles.iter().map(|tile| tile.rect).collect();
        let reached: HashSet<usize> = bfs_reach(0usize, |&index| {
            let here = rects[index];
            (0..rects.len())
                .filter(|&other| other != index && tiles_touch(&here, &rects[other]))
                .collect::<Vec<_>>()
        })
        .collect();

        assert_eq!(reached.len(), layout.tiles.len());
    }
}
