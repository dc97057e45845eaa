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

use crate::layout::TileLayout;
use crate::point_f::PointF;
use crate::quad_f::QuadF;

// Hit box is inset slightly from the visible square so corners resting
// exactly on a tile boundary don't flicker between contained and not.
pub const COLLIDE_MARGIN: f32 = 1.0;

pub struct Player {
    pub pos: PointF,
    pub width: f32,
    pub velocity: f32,
    pub rect: QuadF,
}

impl Player {
    /// Fresh player centred on the start tile. Width and velocity scale with
    /// the tile size so every difficulty feels the same speed relative to the
    /// corridors.
    pub fn at_start(layout: &TileLayout, speed_factor: f32) -> Self {
        let width = layout.tile_width / 4.0;
        let start = layout.start().rect;
        let pos = PointF::new(
            start.x + (layout.tile_width - width) / 2.0,
            start.y + (layout.tile_width - width) / 2.0,
        );
        Self {
            pos,
            width,
            velocity: speed_factor * layout.tile_width,
            rect: QuadF::new(pos.x, pos.y, width, width),
        }
    }

    /// Integrates one frame of movement, resolving each axis independently so
    /// the player can slide along a wall: an axis only commits its candidate
    /// coordinate when all four margin-inset corners land on some path tile.
    pub fn apply_movement(&mut self, layout: &TileLayout, direction: PointF, dt: f32) {
        // NaN/inf input is clamped to a stand-still rather than propagated
        let mut direction = if direction.is_valid() { direction } else { PointF::zero() };
        if direction.is_zero() {
            return;
        }
        // Keep diagonals from being faster than straight movement
        if direction.magnitude() > 1.0 {
            direction = direction.normalized();
        }

        let next_x = self.pos.x + direction.x * self.velocity * dt;
        let next_y = self.pos.y + direction.y * self.velocity * dt;
        let corners_for_x = self.corners(PointF::new(next_x, self.pos.y));
        let corners_for_y = self.corners(PointF::new(self.pos.x, next_y));

        let mut on_path_for_x = [false; 4];
        let mut on_path_for_y = [false; 4];
        let mut x_complete = false;
        let mut y_complete = false;

        for tile in &layout.tiles {
            if !x_complete {
                for (corner, on_path) in corners_for_x.iter().zip(on_path_for_x.iter_mut()) {
                    if tile.rect.contains(corner.x, corner.y) {
                        *on_path = true;
                    }
                }
                x_complete = on_path_for_x.iter().all(|&confirmed| confirmed);
            }
            if !y_complete {
                for (corner, on_path) in corners_for_y.iter().zip(on_path_for_y.iter_mut()) {
                    if tile.rect.contains(corner.x, corner.y) {
                        *on_path = true;
                    }
                }
                y_complete = on_path_for_y.iter().all(|&confirmed| confirmed);
            }
            if x_complete && y_complete {
                break;
            }
        }

        if x_complete {
            self.pos.x = next_x;
        }
        if y_complete {
            self.pos.y = next_y;
        }
        self.rect = QuadF::new(self.pos.x, self.pos.y, self.width, self.width);
    }

    fn corners(&self, pos: PointF) -> [PointF; 4] {
        let near = COLLIDE_MARGIN;
        let far = self.width - COLLIDE_MARGIN;
        [
            PointF::new(pos.x + near, pos.y + near),
            PointF::new(pos.x + far, pos.y + near),
            PointF::new(pos.x + near, pos.y + far),
            PointF::new(pos.x + far, pos.y + far),
        ]
    }

    pub fn draw(&self, offset: f32) {
        let rect = self.rect.moved(offset, offset);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, WHITE);
    }
}
