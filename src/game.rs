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
// `::rand` keeps the registry crate from clashing with macroquad's re-exports
use ::rand::thread_rng;

use crate::config;
use crate::error::Result;
use crate::graph::GridGraph;
use crate::input::InputSnapshot;
use crate::layout::TileLayout;
use crate::maze;
use crate::player::Player;

pub enum GameOutcome {
    Won { time_taken: f64 },
    ToMenu,
}

/// One level: an immutable tile layout for the generated maze, a player, and
/// the timer. Restarting rebuilds only the player; a new difficulty builds a
/// whole new `Game`.
pub struct Game {
    layout: TileLayout,
    player: Player,
    start_time: f64,
}

impl Game {
    pub fn new(side: usize) -> Result<Self> {
        let graph = GridGraph::new(side)?;
        let edges = maze::generate(graph, &mut thread_rng())?;
        info!("generated {}x{} maze, {} edges", side, side, edges.len());

        let layout = TileLayout::new(side, &edges);
        let player = Player::at_start(&layout, config::get_config().player_speed_factor);
        Ok(Self { layout, player, start_time: get_time() })
    }

    pub async fn run(&mut self) -> GameOutcome {
        let stall_threshold = config::get_config().stall_threshold;

        loop {
            let dt = get_frame_time();

            // A frame that stalled (window drag, debugger) would integrate a
            // huge displacement, so the whole tick is skipped.
            if dt <= stall_threshold {
                let input = InputSnapshot::poll();
                if input.to_menu {
                    return GameOutcome::ToMenu;
                }
                if input.restart {
                    self.back_to_start();
                }

                self.player.apply_movement(&self.layout, input.direction, dt);

                // Win uses the full rectangle, no collision margin
                if self.layout.goal().rect.contains_quad(&self.player.rect) {
                    return GameOutcome::Won { time_taken: get_time() - self.start_time };
                }
            }

            clear_background(RED);
            self.layout.draw();
            self.player.draw(self.layout.draw_offset);
            next_frame().await;
        }
    }

    /// [R]: same maze, fresh player on the start tile, timer restarted.
    fn back_to_start(&mut self) {
        self.player = Player::at_start(&self.layout, config::get_config().player_speed_factor);
        self.start_time = get_time();
    }
}
