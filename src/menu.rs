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

use crate::config::{self, Difficulty, WIN_WIDTH};
use crate::quad_f::QuadF;

const TITLE_FONT_SIZE: u16 = 100;
const BUTTON_FONT_SIZE: u16 = 32;
const CONTROLS_FONT_SIZE: u16 = 20;

const CONTROLS: [&str; 3] = [
    "[Q] - Back to menu",
    "[R] - Back to start",
    "[W,A,S,D] - To move",
];

/// Title plus one button per difficulty. The main menu and the results screen
/// are the same screen with a different title, so this is instantiated twice
/// rather than subclassed.
pub struct SelectionScreen {
    title: String,
}

impl SelectionScreen {
    pub fn main_menu() -> Self {
        Self { title: "Maze Game".to_string() }
    }

    pub fn results(time_taken: f64) -> Self {
        Self { title: format!("{:.2}s", time_taken) }
    }

    /// Shows the screen until a difficulty button is clicked; returns the
    /// chosen grid side length.
    pub async fn run(&self) -> usize {
        loop {
            clear_background(BLACK);
            self.draw_title();
            self.draw_controls();

            let (mouse_x, mouse_y) = mouse_position();
            let clicked = is_mouse_button_pressed(MouseButton::Left);

            let mut chosen = None;
            for (index, difficulty) in config::get_config().difficulties.iter().enumerate() {
                if self.draw_button(index, difficulty, mouse_x, mouse_y) && clicked {
                    chosen = Some(difficulty.side);
                }
            }

            next_frame().await;
            if let Some(side) = chosen {
                return side;
            }
        }
    }

    fn draw_title(&self) {
        let dims = measure_text(&self.title, None, TITLE_FONT_SIZE, 1.0);
        draw_text(
            &self.title,
            WIN_WIDTH as f32 / 2.0 - dims.width / 2.0,
            WIN_WIDTH as f32 / 4.0 + dims.offset_y / 2.0,
            TITLE_FONT_SIZE as f32,
            WHITE,
        );
    }

    /// Draws one difficulty button, highlighted when hovered; returns whether
    /// the mouse is over it.
    fn draw_button(&self, index: usize, difficulty: &Difficulty, mouse_x: f32, mouse_y: f32) -> bool {
        let spacing = BUTTON_FONT_SIZE as f32 * 2.0;
        let center_x = WIN_WIDTH as f32 / 2.0;
        let center_y = WIN_WIDTH as f32 / 2.1 + index as f32 * spacing;

        let dims = measure_text(&difficulty.label, None, BUTTON_FONT_SIZE, 1.0);
        let rect = QuadF::new(
            center_x - dims.width / 2.0,
            center_y - dims.height / 2.0,
            dims.width,
            dims.height,
        );
        let hovered = rect.contains(mouse_x, mouse_y);

        if hovered {
            draw_rectangle_lines(
                rect.x - 10.0,
                rect.y - 10.0,
                rect.w + 20.0,
                rect.h + 20.0,
                4.0,
                RED,
            );
        }
        draw_text(
            &difficulty.label,
            rect.x,
            rect.y + dims.offset_y,
            BUTTON_FONT_SIZE as f32,
            if hovered { RED } else { WHITE },
        );

        hovered
    }

    fn draw_controls(&self) {
        let line_height = CONTROLS_FONT_SIZE as f32;
        for (index, control) in CONTROLS.iter().enumerate() {
            draw_text(
                control,
                line_height,
                WIN_WIDTH as f32 - (2.0 * line_height * index as f32) - line_height,
                CONTROLS_FONT_SIZE as f32,
                WHITE,
            );
        }
    }
}
