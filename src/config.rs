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
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::from_str;

// Window is square and fixed. Odd widths leave floating-point seams between
// tiles, e.g. 899 draws hairlines where rounded positions disagree.
pub const WIN_WIDTH: i32 = 900;

#[derive(Clone, Debug, Deserialize)]
pub struct Difficulty {
    pub label: String,
    pub side: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_speed_factor")]
    pub player_speed_factor: f32,
    #[serde(default = "default_stall_threshold")]
    pub stall_threshold: f32,
    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<Difficulty>,
}

fn default_speed_factor() -> f32 {
    7.0
}

fn default_stall_threshold() -> f32 {
    0.06
}

fn default_difficulties() -> Vec<Difficulty> {
    vec![
        Difficulty { label: "Simple".into(), side: 5 },
        Difficulty { label: "Regular".into(), side: 10 },
        Difficulty { label: "Complex".into(), side: 15 },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_speed_factor: default_speed_factor(),
            stall_threshold: default_stall_threshold(),
            difficulties: default_difficulties(),
        }
    }
}

impl Config {
    /// Drops difficulty entries no maze can be built from. An empty table
    /// falls back to the built-in one so the menu always has buttons.
    fn sanitized(mut self) -> Self {
        self.difficulties.retain(|difficulty| {
            if difficulty.side < 2 {
                warn!("dropping difficulty '{}': side {} is too small", difficulty.label, difficulty.side);
                false
            } else {
                true
            }
        });
        if self.difficulties.is_empty() {
            self.difficulties = default_difficulties();
        }
        self
    }
}

pub async fn load() -> Config {
    match load_string("assets/config.json").await {
        Ok(text) => match from_str::<Config>(&text) {
            Ok(config) => config.sanitized(),
            Err(err) => {
                warn!("assets/config.json is malformed ({}), using defaults", err);
                Config::default()
            }
        },
        Err(_) => {
            info!("no assets/config.json found, using defaults");
            Config::default()
        }
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn set_global_config(config: Config) {
    CONFIG.set(config).expect("CONFIG already set!");
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("CONFIG not initialized")
}
