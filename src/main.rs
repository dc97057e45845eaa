mod config;
mod error;
mod game;
mod graph;
mod input;
mod layout;
mod maze;
mod menu;
mod player;
mod point_f;
mod quad_f;

use macroquad::prelude::*;

use crate::game::{Game, GameOutcome};
use crate::menu::SelectionScreen;

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Game".to_string(),
        window_width: config::WIN_WIDTH,
        window_height: config::WIN_WIDTH,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    config::set_global_config(config::load().await);

    let mut side = SelectionScreen::main_menu().run().await;
    loop {
        // Construction failures mean a broken adjacency invariant; stop hard
        // before any gameplay is shown
        let mut game = Game::new(side).expect("maze construction failed");
        side = match game.run().await {
            GameOutcome::Won { time_taken } => SelectionScreen::results(time_taken).run().await,
            GameOutcome::ToMenu => SelectionScreen::main_menu().run().await,
        };
    }
}
