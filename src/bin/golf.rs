//! Interactive two-player golf game on the console.

use std::time::{SystemTime, UNIX_EPOCH};

use golfrs::{ConsoleInput, ConsoleOutput, Game, GameOptions, PlayError};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    match game.play(&mut ConsoleInput, &mut ConsoleOutput) {
        Ok(_) => {}
        Err(PlayError::InputClosed) => println!("Input closed. Goodbye."),
        Err(err) => println!("Game error: {err}"),
    }
}
