mod error;
mod game;
mod input;
mod player;
mod score;
pub use error::*;
pub use game::*;
pub use input::*;
pub use player::*;
pub use score::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Config {
    pub rng: StdRng,
    /// Narrate the rounds, as needed when a human is playing.
    pub display_messages: bool,
}

impl Config {
    pub fn new(seed: u64, display_messages: bool) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            display_messages,
        }
    }
}
