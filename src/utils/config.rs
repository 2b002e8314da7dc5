use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Settings of a single console session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Seed of the initial field; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub live_glyph: char,
    pub dead_glyph: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::SIDE,
            height: Self::SIDE,
            seed: None,
            live_glyph: Self::LIVE_GLYPH,
            dead_glyph: Self::DEAD_GLYPH,
        }
    }
}

impl Config {
    pub const SIDE: usize = 5;
    pub const LIVE_GLYPH: char = '*';
    pub const DEAD_GLYPH: char = '.';

    pub fn rng(&self) -> ChaCha8Rng {
        if let Some(x) = self.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        }
    }
}
