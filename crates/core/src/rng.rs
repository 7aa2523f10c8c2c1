//! RNG module - where new pieces come from
//!
//! The game state asks a [`PieceSource`] for a catalog index every time it
//! spawns. [`RandomPieces`] picks uniformly with a seedable `StdRng`, so the
//! same seed replays the same game. [`ScriptedPieces`] replays a fixed list.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies catalog indices for newly spawned pieces
pub trait PieceSource {
    /// Pick an index in `0..catalog_len`. `catalog_len` is never zero.
    fn next_index(&mut self, catalog_len: usize) -> usize;
}

/// Uniform random choice, one independent draw per spawn
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: StdRng,
}

impl RandomPieces {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_index(&mut self, catalog_len: usize) -> usize {
        self.rng.gen_range(0..catalog_len)
    }
}

/// Cycles through a fixed sequence of catalog indices
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedPieces {
    /// An empty script always yields index 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            pos: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_index(&mut self, catalog_len: usize) -> usize {
        let idx = if self.script.is_empty() {
            0
        } else {
            self.script[self.pos % self.script.len()]
        };
        self.pos += 1;
        // Out-of-range entries wrap instead of panicking in the engine.
        idx % catalog_len
    }
}
