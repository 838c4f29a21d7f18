//! RNG module - single-slot look-ahead piece generation
//!
//! The source always holds exactly one pre-generated piece (the "next" piece shown to the
//! player). Taking it draws a replacement uniformly from the seven kinds, independently of
//! earlier draws, so repeats are allowed.
//!
//! Seeded construction gives a reproducible sequence for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::PieceKind;

/// Look-ahead piece generator
#[derive(Debug, Clone)]
pub struct NextPieceSource {
    next: Piece,
    rng: StdRng,
}

impl NextPieceSource {
    /// Create a source with a deterministic sequence
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = Piece::new(random_kind(&mut rng));
        Self { next, rng }
    }

    /// Create a source seeded from OS entropy
    pub fn from_entropy() -> Self {
        let mut rng = StdRng::from_entropy();
        let next = Piece::new(random_kind(&mut rng));
        Self { next, rng }
    }

    /// Create a seeded source whose first held piece is `kind`
    pub fn with_next(kind: PieceKind, seed: u64) -> Self {
        Self {
            next: Piece::new(kind),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The held piece, without consuming it
    pub fn peek(&self) -> &Piece {
        &self.next
    }

    /// Return the held piece and draw its replacement
    pub fn get_piece(&mut self) -> Piece {
        let fresh = Piece::new(random_kind(&mut self.rng));
        std::mem::replace(&mut self.next, fresh)
    }
}

impl Default for NextPieceSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn random_kind(rng: &mut impl Rng) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
