use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Plays the player's side of the same one-ply minimax the computer uses.
///
/// Picks two distinct hands, then keeps the pick whose worst result over the
/// revealed pair is highest, breaking ties with a coin flip.
#[derive(Debug)]
pub struct Shark(SmallRng);

impl Default for Shark {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Shark {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    /// The worst `hand` can do against either revealed hand.
    pub fn floor(hand: Hand, revealed: HandPair) -> Utility {
        revealed
            .iter()
            .map(|theirs| hand.evaluate(theirs))
            .min()
            .unwrap_or(Utility::MIN)
    }
}

impl Player for Shark {
    fn pick(&mut self) -> [Hand; N_CANDIDATES] {
        HandPair::draw(&mut self.0).into()
    }
    fn keep(&mut self, [a, b]: [Hand; N_CANDIDATES], revealed: HandPair) -> Hand {
        match Self::floor(a, revealed).cmp(&Self::floor(b, revealed)) {
            std::cmp::Ordering::Greater => a,
            std::cmp::Ordering::Less => b,
            std::cmp::Ordering::Equal if self.0.random_bool(0.5) => a,
            std::cmp::Ordering::Equal => b,
        }
    }
}
