use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Picks and keeps uniformly at random.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    fn hand(&mut self) -> Hand {
        Hand::all()[self.0.random_range(0..N_HANDS)]
    }
}

impl Player for Fish {
    fn pick(&mut self) -> [Hand; N_CANDIDATES] {
        [self.hand(), self.hand()]
    }
    fn keep(&mut self, picks: [Hand; N_CANDIDATES], _: HandPair) -> Hand {
        picks[self.0.random_range(0..N_CANDIDATES)]
    }
}
