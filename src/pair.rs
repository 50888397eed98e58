use super::*;
use rand::Rng;

/// Two hands held by one side before one is discarded.
///
/// Stored in reveal order so a presentation layer can show them the way they
/// were dealt, but otherwise unordered: [`contains`](Self::contains) and the
/// [`Adversary`] never care which came first. A pair may hold the same hand
/// twice when built by a caller; [`draw`](Self::draw) never does.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct HandPair(Hand, Hand);

impl HandPair {
    /// Draws two distinct hands uniformly at random, without replacement.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = Hand::all()[rng.random_range(0..N_HANDS)];
        let b = a.others()[rng.random_range(0..N_HANDS - 1)];
        Self(a, b)
    }
    pub fn first(&self) -> Hand {
        self.0
    }
    pub fn second(&self) -> Hand {
        self.1
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.0 == *hand || self.1 == *hand
    }
    /// Whether both slots hold the same hand.
    pub fn is_doubled(&self) -> bool {
        self.0 == self.1
    }
    pub fn iter(&self) -> impl Iterator<Item = Hand> {
        [self.0, self.1].into_iter()
    }
}

impl Arbitrary for HandPair {
    fn random() -> Self {
        Self::draw(&mut rand::rng())
    }
}

impl From<(Hand, Hand)> for HandPair {
    fn from((a, b): (Hand, Hand)) -> Self {
        Self(a, b)
    }
}
impl From<[Hand; N_CANDIDATES]> for HandPair {
    fn from([a, b]: [Hand; N_CANDIDATES]) -> Self {
        Self(a, b)
    }
}
impl From<HandPair> for [Hand; N_CANDIDATES] {
    fn from(pair: HandPair) -> Self {
        [pair.0, pair.1]
    }
}

impl std::fmt::Display for HandPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
