use super::*;

/// The set of hands a player may still keep.
///
/// A 3-bit mask over [`Hand`]. Duplicate picks collapse, and the set is never
/// empty: every constructor either starts from at least one hand or rejects an
/// empty input.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Candidates(u8);

impl Candidates {
    pub fn contains(&self, hand: &Hand) -> bool {
        self.0 & hand.bit() != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Member hands in index order.
    pub fn iter(&self) -> impl Iterator<Item = Hand> {
        let set = *self;
        Hand::all().into_iter().filter(move |h| set.contains(h))
    }
    /// The best result any member can get against `hand`.
    pub fn best(&self, hand: Hand) -> Utility {
        self.iter()
            .map(|mine| mine.evaluate(hand))
            .max()
            .unwrap_or(Utility::MIN)
    }
}

impl From<Hand> for Candidates {
    fn from(hand: Hand) -> Self {
        Self(hand.bit())
    }
}
impl From<HandPair> for Candidates {
    fn from(pair: HandPair) -> Self {
        Self(pair.first().bit() | pair.second().bit())
    }
}
impl TryFrom<&[Hand]> for Candidates {
    type Error = RoundError;
    fn try_from(hands: &[Hand]) -> Result<Self, Self::Error> {
        match hands.iter().fold(0u8, |mask, hand| mask | hand.bit()) {
            0 => Err(RoundError::NoCandidates),
            mask => Ok(Self(mask)),
        }
    }
}

impl std::fmt::Display for Candidates {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        write!(f, "{{{}}}", names.join(", "))
    }
}
