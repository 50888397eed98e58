use crate::*;

/// Anything that can sit in the player's seat.
///
/// A player is asked for two candidate hands, then shown the computer's
/// revealed pair and asked which candidate to keep. The [`Arena`] only ever
/// offers what a human at a presentation layer would see: no access to the
/// table's random source or the computer's final choice before it is made.
pub trait Player {
    /// The two candidate hands, in pick order. Duplicates are allowed.
    fn pick(&mut self) -> [Hand; N_CANDIDATES];
    /// Which of `picks` to keep after seeing the computer's pair.
    /// Must return one of `picks`.
    fn keep(&mut self, picks: [Hand; N_CANDIDATES], revealed: HandPair) -> Hand;
    /// Receive the finished round.
    /// Not required for decision-making.
    fn notify(&mut self, _: &Resolution) {}
}
