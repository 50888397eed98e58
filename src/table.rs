use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The round controller.
///
/// A `Table` steps one round through its [`Stage`]s and holds nothing but
/// round-local state and the random source used for the computer's draw and
/// tie-breaks. The session [`Score`] belongs to the caller and is lent to
/// [`commit`](Self::commit).
///
/// Every method either advances the round or returns a [`RoundError`] with
/// the state untouched. A presentation layer should read [`stage`](Self::stage)
/// and the returned values rather than track the round itself.
///
/// ```
/// use minusone::*;
/// let mut score = Score::default();
/// let mut table = Table::seeded(7);
/// table.start();
/// table.submit(Hand::Rock).unwrap();
/// table.submit(Hand::Paper).unwrap();
/// let revealed = table.reveal().unwrap();
/// let resolution = table.commit(Hand::Paper, &mut score).unwrap();
/// assert!(revealed.contains(&resolution.computer()));
/// assert_eq!(score.rounds(), 1);
/// ```
#[derive(Debug)]
pub struct Table {
    state: RoundState,
    rng: SmallRng,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// A table drawing from an OS-seeded source.
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    /// A table whose draws and tie-breaks repeat for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    pub fn state(&self) -> &RoundState {
        &self.state
    }
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }
}

/// Round operations.
impl Table {
    /// Begins a fresh round, discarding whatever was on the table.
    pub fn start(&mut self) -> &RoundState {
        self.state = RoundState::default();
        log::debug!("round started");
        &self.state
    }
    /// Accepts one of the player's two candidate hands.
    ///
    /// The same hand may be picked twice. The second pick reveals the
    /// computer's pair straight away, so on success after two picks the
    /// round is already awaiting the player's final hand.
    pub fn submit(&mut self, hand: Hand) -> Result<&RoundState, RoundError> {
        if !self.stage().is_picking() {
            return Err(RoundError::Exhausted);
        }
        self.state.pick(hand);
        log::debug!("player picked {}", hand);
        if self.stage() == Stage::AwaitingComputerReveal {
            self.reveal()?;
        }
        Ok(&self.state)
    }
    /// Draws and exposes the computer's two hands.
    ///
    /// The pair is drawn once, without replacement, so it never holds the
    /// same hand twice. Asking again after the draw returns the same pair.
    pub fn reveal(&mut self) -> Result<HandPair, RoundError> {
        match (self.stage(), self.state.revealed()) {
            (_, Some(pair)) => Ok(pair),
            (Stage::AwaitingComputerReveal, None) => {
                let pair = HandPair::draw(&mut self.rng);
                self.state.reveal(pair);
                log::debug!("computer revealed {}", pair);
                Ok(pair)
            }
            (stage, None) => Err(RoundError::WrongStage {
                op: "reveal",
                stage,
            }),
        }
    }
    /// Keeps one of the player's picks, lets the computer answer, and
    /// tallies the result into `score`.
    pub fn commit(&mut self, hand: Hand, score: &mut Score) -> Result<Resolution, RoundError> {
        let stage = self.stage();
        if stage != Stage::AwaitingPlayerFinalHand {
            return Err(RoundError::WrongStage { op: "commit", stage });
        }
        let (candidates, revealed) = match (self.state.candidates(), self.state.revealed()) {
            (Some(candidates), Some(revealed)) => (candidates, revealed),
            _ => return Err(RoundError::WrongStage { op: "commit", stage }),
        };
        if !candidates.contains(&hand) {
            return Err(RoundError::NotACandidate(hand));
        }
        let computer = Adversary::select(candidates, revealed, &mut self.rng);
        let resolution = Resolution::from((hand, computer));
        self.state.resolve(hand, computer);
        score.tally(resolution.outcome());
        log::debug!("{} ({})", resolution, score);
        Ok(resolution)
    }
    /// Clears the round and returns to the first pick. The score is not
    /// touched; it was never the table's.
    pub fn reset(&mut self) -> &RoundState {
        log::trace!("reset from {}", self.state);
        self.start()
    }
}

impl From<SmallRng> for Table {
    fn from(rng: SmallRng) -> Self {
        Self {
            state: RoundState::default(),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a table with both picks in and the pair revealed
    fn ready(seed: u64, a: Hand, b: Hand) -> Table {
        let mut table = Table::seeded(seed);
        table.start();
        table.submit(a).unwrap();
        table.submit(b).unwrap();
        table
    }

    #[test]
    fn start_awaits_first_hand() {
        let mut table = Table::seeded(0);
        assert_eq!(table.start().stage(), Stage::AwaitingFirstPlayerHand);
    }

    /// second pick reveals the computer pair without being asked
    #[test]
    fn second_pick_reveals() {
        let mut table = Table::seeded(0);
        table.start();
        let state = table.submit(Hand::Rock).unwrap();
        assert_eq!(state.stage(), Stage::AwaitingSecondPlayerHand);
        assert!(state.revealed().is_none());
        let state = table.submit(Hand::Scissors).unwrap();
        assert_eq!(state.stage(), Stage::AwaitingPlayerFinalHand);
        let pair = state.revealed().unwrap();
        assert!(!pair.is_doubled());
    }

    /// reveal is drawn once; asking again does not redraw
    #[test]
    fn reveal_is_stable() {
        let mut table = ready(1, Hand::Rock, Hand::Paper);
        let first = table.reveal().unwrap();
        for _ in 0..8 {
            assert_eq!(table.reveal().unwrap(), first);
        }
    }

    #[test]
    fn reveal_before_picks_is_rejected() {
        let mut table = Table::seeded(0);
        table.start();
        table.submit(Hand::Rock).unwrap();
        let before = table.state().clone();
        assert_eq!(
            table.reveal(),
            Err(RoundError::WrongStage {
                op: "reveal",
                stage: Stage::AwaitingSecondPlayerHand
            })
        );
        assert_eq!(table.state(), &before);
    }

    /// duplicate picks are two picks, not one
    #[test]
    fn duplicate_picks_accepted() {
        let table = ready(2, Hand::Paper, Hand::Paper);
        assert_eq!(table.state().picks(), &[Hand::Paper, Hand::Paper]);
        assert_eq!(table.stage(), Stage::AwaitingPlayerFinalHand);
        assert_eq!(table.state().candidates().map(|c| c.size()), Some(1));
    }

    #[test]
    fn commit_before_reveal_is_rejected() {
        let mut score = Score::default();
        let mut table = Table::seeded(3);
        table.start();
        table.submit(Hand::Rock).unwrap();
        let before = table.state().clone();
        let err = table.commit(Hand::Rock, &mut score).unwrap_err();
        assert_eq!(err.kind(), Kind::InvalidInput);
        assert_eq!(table.state(), &before);
        assert_eq!(score, Score::default());
    }

    #[test]
    fn third_pick_is_rejected() {
        let mut table = ready(4, Hand::Rock, Hand::Paper);
        let before = table.state().clone();
        let err = table.submit(Hand::Scissors).unwrap_err();
        assert_eq!(err, RoundError::Exhausted);
        assert_eq!(err.kind(), Kind::ExhaustedChoice);
        assert_eq!(table.state(), &before);
    }

    #[test]
    fn foreign_commit_is_rejected() {
        let mut score = Score::default();
        let mut table = ready(5, Hand::Rock, Hand::Paper);
        let before = table.state().clone();
        let err = table.commit(Hand::Scissors, &mut score).unwrap_err();
        assert_eq!(err, RoundError::NotACandidate(Hand::Scissors));
        assert_eq!(err.kind(), Kind::ExhaustedChoice);
        assert_eq!(table.state(), &before);
        assert_eq!(score.rounds(), 0);
    }

    /// the round resolves once; a second commit is refused and not tallied
    #[test]
    fn commit_resolves_once() {
        let mut score = Score::default();
        let mut table = ready(6, Hand::Rock, Hand::Paper);
        let resolution = table.commit(Hand::Paper, &mut score).unwrap();
        assert_eq!(table.stage(), Stage::Resolved);
        assert_eq!(table.state().resolution(), Some(resolution));
        assert!(table.state().revealed().unwrap().contains(&resolution.computer()));
        assert_eq!(score.rounds(), 1);
        assert!(table.commit(Hand::Paper, &mut score).is_err());
        assert_eq!(table.submit(Hand::Rock), Err(RoundError::Exhausted));
        assert_eq!(score.rounds(), 1);
    }

    /// the computer's answer is never dominated by its other hand
    #[test]
    fn commit_uses_adversary() {
        for seed in 0..64 {
            let mut score = Score::default();
            let mut table = ready(seed, Hand::Rock, Hand::Scissors);
            let pair = table.reveal().unwrap();
            let set = table.state().candidates().unwrap();
            let resolution = table.commit(Hand::Rock, &mut score).unwrap();
            let s1 = Adversary::score(set, pair.first());
            let s2 = Adversary::score(set, pair.second());
            let picked = Adversary::score(set, resolution.computer());
            if s1 != s2 {
                assert_eq!(picked, s1.max(s2));
            }
        }
    }

    #[test]
    fn reset_clears_round() {
        let mut score = Score::default();
        let mut table = ready(7, Hand::Rock, Hand::Paper);
        table.commit(Hand::Rock, &mut score).unwrap();
        let state = table.reset();
        assert_eq!(state, &RoundState::default());
        assert_eq!(score.rounds(), 1);
    }

    /// resetting after one pick, or after the reveal, clears everything
    #[test]
    fn reset_mid_round() {
        let mut table = Table::seeded(9);
        table.start();
        table.submit(Hand::Scissors).unwrap();
        assert_eq!(table.reset(), &RoundState::default());
        assert!(table.state().picks().is_empty());
        let mut table = ready(10, Hand::Rock, Hand::Paper);
        assert!(table.state().revealed().is_some());
        let state = table.reset();
        assert!(state.picks().is_empty());
        assert!(state.revealed().is_none());
        assert_eq!(state.stage(), Stage::AwaitingFirstPlayerHand);
        assert_eq!(
            table.reveal(),
            Err(RoundError::WrongStage {
                op: "reveal",
                stage: Stage::AwaitingFirstPlayerHand
            })
        );
        table.submit(Hand::Paper).unwrap();
        assert_eq!(table.state().picks(), &[Hand::Paper]);
    }

    /// keep rock until two player wins and one computer win land,
    /// resetting in between; the host's score carries across
    #[test]
    fn score_survives_resets() {
        let mut score = Score::default();
        let mut table = Table::seeded(8);
        while score.player() < 2 || score.computer() < 1 {
            table.reset();
            table.submit(Hand::Rock).unwrap();
            table.submit(Hand::Paper).unwrap();
            let mut trial = score;
            match table.commit(Hand::Rock, &mut trial).unwrap().outcome() {
                Outcome::Player if score.player() < 2 => score = trial,
                Outcome::Computer if score.computer() < 1 => score = trial,
                _ => continue,
            }
            assert_eq!(table.stage(), Stage::Resolved);
        }
        assert_eq!(score, Score::from((2, 1)));
        assert_eq!(table.reset(), &RoundState::default());
        assert_eq!(score, Score::from((2, 1)));
    }
}
