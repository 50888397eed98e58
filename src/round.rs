use super::*;

/// Round-local state, owned by a [`Table`].
///
/// Filled in across the stages of one round and cleared on reset. Each slot
/// is written at most once per round; the [`Table`] checks the stage before
/// any write so a rejected call leaves everything as it was.
///
/// # Fields
///
/// - `stage`: Where the round stands
/// - `picks`: The player's candidate hands in pick order, duplicates kept
/// - `revealed`: The computer's two hands, once drawn
/// - `player`: The hand the player kept
/// - `computer`: The hand the computer answered with
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    stage: Stage,
    picks: Vec<Hand>,
    revealed: Option<HandPair>,
    player: Option<Hand>,
    computer: Option<Hand>,
}

/// Public state accessors.
impl RoundState {
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn picks(&self) -> &[Hand] {
        &self.picks
    }
    pub fn revealed(&self) -> Option<HandPair> {
        self.revealed
    }
    /// The player's final hand, once committed.
    pub fn player(&self) -> Option<Hand> {
        self.player
    }
    /// The computer's final hand, once selected.
    pub fn computer(&self) -> Option<Hand> {
        self.computer
    }
    /// The picks as a set, once both are in.
    pub fn candidates(&self) -> Option<Candidates> {
        match self.picks.as_slice() {
            [a, b] => Some(Candidates::from(HandPair::from((*a, *b)))),
            _ => None,
        }
    }
    /// The finished round, if there is one.
    pub fn resolution(&self) -> Option<Resolution> {
        match (self.player, self.computer) {
            (Some(p), Some(c)) => Some(Resolution::from((p, c))),
            _ => None,
        }
    }
}

/// Stage transitions. Callers check the stage first.
impl RoundState {
    pub(crate) fn pick(&mut self, hand: Hand) {
        debug_assert!(self.stage.is_picking());
        self.picks.push(hand);
        self.advance();
    }
    pub(crate) fn reveal(&mut self, pair: HandPair) {
        debug_assert!(self.stage == Stage::AwaitingComputerReveal);
        self.revealed = Some(pair);
        self.advance();
    }
    pub(crate) fn resolve(&mut self, player: Hand, computer: Hand) {
        debug_assert!(self.stage == Stage::AwaitingPlayerFinalHand);
        self.player = Some(player);
        self.computer = Some(computer);
        self.advance();
    }
    fn advance(&mut self) {
        self.stage = self.stage.next().unwrap_or(Stage::Resolved);
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}]", self.stage)?;
        for pick in &self.picks {
            write!(f, " {}", pick)?;
        }
        if let Some(pair) = self.revealed {
            write!(f, " | {}", pair)?;
        }
        if let Some(resolution) = self.resolution() {
            write!(f, " | {}", resolution)?;
        }
        Ok(())
    }
}
