use super::*;

/// Session tally across rounds.
///
/// Owned by whoever hosts the [`Table`] and lent to [`Table::commit`], which
/// bumps it exactly once per resolved round. The table never resets it.
/// Draws are counted separately and never touch the two win counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    player: u64,
    computer: u64,
    draws: u64,
}

impl Score {
    pub fn player(&self) -> u64 {
        self.player
    }
    pub fn computer(&self) -> u64 {
        self.computer
    }
    pub fn draws(&self) -> u64 {
        self.draws
    }
    /// Rounds tallied so far.
    pub fn rounds(&self) -> u64 {
        self.player + self.computer + self.draws
    }
    /// Records one finished round.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl From<(u64, u64)> for Score {
    fn from((player, computer): (u64, u64)) -> Self {
        Self {
            player,
            computer,
            draws: 0,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player {} - {} Computer", self.player, self.computer)
    }
}
