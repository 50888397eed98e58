use super::*;

/// Who took a finished round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Player,
    Computer,
    Draw,
}

/// Read a matchup utility from the player's side.
impl From<Utility> for Outcome {
    fn from(utility: Utility) -> Self {
        match utility.signum() {
            1 => Self::Player,
            -1 => Self::Computer,
            _ => Self::Draw,
        }
    }
}

/// The player's hand against the computer's.
impl From<(Hand, Hand)> for Outcome {
    fn from((player, computer): (Hand, Hand)) -> Self {
        Self::from(player.evaluate(computer))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player wins"),
            Self::Computer => write!(f, "computer wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// A resolved round: both kept hands and who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    player: Hand,
    computer: Hand,
    outcome: Outcome,
}

impl Resolution {
    pub fn player(&self) -> Hand {
        self.player
    }
    pub fn computer(&self) -> Hand {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl From<(Hand, Hand)> for Resolution {
    fn from((player, computer): (Hand, Hand)) -> Self {
        Self {
            player,
            computer,
            outcome: Outcome::from((player, computer)),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.player, self.computer, self.outcome)
    }
}
