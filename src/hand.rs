use super::*;

/// One of the three throwable hands.
///
/// The hands form a cycle where each beats exactly one other:
/// rock beats scissors, scissors beats paper, paper beats rock.
/// A hand never beats itself.
///
/// # Representations
///
/// - `u8`: index `0..3` in rock, paper, scissors order
/// - `&str`: full lowercase name or its first letter, case-insensitive
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// All hands in index order.
    pub const fn all() -> [Self; N_HANDS] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The hand this one defeats.
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The hand that defeats this one.
    pub const fn loses(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// Matchup result from `self`'s side.
    ///
    /// +1 if `self` beats `other`, -1 if `other` beats `self`, 0 on a tie.
    pub fn evaluate(self, other: Self) -> Utility {
        if self == other {
            0
        } else if self.beats() == other {
            1
        } else {
            -1
        }
    }
    /// The two hands other than this one, in index order.
    pub fn others(self) -> [Self; N_HANDS - 1] {
        match self {
            Self::Rock => [Self::Paper, Self::Scissors],
            Self::Paper => [Self::Rock, Self::Scissors],
            Self::Scissors => [Self::Rock, Self::Paper],
        }
    }
    /// Single-bit mask for set membership in [`Candidates`].
    pub(crate) fn bit(self) -> u8 {
        1 << u8::from(self)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::all()[rand::random_range(0..N_HANDS)]
    }
}

/// u8 isomorphism
impl From<Hand> for u8 {
    fn from(hand: Hand) -> u8 {
        hand as u8
    }
}
impl TryFrom<u8> for Hand {
    type Error = RoundError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Rock),
            1 => Ok(Self::Paper),
            2 => Ok(Self::Scissors),
            n => Err(RoundError::OutOfRange(n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Hand {
    type Error = RoundError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            _ => Err(RoundError::UnknownHand(s.to_string())),
        }
    }
}
impl std::str::FromStr for Hand {
    type Err = RoundError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}
