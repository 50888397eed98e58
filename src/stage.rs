/// Where a round stands.
///
/// Stages only move forward, one call at a time, until [`Resolved`](Self::Resolved).
/// A reset is the only way back to the start.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    #[default]
    AwaitingFirstPlayerHand,
    AwaitingSecondPlayerHand,
    AwaitingComputerReveal,
    AwaitingPlayerFinalHand,
    Resolved,
}

impl Stage {
    /// Whether a candidate pick is expected.
    pub fn is_picking(&self) -> bool {
        matches!(
            self,
            Self::AwaitingFirstPlayerHand | Self::AwaitingSecondPlayerHand
        )
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }
    /// The stage after this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::AwaitingFirstPlayerHand => Some(Self::AwaitingSecondPlayerHand),
            Self::AwaitingSecondPlayerHand => Some(Self::AwaitingComputerReveal),
            Self::AwaitingComputerReveal => Some(Self::AwaitingPlayerFinalHand),
            Self::AwaitingPlayerFinalHand => Some(Self::Resolved),
            Self::Resolved => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AwaitingFirstPlayerHand => write!(f, "awaiting first player hand"),
            Self::AwaitingSecondPlayerHand => write!(f, "awaiting second player hand"),
            Self::AwaitingComputerReveal => write!(f, "awaiting computer reveal"),
            Self::AwaitingPlayerFinalHand => write!(f, "awaiting player final hand"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}
