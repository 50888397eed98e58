use super::*;

/// The two families a rejected call falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A value outside the enumeration, or an operation in the wrong stage.
    InvalidInput,
    /// A pick beyond the two allowed, or a keep outside the picks.
    ExhaustedChoice,
}

/// Why a [`Table`] or a [`Hand`] conversion refused a call.
///
/// Every rejection happens before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("unknown hand {0:?}")]
    UnknownHand(String),
    #[error("hand index {0} out of range 0..3")]
    OutOfRange(u8),
    #[error("candidate set is empty")]
    NoCandidates,
    #[error("cannot {op} while {stage}")]
    WrongStage { op: &'static str, stage: Stage },
    #[error("both candidate hands already picked")]
    Exhausted,
    #[error("{0} was not one of the picked hands")]
    NotACandidate(Hand),
}

impl RoundError {
    pub fn kind(&self) -> Kind {
        match self {
            Self::UnknownHand(_)
            | Self::OutOfRange(_)
            | Self::NoCandidates
            | Self::WrongStage { .. } => Kind::InvalidInput,
            Self::Exhausted | Self::NotACandidate(_) => Kind::ExhaustedChoice,
        }
    }
}
