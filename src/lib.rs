//! Rock-paper-scissors, minus one.
//!
//! Each side holds two hands. The player picks theirs first, the computer's
//! pair is drawn and revealed, and then the player keeps one of their two.
//! The computer answers with whichever of its own two hands does best against
//! the player's best response.
//!
//! ## Core Types
//!
//! - [`Hand`]: Rock, paper, or scissors, with the matchup rule [`Hand::evaluate`]
//! - [`HandPair`]: Two hands in reveal order
//! - [`Candidates`]: The non-empty set of hands a player may still keep
//! - [`Outcome`]: Who took the round
//!
//! ## Decision
//!
//! - [`Adversary`]: One-ply minimax over the computer's two hands
//!
//! ## Bookkeeping
//!
//! - [`Table`]: The round controller, stepping through [`Stage`]s
//! - [`RoundState`]: Round-local picks and reveals
//! - [`Score`]: Session tally, owned by the host and lent to [`Table::commit`]
//!
//! ## Simulation
//!
//! - [`Player`]: Anything that can pick and keep hands
//! - [`Fish`], [`Shark`]: Random and maximin players
//! - [`Arena`]: Plays a player against the computer for many rounds
mod adversary;
mod arena;
mod candidates;
mod error;
mod hand;
mod outcome;
mod pair;
mod players;
mod round;
mod score;
mod stage;
mod table;

pub use adversary::*;
pub use arena::*;
pub use candidates::*;
pub use error::*;
pub use hand::*;
pub use outcome::*;
pub use pair::*;
pub use players::*;
pub use round::*;
pub use score::*;
pub use stage::*;
pub use table::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Result of a single matchup from the first hand's point of view: +1, 0, -1.
pub type Utility = i8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of distinct hands.
pub const N_HANDS: usize = 3;
/// Hands each side holds before discarding one.
pub const N_CANDIDATES: usize = 2;
/// Default number of rounds for a simulation run.
pub const ROUNDS: usize = 1024;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target, and thread columns are suppressed.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
