//! Player-side strategies.
//!
//! Concrete types implementing [`Player`], used to drive a [`Table`](crate::Table)
//! from the player's seat the way a presentation layer would.
//!
//! ## Implementations
//!
//! - [`Fish`]: Uniform random picks and keeps
//! - [`Shark`]: Distinct picks, keeps whichever has the best worst case
mod fish;
mod player;
mod shark;

pub use fish::*;
pub use player::*;
pub use shark::*;
