use super::*;

/// Plays a [`Player`] against the computer for many rounds.
///
/// The arena is a stand-in for a presentation layer: it only talks to the
/// [`Table`] through its public round operations and only shows the player
/// what a human would see. The [`Score`] stays with the caller.
pub struct Arena<P> {
    table: Table,
    player: P,
}

impl<P> Arena<P>
where
    P: Player,
{
    pub fn new(table: Table, player: P) -> Self {
        Self { table, player }
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    /// Plays one full round and tallies it.
    pub fn round(&mut self, score: &mut Score) -> anyhow::Result<Resolution> {
        self.table.reset();
        let picks = self.player.pick();
        for hand in picks {
            self.table.submit(hand)?;
        }
        let revealed = self.table.reveal()?;
        let kept = self.player.keep(picks, revealed);
        let resolution = self.table.commit(kept, score)?;
        self.player.notify(&resolution);
        if resolution.outcome() == Outcome::Player {
            log::debug!("celebrate: {} beat {}", resolution.player(), resolution.computer());
        }
        Ok(resolution)
    }
    /// Plays `rounds` rounds into `score`.
    pub fn play(&mut self, rounds: usize, score: &mut Score) -> anyhow::Result<()> {
        log::info!("playing {} rounds", rounds);
        for i in 0..rounds {
            let resolution = self.round(score)?;
            log::trace!("{:>6} {}", i, resolution);
        }
        log::info!("{} ({} draws)", score, score.draws());
        Ok(())
    }
}
