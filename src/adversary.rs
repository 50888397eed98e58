use super::*;
use rand::Rng;

/// The computer's final-hand heuristic.
///
/// The player has already seen both computer hands, so for each of them the
/// computer assumes the player keeps whichever candidate does best against it.
/// It then keeps the hand where that best response is weakest. This is a
/// one-ply minimax over two options, not an equilibrium strategy: the only
/// randomness is the coin flip between equally scored hands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adversary;

impl Adversary {
    /// How good `hand` is for the computer against the player's best response.
    pub fn score(candidates: Candidates, hand: Hand) -> Utility {
        -candidates.best(hand)
    }
    /// Picks one of the computer's two hands.
    ///
    /// Returns the strictly higher scoring hand, or flips a fair coin between
    /// the two when they score the same.
    pub fn select<R: Rng + ?Sized>(candidates: Candidates, computer: HandPair, rng: &mut R) -> Hand {
        let (c1, c2) = (computer.first(), computer.second());
        let s1 = Self::score(candidates, c1);
        let s2 = Self::score(candidates, c2);
        let choice = match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => c1,
            std::cmp::Ordering::Less => c2,
            std::cmp::Ordering::Equal if rng.random_bool(0.5) => c1,
            std::cmp::Ordering::Equal => c2,
        };
        log::trace!(
            "adversary {} vs {}: {} ({:+}) {} ({:+}) -> {}",
            candidates,
            computer,
            c1,
            s1,
            c2,
            s2,
            choice
        );
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sets() -> Vec<Candidates> {
        let mut sets = Hand::all().map(Candidates::from).to_vec();
        for a in Hand::all() {
            for b in a.others() {
                sets.push(Candidates::from(HandPair::from((a, b))));
            }
        }
        sets
    }

    fn pairs() -> Vec<HandPair> {
        Hand::all()
            .into_iter()
            .flat_map(|a| Hand::all().map(|b| HandPair::from((a, b))))
            .collect()
    }

    /// the selection is always one of the computer's own hands
    #[test]
    fn selects_from_pair() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for set in sets() {
            for pair in pairs() {
                assert!(pair.contains(&Adversary::select(set, pair, rng)));
            }
        }
    }

    /// never worse than the weaker option, and the stronger one when scores differ
    #[test]
    fn never_dominated() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for set in sets() {
            for pair in pairs() {
                let s1 = Adversary::score(set, pair.first());
                let s2 = Adversary::score(set, pair.second());
                for _ in 0..16 {
                    let pick = Adversary::score(set, Adversary::select(set, pair, rng));
                    assert!(pick >= s1.min(s2));
                    if s1 != s2 {
                        assert_eq!(pick, s1.max(s2));
                    }
                }
            }
        }
    }

    /// {rock, paper} vs {scissors, rock}: both score -1, either may come out
    #[test]
    fn tie_is_random() {
        let set = Candidates::from(HandPair::from((Hand::Rock, Hand::Paper)));
        let pair = HandPair::from((Hand::Scissors, Hand::Rock));
        assert_eq!(Adversary::score(set, Hand::Scissors), -1);
        assert_eq!(Adversary::score(set, Hand::Rock), -1);
        let ref mut rng = SmallRng::seed_from_u64(2);
        let picks = (0..128)
            .map(|_| Adversary::select(set, pair, rng))
            .collect::<Vec<_>>();
        assert!(picks.contains(&Hand::Scissors));
        assert!(picks.contains(&Hand::Rock));
    }

    /// {rock} vs {paper, scissors}: paper every time
    #[test]
    fn single_candidate_is_deterministic() {
        let set = Candidates::from(Hand::Rock);
        let pair = HandPair::from((Hand::Paper, Hand::Scissors));
        assert_eq!(Adversary::score(set, Hand::Paper), 1);
        assert_eq!(Adversary::score(set, Hand::Scissors), -1);
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..64 {
            assert_eq!(Adversary::select(set, pair, rng), Hand::Paper);
        }
    }

    /// a doubled player pick behaves like the single hand
    #[test]
    fn doubled_pick_collapses() {
        let doubled = Candidates::from(HandPair::from((Hand::Rock, Hand::Rock)));
        let pair = HandPair::from((Hand::Scissors, Hand::Paper));
        let ref mut rng = SmallRng::seed_from_u64(4);
        assert_eq!(Adversary::select(doubled, pair, rng), Hand::Paper);
    }
}
