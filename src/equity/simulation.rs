use crate::Error;
use crate::Probability;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::observation::Observation;
use crate::cards::strength::Strength;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::cmp::Ordering;

/// independent rng streams a parallel simulation is split into.
/// fixed so that results depend on the seed and not the thread count
const SHARDS: usize = 32;

/// Monte Carlo equity against one random opponent.
impl Observation {
    /// Estimated probability of beating a single uniformly random hand,
    /// with ties counted as half a win.
    ///
    /// Each trial shuffles the unseen cards, deals the opponent the top two,
    /// and completes the board from the rest. Reproducible for a seeded `rng`.
    pub fn equity<R>(&self, trials: usize, rng: &mut R) -> Result<Probability, Error>
    where
        R: Rng + ?Sized,
    {
        if trials == 0 {
            return Err(Error::NoTrials);
        }
        let ref mut deck = self.deck()?;
        let points = self.points(deck, trials, rng)?;
        Ok(Self::ratio(points, trials))
    }

    /// [`Observation::equity`] split across rayon workers.
    ///
    /// Every shard owns its own deck and its own [`SmallRng`] seeded from
    /// `(seed, shard)`, so the estimate is deterministic for a given seed.
    pub fn simulate(&self, trials: usize, seed: u64) -> Result<Probability, Error> {
        if trials == 0 {
            return Err(Error::NoTrials);
        }
        let deck = self.deck()?;
        let points = (0..SHARDS)
            .into_par_iter()
            .map(|shard| {
                let n = trials / SHARDS + usize::from(shard < trials % SHARDS);
                let ref mut deck = deck.clone();
                let ref mut rng = SmallRng::seed_from_u64(seed ^ (shard as u64).rotate_left(32));
                self.points(deck, n, rng)
            })
            .try_reduce(|| 0, |a, b| Ok(a + b))?;
        log::debug!("{:<32}{:<32}", "simulated", self);
        Ok(Self::ratio(points, trials))
    }

    /// half-points over many trials: 2 per win, 1 per tie
    fn points<R>(&self, deck: &mut Deck, trials: usize, rng: &mut R) -> Result<usize, Error>
    where
        R: Rng + ?Sized,
    {
        (0..trials).map(|_| self.showdown(deck, rng)).sum()
    }

    /// one random runout against one random opponent
    fn showdown<R>(&self, deck: &mut Deck, rng: &mut R) -> Result<usize, Error>
    where
        R: Rng + ?Sized,
    {
        deck.shuffle(rng);
        let dealt = deck.peek(2 + self.street().n_pending())?;
        let (villain, runout) = dealt.split_at(2);
        let board = self.public().cards().iter().chain(runout);
        let hero = Self::strength(self.pocket().cards().iter().chain(board.clone()))?;
        let them = Self::strength(villain.iter().chain(board))?;
        match hero.cmp(&them) {
            Ordering::Greater => Ok(2),
            Ordering::Equal => Ok(1),
            Ordering::Less => Ok(0),
        }
    }

    fn strength<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<Strength, Error> {
        Strength::evaluate(&cards.copied().collect::<Vec<_>>())
    }

    fn ratio(points: usize, trials: usize) -> Probability {
        points as Probability / (2 * trials) as Probability
    }
}
