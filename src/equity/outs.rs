use crate::Error;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::observation::Observation;
use crate::cards::street::Street;
use crate::cards::strength::Strength;

/// Draw counting: which single unseen card makes the hand better.
impl Observation {
    /// Unseen cards that would lift the hand into a stronger category
    /// above one pair. Pairing a hole card is not a draw.
    ///
    /// `9h8h` on `7c6d2s` has eight outs: four fives and four tens.
    pub fn outs(&self) -> Result<usize, Error> {
        self.count(|before, after| {
            after.category() > before.category() && after.category() > Category::OnePair
        })
    }

    /// Unseen cards that would produce any strictly stronger hand,
    /// kicker upgrades included.
    pub fn improvements(&self) -> Result<usize, Error> {
        self.count(|before, after| after > before)
    }

    /// the river has nothing left to draw
    fn count<F>(&self, better: F) -> Result<usize, Error>
    where
        F: Fn(&Strength, &Strength) -> bool,
    {
        let ref deck = self.deck()?;
        if self.street() == Street::Rive {
            return Ok(0);
        }
        let known = self.known();
        let baseline = Strength::evaluate(&known)?;
        Hand::from(deck).try_fold(0, |n, card| {
            let mut next = known.clone();
            next.push(card);
            let strength = Strength::evaluate(&next)?;
            Ok(n + usize::from(better(&baseline, &strength)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe(s: &str) -> Observation {
        Observation::try_from(s).unwrap()
    }

    #[test]
    fn open_ended_straight_draw() {
        assert_eq!(observe("9h8h~7c6d2s").outs().unwrap(), 8);
    }

    #[test]
    fn every_card_is_an_improvement() {
        // nine high: any unseen card either pairs or upgrades a kicker
        assert_eq!(observe("9h8h~7c6d2s").improvements().unwrap(), 47);
    }

    #[test]
    fn flush_draw() {
        // nine hearts left
        assert_eq!(observe("AhKh~7h6h2c").outs().unwrap(), 9);
    }

    #[test]
    fn turn_draw() {
        assert_eq!(observe("9h8h~7c6d2sKc").outs().unwrap(), 8);
    }

    #[test]
    fn royal_flush_has_no_outs() {
        let obs = observe("AsKs~QsJsTs");
        assert_eq!(obs.outs().unwrap(), 0);
        assert_eq!(obs.improvements().unwrap(), 0);
    }

    #[test]
    fn river_has_no_outs() {
        let obs = observe("9h8h~7c6d2s3cKd");
        assert_eq!(obs.outs().unwrap(), 0);
        assert_eq!(obs.improvements().unwrap(), 0);
    }

    #[test]
    fn preflop_is_unevaluated() {
        assert!(matches!(observe("9h8h").outs(), Err(Error::HandSize(2))));
    }

    #[test]
    fn duplicate_known_cards() {
        assert!(matches!(observe("9h8h~9h6d2s").outs(), Err(Error::Missing(_))));
    }
}
