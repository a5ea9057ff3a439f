use super::card::Card;
use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::subsets::Subsets;
use crate::Error;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers. Equal strengths are exact ties.
///
/// # Raw score
///
/// `u32::from(strength)` packs `ranking:12 | kickers:13` into the low 25
/// bits. Integer order equals strength order, so the raw form is what gets
/// persisted in the [`RankTable`](crate::lookup::RankTable).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    /// Strength of the best 5-card hand among 5, 6, or 7 distinct cards.
    pub fn evaluate(cards: &[Card]) -> Result<Self, Error> {
        Self::try_from(Hand::try_from(cards)?)
    }
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> Category {
        self.value.category()
    }
    /// five distinct ranks headed by `hi` must sit below it
    /// and must not run into a straight
    fn realizable(value: Ranking, kicks: Kickers) -> bool {
        match value {
            Ranking::HighCard(hi) | Ranking::Flush(hi) => {
                let ranks = u16::from(kicks) | u16::from(hi);
                u16::from(kicks) < u16::from(hi) && Evaluator::straight(ranks).is_none()
            }
            _ => true,
        }
    }
}

/// every 5-card subset is evaluated and the best one wins.
/// 1 subset for 5 cards, 6 for 6, 21 for 7
impl TryFrom<Hand> for Strength {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            5..=7 => Subsets::from((5, hand))
                .map(Evaluator::from)
                .map(Self::from)
                .max()
                .ok_or(Error::HandSize(hand.size())),
            n => Err(Error::HandSize(n)),
        }
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

/// raw score
impl From<Strength> for u32 {
    fn from(s: Strength) -> u32 {
        (u16::from(s.value) as u32) << 13 | u16::from(s.kicks) as u32
    }
}

/// raw scores come back from disk, so decoding checks everything
/// the packing guarantees
impl TryFrom<u32> for Strength {
    type Error = Error;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if n >> 25 != 0 {
            return Err(Error::Malformed(n));
        }
        let value = Ranking::try_from((n >> 13) as u16).map_err(|_| Error::Malformed(n))?;
        let kicks = Kickers::from((n & 0x1FFF) as u16);
        let count = kicks.size() == value.n_kickers();
        let clean = u16::from(kicks) & !value.mask() == 0;
        let sound = Self::realizable(value, kicks);
        match count && clean && sound {
            true => Ok(Self { value, kicks }),
            false => Err(Error::Malformed(n)),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    fn strength(s: &str) -> Strength {
        Strength::evaluate(&Card::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn seven_card_hand() {
        let s = strength("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(s.ranking(), Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(s.kickers(), Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let s = strength("4h 6h 7h 8h 9h Ts");
        assert_eq!(s.ranking(), Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let s = strength("Kh Ah Ad As Ks Qs Js");
        assert_eq!(s.ranking(), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let s = strength("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(s.ranking(), Ranking::FourOAK(Rank::Ace));
        assert_eq!(s.kickers(), Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn low_straight() {
        let s = strength("As 2s 3h 4d 5c 6s");
        assert_eq!(s.ranking(), Ranking::Straight(Rank::Six));
    }

    #[test]
    fn three_pair() {
        let s = strength("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(s.ranking(), Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(s.kickers(), Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let s = strength("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(s.ranking(), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn seven_card_flush_keeps_best_five() {
        let s = strength("Ah Kh 9h 7h 5h 3h 2h");
        assert_eq!(s.ranking(), Ranking::Flush(Rank::Ace));
        assert_eq!(s.kickers(), Kickers::from(vec![Rank::King, Rank::Nine, Rank::Seven, Rank::Five]));
    }

    #[test]
    fn flush_kickers_break_ties() {
        assert!(strength("Ah Kh 9h 7h 5h") > strength("Ad Kd 9d 7d 4d"));
        assert!(strength("Ah Kh 9h 7h 5h") == strength("Ad Kd 9d 7d 5d"));
    }

    #[test]
    fn royal_flush_is_strongest() {
        let royal = strength("As Ks Qs Js Ts");
        assert_eq!(royal.category(), Category::RoyalFlush);
        assert!(royal > strength("Ks Qs Js Ts 9s"));
        assert!(royal > strength("As Ah Ad Ac Ks"));
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(matches!(Strength::evaluate(&Card::parse("As Ks Qs Js").unwrap()), Err(Error::HandSize(4))));
        assert!(matches!(Strength::evaluate(&Card::parse("As Ks Qs Js Ts 9s 8s 7s").unwrap()), Err(Error::HandSize(8))));
        assert!(matches!(Strength::evaluate(&Card::parse("As Ks Qs Js As").unwrap()), Err(Error::Duplicate(_))));
    }

    #[test]
    fn order_independent() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut cards = Card::parse("Qd 7c 7h 2s Jd 9d Td").unwrap();
        let expected = Strength::evaluate(&cards).unwrap();
        for _ in 0..32 {
            cards.shuffle(rng);
            assert_eq!(Strength::evaluate(&cards).unwrap(), expected);
        }
    }

    #[test]
    fn seven_cards_equal_best_of_21() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut deck = Card::all().collect::<Vec<Card>>();
        for _ in 0..256 {
            deck.shuffle(rng);
            let seven = &deck[..7];
            let mut best = None;
            for a in 0..7 {
                for b in a + 1..7 {
                    for c in b + 1..7 {
                        for d in c + 1..7 {
                            for e in d + 1..7 {
                                let five = [seven[a], seven[b], seven[c], seven[d], seven[e]];
                                let s = Strength::evaluate(&five).unwrap();
                                best = best.max(Some(s));
                            }
                        }
                    }
                }
            }
            assert_eq!(Some(Strength::evaluate(seven).unwrap()), best);
        }
    }

    #[test]
    fn raw_score_agrees_with_order() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Card::all().collect::<Vec<Card>>();
        for _ in 0..256 {
            deck.shuffle(rng);
            let a = Strength::evaluate(&deck[..5]).unwrap();
            let b = Strength::evaluate(&deck[5..10]).unwrap();
            assert_eq!(a.cmp(&b), u32::from(a).cmp(&u32::from(b)));
            assert_eq!(Strength::try_from(u32::from(a)).unwrap(), a);
        }
    }

    #[test]
    fn malformed_raw_scores() {
        let pair = u32::from(strength("As Ah Kd Qc Js"));
        assert!(Strength::try_from(pair | 1 << 30).is_err());
        assert!(Strength::try_from(pair & !0x1FFF).is_err());
        assert!(Strength::try_from(u32::from(u16::MAX) << 13).is_err());
    }

    #[test]
    fn unrealizable_raw_scores() {
        let raw = |value: Ranking, kicks: Vec<Rank>| u32::from(Strength::from((value, Kickers::from(kicks))));
        let impossible = [
            raw(Ranking::Straight(Rank::Four), vec![]),
            raw(Ranking::TwoPair(Rank::Three, Rank::Ace), vec![Rank::King]),
            raw(Ranking::FullHouse(Rank::Ten, Rank::Ten), vec![]),
            raw(Ranking::HighCard(Rank::Nine), vec![Rank::Ace, Rank::Five, Rank::Four, Rank::Three]),
            raw(Ranking::HighCard(Rank::Nine), vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]),
            raw(Ranking::Flush(Rank::Ace), vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two]),
        ];
        for n in impossible {
            assert!(matches!(Strength::try_from(n), Err(Error::Malformed(_))), "{:#09x}", n);
        }
        let seven_high = strength("7c 5d 4h 3s 2c");
        assert_eq!(Strength::try_from(u32::from(seven_high)).unwrap(), seven_high);
    }
}
