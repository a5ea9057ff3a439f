use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a 5-card hand's strength.
///
/// Using the compact bitmask representation of the Hand, we search for
/// the highest Ranking with bitwise operations, strongest category first.
/// Larger hands go through [`Strength`](super::strength::Strength), which
/// runs this over every 5-card subset.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        debug_assert!(h.size() == 5);
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .unwrap_or(Ranking::HighCard(Rank::Two))
    }
    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        match value.n_kickers() {
            0 => Kickers::default(),
            n => {
                let ranks = match value {
                    Ranking::Flush(_) => self
                        .find_suit_of_flush()
                        .map(|suit| u16::from(self.0.of(&suit)))
                        .unwrap_or_default(),
                    _ => u16::from(self.0),
                };
                let mut rank = ranks & value.mask();
                while n < rank.count_ones() as usize {
                    rank &= rank - 1;
                }
                Kickers::from(rank)
            }
        }
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(self.0.of(&suit)))
            .map(|rank| match rank {
                Rank::Ace => Ranking::RoyalFlush,
                rank => Ranking::StraightFlush(rank),
            })
    }

    /// highest straight in a rank mask, wheel included.
    /// five consecutive bits survive four shift-and-masks
    pub fn straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks & Rank::mask();
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        Self::straight(u16::from(hand))
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mine = u64::from(self.0);
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| (u64::from(*rank) & mine).count_ones() >= n as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight_from_rank_mask() {
        assert_eq!(Evaluator::straight(0b0000000011111), Some(Rank::Six));
        assert_eq!(Evaluator::straight(0b1000000001111), Some(Rank::Five));
        assert_eq!(Evaluator::straight(0b1111100000000), Some(Rank::Ace));
        assert_eq!(Evaluator::straight(0b1100000000111), None);
        assert_eq!(Evaluator::straight(0b0000000010111), None);
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[rustfmt::skip]
    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = eval("9s Ts Js Qs Ks");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn royal_flush() {
        let (ranking, kickers) = eval("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::RoyalFlush);
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn no_wraparound_straight() {
        let (ranking, _) = eval("Qs Kh Ad 2c 3s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn wheel_below_six_high() {
        let (wheel, _) = eval("As 2h 3d 4c 5s");
        let (six, _) = eval("2h 3d 4c 5s 6s");
        let (ace, _) = eval("As Kh Qd Jc 9s");
        assert!(wheel < six);
        assert!(wheel > ace);
    }
}
