use super::category::Category;
use super::rank::Rank;

/// A poker hand's value, without its kickers.
///
/// The value is ordered by category first, then by the ranks that define
/// the category. Kickers are used to break the remaining ties.
/// The royal flush is kept apart from the other straight flushes.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// ranks that may serve as kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::Flush(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::RoyalFlush => 0,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// whether any 5-card hand evaluates to this ranking.
    /// kicker constraints live in [`Strength`](super::strength::Strength)
    pub fn realizable(&self) -> bool {
        match *self {
            Ranking::Straight(hi) => hi >= Rank::Five,
            Ranking::StraightFlush(hi) => hi >= Rank::Five && hi < Rank::Ace,
            Ranking::TwoPair(hi, lo) => hi > lo,
            Ranking::FullHouse(hi, lo) => hi != lo,
            Ranking::HighCard(hi) | Ranking::Flush(hi) => hi >= Rank::Seven,
            _ => true,
        }
    }

    /// (primary, secondary) ranks. secondary is only meaningful
    /// for two pair and full house
    pub fn ranks(&self) -> (Rank, Rank) {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => (hi, lo),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Straight(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::StraightFlush(hi) => (hi, Rank::default()),
            Ranking::RoyalFlush => (Rank::default(), Rank::default()),
        }
    }
}

/// 12 bit packing: category:4 | primary:4 | secondary:4
/// preserves Ord
impl From<Ranking> for u16 {
    fn from(r: Ranking) -> u16 {
        let (hi, lo) = r.ranks();
        (r.category() as u16) << 8 | (u8::from(hi) as u16) << 4 | u8::from(lo) as u16
    }
}

/// inverse of the packing. None for anything the packing cannot produce
impl TryFrom<u16> for Ranking {
    type Error = u16;
    fn try_from(n: u16) -> Result<Self, Self::Error> {
        let category = Category::try_from((n >> 8) as u8).map_err(|_| n)?;
        let hi = (n >> 4 & 0xF) as u8;
        let lo = (n & 0xF) as u8;
        if hi > 12 || lo > 12 {
            return Err(n);
        }
        let (hi, lo) = (Rank::from(hi), Rank::from(lo));
        let ranking = match category {
            Category::HighCard => Ranking::HighCard(hi),
            Category::OnePair => Ranking::OnePair(hi),
            Category::TwoPair => Ranking::TwoPair(hi, lo),
            Category::ThreeOAK => Ranking::ThreeOAK(hi),
            Category::Straight => Ranking::Straight(hi),
            Category::Flush => Ranking::Flush(hi),
            Category::FullHouse => Ranking::FullHouse(hi, lo),
            Category::FourOAK => Ranking::FourOAK(hi),
            Category::StraightFlush => Ranking::StraightFlush(hi),
            Category::RoyalFlush => Ranking::RoyalFlush,
        };
        match u16::from(ranking) == n && ranking.realizable() {
            true => Ok(ranking),
            false => Err(n),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
            Ranking::RoyalFlush => write!(f, "RoyalFlush      "),
        }
    }
}
