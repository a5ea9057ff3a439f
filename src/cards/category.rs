use crate::Error;

/// Coarse hand class, for display and diagnostics.
///
/// Many distinct strengths share a category. The discriminant is the
/// category's place in the strength order, weakest first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn all() -> [Category; 10] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOAK,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOAK,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOAK => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOAK => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
    /// number of distinct 5-card strengths in this category
    pub const fn n_classes(&self) -> usize {
        match self {
            Category::HighCard => 1277,
            Category::OnePair => 2860,
            Category::TwoPair => 858,
            Category::ThreeOAK => 858,
            Category::Straight => 10,
            Category::Flush => 1277,
            Category::FullHouse => 156,
            Category::FourOAK => 156,
            Category::StraightFlush => 9,
            Category::RoyalFlush => 1,
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Category::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| Error::Parse(n.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
