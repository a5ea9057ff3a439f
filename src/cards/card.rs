use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards are only ever built from a valid `(Rank, Suit)` pair or from the
/// exact two-character text form, `"As"` or `"Tc"`. Anything else is an
/// [`Error::Parse`]. Use [`Card::parse`] for multiple cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards in byte order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..52u8).map(Card)
    }
    /// Parses a string of card notations into a vector of cards.
    ///
    /// Whitespace between cards is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split_whitespace()
            .flat_map(|word| {
                word.chars()
                    .collect::<Vec<_>>()
                    .chunks(2)
                    .map(|pair| pair.iter().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .map(|pair| Self::try_from(pair.as_str()))
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(Error::Parse(n.to_string())),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::try_from(r), Suit::try_from(s)) {
                (Ok(rank), Ok(suit)) => Ok(Card::from((rank, suit))),
                _ => Err(Error::Parse(format!("{}{}", r, s))),
            },
            _ => Err(Error::Parse(s.to_string())),
        }
    }
}
impl std::str::FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
