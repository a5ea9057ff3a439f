use super::card::Card;
use crate::Error;

/// A player's two private hole cards.
///
/// Kept as the two cards given, in order. Whether they collide with each
/// other or with the board is checked when they are dealt out of a
/// [`Deck`](super::deck::Deck).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self([a, b])
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] => Ok(Self([*a, *b])),
            _ => Err(Error::HandSize(cards.len())),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}
