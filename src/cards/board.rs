use super::card::Card;
use super::street::Street;
use crate::Error;

/// The community cards showing so far: none, a flop, a turn, or a river.
///
/// The street is fixed when the board is built, so only 0, 3, 4, or 5
/// cards can ever be held.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn street(&self) -> Street {
        self.street
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let street = Street::try_from(cards.len())?;
        Ok(Self { cards, street })
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from(cards.to_vec())
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
