use super::board::Board;
use super::card::Card;
use super::deck::Deck;
use super::hole::Hole;
use super::street::Street;
use crate::Error;

/// A player's view of the hand: hole cards plus visible board.
///
/// Observations are what equity and outs are asked about. See
/// [`Observation::equity`], [`Observation::simulate`],
/// [`Observation::outs`] and [`Observation::improvements`].
///
/// The separator `~` distinguishes hole from board in string representation.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Observation {
    pocket: Hole,
    public: Board,
}

impl Observation {
    /// Infers the street from the board.
    pub fn street(&self) -> Street {
        self.public.street()
    }
    /// The player's hole cards.
    pub fn pocket(&self) -> &Hole {
        &self.pocket
    }
    /// The community board cards.
    pub fn public(&self) -> &Board {
        &self.public
    }
    /// Every card the player can see, hole first.
    pub fn known(&self) -> Vec<Card> {
        self.pocket
            .cards()
            .iter()
            .chain(self.public.cards())
            .copied()
            .collect()
    }
    /// A fresh deck with every known card dealt out of it.
    ///
    /// Fails with [`Error::Missing`] if a card is known twice.
    pub fn deck(&self) -> Result<Deck, Error> {
        self.known().into_iter().try_fold(Deck::new(), |mut deck, card| {
            deck.remove(card)?;
            Ok(deck)
        })
    }
    /// String separator between hole and board in display format.
    pub const SEPARATOR: &'static str = "~";
}

/// assemble Observation from private + public cards
impl From<(Hole, Board)> for Observation {
    fn from((pocket, public): (Hole, Board)) -> Self {
        Self { pocket, public }
    }
}

/// "AhKd~7c6d2s"
impl TryFrom<&str> for Observation {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (pocket, public) = s.split_once(Self::SEPARATOR).unwrap_or((s, ""));
        Ok(Self::from((Hole::try_from(pocket)?, Board::try_from(public)?)))
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.pocket, Self::SEPARATOR, self.public)
    }
}
