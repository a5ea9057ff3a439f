use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered, mutable deck of cards.
///
/// Starts with each of the 52 cards exactly once. Known cards are removed,
/// the rest are shuffled with a caller-supplied random source, and the top
/// of the deck is peeked to sample without replacement. A Deck belongs to
/// the single computation that created it; concurrent simulations each
/// build their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck in byte order.
    pub fn new() -> Self {
        Self(Card::all().collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes one occurrence of a card. Absence means the caller
    /// dealt the same card twice.
    pub fn remove(&mut self, card: Card) -> Result<(), Error> {
        let i = self
            .0
            .iter()
            .position(|c| *c == card)
            .ok_or(Error::Missing(card))?;
        self.0.remove(i);
        Ok(())
    }
    /// Uniform random permutation of the remaining cards (Fisher-Yates).
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }
    /// The first `n` cards in the current order, left in place.
    pub fn peek(&self, n: usize) -> Result<&[Card], Error> {
        self.0.get(..n).ok_or(Error::Insufficient {
            wanted: n,
            left: self.len(),
        })
    }
}

impl From<&Deck> for Hand {
    fn from(deck: &Deck) -> Self {
        deck.0
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}
