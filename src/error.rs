use crate::cards::card::Card;
use thiserror::Error;

/// Everything the engine can refuse to do.
///
/// All of these are fatal to the call that raised them. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid card text {0:?}")]
    Parse(String),

    #[error("card {0} is not in the deck")]
    Missing(Card),

    #[error("card {0} appears twice")]
    Duplicate(Card),

    #[error("need {wanted} cards but only {left} remain")]
    Insufficient { wanted: usize, left: usize },

    #[error("cannot evaluate {0} cards, need 5 to 7")]
    HandSize(usize),

    #[error("a board of {0} cards is not a street")]
    Street(usize),

    #[error("strength {0:#09x} has no rank")]
    Unranked(u32),

    #[error("raw score {0:#09x} does not decode to a strength")]
    Malformed(u32),

    #[error("enumeration found {0} strength classes, expected 7462")]
    Census(usize),

    #[error("corrupt rank table: {0}")]
    Corrupt(String),

    #[error("equity needs at least one trial")]
    NoTrials,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
