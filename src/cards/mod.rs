//! Card representation and hand evaluation.
//!
//! ## Core Types
//!
//! - [`Card`]: A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`]: An unordered set of cards as a 64-bit bitmask
//! - [`Hole`]: A player's two private cards
//! - [`Board`]: The community cards (flop, turn, river)
//! - [`Deck`]: An ordered, shuffleable collection for dealing
//!
//! ## Evaluation
//!
//! - [`Evaluator`]: Bitwise 5-card evaluator
//! - [`Strength`]: Evaluated hand strength with kicker resolution
//! - [`Ranking`]: Hand category with its defining ranks
//! - [`Category`]: Coarse label (high card through royal flush)
//!
//! ## Enumeration
//!
//! - [`HandIterator`]: Every n-card hand left in a deck
//! - [`Subsets`]: Every k-card subset of a small hand
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod observation;
pub use observation::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod subsets;
pub use subsets::*;

pub mod suit;
pub use suit::*;
