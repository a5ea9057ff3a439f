//! Poker hand evaluation and equity estimation.
//!
//! - [`cards`] models cards, decks, and 5-to-7 card hand strength
//! - [`lookup`] ranks every distinct 5-card strength densely from 1 to 7462
//! - [`equity`] estimates win rates by Monte Carlo and counts outs
//! - [`save`] persists expensive tables in postgres binary copy format
pub mod cards;
pub mod equity;
pub mod error;
pub mod lookup;
pub mod save;

pub use error::Error;

use cards::board::Board;
use cards::card::Card;
use cards::hole::Hole;
use cards::observation::Observation;
use cards::strength::Strength;

/// Win rates and other sampled frequencies.
pub type Probability = f32;

/// distinct 5-card strengths once exact ties collapse
pub const N_CLASSES: usize = 7462;
/// C(52, 5)
pub const N_FIVE_CARD_HANDS: usize = 2_598_960;
/// Monte Carlo trials when the caller has no opinion
pub const DEFAULT_TRIALS: usize = 1000;

/// Strength of the best 5-card hand among 5, 6, or 7 distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<Strength, Error> {
    Strength::evaluate(cards)
}

/// Monte Carlo win rate of two hole cards against one random opponent,
/// given zero to five board cards. See [`Observation::equity`].
pub fn win_rate<R>(
    hole: &[Card],
    board: &[Card],
    trials: usize,
    rng: &mut R,
) -> Result<Probability, Error>
where
    R: rand::Rng + ?Sized,
{
    Observation::from((Hole::try_from(hole)?, Board::try_from(board)?)).equity(trials, rng)
}

/// Initialize logging with terminal and file output.
/// Terminal shows INFO and above; the file under `logs/` keeps DEBUG.
#[cfg(feature = "server")]
pub fn log() -> Result<(), Error> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}
