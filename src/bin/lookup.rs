//! Lookup Binary
//!
//! Builds or loads the rank table, then answers questions about hands.
//!
//! Options: --table, --regenerate, --cards, --hole, --board, --trials, --seed

use clap::Parser;
use handrank::cards::board::Board;
use handrank::cards::card::Card;
use handrank::cards::hole::Hole;
use handrank::cards::observation::Observation;
use handrank::lookup::RankTable;
use handrank::save::Disk;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Rank poker hands and estimate equity", long_about = None)]
struct Args {
    /// rank table location, defaults to $HANDRANK_TABLE or ./pgcopy/ranks.pgcopy
    #[arg(long)]
    table: Option<PathBuf>,
    /// rebuild the rank table even if one is already on disk
    #[arg(long)]
    regenerate: bool,
    /// 5 to 7 cards to evaluate and rank, e.g. "AsKsQsJsTs"
    #[arg(long)]
    cards: Option<String>,
    /// two hole cards for equity and outs, e.g. "AhKd"
    #[arg(long)]
    hole: Option<String>,
    /// zero to five board cards
    #[arg(long, default_value = "")]
    board: String,
    #[arg(long, default_value_t = handrank::DEFAULT_TRIALS)]
    trials: usize,
    /// seeds the parallel simulation
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    handrank::log()?;
    let args = Args::parse();
    let path = args.table.unwrap_or_else(RankTable::path);
    let table = if args.regenerate {
        log::warn!("{:<32}{}", "regenerating rank table", path.display());
        let table = RankTable::grow()?;
        table.save(&path)?;
        table
    } else {
        RankTable::initialize(&path)?
    };
    log::info!("{:<32}{:<32}", "rank classes", table.len());
    if let Some(ref cards) = args.cards {
        let strength = handrank::evaluate(&Card::parse(cards)?)?;
        let rank = table.rank_of(&strength)?;
        log::info!("{:<32}{:<32}", "strength", strength);
        log::info!("{:<32}{:<32}", "category", strength.category());
        log::info!("{:<32}{:<32}", "rank", rank);
    }
    if let Some(ref hole) = args.hole {
        let obs = Observation::from((
            Hole::try_from(hole.as_str())?,
            Board::try_from(args.board.as_str())?,
        ));
        log::info!("{:<32}{:<32}", "observation", obs);
        log::info!("{:<32}{:<32.4}", "equity", obs.simulate(args.trials, args.seed)?);
        match obs.outs() {
            Ok(n) => log::info!("{:<32}{:<32}", "outs", n),
            Err(e) => log::info!("{:<32}{:<32}", "outs", e),
        }
    }
    Ok(())
}
