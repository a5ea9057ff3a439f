use crate::Error;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::strength::Strength;
use crate::save::disk::Disk;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::collections::BTreeSet;
use std::path::Path;

/// Dense rank of every distinct 5-card [`Strength`].
///
/// Enumerating all C(52,5) hands and collapsing exact ties leaves
/// [`N_CLASSES`](crate::N_CLASSES) equivalence classes. Rank 1 is the
/// strongest (royal flush) and rank 7462 the weakest (7-5-4-3-2 offsuit).
/// Smaller rank means stronger hand.
///
/// Classes are held strongest first, so rank `r` lives at index `r - 1`
/// and rank lookup is a binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable(Vec<Strength>);

impl RankTable {
    /// Dense rank of a strength. Strengths outside the table are an error
    /// rather than a guess.
    pub fn rank_of(&self, strength: &Strength) -> Result<u16, Error> {
        self.0
            .binary_search_by(|probe| strength.cmp(probe))
            .map(|i| i as u16 + 1)
            .map_err(|_| Error::Unranked(u32::from(*strength)))
    }
    /// Inverse of [`RankTable::rank_of`].
    pub fn strength_of(&self, rank: u16) -> Option<Strength> {
        rank.checked_sub(1)
            .and_then(|i| self.0.get(i as usize))
            .copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// (rank, strength) pairs from strongest to weakest.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Strength)> + '_ {
        self.0.iter().enumerate().map(|(i, s)| (i as u16 + 1, *s))
    }

    /// every 5-card hand whose lowest card is `lo`.
    /// sharding by lowest card partitions C(52,5) without overlap
    fn shard(lo: Card) -> impl Iterator<Item = Hand> {
        let below = Hand::from((u64::from(lo) << 1) - 1);
        HandIterator::from((4, below)).map(move |four| Hand::add(four, Hand::from(lo)))
    }

    /// strengths ordered weakest to strongest must count exactly
    /// [`N_CLASSES`](crate::N_CLASSES)
    fn census(classes: BTreeSet<Strength>) -> Result<Self, Error> {
        match classes.len() {
            crate::N_CLASSES => Ok(Self(classes.into_iter().rev().collect())),
            n => Err(Error::Census(n)),
        }
    }

    /// structural checks that survive a round trip through disk:
    /// ranks are a permutation of 1..=N_CLASSES and agree with
    /// strength order
    fn verify(mut rows: Vec<(u16, Strength)>) -> Result<Self, Error> {
        if rows.len() != crate::N_CLASSES {
            return Err(Error::Corrupt(format!(
                "{} records, expected {}",
                rows.len(),
                crate::N_CLASSES
            )));
        }
        rows.sort_by(|(_, a), (_, b)| b.cmp(a));
        for (i, window) in rows.windows(2).enumerate() {
            if window[0].1 == window[1].1 {
                return Err(Error::Corrupt(format!("strength {} listed twice", window[0].1)));
            }
            if window[0].0 as usize != i + 1 {
                return Err(Error::Corrupt(format!(
                    "strength {} has rank {}, expected {}",
                    window[0].1,
                    window[0].0,
                    i + 1
                )));
            }
        }
        match rows.last() {
            Some((rank, _)) if *rank as usize == crate::N_CLASSES => {
                Ok(Self(rows.into_iter().map(|(_, s)| s).collect()))
            }
            Some((rank, strength)) => Err(Error::Corrupt(format!(
                "strength {} has rank {}, expected {}",
                strength,
                rank,
                crate::N_CLASSES
            ))),
            None => Err(Error::Corrupt("empty table".to_string())),
        }
    }
}

/// running out of bytes mid-record is corruption, not an io failure
fn truncated(e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::Corrupt("truncated record".to_string()),
        _ => Error::Io(e),
    }
}

impl Disk for RankTable {
    fn name() -> &'static str {
        "ranks"
    }
    fn grow() -> Result<Self, Error> {
        log::info!("{:<32}{:<32}", "enumerating hands", crate::N_FIVE_CARD_HANDS);
        let (count, classes) = Card::all()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|lo| {
                Self::shard(lo).try_fold((0usize, BTreeSet::new()), |(n, mut set), hand| {
                    set.insert(Strength::try_from(hand)?);
                    Ok::<_, Error>((n + 1, set))
                })
            })
            .try_reduce(
                || (0usize, BTreeSet::new()),
                |(n, mut a), (m, b)| {
                    a.extend(b);
                    Ok((n + m, a))
                },
            )?;
        debug_assert!(count == crate::N_FIVE_CARD_HANDS);
        log::info!("{:<32}{:<32}", "distinct strengths", classes.len());
        Self::census(classes)
    }
    fn load(path: &Path) -> Result<Self, Error> {
        use byteorder::BE;
        use byteorder::ReadBytesExt;
        use std::fs::File;
        use std::io::BufReader;
        use std::io::Read;
        let ref mut reader = BufReader::new(File::open(path)?);
        let ref mut header = [0u8; 19];
        reader.read_exact(header).map_err(truncated)?;
        if header.as_slice() != Self::header() {
            return Err(Error::Corrupt("bad header".to_string()));
        }
        let mut rows = Vec::with_capacity(crate::N_CLASSES);
        loop {
            match reader.read_u16::<BE>().map_err(|e| match e.kind() {
                std::io::ErrorKind::UnexpectedEof => Error::Corrupt("missing trailer".to_string()),
                _ => Error::Io(e),
            })? {
                n if n == Self::footer() => break,
                2 => {
                    if reader.read_u32::<BE>().map_err(truncated)? != 4 {
                        return Err(Error::Corrupt("score field size".to_string()));
                    }
                    let score = reader.read_i32::<BE>().map_err(truncated)? as u32;
                    if reader.read_u32::<BE>().map_err(truncated)? != 2 {
                        return Err(Error::Corrupt("rank field size".to_string()));
                    }
                    let rank = reader.read_i16::<BE>().map_err(truncated)? as u16;
                    let strength = Strength::try_from(score)
                        .map_err(|_| Error::Corrupt(format!("score {:#09x} undecodable", score)))?;
                    rows.push((rank, strength));
                }
                n => return Err(Error::Corrupt(format!("{} fields in record", n))),
            }
        }
        if reader.bytes().next().is_some() {
            return Err(Error::Corrupt("bytes after trailer".to_string()));
        }
        Self::verify(rows)
    }
    fn save(&self, path: &Path) -> Result<(), Error> {
        use byteorder::BE;
        use byteorder::WriteBytesExt;
        use std::fs::File;
        use std::io::BufWriter;
        use std::io::Write;
        const N_FIELDS: u16 = 2;
        log::info!("{:<32}{}", "saving rank table", path.display());
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let ref mut file = BufWriter::new(File::create(path)?);
        file.write_all(Self::header())?;
        for (rank, strength) in self.iter() {
            file.write_u16::<BE>(N_FIELDS)?;
            file.write_u32::<BE>(size_of::<i32>() as u32)?;
            file.write_i32::<BE>(u32::from(strength) as i32)?;
            file.write_u32::<BE>(size_of::<i16>() as u32)?;
            file.write_i16::<BE>(rank as i16)?;
        }
        file.write_u16::<BE>(Self::footer())?;
        file.flush()?;
        Ok(())
    }
}
